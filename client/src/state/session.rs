//! Session store: the client's belief about whether it is authenticated.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard to gate protected pages and written by the login
//! and register flows. The backend owns the real session (a cookie); this
//! store only mirrors its last known answer.
//!
//! DESIGN
//! ======
//! `SessionState` is a plain value with the mutation rules; `SessionStore` is
//! a `Copy` handle over an `RwSignal<SessionState>` provided via context, so
//! every component reading it is re-run on change. Each mutation advances a
//! request sequence and a probe result is applied only if no newer mutation
//! was issued after it (last-issued-wins).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;

/// Sequence number handed out when a session probe is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyTicket(u64);

/// Authentication flag plus the bookkeeping needed to order probe results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    is_authenticated: bool,
    seq: u64,
    verify_in_flight: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// `true` while the most recently issued probe has not settled.
    pub fn verify_in_flight(&self) -> bool {
        self.verify_in_flight
    }

    /// Unconditionally authenticate. Supersedes any outstanding probe.
    pub fn mark_authenticated(&mut self) {
        self.seq += 1;
        self.is_authenticated = true;
        self.verify_in_flight = false;
    }

    pub fn begin_verify(&mut self) -> VerifyTicket {
        self.seq += 1;
        self.verify_in_flight = true;
        VerifyTicket(self.seq)
    }

    /// Apply a probe outcome. Any failure, including a transport error,
    /// settles to unauthenticated. Returns `false` when the ticket was
    /// superseded and the outcome was dropped.
    pub fn settle_verify(&mut self, ticket: VerifyTicket, outcome: &Result<(), ApiError>) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        self.is_authenticated = outcome.is_ok();
        self.verify_in_flight = false;
        true
    }
}

/// Reactive handle to the process-wide session state.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    api: StoredValue<ApiClient>,
}

impl SessionStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            api: StoredValue::new(api),
        }
    }

    /// Tracked read of the whole state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    pub fn snapshot_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn mark_authenticated(&self) {
        self.state.update(SessionState::mark_authenticated);
    }

    /// Probe `GET /auth` and settle the flag from the answer.
    ///
    /// Never fails: transport errors are logged and treated as
    /// unauthenticated so callers can fire and forget.
    pub async fn verify(self) {
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        self.verify_with(async move { api.probe_session().await }).await;
    }

    /// Same as [`SessionStore::verify`] with the probe supplied by the caller.
    pub async fn verify_with<F>(self, probe: F)
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        let Some(ticket) = self.state.try_update(SessionState::begin_verify) else {
            return;
        };
        let outcome = probe.await;
        if let Err(e) = &outcome
            && e.status().is_none()
        {
            leptos::logging::warn!("session check failed: {e}");
        }
        self.state.maybe_update(|state| state.settle_verify(ticket, &outcome));
    }
}
