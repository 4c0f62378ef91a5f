//! Account search store backing the chat sidebar.
//!
//! DESIGN
//! ======
//! Mirrors the session store: a plain `SearchState` with the mutation rules
//! and a `Copy` `SearchStore` handle over an `RwSignal`. Each query fully
//! replaces the previous result list; a response for a superseded query is
//! dropped so the list always reflects the latest issued term.
//!
//! ERROR HANDLING
//! ==============
//! A failed lookup keeps the previous list and records the failure in
//! `SearchStatus::Failed` for the dropdown to show.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::AccountMatch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// No query issued yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    accounts: Vec<AccountMatch>,
    status: SearchStatus,
    term: String,
    seq: u64,
}

impl SearchState {
    pub fn accounts(&self) -> &[AccountMatch] {
        &self.accounts
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    /// Term of the most recently issued query.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn begin_query(&mut self, term: &str) -> QueryTicket {
        self.seq += 1;
        term.clone_into(&mut self.term);
        self.status = SearchStatus::Loading;
        QueryTicket(self.seq)
    }

    /// Apply a lookup result. Returns `false` when the ticket was superseded
    /// by a newer query and the result was dropped.
    pub fn settle_query(&mut self, ticket: QueryTicket, result: Result<Vec<AccountMatch>, ApiError>) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        match result {
            Ok(accounts) => {
                self.accounts = accounts;
                self.status = SearchStatus::Ready;
            }
            Err(e) => self.status = SearchStatus::Failed(e.to_string()),
        }
        true
    }
}

/// Reactive handle to the process-wide search state.
#[derive(Clone, Copy)]
pub struct SearchStore {
    state: RwSignal<SearchState>,
    api: StoredValue<ApiClient>,
}

impl SearchStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: RwSignal::new(SearchState::default()),
            api: StoredValue::new(api),
        }
    }

    /// Tracked read of the current result list.
    pub fn accounts(&self) -> Vec<AccountMatch> {
        self.state.with(|state| state.accounts.clone())
    }

    pub fn status(&self) -> SearchStatus {
        self.state.with(|state| state.status.clone())
    }

    /// Tracked read of the most recently issued term.
    pub fn term(&self) -> String {
        self.state.with(|state| state.term().to_owned())
    }

    pub fn snapshot_untracked(&self) -> SearchState {
        self.state.get_untracked()
    }

    /// Look up accounts matching `term` via `GET /users?username=...`.
    ///
    /// Callers are expected to skip empty terms.
    pub async fn query(self, term: String) {
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        let lookup_term = term.clone();
        self.query_with(&term, async move { api.search_users(&lookup_term).await })
            .await;
    }

    /// Same as [`SearchStore::query`] with the lookup supplied by the caller.
    pub async fn query_with<F>(self, term: &str, fetch: F)
    where
        F: Future<Output = Result<Vec<AccountMatch>, ApiError>>,
    {
        let Some(ticket) = self.state.try_update(|state| state.begin_query(term)) else {
            return;
        };
        let result = fetch.await;
        if let Err(e) = &result {
            leptos::logging::warn!("account search for {term:?} failed: {e}");
        }
        self.state.maybe_update(|state| state.settle_query(ticket, result));
    }
}
