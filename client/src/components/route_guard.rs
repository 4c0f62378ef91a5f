//! Route guard gating protected pages on the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the `/` and `/chat` routes. Each mount re-checks the session with
//! the backend, so a stale flag from an earlier page never grants access on
//! its own.
//!
//! DESIGN
//! ======
//! Three explicit phases. `Pending` covers both "this guard's check has not
//! settled" and "a newer check is still in flight"; it renders a neutral
//! placeholder and never redirects. Once settled the guard follows the live
//! flag, so a later change in the store re-renders or redirects.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::entry::LOGIN_ROUTE;
use crate::state::session::{SessionState, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPhase {
    Pending,
    Authenticated,
    Unauthenticated,
}

impl GuardPhase {
    pub fn resolve(check_settled: bool, session: &SessionState) -> Self {
        if !check_settled || session.verify_in_flight() {
            Self::Pending
        } else if session.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }

    pub fn renders_protected(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Where the guard sends the user, if anywhere.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Unauthenticated => Some(LOGIN_ROUTE),
            Self::Pending | Self::Authenticated => None,
        }
    }
}

/// Live phase of one guard instance. `check_settled` flips once the guard's
/// own session check has returned; the store supplies everything else.
pub fn guard_phase(session: SessionStore, check_settled: RwSignal<bool>) -> Memo<GuardPhase> {
    Memo::new(move |_| GuardPhase::resolve(check_settled.get(), &session.snapshot()))
}

/// Render `children` only for an authenticated session; redirect to
/// `/login` otherwise.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let check_settled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.verify().await;
        let _ = check_settled.try_set(true);
    });

    let phase = guard_phase(session, check_settled);

    Effect::new(move || {
        if let Some(target) = phase.get().redirect_target() {
            navigate(target, crate::app::replace_history());
        }
    });

    view! {
        {move || {
            let current = phase.get();
            if current.renders_protected() {
                children().into_any()
            } else if current.redirect_target().is_some() {
                view! {
                    <div class="route-guard">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="route-guard route-guard--pending">
                        <p>"Checking session..."</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
