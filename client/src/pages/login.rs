//! Login page: email + password against `POST /users/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::entry::{EntryError, validate_login};
use crate::state::session::SessionStore;

/// Text shown under the form for a failed login.
pub(crate) fn login_failure_message(err: &EntryError) -> String {
    match err {
        EntryError::Invalid(msg) => (*msg).to_owned(),
        EntryError::Rejected(400 | 401 | 403) => "Invalid email or password.".to_owned(),
        EntryError::Rejected(status) => format!("Login failed (status {status})."),
        EntryError::Network(_) => "Could not reach the server. Try again.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(login_failure_message(&e)));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::entry::complete_login(session, api.login(&request)).await {
                    Ok(target) => navigate(target, crate::app::replace_history()),
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(Some(login_failure_message(&e)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, &api, &navigate);
        }
    };

    view! {
        <main class="entry-page">
            <article class="entry-card">
                <h1 class="entry-card__title">"Welcome back!"</h1>
                <p class="entry-card__subtitle">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
                <form class="entry-form" on:submit=on_submit>
                    <input
                        class="entry-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="entry-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="entry-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="entry-message entry-message--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
            </article>
        </main>
    }
}
