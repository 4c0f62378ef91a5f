//! Registration page: email + username + password against
//! `POST /users/register`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::entry::{EntryError, validate_register};
use crate::state::session::SessionStore;

pub(crate) fn register_failure_message(err: &EntryError) -> String {
    match err {
        EntryError::Invalid(msg) => (*msg).to_owned(),
        EntryError::Rejected(400 | 409) => "That email or username is already taken.".to_owned(),
        EntryError::Rejected(status) => format!("Sign up failed (status {status})."),
        EntryError::Network(_) => "Could not reach the server. Try again.".to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let policy = expect_context::<ClientConfig>().register_policy;
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register(&email.get(), &username.get(), &password.get()) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(register_failure_message(&e)));
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
                match crate::state::entry::complete_register(session, policy, api.register(&request)).await {
                    Ok(target) => navigate(target, crate::app::replace_history()),
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        error.set(Some(register_failure_message(&e)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, policy, &api, &navigate);
        }
    };

    view! {
        <main class="entry-page">
            <article class="entry-card">
                <h1 class="entry-card__title">"Welcome!"</h1>
                <p class="entry-card__subtitle">
                    "Already have an account? " <a href="/login">"Sign in"</a>
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
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="entry-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="entry-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign up" }}
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
