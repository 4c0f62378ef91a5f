//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{breeds::BreedsPage, chat::ChatPage, login::LoginPage, register::RegisterPage};
use crate::state::search::SearchStore;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Navigation options that replace the current history entry, so going back
/// does not return to a form or a guard redirect.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Root application component.
///
/// Provides the config, backend client and both stores as context and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = ApiClient::new(config.api_base_url.clone());

    provide_context(SessionStore::new(api.clone()));
    provide_context(SearchStore::new(api.clone()));
    provide_context(api);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/pawchat.css"/>
        <Title text="pawchat"/>

        <Router>
            <Routes fallback=NotFound>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <BreedsPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("chat")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <ChatPage/>
                            </RouteGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found-page">
            <h1>"Page not found."</h1>
            <a href="/">"Back to the start"</a>
        </main>
    }
}
