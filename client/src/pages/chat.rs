//! Chat shell: search sidebar plus a static conversation pane.
//!
//! Message exchange is not wired up; the pane is a placeholder for it.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <main class="chat-page">
            <section class="chat-page__sidebar">
                <SearchBar/>
            </section>
            <section class="chat-page__conversation">
                <header class="chat-page__header">
                    <span class="chat-page__avatar" aria-hidden="true"></span>
                </header>
                <div class="chat-page__messages"></div>
                <footer class="chat-page__composer">
                    <div class="chat-page__composer-box">"hello"</div>
                </footer>
            </section>
        </main>
    }
}
