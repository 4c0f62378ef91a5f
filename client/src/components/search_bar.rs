//! Username search box with a results dropdown for the chat sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the empty-term rule: a blank input closes the dropdown and never
//! reaches the search store.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

use crate::state::search::{SearchStatus, SearchStore};

/// Term to query for the raw input, or `None` when nothing should be sent.
pub(crate) fn search_term(raw: &str) -> Option<&str> {
    let term = raw.trim();
    (!term.is_empty()).then_some(term)
}

pub(crate) fn empty_results_message(term: &str) -> String {
    format!("No matches for \"{term}\".")
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let search = expect_context::<SearchStore>();
    let value = RwSignal::new(String::new());
    let dropdown_active = move || value.with(|raw| search_term(raw).is_some());

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let term = search_term(&raw).map(str::to_owned);
        value.set(raw);
        let Some(term) = term else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(search.query(term));
        #[cfg(not(feature = "hydrate"))]
        let _ = term;
    };

    view! {
        <div class="search-bar">
            <span class="search-bar__icon" aria-hidden="true">"⌕"</span>
            <input
                class="search-bar__input"
                type="text"
                placeholder="Search"
                prop:value=move || value.get()
                on:input=on_input
            />
            <Show when=dropdown_active>
                <div class="search-bar__dropdown">
                    {move || match search.status() {
                        SearchStatus::Failed(msg) => {
                            view! { <p class="search-bar__error">{format!("Search failed: {msg}")}</p> }
                                .into_any()
                        }
                        SearchStatus::Ready if search.accounts().is_empty() => {
                            view! { <p class="search-bar__empty">{empty_results_message(&search.term())}</p> }
                                .into_any()
                        }
                        SearchStatus::Idle | SearchStatus::Loading | SearchStatus::Ready => ().into_any(),
                    }}
                    {move || {
                        search
                            .accounts()
                            .into_iter()
                            .map(|account| {
                                view! { <p class="search-bar__item">{account.username}</p> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
