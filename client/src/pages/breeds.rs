//! Landing page listing dog breeds from the public dog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind the route guard at `/`. Loads once per mount; a failed
//! load is shown inline and leaves the table empty.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::breeds::BreedsState;

#[component]
pub fn BreedsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let breeds = RwSignal::new(BreedsState::default());

    breeds.update(BreedsState::begin_load);

    #[cfg(feature = "hydrate")]
    {
        let dogs = crate::net::dogs::DogApiClient::from_config(&config);
        let limit = config.breed_limit;
        leptos::task::spawn_local(async move {
            let result = dogs.fetch_breeds(limit).await;
            if let Err(e) = &result {
                leptos::logging::warn!("breed fetch failed: {e}");
            }
            let _ = breeds.try_update(|state| state.finish_load(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        <main class="breeds-page">
            <p class="breeds-page__count">
                {move || {
                    breeds
                        .with(|state| {
                            if state.loading {
                                "Loading breeds...".to_owned()
                            } else {
                                format!("Number of dogs fetched: {}", state.items.len())
                            }
                        })
                }}
            </p>
            <Show when=move || breeds.with(|state| state.error.is_some())>
                <p class="breeds-page__error">{move || breeds.get().error.unwrap_or_default()}</p>
            </Show>
            <table class="breeds-page__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Picture"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        breeds
                            .get()
                            .items
                            .into_iter()
                            .map(|breed| {
                                let picture = breed.image_url().map(str::to_owned);
                                let alt = breed.name.clone();
                                view! {
                                    <tr>
                                        <td>{breed.name}</td>
                                        <td>
                                            {picture.map(|src| view! { <img src=src alt=alt height="250"/> })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </main>
    }
}
