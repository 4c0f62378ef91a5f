//! Breed-list state for the landing page.

#[cfg(test)]
#[path = "breeds_test.rs"]
mod breeds_test;

use crate::net::error::ApiError;
use crate::net::types::Breed;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreedsState {
    pub items: Vec<Breed>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BreedsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Breed>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(format!("Could not load breeds: {e}")),
        }
    }
}
