//! Networking modules for the chat backend and the dog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles chat backend REST calls, `dogs` talks to the third-party
//! breed API, `types` defines the wire schema and `error` the shared failure
//! taxonomy.

pub mod api;
pub mod dogs;
pub mod error;
pub mod types;
