//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared stores from Leptos context; `route_guard` gates
//! protected routes and `search_bar` drives account search.

pub mod route_guard;
pub mod search_bar;
