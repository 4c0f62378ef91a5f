//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared rendering
//! to `components` and submit/state rules to `state`.

pub mod breeds;
pub mod chat;
pub mod login;
pub mod register;
