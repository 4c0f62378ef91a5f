//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `search`, `breeds`) so components
//! depend on small focused models. `entry` holds the login/register submit
//! flows that drive the session store.

pub mod breeds;
pub mod entry;
pub mod search;
pub mod session;
