//! Wire contracts of the MobCash REST API.
//!
//! Everything the dashboard sends to or receives from the remote API is typed
//! here, so the frontend never touches raw JSON.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
