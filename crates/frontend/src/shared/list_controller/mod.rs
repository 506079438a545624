//! Generic paginated-list controller shared by every list screen.
//!
//! The pure parts (page window, debouncer, filter set, controller state
//! machine, client pager) carry no reactive state and are tested natively;
//! [`hook`] wires them into Leptos signals.

pub mod client_pager;
pub mod controller;
pub mod debounce;
pub mod filters;
pub mod hook;
pub mod page_window;

pub use controller::{FetchOutcome, FetchTicket, ListController, ListQuery};
pub use filters::{FilterSet, Filterable};
pub use hook::{use_list, use_local_list, ListHandle};
pub use page_window::{page_window, PageToken};
