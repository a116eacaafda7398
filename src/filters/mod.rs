//! Discover screen filters: draft/active filter state and the filter bar menu

mod menu;
pub mod search;
mod state;

pub use menu::{FilterCategory, FilterIcon, FilterStore, MenuPanel};
pub use state::{Endpoint, FilterState, SelectionKind, TimeSelection};
