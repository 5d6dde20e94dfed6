//! pledge-dash library - commitment dashboard views
//!
//! Turns the normalized commitment dataset into the views the dashboard
//! renders: the filtered and sorted commitment list, status summaries,
//! per-party and per-category breakdowns, the delivery timeline and
//! upcoming due dates.

pub mod aggregate;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod source;
pub mod views;

pub use filter::{filter_records, FilterConfig};
pub use sort::{sort_records, SortConfig, SortDirection, SortKey};
pub use views::{filter_and_sort, list_page, DashboardSnapshot, ListPage};
