//! Reusable presentation affordances shared with the admin area.

pub mod confirm_delete;
pub mod query_state;
pub mod sort_by;

pub use confirm_delete::{ConfirmDelete, Decision};
pub use query_state::QueryState;
pub use sort_by::{SortBy, SortOption, SORT_BY_KEY};
