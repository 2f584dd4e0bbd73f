use crate::error::{AppError, AppResult};
use crate::ui::QueryState;

/// Query-state key the sort control synchronizes with
pub const SORT_BY_KEY: &str = "sortBy";

/// One selectable sort option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    pub value: String,
    pub label: String,
}

impl SortOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Thin synchronization between a select control and the shared query
/// state, so the chosen sort order survives navigation and reload
#[derive(Debug, Clone)]
pub struct SortBy {
    options: Vec<SortOption>,
}

impl SortBy {
    pub fn new(options: Vec<SortOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[SortOption] {
        &self.options
    }

    /// Currently selected value as recorded in the query state
    pub fn current<'q>(&self, query: &'q QueryState) -> Option<&'q str> {
        query.get(SORT_BY_KEY)
    }

    /// The option matching the query state, if any
    pub fn selected_option(&self, query: &QueryState) -> Option<&SortOption> {
        let current = self.current(query)?;
        self.options.iter().find(|o| o.value == current)
    }

    /// Record a selection into the query state, leaving every other key
    /// untouched. Unknown values are rejected so the control and the query
    /// state always agree.
    pub fn select(&self, query: &mut QueryState, value: &str) -> AppResult<()> {
        if !self.options.iter().any(|o| o.value == value) {
            return Err(AppError::Validation(format!(
                "Unknown sort option: {}",
                value
            )));
        }
        query.set(SORT_BY_KEY, value);
        Ok(())
    }
}
