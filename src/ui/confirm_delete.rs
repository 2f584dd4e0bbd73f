/// Outcome of a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

/// Stateless confirmation affordance for destructive actions.
///
/// Owns no data; it renders a prompt for a named resource and accepts a
/// confirm or cancel decision. Both actions are refused while `disabled`
/// is set (an operation is pending).
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    resource_name: String,
    disabled: bool,
}

impl ConfirmDelete {
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            disabled: false,
        }
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Disable or re-enable both actions while an operation is pending
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The prompt shown to the user
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete this {} permanently? This action cannot be undone.",
            self.resource_name
        )
    }

    /// Confirm the deletion; refused while disabled
    pub fn confirm(&self) -> Option<Decision> {
        (!self.disabled).then_some(Decision::Confirmed)
    }

    /// Cancel and close the prompt; refused while disabled
    pub fn cancel(&self) -> Option<Decision> {
        (!self.disabled).then_some(Decision::Cancelled)
    }
}
