//! Checkbox Component

use crate::form::FormField;

/// A checkbox field descriptor
#[derive(Debug, Clone)]
pub struct Checkbox {
    /// Field name
    pub name: String,
    /// State-binding path
    pub state_path: String,
    /// Display label
    pub label: Option<String>,
    /// Checked state used when no stored value exists
    pub default_checked: bool,
    /// Disabled state
    pub disabled: bool,
}

impl Checkbox {
    /// Create a checkbox bound to `name`
    pub fn make(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            state_path: name.clone(),
            name,
            label: None,
            default_checked: false,
            disabled: false,
        }
    }

    /// Set the display label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check by default
    pub fn checked_by_default(mut self) -> Self {
        self.default_checked = true;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl FormField for Checkbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn state_path(&self) -> &str {
        &self.state_path
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_state_path(&mut self, path: String) {
        self.state_path = path;
    }

    fn boxed_clone(&self) -> Box<dyn FormField> {
        Box::new(self.clone())
    }
}
