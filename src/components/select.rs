//! Select Component

use crate::form::FormField;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select/dropdown field descriptor
#[derive(Debug, Clone)]
pub struct Select {
    /// Field name
    pub name: String,
    /// State-binding path
    pub state_path: String,
    /// Display label
    pub label: Option<String>,
    /// Selectable options
    pub options: Vec<SelectOption>,
    /// Placeholder shown with no selection
    pub placeholder: String,
    /// Disabled state
    pub disabled: bool,
}

impl Select {
    /// Create a select bound to `name`
    pub fn make(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            state_path: name.clone(),
            name,
            label: None,
            options: Vec::new(),
            placeholder: "Select...".to_string(),
            disabled: false,
        }
    }

    /// Set the display label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Append a single option
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl FormField for Select {
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
