//! TextInput Component

use crate::form::FormField;

/// A text input field descriptor
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Field name
    pub name: String,
    /// State-binding path
    pub state_path: String,
    /// Display label
    pub label: Option<String>,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Render as a multi-line text area
    pub multiline: bool,
    /// Disabled state
    pub disabled: bool,
}

impl TextInput {
    /// Create a text input bound to `name`
    pub fn make(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            state_path: name.clone(),
            name,
            label: None,
            placeholder: None,
            multiline: false,
            disabled: false,
        }
    }

    /// Set the display label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Render as a multi-line text area
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl FormField for TextInput {
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
