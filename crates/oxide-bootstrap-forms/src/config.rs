//! Styling configuration for the composer.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Input types rendered without the control class.
///
/// See <https://github.com/twbs/bootlint/wiki/E042>.
pub const PLAIN_INPUT_TYPES: [&str; 8] = [
    "file", "range", "image", "button", "submit", "checkbox", "radio", "hidden",
];

/// Contextual button classes; one of them is always present on a button.
pub const BUTTON_VARIANTS: [&str; 7] = [
    "btn-default",
    "btn-primary",
    "btn-success",
    "btn-info",
    "btn-warning",
    "btn-danger",
    "btn-link",
];

/// Class names and templates injected by [`FormComposer`](crate::FormComposer).
///
/// The defaults produce Bootstrap 3 markup. Missing keys fall back to the
/// defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Class added to text-like inputs, selects and textareas.
    pub control_class: String,
    /// Class on the group wrapper div.
    pub group_class: String,
    /// Class added to a group whose field has errors.
    pub error_class: String,
    /// Class on a group's label.
    pub label_class: String,
    /// Template for a field's first error; `:message` is substituted.
    pub error_format: String,
    /// Base button class.
    pub button_class: String,
    /// Contextual class added when the caller supplied none.
    pub default_button_class: String,
    /// Recognized contextual button classes.
    pub button_variants: Vec<String>,
    /// Input types that never receive the control class.
    pub plain_types: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            control_class: "form-control".to_string(),
            group_class: "form-group".to_string(),
            error_class: "has-error".to_string(),
            label_class: "control-label".to_string(),
            error_format: r#"<p class="help-block">:message</p>"#.to_string(),
            button_class: "btn".to_string(),
            default_button_class: "btn-default".to_string(),
            button_variants: BUTTON_VARIANTS.iter().map(ToString::to_string).collect(),
            plain_types: PLAIN_INPUT_TYPES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl BootstrapConfig {
    /// Creates the default Bootstrap 3 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the control class.
    #[must_use]
    pub fn control_class(mut self, class: impl Into<String>) -> Self {
        self.control_class = class.into();
        self
    }

    /// Sets the group class.
    #[must_use]
    pub fn group_class(mut self, class: impl Into<String>) -> Self {
        self.group_class = class.into();
        self
    }

    /// Sets the class added to groups with errors.
    #[must_use]
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Sets the group label class.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = class.into();
        self
    }

    /// Sets the error template.
    #[must_use]
    pub fn error_format(mut self, format: impl Into<String>) -> Self {
        self.error_format = format.into();
        self
    }

    /// Sets the default contextual button class.
    #[must_use]
    pub fn default_button_class(mut self, class: impl Into<String>) -> Self {
        self.default_button_class = class.into();
        self
    }

    /// Returns whether inputs of this type skip the control class.
    pub fn is_plain_type(&self, input_type: &str) -> bool {
        self.plain_types.iter().any(|t| t == input_type)
    }

    /// Returns whether one of the class tokens is a contextual button class.
    pub fn has_button_variant(&self, classes: &[&str]) -> bool {
        classes
            .iter()
            .any(|class| self.button_variants.iter().any(|v| v == class))
    }
}
