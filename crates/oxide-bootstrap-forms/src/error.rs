//! Error types and validation error sources.

use std::collections::HashMap;
use thiserror::Error;

use crate::attributes::html_escape;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A group was closed without a matching open.
    #[error("closing a form group that was never opened")]
    UnbalancedGroupClose,

    /// A textarea `size` option was not of the form `COLSxROWS`.
    #[error("invalid textarea size: {0}")]
    InvalidTextareaSize(String),

    /// Styling configuration could not be parsed.
    #[error("invalid form configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Read-only access to the validation errors of the current request.
///
/// Keys use dot notation for nested fields (`user.name`).
pub trait ErrorSource: Send + Sync {
    /// Returns whether the field has at least one error.
    fn has_field(&self, key: &str) -> bool;

    /// Returns the first error for the field substituted into `format`.
    ///
    /// The `:message` placeholder in `format` is replaced by the message.
    /// Returns an empty string when the field has no errors.
    fn first_message(&self, key: &str, format: &str) -> String;
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder method to add an error for a field.
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns the first error for a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Returns all errors as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl ErrorSource for ValidationErrors {
    fn has_field(&self, key: &str) -> bool {
        self.first(key).is_some()
    }

    fn first_message(&self, key: &str, format: &str) -> String {
        self.first(key)
            .map(|message| format.replace(":message", &html_escape(message)))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}
