//! Previously submitted input, flashed for redisplay after failed validation.

use std::collections::HashMap;

use super::transform_key;
use crate::value::FieldValue;

/// Input submitted by the previous request, keyed in dot notation.
#[derive(Debug, Clone, Default)]
pub struct OldInput {
    values: HashMap<String, FieldValue>,
}

impl OldInput {
    /// Creates an empty set of old input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds old input from submitted `(name, value)` pairs.
    ///
    /// Bracketed names are converted to dot keys, and names ending in `[]`
    /// collect their values into a list.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut input = Self::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            let key = transform_key(name);
            let value = value.into();
            if name.ends_with("[]") {
                match input.values.get_mut(&key) {
                    Some(FieldValue::List(items)) => items.push(value),
                    _ => {
                        input.values.insert(key, FieldValue::List(vec![value]));
                    }
                }
            } else {
                input.values.insert(key, FieldValue::Text(value));
            }
        }
        input
    }

    /// Sets the value for a dot-notation key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Gets the value for a dot-notation key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Returns whether any input was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
