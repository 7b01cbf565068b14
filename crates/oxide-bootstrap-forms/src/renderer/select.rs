//! Select option lists.

use crate::attributes::{html_escape, Attributes};
use crate::value::FieldValue;

/// An entry in a select list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEntry {
    /// A single option (value, label).
    Option(String, String),
    /// An option group (label, options).
    Group(String, Vec<(String, String)>),
}

/// Ordered options of a `<select>` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectList {
    entries: Vec<SelectEntry>,
}

impl SelectList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from (value, label) pairs.
    pub fn from_pairs(pairs: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(v, l)| SelectEntry::Option(v.into(), l.into()))
                .collect(),
        }
    }

    /// Adds an option.
    #[must_use]
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.entries
            .push(SelectEntry::Option(value.into(), label.into()));
        self
    }

    /// Adds an option group.
    #[must_use]
    pub fn group(
        mut self,
        label: impl Into<String>,
        options: Vec<(impl Into<String>, impl Into<String>)>,
    ) -> Self {
        self.entries.push(SelectEntry::Group(
            label.into(),
            options
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
        ));
        self
    }

    /// Returns whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries.
    pub fn entries(&self) -> &[SelectEntry] {
        &self.entries
    }

    /// Renders the `<option>` and `<optgroup>` tags.
    pub fn to_html(&self, selected: Option<&FieldValue>) -> String {
        let mut html = String::new();
        for entry in &self.entries {
            match entry {
                SelectEntry::Option(value, label) => {
                    html.push_str(&option_html(value, label, selected));
                }
                SelectEntry::Group(label, options) => {
                    let attrs = Attributes::new().with("label", label.as_str());
                    html.push_str(&format!("<optgroup{}>", attrs.to_html()));
                    for (value, label) in options {
                        html.push_str(&option_html(value, label, selected));
                    }
                    html.push_str("</optgroup>");
                }
            }
        }
        html
    }
}

fn is_selected(value: &str, selected: Option<&FieldValue>) -> bool {
    match selected {
        Some(FieldValue::List(items)) => items.iter().any(|item| item == value),
        Some(other) => other.to_string() == value,
        None => false,
    }
}

fn option_html(value: &str, label: &str, selected: Option<&FieldValue>) -> String {
    let mut attrs = Attributes::new().with("value", value);
    if is_selected(value, selected) {
        attrs.set("selected", "selected");
    }
    format!("<option{}>{}</option>", attrs.to_html(), html_escape(label))
}
