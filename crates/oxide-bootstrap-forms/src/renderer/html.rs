//! Default HTML renderer with old-input and model value resolution.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::{
    format_label, parse_textarea_size, transform_key, FormRenderer, OldInput, SelectList,
    DEFAULT_TEXTAREA_COLS, DEFAULT_TEXTAREA_ROWS,
};
use crate::attributes::{html_escape, Attributes};
use crate::value::FieldValue;

/// Input types whose value is never taken from submitted input.
const SKIP_VALUE_TYPES: [&str; 4] = ["file", "password", "checkbox", "radio"];

/// Methods that browsers cannot send and are spoofed through `_method`.
const SPOOFED_METHODS: [&str; 3] = ["DELETE", "PATCH", "PUT"];

/// Options for an opening `<form>` tag.
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// HTTP method, case-insensitive.
    pub method: String,
    /// Form action URL.
    pub action: Option<String>,
    /// Whether the form uploads files.
    pub files: bool,
    /// Additional attributes.
    pub attrs: Attributes,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            method: "POST".to_string(),
            action: None,
            files: false,
            attrs: Attributes::new(),
        }
    }
}

impl FormOptions {
    /// Creates POST form options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the action URL.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Marks the form as uploading files.
    #[must_use]
    pub fn files(mut self) -> Self {
        self.files = true;
        self
    }

    /// Sets an extra attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// Renders plain HTML form tags.
///
/// Field values resolve from old input first, then the explicit value, then
/// the bound model.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    old_input: OldInput,
    model: HashMap<String, FieldValue>,
    csrf_token: Option<String>,
    labels: Vec<String>,
}

impl HtmlRenderer {
    /// Creates a renderer without submitted input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input submitted by the previous request.
    #[must_use]
    pub fn with_old_input(mut self, old_input: OldInput) -> Self {
        self.old_input = old_input;
        self
    }

    /// Binds model values used when neither old input nor an explicit value
    /// is available. Keys use dot notation.
    #[must_use]
    pub fn with_model<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.model = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Sets the CSRF token embedded in non-GET forms.
    #[must_use]
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Returns the old input.
    pub fn old_input(&self) -> &OldInput {
        &self.old_input
    }

    /// Renders the hidden CSRF token input, if a token is set.
    pub fn token(&mut self) -> String {
        match self.csrf_token.clone() {
            Some(token) => self.hidden("_token", &token),
            None => String::new(),
        }
    }

    fn id_attribute(&self, name: Option<&str>, options: &Attributes) -> Option<String> {
        if let Some(id) = options.get("id") {
            return Some(id.to_string());
        }
        name.filter(|name| self.labels.iter().any(|label| label == name))
            .map(str::to_string)
    }

    fn old(&self, name: &str) -> Option<&FieldValue> {
        if name == "_method" {
            return None;
        }
        self.old_input.get(&transform_key(name))
    }

    fn model_value(&self, name: &str) -> Option<&FieldValue> {
        self.model.get(&transform_key(name))
    }

    fn checkbox_checked_state(&self, name: &str, value: Option<&FieldValue>) -> bool {
        let checked_by = |posted: &FieldValue| match (posted, value) {
            (FieldValue::List(_), Some(value)) => posted.contains(value),
            (FieldValue::List(_), None) => false,
            (posted, _) => posted.is_truthy(),
        };
        if let Some(posted) = self.old(name) {
            return checked_by(posted);
        }
        // A submitted form omits unchecked checkboxes entirely.
        if !self.old_input.is_empty() {
            return false;
        }
        self.model_value(name).is_some_and(checked_by)
    }

    fn radio_checked_state(&self, name: &str, value: Option<&FieldValue>) -> bool {
        let Some(value) = value else {
            return false;
        };
        self.old(name)
            .or_else(|| self.model_value(name))
            .is_some_and(|current| current.loosely_equals(value))
    }
}

impl FormRenderer for HtmlRenderer {
    fn input(
        &mut self,
        input_type: &str,
        name: Option<&str>,
        value: Option<FieldValue>,
        options: Attributes,
    ) -> String {
        let mut options = options;
        if let Some(name) = name {
            if !options.contains("name") {
                options.set("name", name);
            }
        }

        let id = self.id_attribute(name, &options);

        let value = match name {
            Some(name) if !SKIP_VALUE_TYPES.contains(&input_type) => {
                self.value_attribute(name, value)
            }
            _ => value,
        };

        options.set("type", input_type);
        if let Some(value) = value {
            options.set("value", value.to_string());
        }
        if let Some(id) = id {
            options.set("id", id);
        }

        format!("<input{}>", self.attributes(&options))
    }

    fn select(
        &mut self,
        name: &str,
        list: &SelectList,
        selected: Option<FieldValue>,
        options: Attributes,
    ) -> String {
        let selected = self.value_attribute(name, selected);

        let mut options = options;
        if let Some(id) = self.id_attribute(Some(name), &options) {
            options.set("id", id);
        }
        if !options.contains("name") {
            options.set("name", name);
        }

        let mut html = String::new();
        if let Some(placeholder) = options.remove("placeholder") {
            let mut attrs = Attributes::new().with("value", "");
            if selected.is_none() {
                attrs.set("selected", "selected");
            }
            html.push_str(&format!(
                "<option{}>{}</option>",
                attrs.to_html(),
                html_escape(&placeholder)
            ));
        }
        html.push_str(&list.to_html(selected.as_ref()));

        format!("<select{}>{html}</select>", self.attributes(&options))
    }

    fn textarea(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        let mut options = options;
        if !options.contains("name") {
            options.set("name", name);
        }

        let (cols, rows) = match options.remove("size") {
            Some(size) => parse_textarea_size(&size).unwrap_or_else(|err| {
                warn!(field = name, error = %err, "Falling back to default textarea size");
                (DEFAULT_TEXTAREA_COLS, DEFAULT_TEXTAREA_ROWS)
            }),
            None => (DEFAULT_TEXTAREA_COLS, DEFAULT_TEXTAREA_ROWS),
        };
        if !options.contains("cols") {
            options.set("cols", cols.to_string());
        }
        if !options.contains("rows") {
            options.set("rows", rows.to_string());
        }

        if let Some(id) = self.id_attribute(Some(name), &options) {
            options.set("id", id);
        }

        let content = self
            .value_attribute(name, value)
            .map(|v| html_escape(&v.to_string()))
            .unwrap_or_default();

        format!("<textarea{}>{content}</textarea>", self.attributes(&options))
    }

    fn label(&mut self, name: &str, text: Option<&str>, options: Attributes) -> String {
        self.labels.push(name.to_string());
        let text = text.map_or_else(|| format_label(name), str::to_string);
        format!(
            r#"<label for="{}"{}>{}</label>"#,
            html_escape(name),
            self.attributes(&options),
            html_escape(&text)
        )
    }

    fn hidden(&mut self, name: &str, value: &str) -> String {
        let options = Attributes::new()
            .with("name", name)
            .with("type", "hidden")
            .with("value", value);
        format!("<input{}>", self.attributes(&options))
    }

    fn button(&mut self, text: &str, options: Attributes) -> String {
        let mut options = options;
        if !options.contains("type") {
            options.set("type", "button");
        }
        format!("<button{}>{text}</button>", self.attributes(&options))
    }

    fn open(&mut self, form: &FormOptions) -> String {
        let method = form.method.to_uppercase();

        let mut attrs = Attributes::new()
            .with("method", if method == "GET" { "GET" } else { "POST" })
            .with("action", form.action.clone().unwrap_or_default())
            .with("accept-charset", "UTF-8");
        if form.files {
            attrs.set("enctype", "multipart/form-data");
        }
        for (key, value) in form.attrs.iter() {
            attrs.set(key, value);
        }

        let mut appendage = String::new();
        if SPOOFED_METHODS.contains(&method.as_str()) {
            appendage.push_str(&self.hidden("_method", &method));
        }
        if method != "GET" {
            appendage.push_str(&self.token());
        }

        format!("<form{}>{appendage}", self.attributes(&attrs))
    }

    fn close(&mut self) -> String {
        self.labels.clear();
        "</form>".to_string()
    }

    fn value_attribute(&self, name: &str, value: Option<FieldValue>) -> Option<FieldValue> {
        if let Some(old) = self.old(name) {
            debug!(field = name, "Using submitted input as field value");
            return Some(old.clone());
        }
        value.or_else(|| self.model_value(name).cloned())
    }

    fn checked_state(
        &self,
        input_type: &str,
        name: &str,
        value: Option<&FieldValue>,
        checked: Option<bool>,
    ) -> bool {
        if let Some(checked) = checked {
            return checked;
        }
        match input_type {
            "checkbox" => self.checkbox_checked_state(name, value),
            "radio" => self.radio_checked_state(name, value),
            _ => false,
        }
    }
}
