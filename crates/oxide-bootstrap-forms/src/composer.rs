//! Bootstrap form composer.

use ironhtml::html;
use ironhtml_elements::Label;
use tracing::{debug, warn};

use crate::attributes::Attributes;
use crate::config::BootstrapConfig;
use crate::error::{ErrorSource, FormError, Result};
use crate::renderer::{FormOptions, FormRenderer, HtmlRenderer, SelectList};
use crate::value::FieldValue;

/// Decorates a [`FormRenderer`]'s output with Bootstrap classes and wrappers.
///
/// A composer renders one form at a time: open groups are tracked on an
/// internal stack, so create one composer per request.
pub struct FormComposer<R = HtmlRenderer> {
    renderer: R,
    errors: Option<Box<dyn ErrorSource>>,
    config: BootstrapConfig,
    group_stack: Vec<String>,
}

impl<R: std::fmt::Debug> std::fmt::Debug for FormComposer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormComposer")
            .field("renderer", &self.renderer)
            .field("has_errors", &self.errors.is_some())
            .field("config", &self.config)
            .field("group_stack", &self.group_stack)
            .finish()
    }
}

impl Default for FormComposer<HtmlRenderer> {
    fn default() -> Self {
        Self::new(HtmlRenderer::new())
    }
}

impl<R: FormRenderer> FormComposer<R> {
    /// Creates a composer over the given renderer, without validation errors.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            errors: None,
            config: BootstrapConfig::default(),
            group_stack: Vec::new(),
        }
    }

    /// Sets the validation errors of the current request.
    #[must_use]
    pub fn with_errors(mut self, errors: impl ErrorSource + 'static) -> Self {
        self.errors = Some(Box::new(errors));
        self
    }

    /// Sets the styling configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the underlying renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the underlying renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Returns the styling configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Returns the number of groups currently open.
    pub fn open_groups(&self) -> usize {
        self.group_stack.len()
    }

    /// Opens a form group for the named field.
    ///
    /// The group carries the error class when the field has errors. A
    /// non-empty `label` renders a control label bound to the field.
    pub fn open_group(&mut self, name: &str, label: Option<&str>, options: Attributes) -> String {
        let mut options = options.append_class(&self.config.group_class);
        self.group_stack.push(name.to_string());

        if self.has_errors(name) {
            options = options.append_class(&self.config.error_class);
        }

        let label = match label {
            Some(text) if !text.is_empty() => {
                let label_options = Attributes::new().with("class", self.config.label_class.as_str());
                self.renderer.label(name, Some(text), label_options)
            }
            _ => String::new(),
        };

        debug!(group = name, depth = self.group_stack.len(), "Opened form group");
        format!("<div{}>{label}", self.renderer.attributes(&options))
    }

    /// Closes the most recently opened group, appending its first error.
    pub fn close_group(&mut self) -> Result<String> {
        let Some(name) = self.group_stack.pop() else {
            warn!("Attempted to close a form group that was never opened");
            return Err(FormError::UnbalancedGroupClose);
        };

        let errors = self.formatted_errors(&name);
        debug!(group = %name, depth = self.group_stack.len(), "Closed form group");
        Ok(format!("{errors}</div>"))
    }

    /// Renders an input; text-like types receive the control class.
    pub fn input(
        &mut self,
        input_type: &str,
        name: &str,
        value: Option<FieldValue>,
        options: Attributes,
    ) -> String {
        let options = if self.config.is_plain_type(input_type) {
            options
        } else {
            options.append_class(&self.config.control_class)
        };
        self.renderer.input(input_type, Some(name), value, options)
    }

    /// Renders a select with the control class.
    pub fn select(
        &mut self,
        name: &str,
        list: &SelectList,
        selected: Option<FieldValue>,
        options: Attributes,
    ) -> String {
        let options = options.append_class(&self.config.control_class);
        self.renderer.select(name, list, selected, options)
    }

    /// Renders a textarea with the control class.
    pub fn textarea(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        let options = options.append_class(&self.config.control_class);
        self.renderer.textarea(name, value, options)
    }

    /// Renders an input without any class injection.
    pub fn plain_input(
        &mut self,
        input_type: &str,
        name: Option<&str>,
        value: Option<FieldValue>,
        options: Attributes,
    ) -> String {
        self.renderer.input(input_type, name, value, options)
    }

    /// Renders a select without any class injection.
    pub fn plain_select(
        &mut self,
        name: &str,
        list: &SelectList,
        selected: Option<FieldValue>,
        options: Attributes,
    ) -> String {
        self.renderer.select(name, list, selected, options)
    }

    /// Renders a textarea without any class injection.
    pub fn plain_textarea(
        &mut self,
        name: &str,
        value: Option<FieldValue>,
        options: Attributes,
    ) -> String {
        self.renderer.textarea(name, value, options)
    }

    /// Renders a labelled checkbox.
    ///
    /// When `value` is loosely equal to 1, a hidden input with value `0` is
    /// emitted first so that an unchecked box still submits a value.
    pub fn checkbox(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
        label: Option<&str>,
        checked: Option<bool>,
        options: Attributes,
    ) -> String {
        let markup = self.checkbox_markup(name, value.into(), checked, options);
        wrap_checkable(label, "checkbox", &markup)
    }

    /// Renders a labelled radio button. The value defaults to the name.
    pub fn radio(
        &mut self,
        name: &str,
        value: Option<FieldValue>,
        label: Option<&str>,
        checked: Option<bool>,
        options: Attributes,
    ) -> String {
        let markup = self.radio_markup(name, value, checked, options);
        wrap_checkable(label, "radio", &markup)
    }

    /// Renders a checkbox laid out inline.
    pub fn inline_checkbox(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
        label: Option<&str>,
        checked: Option<bool>,
        options: Attributes,
    ) -> String {
        let markup = self.checkbox_markup(name, value.into(), checked, options);
        wrap_inline_checkable(label, "checkbox", &markup)
    }

    /// Renders a radio button laid out inline.
    pub fn inline_radio(
        &mut self,
        name: &str,
        value: Option<FieldValue>,
        label: Option<&str>,
        checked: Option<bool>,
        options: Attributes,
    ) -> String {
        let markup = self.radio_markup(name, value, checked, options);
        wrap_inline_checkable(label, "radio", &markup)
    }

    /// Renders a date input, formatting temporal values as `YYYY-MM-DD`.
    pub fn date(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        let value = self
            .renderer
            .value_attribute(name, value)
            .map(|v| v.date_string().map_or(v, FieldValue::Text));
        self.input("date", name, value, options)
    }

    /// Renders a time input, formatting temporal values as `HH:MM`.
    pub fn time(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        let value = self
            .renderer
            .value_attribute(name, value)
            .map(|v| v.time_string().map_or(v, FieldValue::Text));
        self.input("time", name, value, options)
    }

    /// Renders a sibling date and time input pair named `name[date]` and
    /// `name[time]`.
    pub fn datetime(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        let value = self.renderer.value_attribute(name, value);

        let (date_value, time_value) = match value {
            Some(v) if v.is_temporal() => (v.date_string(), v.time_string()),
            _ => (None, None),
        };

        let date = self.date(
            &format!("{name}[date]"),
            date_value.map(FieldValue::Text),
            options.clone(),
        );
        let time = self.time(
            &format!("{name}[time]"),
            time_value.map(FieldValue::Text),
            options,
        );
        format!("{date}{time}")
    }

    /// Renders a submit button with a base and a contextual button class.
    pub fn submit(&mut self, value: Option<&str>, options: Attributes) -> String {
        let options = self.button_options(options);
        self.plain_input("submit", None, value.map(FieldValue::from), options)
    }

    /// Renders a `<button>` with a base and a contextual button class.
    ///
    /// `text` is trusted markup, so icons may be embedded.
    pub fn button(&mut self, text: &str, options: Attributes) -> String {
        let options = self.button_options(options);
        self.renderer.button(text, options)
    }

    /// Renders a text input.
    pub fn text(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        self.input("text", name, value, options)
    }

    /// Renders an email input.
    pub fn email(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        self.input("email", name, value, options)
    }

    /// Renders a number input.
    pub fn number(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        self.input("number", name, value, options)
    }

    /// Renders a URL input.
    pub fn url(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        self.input("url", name, value, options)
    }

    /// Renders a telephone input.
    pub fn tel(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        self.input("tel", name, value, options)
    }

    /// Renders a password input. Passwords are never redisplayed.
    pub fn password(&mut self, name: &str, options: Attributes) -> String {
        self.input("password", name, Some(FieldValue::from("")), options)
    }

    /// Renders a file input.
    pub fn file(&mut self, name: &str, options: Attributes) -> String {
        self.input("file", name, None, options)
    }

    /// Renders a hidden input.
    pub fn hidden(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String {
        self.input("hidden", name, value, options)
    }

    /// Renders a label bound to the named field.
    pub fn label(&mut self, name: &str, text: Option<&str>, options: Attributes) -> String {
        self.renderer.label(name, text, options)
    }

    /// Opens a form.
    pub fn open(&mut self, form: &FormOptions) -> String {
        self.renderer.open(form)
    }

    /// Closes a form. Groups still open are reported and discarded.
    pub fn close(&mut self) -> String {
        if !self.group_stack.is_empty() {
            warn!(groups = ?self.group_stack, "Closing form with unclosed groups");
            self.group_stack.clear();
        }
        self.renderer.close()
    }

    fn checkable(
        &mut self,
        input_type: &str,
        name: &str,
        value: FieldValue,
        checked: Option<bool>,
        options: Attributes,
    ) -> String {
        let checked = self
            .renderer
            .checked_state(input_type, name, Some(&value), checked);
        let options = if checked {
            options.with("checked", "checked")
        } else {
            options
        };
        self.renderer.input(input_type, Some(name), Some(value), options)
    }

    fn checkbox_markup(
        &mut self,
        name: &str,
        value: FieldValue,
        checked: Option<bool>,
        options: Attributes,
    ) -> String {
        let prefix = if value.loosely_equals_one() {
            self.renderer.hidden(name, "0")
        } else {
            String::new()
        };
        let checkbox = self.checkable("checkbox", name, value, checked, options);
        format!("{prefix}{checkbox}")
    }

    fn radio_markup(
        &mut self,
        name: &str,
        value: Option<FieldValue>,
        checked: Option<bool>,
        options: Attributes,
    ) -> String {
        let value = value.unwrap_or_else(|| FieldValue::from(name));
        self.checkable("radio", name, value, checked, options)
    }

    fn button_options(&self, options: Attributes) -> Attributes {
        let mut classes: Vec<&str> = options.get("class").unwrap_or("").split(' ').collect();
        if !classes.contains(&self.config.button_class.as_str()) {
            classes.push(&self.config.button_class);
        }
        if !self.config.has_button_variant(&classes) {
            classes.push(&self.config.default_button_class);
        }
        let class = classes.join(" ").trim().to_string();
        options.with("class", class)
    }

    fn has_errors(&self, name: &str) -> bool {
        self.errors
            .as_ref()
            .is_some_and(|errors| errors.has_field(&self.renderer.transform_key(name)))
    }

    fn formatted_errors(&self, name: &str) -> String {
        if !self.has_errors(name) {
            return String::new();
        }
        self.errors
            .as_ref()
            .map(|errors| {
                errors.first_message(&self.renderer.transform_key(name), &self.config.error_format)
            })
            .unwrap_or_default()
    }
}

/// Wraps checkable markup and its label in a block container.
fn wrap_checkable(label: Option<&str>, input_type: &str, markup: &str) -> String {
    wrap(label, input_type, markup)
}

/// Wraps checkable markup and its label in an inline container.
fn wrap_inline_checkable(label: Option<&str>, input_type: &str, markup: &str) -> String {
    wrap(label, &format!("{input_type}-inline"), markup)
}

fn wrap(label: Option<&str>, wrapper_class: &str, markup: &str) -> String {
    let label = label.unwrap_or_default();
    html! { div.class(#wrapper_class) }
        .child::<Label, _>(|l| l.raw(markup).raw(" ").raw(label))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrors;

    #[test]
    fn test_wrap_checkable() {
        assert_eq!(
            wrap_checkable(Some("Remember me"), "checkbox", "<input>"),
            r#"<div class="checkbox"><label><input> Remember me</label></div>"#
        );
    }

    #[test]
    fn test_wrap_inline_checkable() {
        assert_eq!(
            wrap_inline_checkable(Some("Red"), "radio", "<input>"),
            r#"<div class="radio-inline"><label><input> Red</label></div>"#
        );
    }

    #[test]
    fn test_button_options_adds_base_and_default() {
        let composer = FormComposer::default();
        let options = composer.button_options(Attributes::new());
        assert_eq!(options.get("class"), Some("btn btn-default"));
    }

    #[test]
    fn test_button_options_keeps_variant() {
        let composer = FormComposer::default();
        let options = composer.button_options(Attributes::new().with("class", "btn-primary"));
        assert_eq!(options.get("class"), Some("btn-primary btn"));

        let options = composer.button_options(Attributes::new().with("class", "btn btn-link"));
        assert_eq!(options.get("class"), Some("btn btn-link"));
    }

    #[test]
    fn test_has_errors_uses_transformed_key() {
        let composer = FormComposer::default()
            .with_errors(ValidationErrors::new().with("user.name", "Required."));
        assert!(composer.has_errors("user[name]"));
        assert!(!composer.has_errors("user[email]"));
        assert_eq!(
            composer.formatted_errors("user[name]"),
            r#"<p class="help-block">Required.</p>"#
        );
        assert_eq!(composer.formatted_errors("user[email]"), "");
    }

    #[test]
    fn test_no_error_source() {
        let composer = FormComposer::default();
        assert!(!composer.has_errors("email"));
        assert_eq!(composer.formatted_errors("email"), "");
    }

    #[test]
    fn test_close_discards_open_groups() {
        let mut composer = FormComposer::default();
        composer.open_group("email", None, Attributes::new());
        assert_eq!(composer.open_groups(), 1);
        assert_eq!(composer.close(), "</form>");
        assert_eq!(composer.open_groups(), 0);
    }
}
