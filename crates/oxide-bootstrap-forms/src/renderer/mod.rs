//! Base renderers that produce raw form tags.
//!
//! A [`FormRenderer`] knows how to render unstyled `<input>`, `<select>`,
//! `<textarea>` and `<label>` tags, how to escape attributes, and how to
//! resolve a field's current value from previously submitted input. The
//! [`FormComposer`](crate::FormComposer) decorates its output with Bootstrap
//! classes and wrappers.

mod html;
mod old_input;
mod select;

pub use html::{FormOptions, HtmlRenderer};
pub use old_input::OldInput;
pub use select::{SelectEntry, SelectList};

use crate::attributes::Attributes;
use crate::error::{FormError, Result};
use crate::value::FieldValue;

/// Default textarea columns.
pub const DEFAULT_TEXTAREA_COLS: u32 = 50;

/// Default textarea rows.
pub const DEFAULT_TEXTAREA_ROWS: u32 = 10;

/// Trait for renderers of raw, unstyled form tags.
pub trait FormRenderer {
    /// Renders an `<input>` tag.
    ///
    /// When `value` is `None` the renderer may resolve one from submitted
    /// input. Inputs without a name (submit buttons) omit the attribute.
    fn input(
        &mut self,
        input_type: &str,
        name: Option<&str>,
        value: Option<FieldValue>,
        options: Attributes,
    ) -> String;

    /// Renders a `<select>` tag with its options.
    fn select(
        &mut self,
        name: &str,
        list: &SelectList,
        selected: Option<FieldValue>,
        options: Attributes,
    ) -> String;

    /// Renders a `<textarea>` tag.
    fn textarea(&mut self, name: &str, value: Option<FieldValue>, options: Attributes) -> String;

    /// Renders a `<label>` bound to the named field.
    ///
    /// Without `text` the label is derived from the field name.
    fn label(&mut self, name: &str, text: Option<&str>, options: Attributes) -> String;

    /// Renders a hidden input carrying exactly `value`.
    fn hidden(&mut self, name: &str, value: &str) -> String;

    /// Renders a `<button>` tag. `text` is trusted markup.
    fn button(&mut self, text: &str, options: Attributes) -> String;

    /// Renders an opening `<form>` tag and any hidden inputs it requires.
    fn open(&mut self, form: &FormOptions) -> String;

    /// Renders a closing `</form>` tag.
    fn close(&mut self) -> String;

    /// Renders attributes as an escaped ` key="value"` string.
    fn attributes(&self, options: &Attributes) -> String {
        options.to_html()
    }

    /// Resolves the current value of a field.
    fn value_attribute(&self, name: &str, value: Option<FieldValue>) -> Option<FieldValue>;

    /// Resolves whether a checkbox or radio should render checked.
    ///
    /// An explicit `checked` overrides submitted input.
    fn checked_state(
        &self,
        input_type: &str,
        name: &str,
        value: Option<&FieldValue>,
        checked: Option<bool>,
    ) -> bool;

    /// Converts a field name to the key used by input and error lookups.
    fn transform_key(&self, name: &str) -> String {
        transform_key(name)
    }
}

/// Converts a bracketed field name to a dot-notation key.
///
/// `user[name]` becomes `user.name`, `tags[]` becomes `tags`, and literal
/// dots become underscores.
pub fn transform_key(name: &str) -> String {
    name.replace('.', "_")
        .replace("[]", "")
        .replace('[', ".")
        .replace(']', "")
}

/// Parses a textarea `size` option of the form `COLSxROWS`.
pub fn parse_textarea_size(size: &str) -> Result<(u32, u32)> {
    let invalid = || FormError::InvalidTextareaSize(size.to_string());
    let (cols, rows) = size.split_once('x').ok_or_else(invalid)?;
    let cols = cols.trim().parse().map_err(|_| invalid())?;
    let rows = rows.trim().parse().map_err(|_| invalid())?;
    Ok((cols, rows))
}

/// Derives label text from a field name (`first_name` becomes `First Name`).
pub fn format_label(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
