#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use oxide_bootstrap_forms::{FormComposer, HtmlRenderer, OldInput, ValidationErrors};

pub fn composer() -> FormComposer {
    FormComposer::default()
}

pub fn composer_with_errors(errors: &[(&str, &str)]) -> FormComposer {
    let mut bag = ValidationErrors::new();
    for (field, message) in errors {
        bag.add(field, *message);
    }
    FormComposer::default().with_errors(bag)
}

pub fn composer_with_old(input: &[(&str, &str)]) -> FormComposer {
    let old = OldInput::from_pairs(input.iter().copied());
    FormComposer::new(HtmlRenderer::new().with_old_input(old))
}

pub fn meeting() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap_or_else(|| panic!("valid meeting date"))
}

/// Returns the value of the first `class` attribute in the markup.
pub fn class_of(html: &str) -> Option<&str> {
    let start = html.find(r#"class=""#)? + r#"class=""#.len();
    let len = html[start..].find('"')?;
    Some(&html[start..start + len])
}

pub fn class_tokens(html: &str) -> Vec<&str> {
    class_of(html)
        .map(|classes| classes.split_whitespace().collect())
        .unwrap_or_default()
}
