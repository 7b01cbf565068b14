//! Tests for styled and plain field rendering.

mod common;
use common::*;

use oxide_bootstrap_forms::config::PLAIN_INPUT_TYPES;
use oxide_bootstrap_forms::{Attributes, FieldValue, FormOptions, SelectList};

#[test]
fn plain_types_never_get_control_class() {
    let mut form = composer();
    for input_type in PLAIN_INPUT_TYPES {
        let html = form.input(input_type, "field", None, Attributes::new());
        assert!(
            !html.contains("form-control"),
            "{input_type} should not carry form-control: {html}"
        );
    }
}

#[test]
fn other_types_always_get_control_class() {
    let mut form = composer();
    for input_type in [
        "text", "email", "password", "number", "date", "time", "url", "tel", "search", "color",
    ] {
        let html = form.input(input_type, "field", None, Attributes::new());
        assert!(
            class_tokens(&html).contains(&"form-control"),
            "{input_type} should carry form-control: {html}"
        );
    }
}

#[test]
fn input_appends_to_caller_class() {
    let mut form = composer();
    let html = form.input(
        "text",
        "q",
        None,
        Attributes::new().with("class", "input-lg"),
    );
    assert_eq!(
        html,
        r#"<input class="input-lg form-control" name="q" type="text">"#
    );
}

#[test]
fn input_escapes_value() {
    let mut form = composer();
    let html = form.text("title", Some(r#"Say "hi" <b>"#.into()), Attributes::new());
    assert_eq!(
        html,
        r#"<input class="form-control" name="title" type="text" value="Say &quot;hi&quot; &lt;b&gt;">"#
    );
}

#[test]
fn input_repopulates_from_old_input() {
    let mut form = composer_with_old(&[("username", "ada")]);
    let html = form.text("username", Some("default".into()), Attributes::new());
    assert!(html.contains(r#"value="ada""#));
}

#[test]
fn select_gets_control_class() {
    let mut form = composer();
    let list = SelectList::new()
        .option("free", "Free")
        .option("pro", "Professional");
    let html = form.select("plan", &list, Some("pro".into()), Attributes::new());
    assert_eq!(
        html,
        concat!(
            r#"<select class="form-control" name="plan">"#,
            r#"<option value="free">Free</option>"#,
            r#"<option value="pro" selected="selected">Professional</option>"#,
            "</select>"
        )
    );
}

#[test]
fn select_with_empty_list() {
    let mut form = composer();
    let html = form.select("plan", &SelectList::new(), None, Attributes::new());
    assert_eq!(html, r#"<select class="form-control" name="plan"></select>"#);
}

#[test]
fn textarea_gets_control_class() {
    let mut form = composer();
    let html = form.textarea("bio", Some("Hi".into()), Attributes::new());
    assert_eq!(
        html,
        r#"<textarea class="form-control" name="bio" cols="50" rows="10">Hi</textarea>"#
    );
}

#[test]
fn plain_variants_skip_class_injection() {
    let mut form = composer();
    assert_eq!(
        form.plain_input("text", Some("q"), None, Attributes::new()),
        r#"<input name="q" type="text">"#
    );
    assert_eq!(
        form.plain_select("plan", &SelectList::new(), None, Attributes::new()),
        r#"<select name="plan"></select>"#
    );
    assert_eq!(
        form.plain_textarea("bio", None, Attributes::new().with("size", "20x3")),
        r#"<textarea name="bio" cols="20" rows="3"></textarea>"#
    );
}

#[test]
fn password_is_never_redisplayed() {
    let mut form = composer_with_old(&[("password", "hunter2")]);
    assert_eq!(
        form.password("password", Attributes::new()),
        r#"<input class="form-control" name="password" type="password" value="">"#
    );
}

#[test]
fn file_and_hidden_inputs() {
    let mut form = composer();
    assert_eq!(
        form.file("avatar", Attributes::new()),
        r#"<input name="avatar" type="file">"#
    );
    assert_eq!(
        form.hidden("next", Some("/home".into()), Attributes::new()),
        r#"<input name="next" type="hidden" value="/home">"#
    );
}

#[test]
fn convenience_types() {
    let mut form = composer();
    assert!(form.number("age", Some(FieldValue::from(42_i64)), Attributes::new()).contains(r#"type="number" value="42""#));
    assert!(form.url("site", None, Attributes::new()).contains(r#"type="url""#));
    assert!(form.tel("phone", None, Attributes::new()).contains(r#"type="tel""#));
}

#[test]
fn label_without_text_uses_field_name() {
    let mut form = composer();
    assert_eq!(
        form.label("first_name", None, Attributes::new()),
        r#"<label for="first_name">First Name</label>"#
    );
}

#[test]
fn submit_adds_default_button_classes() {
    let mut form = composer();
    assert_eq!(
        form.submit(Some("Save"), Attributes::new()),
        r#"<input class="btn btn-default" type="submit" value="Save">"#
    );
    assert_eq!(
        form.submit(None, Attributes::new()),
        r#"<input class="btn btn-default" type="submit">"#
    );
}

#[test]
fn submit_keeps_contextual_class() {
    let mut form = composer();
    let html = form.submit(Some("Save"), Attributes::new().with("class", "btn-primary"));
    let mut tokens = class_tokens(&html);
    tokens.sort_unstable();
    assert_eq!(tokens, vec!["btn", "btn-primary"]);
    assert!(!html.contains("btn-default"));

    let html = form.submit(
        Some("Delete"),
        Attributes::new().with("class", "btn btn-danger pull-right"),
    );
    assert_eq!(class_of(&html), Some("btn btn-danger pull-right"));
}

#[test]
fn submit_is_not_repopulated() {
    let mut form = composer_with_old(&[("submit", "Other")]);
    assert_eq!(
        form.submit(Some("Save"), Attributes::new()),
        r#"<input class="btn btn-default" type="submit" value="Save">"#
    );
}

#[test]
fn button_gets_button_classes() {
    let mut form = composer();
    assert_eq!(
        form.button("Cancel", Attributes::new().with("class", "btn-link")),
        r#"<button class="btn-link btn" type="button">Cancel</button>"#
    );
}

#[test]
fn form_open_and_close() {
    let mut form = oxide_bootstrap_forms::FormComposer::new(
        oxide_bootstrap_forms::HtmlRenderer::new().with_csrf_token("abc"),
    );
    let html = form.open(&FormOptions::new().method("delete").action("/posts/3"));
    assert_eq!(
        html,
        concat!(
            r#"<form method="POST" action="/posts/3" accept-charset="UTF-8">"#,
            r#"<input name="_method" type="hidden" value="DELETE">"#,
            r#"<input name="_token" type="hidden" value="abc">"#
        )
    );
    assert_eq!(form.close(), "</form>");
}
