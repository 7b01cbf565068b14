//! Tests for date, time and split date-time inputs.

mod common;
use common::*;

use chrono::{NaiveDate, NaiveTime};
use oxide_bootstrap_forms::{Attributes, FieldValue, FormComposer, HtmlRenderer};

#[test]
fn date_formats_date_values() {
    let mut form = composer();
    let due = NaiveDate::from_ymd_opt(2024, 3, 5).map(FieldValue::from);
    assert_eq!(
        form.date("due", due, Attributes::new()),
        r#"<input class="form-control" name="due" type="date" value="2024-03-05">"#
    );
}

#[test]
fn date_formats_datetime_values() {
    let mut form = composer();
    let html = form.date("due", Some(meeting().into()), Attributes::new());
    assert!(html.contains(r#"value="2024-03-05""#));
}

#[test]
fn date_passes_text_through() {
    let mut form = composer();
    let html = form.date("due", Some("next week".into()), Attributes::new());
    assert!(html.contains(r#"value="next week""#));
}

#[test]
fn time_formats_values() {
    let mut form = composer();
    assert_eq!(
        form.time("at", Some(meeting().into()), Attributes::new()),
        r#"<input class="form-control" name="at" type="time" value="14:30">"#
    );

    let early = NaiveTime::from_hms_opt(9, 5, 59).map(FieldValue::from);
    assert!(form
        .time("at", early, Attributes::new())
        .contains(r#"value="09:05""#));
}

#[test]
fn date_resolves_model_value() {
    let due = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
    let mut form = FormComposer::new(HtmlRenderer::new().with_model([("due", due)]));
    assert!(form
        .date("due", None, Attributes::new())
        .contains(r#"value="2024-12-24""#));
}

#[test]
fn date_prefers_old_input() {
    let mut form = composer_with_old(&[("due", "2025-01-01")]);
    let html = form.date("due", Some(meeting().into()), Attributes::new());
    assert!(html.contains(r#"value="2025-01-01""#));
}

#[test]
fn datetime_renders_date_and_time_pair() {
    let mut form = composer();
    let html = form.datetime("meeting", Some(meeting().into()), Attributes::new());

    let mut expected = composer();
    let date = expected.date("meeting[date]", Some("2024-03-05".into()), Attributes::new());
    let time = expected.time("meeting[time]", Some("14:30".into()), Attributes::new());

    assert_eq!(html, format!("{date}{time}"));
    assert_eq!(
        html,
        concat!(
            r#"<input class="form-control" name="meeting[date]" type="date" value="2024-03-05">"#,
            r#"<input class="form-control" name="meeting[time]" type="time" value="14:30">"#
        )
    );
}

#[test]
fn datetime_shares_options() {
    let mut form = composer();
    let html = form.datetime(
        "meeting",
        Some(meeting().into()),
        Attributes::new().with("class", "input-sm"),
    );
    assert_eq!(html.matches(r#"class="input-sm form-control""#).count(), 2);
}

#[test]
fn datetime_without_value() {
    let mut form = composer();
    assert_eq!(
        form.datetime("meeting", None, Attributes::new()),
        concat!(
            r#"<input class="form-control" name="meeting[date]" type="date">"#,
            r#"<input class="form-control" name="meeting[time]" type="time">"#
        )
    );
}

#[test]
fn datetime_with_text_value_ignores_it() {
    let mut form = composer();
    let html = form.datetime("meeting", Some("tomorrow".into()), Attributes::new());
    assert!(!html.contains("tomorrow"));
}

#[test]
fn datetime_parts_repopulate_from_old_input() {
    let mut form = composer_with_old(&[("meeting[date]", "2024-01-01"), ("meeting[time]", "08:00")]);
    let html = form.datetime("meeting", Some(meeting().into()), Attributes::new());
    assert!(html.contains(r#"name="meeting[date]" type="date" value="2024-01-01""#));
    assert!(html.contains(r#"name="meeting[time]" type="time" value="08:00""#));
}
