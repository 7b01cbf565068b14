//! Signup Form Example
//!
//! Renders a Bootstrap signup form as it would look after a failed
//! submission: fields are repopulated from the submitted input and the
//! invalid ones carry their first error message.
//!
//! Run with: cargo run --example signup_form

use chrono::NaiveDate;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_bootstrap_forms::{
    Attributes, FieldValue, FormComposer, FormOptions, HtmlRenderer, OldInput, SelectList,
    ValidationErrors,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let submitted = OldInput::from_pairs([
        ("username", "ada"),
        ("email", "ada@"),
        ("plan", "pro"),
        ("newsletter", "0"),
    ]);
    let errors = ValidationErrors::new()
        .with("email", "Enter a valid email address.")
        .with("password", "This field is required.");

    let renderer = HtmlRenderer::new()
        .with_old_input(submitted)
        .with_csrf_token("3f9a1c");
    let mut form = FormComposer::new(renderer).with_errors(errors);

    let plans = SelectList::new()
        .option("free", "Free")
        .option("pro", "Professional");

    let mut html = form.open(&FormOptions::new().action("/signup"));

    html.push_str(&form.open_group("username", Some("Username"), Attributes::new()));
    html.push_str(&form.text("username", None, Attributes::new()));
    html.push_str(&form.close_group()?);

    html.push_str(&form.open_group("email", Some("Email"), Attributes::new()));
    html.push_str(&form.email("email", None, Attributes::new()));
    html.push_str(&form.close_group()?);

    html.push_str(&form.open_group("password", Some("Password"), Attributes::new()));
    html.push_str(&form.password("password", Attributes::new()));
    html.push_str(&form.close_group()?);

    html.push_str(&form.open_group("plan", Some("Plan"), Attributes::new()));
    html.push_str(&form.select("plan", &plans, None, Attributes::new()));
    html.push_str(&form.close_group()?);

    let start = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .map(FieldValue::from);
    html.push_str(&form.open_group("starts_at", Some("Starts at"), Attributes::new()));
    html.push_str(&form.datetime("starts_at", start, Attributes::new()));
    html.push_str(&form.close_group()?);

    html.push_str(&form.checkbox(
        "newsletter",
        1,
        Some("Send me the newsletter"),
        None,
        Attributes::new(),
    ));
    html.push_str(&form.submit(Some("Sign up"), Attributes::new().with("class", "btn-primary")));
    html.push_str(&form.close());

    info!(bytes = html.len(), "Rendered signup form");
    println!("{html}");
    Ok(())
}
