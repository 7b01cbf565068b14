//! # oxide-bootstrap-forms
//!
//! Bootstrap-styled form markup on top of a plain form renderer.
//!
//! This crate provides:
//! - A [`FormComposer`] that injects Bootstrap classes into inputs, selects
//!   and textareas
//! - Form groups with control labels and inline validation errors
//! - Checkbox and radio wrappers, with a hidden fallback for unchecked boxes
//! - Date, time and split date-time inputs
//! - A default [`HtmlRenderer`] that escapes attributes and repopulates
//!   fields from previously submitted input
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bootstrap_forms::{Attributes, FormComposer, ValidationErrors};
//!
//! let errors = ValidationErrors::new().with("email", "Enter a valid email address.");
//! let mut form = FormComposer::default().with_errors(errors);
//!
//! let mut html = form.open_group("email", Some("Email"), Attributes::new());
//! html.push_str(&form.email("email", None, Attributes::new()));
//! html.push_str(&form.close_group().unwrap());
//!
//! assert!(html.starts_with(r#"<div class="form-group has-error">"#));
//! assert!(html.ends_with(r#"<p class="help-block">Enter a valid email address.</p></div>"#));
//! ```
//!
//! ## Checkboxes and Radios
//!
//! ```rust
//! use oxide_bootstrap_forms::{Attributes, FormComposer};
//!
//! let mut form = FormComposer::default();
//! let html = form.checkbox("remember", 1, Some("Remember me"), None, Attributes::new());
//! assert_eq!(
//!     html,
//!     concat!(
//!         r#"<div class="checkbox"><label>"#,
//!         r#"<input name="remember" type="hidden" value="0">"#,
//!         r#"<input name="remember" type="checkbox" value="1"> Remember me"#,
//!         r#"</label></div>"#,
//!     )
//! );
//! ```
//!
//! ## Redisplaying Submitted Input
//!
//! ```rust
//! use oxide_bootstrap_forms::{Attributes, FormComposer, HtmlRenderer, OldInput};
//!
//! let old = OldInput::from_pairs([("user[name]", "Ada")]);
//! let mut form = FormComposer::new(HtmlRenderer::new().with_old_input(old));
//!
//! let html = form.text("user[name]", None, Attributes::new());
//! assert_eq!(
//!     html,
//!     r#"<input class="form-control" name="user[name]" type="text" value="Ada">"#
//! );
//! ```

mod attributes;
mod composer;
pub mod config;
mod error;
pub mod renderer;
mod value;

pub use attributes::{html_escape, Attributes};
pub use composer::FormComposer;
pub use config::BootstrapConfig;
pub use error::{ErrorSource, FormError, Result, ValidationErrors};
pub use renderer::{FormOptions, FormRenderer, HtmlRenderer, OldInput, SelectList};
pub use value::FieldValue;
