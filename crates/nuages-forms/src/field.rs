//! Field contract shared by all form fields

use serde::{Deserialize, Serialize};

/// Render hint for a field's input control.
///
/// The form itself is headless; widgets only tell a rendering layer which
/// kind of control to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
	TextInput,
	TextArea,
	EmailInput,
	HiddenInput,
}

/// Error produced while cleaning a single field value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// The field is required but no usable value was submitted.
	/// Carries the field name for programmatic callers; the display
	/// message is what ends up in the error map.
	#[error("This field is required.")]
	Required(String),
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// A single form field: identity, render hints, and the cleaning step that
/// turns a raw JSON value into a validated one.
///
/// # Examples
///
/// ```
/// use nuages_forms::{CharField, FormField};
/// use serde_json::json;
///
/// let field = CharField::new("name".to_string()).required().with_min_length(3);
/// assert_eq!(field.name(), "name");
/// assert!(field.clean(Some(&json!("Ana Silva"))).is_ok());
/// assert!(field.clean(Some(&json!("An"))).is_err());
/// ```
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn required(&self) -> bool;

	fn help_text(&self) -> Option<&str>;

	fn widget(&self) -> &Widget;

	fn initial(&self) -> Option<&serde_json::Value>;

	/// Validate and normalize a raw submitted value.
	///
	/// `None` means the key was absent from the submitted data, which is
	/// treated the same as an empty value.
	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;
}
