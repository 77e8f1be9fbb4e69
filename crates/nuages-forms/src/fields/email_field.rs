//! Email field

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::validators::EmailValidator;

/// Maximum length of an email address in characters (RFC 5321 octet limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Email input field.
///
/// Trims the submitted value, caps it at [`MAX_EMAIL_LENGTH`], and checks it
/// against the email grammar via [`EmailValidator`].
#[derive(Debug, Clone)]
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	validator: EmailValidator,
}

impl EmailField {
	/// Create a new `EmailField` with the given name.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::{EmailField, FormField, Widget};
	/// use serde_json::json;
	///
	/// let field = EmailField::new("email".to_string()).required();
	/// assert_eq!(field.widget(), &Widget::EmailInput);
	/// assert!(field.clean(Some(&json!("ana@example.com"))).is_ok());
	/// assert!(field.clean(Some(&json!("not-an-email"))).is_err());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::EmailInput,
			initial: None,
			validator: EmailValidator::new(),
		}
	}

	/// Mark the field as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the human-readable label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the help text shown next to the field.
	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Set a custom error message for format failures.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::{EmailField, FormField};
	/// use serde_json::json;
	///
	/// let field = EmailField::new("email".to_string())
	/// 	.with_invalid_message("Please check the email address");
	/// let error = field.clean(Some(&json!("nope"))).unwrap_err();
	/// assert_eq!(error.to_string(), "Please check the email address");
	/// ```
	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.validator = EmailValidator::new().with_message(message);
		self
	}
}

impl FormField for EmailField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn initial(&self) -> Option<&serde_json::Value> {
		self.initial.as_ref()
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let raw = match value {
			Some(v) if v.is_null() => None,
			Some(v) => Some(
				v.as_str()
					.ok_or_else(|| FieldError::Validation("Value must be a string".to_string()))?,
			),
			None => None,
		};

		let trimmed = raw.map(str::trim).unwrap_or_default();
		if trimmed.is_empty() {
			if self.required {
				return Err(FieldError::Required(self.name.clone()));
			}
			return Ok(serde_json::Value::String(String::new()));
		}

		if trimmed.chars().count() > MAX_EMAIL_LENGTH {
			return Err(FieldError::Validation(format!(
				"This field must be at most {} characters long",
				MAX_EMAIL_LENGTH
			)));
		}

		self.validator.validate(trimmed)?;
		Ok(serde_json::Value::String(trimmed.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_email_field_required() {
		// Arrange
		let field = EmailField::new("email".to_string()).required();

		// Act & Assert
		assert!(field.clean(None).is_err());
		assert!(field.clean(Some(&json!(""))).is_err());
		assert!(field.clean(Some(&json!("  "))).is_err());
	}

	#[rstest]
	fn test_email_field_optional_empty_value() {
		// Arrange
		let field = EmailField::new("email".to_string());

		// Act & Assert
		assert_eq!(field.clean(None).unwrap(), json!(""));
	}

	#[rstest]
	#[case("ana@example.com")]
	#[case("first.last@example.co.uk")]
	fn test_email_field_accepts_valid_addresses(#[case] email: &str) {
		// Arrange
		let field = EmailField::new("email".to_string()).required();

		// Act & Assert
		assert_eq!(field.clean(Some(&json!(email))).unwrap(), json!(email));
	}

	#[rstest]
	#[case("plainaddress")]
	#[case("ana@example")]
	#[case("@example.com")]
	fn test_email_field_rejects_invalid_addresses(#[case] email: &str) {
		// Arrange
		let field = EmailField::new("email".to_string()).required();

		// Act & Assert
		assert!(field.clean(Some(&json!(email))).is_err());
	}

	#[rstest]
	fn test_email_field_trims_before_validating() {
		// Arrange
		let field = EmailField::new("email".to_string()).required();

		// Act
		let cleaned = field.clean(Some(&json!("  ana@example.com  "))).unwrap();

		// Assert
		assert_eq!(cleaned, json!("ana@example.com"));
	}

	#[rstest]
	fn test_email_field_enforces_max_length() {
		// Arrange
		let field = EmailField::new("email".to_string()).required();
		let local = "a".repeat(250);
		let long_address = format!("{local}@example.com");

		// Act & Assert
		assert!(field.clean(Some(&json!(long_address))).is_err());
	}
}
