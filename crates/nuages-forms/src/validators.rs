//! Reusable value validators for form fields
//!
//! Validators check a single string slice and report a [`FieldError`] with a
//! human-readable message on failure. Fields compose them inside `clean()`.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Email shape: one `@`, no whitespace, and a dot somewhere in the domain.
// Deliberately permissive; the receiving endpoint owns the final say.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string value looks like an email address.
///
/// # Examples
///
/// ```
/// use nuages_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("ana@example.com").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// assert!(validator.validate("a b@example.com").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	/// Creates a new `EmailValidator` with the default error message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::validators::EmailValidator;
	///
	/// let validator = EmailValidator::new().with_message("Please check the email address");
	/// assert!(validator.validate("nope").is_err());
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice as an email address.
	///
	/// Returns `Ok(())` when the address matches the email grammar, or a
	/// [`FieldError::Validation`] containing an error message when it does not.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a string value has a minimum number of characters.
///
/// Length is counted in characters, not bytes, so multi-byte input (CJK,
/// emoji, accented characters) is measured the way a user would expect.
///
/// # Examples
///
/// ```
/// use nuages_forms::validators::MinLengthValidator;
///
/// let validator = MinLengthValidator::new(10);
/// assert!(validator.validate("Olá, gostaria de saber mais.").is_ok());
/// assert!(validator.validate("too short").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl MinLengthValidator {
	/// Creates a new `MinLengthValidator` requiring at least `min` characters.
	pub fn new(min: usize) -> Self {
		Self { min, message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice against the minimum length.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.chars().count() >= self.min {
			Ok(())
		} else {
			let msg = match &self.message {
				Some(m) => m.clone(),
				None => format!(
					"This field must be at least {} characters long",
					self.min
				),
			};
			Err(FieldError::Validation(msg))
		}
	}
}
