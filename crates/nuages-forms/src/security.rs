//! Form security helpers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecurityError {
	#[error("Honeypot field '{0}' was filled")]
	HoneypotTriggered(String),
}

/// HoneypotField is a hidden field used to detect bots.
///
/// Legitimate users won't see or fill this field, but bots often
/// auto-fill all form fields.
pub struct HoneypotField {
	name: String,
	label: Option<String>,
}

impl HoneypotField {
	/// Create a new honeypot field.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::HoneypotField;
	///
	/// let honeypot = HoneypotField::new("website".to_string());
	/// assert_eq!(honeypot.name(), "website");
	/// ```
	pub fn new(name: String) -> Self {
		Self { name, label: None }
	}

	/// Set the field label.
	pub fn with_label(mut self, label: String) -> Self {
		self.label = Some(label);
		self
	}

	/// Get the field name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Get the field label.
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Render the honeypot field as HTML.
	///
	/// The field is hidden with CSS to prevent legitimate users from seeing it.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::HoneypotField;
	///
	/// let honeypot = HoneypotField::new("website".to_string());
	/// assert!(honeypot.render().contains("style=\"display:none\""));
	/// ```
	pub fn render(&self) -> String {
		format!(
			r#"<div style="display:none"><label for="{}">{}</label><input type="text" name="{}" id="{}" tabindex="-1" autocomplete="off" /></div>"#,
			self.name,
			self.label.as_deref().unwrap_or(""),
			self.name,
			self.name
		)
	}

	/// Validate the honeypot field.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::HoneypotField;
	///
	/// let honeypot = HoneypotField::new("website".to_string());
	///
	/// // Empty value is valid (not a bot)
	/// assert!(honeypot.validate(None).is_ok());
	/// assert!(honeypot.validate(Some("")).is_ok());
	///
	/// // Non-empty value indicates a bot
	/// assert!(honeypot.validate(Some("bot-filled-this")).is_err());
	/// ```
	pub fn validate(&self, value: Option<&str>) -> Result<(), SecurityError> {
		match value {
			None => Ok(()),
			Some(v) if v.trim().is_empty() => Ok(()),
			Some(_) => Err(SecurityError::HoneypotTriggered(self.name.clone())),
		}
	}
}
