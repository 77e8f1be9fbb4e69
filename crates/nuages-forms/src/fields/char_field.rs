//! Character field for text input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Text field with character-count length validation.
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub max_length: Option<usize>,
	pub min_length: Option<usize>,
	pub strip: bool,
}

impl CharField {
	/// Create a new `CharField` with the given name.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::CharField;
	///
	/// let field = CharField::new("message".to_string());
	/// assert_eq!(field.name, "message");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::TextInput,
			initial: None,
			max_length: None,
			min_length: None,
			strip: true,
		}
	}

	/// Mark the field as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the minimum length in characters.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::{CharField, FormField};
	/// use serde_json::json;
	///
	/// let field = CharField::new("message".to_string()).with_min_length(10);
	/// assert!(field.clean(Some(&json!("long enough text"))).is_ok());
	/// assert!(field.clean(Some(&json!("too short"))).is_err());
	/// ```
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Set the maximum length in characters.
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
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

	/// Set the widget used to render the field.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::{CharField, Widget};
	///
	/// let field = CharField::new("message".to_string()).with_widget(Widget::TextArea);
	/// assert_eq!(field.widget, Widget::TextArea);
	/// ```
	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}

	/// Disable whitespace stripping for the field.
	pub fn no_strip(mut self) -> Self {
		self.strip = false;
		self
	}
}

impl FormField for CharField {
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

		let cleaned = match raw {
			Some(v) => {
				let v = if self.strip { v.trim() } else { v };
				if v.is_empty() {
					if self.required {
						return Err(FieldError::Required(self.name.clone()));
					}
					return Ok(serde_json::Value::String(String::new()));
				}
				v.to_string()
			}
			None => {
				if self.required {
					return Err(FieldError::Required(self.name.clone()));
				}
				return Ok(serde_json::Value::String(String::new()));
			}
		};

		// Length limits count characters, not bytes, so multi-byte input
		// (CJK, emoji, accented characters) is measured as the user sees it.
		let char_count = cleaned.chars().count();
		if let Some(min_length) = self.min_length
			&& char_count < min_length
		{
			return Err(FieldError::Validation(format!(
				"This field must be at least {} characters long",
				min_length
			)));
		}
		if let Some(max_length) = self.max_length
			&& char_count > max_length
		{
			return Err(FieldError::Validation(format!(
				"This field must be at most {} characters long",
				max_length
			)));
		}

		Ok(serde_json::Value::String(cleaned))
	}
}
