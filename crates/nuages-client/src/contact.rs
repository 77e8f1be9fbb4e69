//! Contact form schema and payload

use crate::{ContactError, ContactResult};
use nuages_forms::{
	ALL_FIELDS_KEY, CharField, EmailField, Form, FormError, FormExt, FormMetadata, HoneypotField,
	Widget,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw values as typed by the user, one per visible field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
	pub name: String,
	pub email: String,
	pub message: String,
}

/// The validated payload sent to the backend endpoint.
///
/// Serializes to exactly the three-key JSON object the endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub message: String,
}

impl ContactMessage {
	/// Build a message from a form's cleaned data.
	///
	/// Fails with [`ContactError::MissingField`] if a key is absent, which
	/// can only happen when the data did not come from a successful
	/// validation pass.
	pub fn from_cleaned(data: &HashMap<String, serde_json::Value>) -> ContactResult<Self> {
		let get = |key: &str| -> ContactResult<String> {
			data.get(key)
				.and_then(|v| v.as_str())
				.map(|s| s.to_string())
				.ok_or_else(|| ContactError::MissingField(key.to_string()))
		};

		Ok(Self {
			name: get("name")?,
			email: get("email")?,
			message: get("message")?,
		})
	}
}

/// The declarative contact form schema.
///
/// Three fields with the component's validation rules:
/// - `name`: required, 3 to 100 characters
/// - `email`: required, must look like an email address
/// - `message`: required, 10 to 2000 characters, rendered as a text area
///
/// An optional honeypot field can be added for bot filtering; a filled
/// honeypot fails validation at form level without naming the trap.
///
/// # Examples
///
/// ```
/// use nuages_client::{ContactForm, ContactInput};
///
/// let mut form = ContactForm::new();
/// let input = ContactInput {
///     name: "Ana Silva".to_string(),
///     email: "ana@example.com".to_string(),
///     message: "Olá, gostaria de saber mais.".to_string(),
/// };
///
/// let message = form.validate(&input, "").expect("valid input");
/// assert_eq!(message.email, "ana@example.com");
/// ```
pub struct ContactForm {
	form: Form,
	honeypot: Option<String>,
}

impl ContactForm {
	pub fn new() -> Self {
		let mut form = Form::new();
		form.add_field(Box::new(
			CharField::new("name".to_string())
				.required()
				.with_min_length(3)
				.with_max_length(100)
				.with_label("Name"),
		));
		form.add_field(Box::new(
			EmailField::new("email".to_string())
				.required()
				.with_label("Email"),
		));
		form.add_field(Box::new(
			CharField::new("message".to_string())
				.required()
				.with_min_length(10)
				.with_max_length(2000)
				.with_widget(Widget::TextArea)
				.with_label("Message"),
		));
		Self {
			form,
			honeypot: None,
		}
	}

	/// Add a honeypot field under the given name.
	///
	/// The error message deliberately does not reveal which field tripped.
	pub fn with_honeypot(mut self, field: impl Into<String>) -> Self {
		let field = field.into();
		let trap = HoneypotField::new(field.clone());
		self.form.add_clean_function(move |data| {
			let value = data.get(trap.name()).and_then(|v| v.as_str());
			trap.validate(value)
				.map_err(|_| FormError::Validation("Submission rejected.".to_string()))
		});
		self.honeypot = Some(field);
		self
	}

	/// Name of the honeypot field, if one was configured.
	pub fn honeypot_field(&self) -> Option<&str> {
		self.honeypot.as_deref()
	}

	/// Validate raw input, returning the wire payload or per-field errors.
	pub fn validate(
		&mut self,
		input: &ContactInput,
		honeypot: &str,
	) -> Result<ContactMessage, HashMap<String, Vec<String>>> {
		let mut data = HashMap::new();
		data.insert("name".to_string(), serde_json::json!(input.name));
		data.insert("email".to_string(), serde_json::json!(input.email));
		data.insert("message".to_string(), serde_json::json!(input.message));
		if let Some(field) = &self.honeypot {
			data.insert(field.clone(), serde_json::json!(honeypot));
		}

		self.form.bind(data);
		if self.form.is_valid() {
			ContactMessage::from_cleaned(self.form.cleaned_data()).map_err(|e| {
				HashMap::from([(ALL_FIELDS_KEY.to_string(), vec![e.to_string()])])
			})
		} else {
			Err(self.form.errors().clone())
		}
	}

	/// Serializable snapshot for rendering layers.
	pub fn to_metadata(&self) -> FormMetadata {
		self.form.to_metadata()
	}
}

impl Default for ContactForm {
	fn default() -> Self {
		Self::new()
	}
}
