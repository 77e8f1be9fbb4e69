//! Form binding and validation

use crate::field::{FieldError, FormField};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Field error in {field}: {error}")]
	Field { field: String, error: FieldError },
	#[error("{0}")]
	Validation(String),
}

pub type FormResult<T> = Result<T, FormError>;

type CleanFunction =
	Box<dyn Fn(&HashMap<String, serde_json::Value>) -> FormResult<()> + Send + Sync>;

/// Special key for form-level (non-field-specific) errors.
pub const ALL_FIELDS_KEY: &str = "_all";

/// A declarative form: a list of fields plus, once bound, the submitted data
/// and any validation errors.
///
/// # Examples
///
/// ```
/// use nuages_forms::{CharField, Form};
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let mut form = Form::new();
/// form.add_field(Box::new(CharField::new("name".to_string()).required().with_min_length(3)));
///
/// let mut data = HashMap::new();
/// data.insert("name".to_string(), json!("Ana Silva"));
/// form.bind(data);
///
/// assert!(form.is_valid());
/// assert_eq!(form.cleaned_data().get("name"), Some(&json!("Ana Silva")));
/// ```
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
	is_bound: bool,
	clean_functions: Vec<CleanFunction>,
}

impl Form {
	/// Create a new empty form.
	pub fn new() -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			errors: HashMap::new(),
			is_bound: false,
			clean_functions: vec![],
		}
	}

	/// Add a field to the form.
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Bind submitted data for validation.
	///
	/// Binding replaces any previously bound data; errors from an earlier
	/// validation pass are recomputed on the next `is_valid()` call.
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}

	/// Validate the bound data and return `true` if every field is valid.
	///
	/// Each field's `clean()` runs first; cleaned values replace the raw ones
	/// in the data map. Form-level clean functions run afterwards, with their
	/// failures recorded under [`ALL_FIELDS_KEY`] unless they name a field.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::{CharField, Form};
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("name".to_string()).required().with_min_length(3)));
	///
	/// let mut data = HashMap::new();
	/// data.insert("name".to_string(), json!("An"));
	/// form.bind(data);
	///
	/// assert!(!form.is_valid());
	/// assert!(form.errors().contains_key("name"));
	/// ```
	pub fn is_valid(&mut self) -> bool {
		if !self.is_bound {
			return false;
		}

		self.errors.clear();

		for field in &self.fields {
			let value = self.data.get(field.name());

			match field.clean(value) {
				Ok(cleaned) => {
					self.data.insert(field.name().to_string(), cleaned);
				}
				Err(e) => {
					self.errors
						.entry(field.name().to_string())
						.or_default()
						.push(e.to_string());
				}
			}
		}

		for clean_fn in &self.clean_functions {
			if let Err(e) = clean_fn(&self.data) {
				match e {
					FormError::Field { field, error } => {
						self.errors
							.entry(field)
							.or_default()
							.push(error.to_string());
					}
					FormError::Validation(msg) => {
						self.errors
							.entry(ALL_FIELDS_KEY.to_string())
							.or_default()
							.push(msg);
					}
				}
			}
		}

		self.errors.is_empty()
	}

	/// Cleaned data, valid only after a successful `is_valid()` pass.
	pub fn cleaned_data(&self) -> &HashMap<String, serde_json::Value> {
		&self.data
	}

	/// Validation errors keyed by field name (plus [`ALL_FIELDS_KEY`]).
	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Add a form-level clean function for cross-field validation.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::{Form, FormError};
	///
	/// let mut form = Form::new();
	/// form.add_clean_function(|data| {
	///     if data.get("website").and_then(|v| v.as_str()).is_some_and(|v| !v.is_empty()) {
	///         Err(FormError::Validation("Submission rejected.".to_string()))
	///     } else {
	///         Ok(())
	///     }
	/// });
	/// ```
	pub fn add_clean_function<F>(&mut self, f: F)
	where
		F: Fn(&HashMap<String, serde_json::Value>) -> FormResult<()> + Send + Sync + 'static,
	{
		self.clean_functions.push(Box::new(f));
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fields::{CharField, EmailField};
	use serde_json::json;

	fn contact_fields() -> Form {
		let mut form = Form::new();
		form.add_field(Box::new(
			CharField::new("name".to_string()).required().with_min_length(3),
		));
		form.add_field(Box::new(EmailField::new("email".to_string()).required()));
		form.add_field(Box::new(
			CharField::new("message".to_string())
				.required()
				.with_min_length(10),
		));
		form
	}

	fn bind_values(form: &mut Form, name: &str, email: &str, message: &str) {
		let mut data = HashMap::new();
		data.insert("name".to_string(), json!(name));
		data.insert("email".to_string(), json!(email));
		data.insert("message".to_string(), json!(message));
		form.bind(data);
	}

	#[test]
	fn test_form_valid_input() {
		let mut form = contact_fields();
		bind_values(
			&mut form,
			"Ana Silva",
			"ana@example.com",
			"Olá, gostaria de saber mais.",
		);

		assert!(form.is_valid());
		assert!(form.errors().is_empty());
		assert_eq!(form.cleaned_data().get("name"), Some(&json!("Ana Silva")));
	}

	#[test]
	fn test_form_collects_errors_per_field() {
		let mut form = contact_fields();
		bind_values(&mut form, "An", "not-an-email", "short");

		assert!(!form.is_valid());
		assert!(form.errors().contains_key("name"));
		assert!(form.errors().contains_key("email"));
		assert!(form.errors().contains_key("message"));
	}

	#[test]
	fn test_form_missing_required_fields() {
		let mut form = contact_fields();
		form.bind(HashMap::new());

		assert!(!form.is_valid());
		assert_eq!(
			form.errors().get("email").map(|e| e[0].as_str()),
			Some("This field is required.")
		);
	}

	#[test]
	fn test_form_errors_recomputed_on_each_pass() {
		let mut form = contact_fields();
		bind_values(&mut form, "An", "ana@example.com", "Olá, gostaria de saber mais.");
		assert!(!form.is_valid());
		assert!(form.errors().contains_key("name"));

		bind_values(
			&mut form,
			"Ana Silva",
			"ana@example.com",
			"Olá, gostaria de saber mais.",
		);
		assert!(form.is_valid());
		assert!(form.errors().is_empty());
	}

	#[test]
	fn test_form_unbound_is_not_valid() {
		let mut form = contact_fields();

		assert!(!form.is_bound());
		assert!(!form.is_valid());
	}

	#[test]
	fn test_form_ignores_extra_data() {
		let mut form = contact_fields();
		let mut data = HashMap::new();
		data.insert("name".to_string(), json!("Ana Silva"));
		data.insert("email".to_string(), json!("ana@example.com"));
		data.insert("message".to_string(), json!("Olá, gostaria de saber mais."));
		data.insert("extra".to_string(), json!("ignored"));
		form.bind(data);

		assert!(form.is_valid());
	}

	#[test]
	fn test_form_clean_function_reports_under_all_fields_key() {
		let mut form = contact_fields();
		form.add_clean_function(|data| {
			let name = data.get("name").and_then(|v| v.as_str()).unwrap_or("");
			let message = data.get("message").and_then(|v| v.as_str()).unwrap_or("");
			if message.contains(name) {
				Ok(())
			} else {
				Err(FormError::Validation(
					"Message must mention the sender".to_string(),
				))
			}
		});
		bind_values(&mut form, "Ana", "ana@example.com", "No mention of the sender here.");

		assert!(!form.is_valid());
		assert!(form.errors().contains_key(ALL_FIELDS_KEY));
	}

	#[test]
	fn test_form_get_field() {
		let form = contact_fields();

		assert!(form.get_field("email").is_some());
		assert!(form.get_field("missing").is_none());
		assert_eq!(form.field_count(), 3);
	}
}
