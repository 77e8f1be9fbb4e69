//! Serializable form metadata for rendering layers
//!
//! A [`Form`] holds trait objects and closures, so it cannot cross a
//! serialization boundary. Rendering layers instead consume a plain-data
//! [`FormMetadata`] snapshot.

use crate::field::Widget;
use crate::form::{ALL_FIELDS_KEY, Form};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable snapshot of a form: its fields, bound state, and errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormMetadata {
	/// Field metadata list
	pub fields: Vec<FieldMetadata>,

	/// Whether the form has been bound with data
	pub is_bound: bool,

	/// Validation errors (field name -> error messages)
	pub errors: HashMap<String, Vec<String>>,

	/// Form-level errors that don't belong to a specific field
	#[serde(default)]
	pub non_field_errors: Vec<String>,
}

/// Serializable snapshot of a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMetadata {
	/// Field name
	pub name: String,

	/// Human-readable label (optional)
	pub label: Option<String>,

	/// Whether the field is required
	pub required: bool,

	/// Help text (optional)
	pub help_text: Option<String>,

	/// Widget type for rendering
	pub widget: Widget,

	/// Initial value (optional)
	pub initial: Option<serde_json::Value>,
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Extension trait adding metadata extraction to [`Form`].
///
/// ```mermaid
/// flowchart LR
///     subgraph Component["Component"]
///         Form["Form<br/>(traits, closures)"]
///     end
///
///     subgraph Rendering["Rendering layer"]
///         FormMetadata["FormMetadata<br/>(plain data, serializable)"]
///     end
///
///     Form -->|"to_metadata()"| FormMetadata
/// ```
pub trait FormExt {
	/// Extract a serializable snapshot of the form.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_forms::{CharField, Form, FormExt, FormMetadata};
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("email".to_string())));
	///
	/// let metadata: FormMetadata = form.to_metadata();
	/// assert_eq!(metadata.fields.len(), 1);
	/// assert_eq!(metadata.fields[0].name, "email");
	/// ```
	fn to_metadata(&self) -> FormMetadata;
}

impl FormExt for Form {
	fn to_metadata(&self) -> FormMetadata {
		let fields = self
			.fields()
			.iter()
			.map(|field| FieldMetadata {
				name: field.name().to_string(),
				label: field.label().map(|s| s.to_string()),
				required: field.required(),
				help_text: field.help_text().map(|s| s.to_string()),
				widget: field.widget().clone(),
				initial: field.initial().cloned(),
			})
			.collect();

		FormMetadata {
			fields,
			is_bound: self.is_bound(),
			errors: self.errors().clone(),
			non_field_errors: self
				.errors()
				.get(ALL_FIELDS_KEY)
				.cloned()
				.unwrap_or_default(),
		}
	}
}
