//! Component configuration

use serde::{Deserialize, Serialize};

fn default_backend() -> String {
	"http".to_string()
}

fn default_endpoint() -> String {
	"http://127.0.0.1:8000/api/send-email".to_string()
}

fn default_status_clear_seconds() -> u64 {
	5
}

/// Settings for the contact component.
///
/// Deserializable from any serde source; every field has a default so a
/// partial configuration works.
///
/// # Examples
///
/// ```
/// use nuages_client::ContactSettings;
///
/// let settings: ContactSettings = serde_json::from_str(
///     r#"{ "backend": "console", "status_clear_seconds": 3 }"#,
/// ).unwrap();
/// assert_eq!(settings.backend, "console");
/// assert_eq!(settings.status_clear_seconds, 3);
/// assert!(settings.honeypot_field.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSettings {
	/// Delivery backend: "http", "console", or "memory"
	#[serde(default = "default_backend")]
	pub backend: String,

	/// Submission endpoint for the HTTP backend
	#[serde(default = "default_endpoint")]
	pub endpoint: String,

	/// Request timeout in seconds (no timeout when unset)
	#[serde(default)]
	pub timeout: Option<u64>,

	/// How long the status banner stays up before auto-clearing
	#[serde(default = "default_status_clear_seconds")]
	pub status_clear_seconds: u64,

	/// Name of the hidden honeypot field, if bot filtering is wanted
	#[serde(default)]
	pub honeypot_field: Option<String>,
}

impl Default for ContactSettings {
	fn default() -> Self {
		Self {
			backend: default_backend(),
			endpoint: default_endpoint(),
			timeout: None,
			status_clear_seconds: default_status_clear_seconds(),
			honeypot_field: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_settings() {
		let settings = ContactSettings::default();

		assert_eq!(settings.backend, "http");
		assert_eq!(settings.endpoint, "http://127.0.0.1:8000/api/send-email");
		assert_eq!(settings.timeout, None);
		assert_eq!(settings.status_clear_seconds, 5);
		assert!(settings.honeypot_field.is_none());
	}

	#[test]
	fn test_empty_json_uses_defaults() {
		let settings: ContactSettings = serde_json::from_str("{}").unwrap();

		assert_eq!(settings.backend, "http");
		assert_eq!(settings.status_clear_seconds, 5);
	}

	#[test]
	fn test_partial_json_overrides() {
		let settings: ContactSettings = serde_json::from_str(
			r#"{ "endpoint": "https://api.example.com/send-email", "timeout": 30 }"#,
		)
		.unwrap();

		assert_eq!(settings.endpoint, "https://api.example.com/send-email");
		assert_eq!(settings.timeout, Some(30));
		assert_eq!(settings.backend, "http");
	}
}
