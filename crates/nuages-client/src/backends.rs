//! Delivery backends
//!
//! A backend receives the validated [`ContactMessage`] and moves it toward
//! the outside world. Production uses [`HttpBackend`]; [`ConsoleBackend`]
//! and [`MemoryBackend`] exist for development and tests.

use crate::contact::ContactMessage;
use crate::settings::ContactSettings;
use crate::{ContactError, ContactResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// A destination for validated contact messages.
#[async_trait]
pub trait DeliveryBackend: Send + Sync {
	/// Deliver one message. Implementations make at most one attempt;
	/// retrying is the caller's decision.
	async fn deliver(&self, message: &ContactMessage) -> ContactResult<()>;
}

/// Posts the message as JSON to a configured endpoint.
///
/// Any 2xx response counts as delivered. Other statuses map to
/// [`ContactError::Http`]; transport failures to [`ContactError::Network`].
pub struct HttpBackend {
	client: reqwest::Client,
	endpoint: String,
}

impl HttpBackend {
	/// Create a backend posting to `endpoint` with default client settings.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint: endpoint.into(),
		}
	}

	/// Create a backend from settings, honoring the configured timeout.
	pub fn from_settings(settings: &ContactSettings) -> ContactResult<Self> {
		let mut builder = reqwest::Client::builder();
		if let Some(secs) = settings.timeout {
			builder = builder.timeout(Duration::from_secs(secs));
		}
		let client = builder.build()?;
		Ok(Self {
			client,
			endpoint: settings.endpoint.clone(),
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl DeliveryBackend for HttpBackend {
	async fn deliver(&self, message: &ContactMessage) -> ContactResult<()> {
		let response = self
			.client
			.post(&self.endpoint)
			.json(message)
			.send()
			.await?;

		let status = response.status();
		if status.is_success() {
			tracing::debug!(endpoint = %self.endpoint, "contact message delivered");
			Ok(())
		} else {
			Err(ContactError::Http(status.as_u16()))
		}
	}
}

/// Logs the message instead of sending it. Development backend.
#[derive(Debug, Default)]
pub struct ConsoleBackend;

#[async_trait]
impl DeliveryBackend for ConsoleBackend {
	async fn deliver(&self, message: &ContactMessage) -> ContactResult<()> {
		tracing::info!(
			name = %message.name,
			email = %message.email,
			body = %message.message,
			"contact message (console backend)"
		);
		Ok(())
	}
}

/// Records messages in memory. Test backend.
///
/// # Examples
///
/// ```
/// # #[tokio::main]
/// # async fn main() {
/// use nuages_client::{ContactMessage, DeliveryBackend, MemoryBackend};
///
/// let backend = MemoryBackend::default();
/// let message = ContactMessage {
///     name: "Ana Silva".to_string(),
///     email: "ana@example.com".to_string(),
///     message: "Olá, gostaria de saber mais.".to_string(),
/// };
///
/// backend.deliver(&message).await.unwrap();
/// assert_eq!(backend.messages(), vec![message]);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
	messages: Mutex<Vec<ContactMessage>>,
}

impl MemoryBackend {
	/// Messages delivered so far, in order.
	pub fn messages(&self) -> Vec<ContactMessage> {
		self.messages.lock().clone()
	}

	/// Drop all recorded messages.
	pub fn clear(&self) {
		self.messages.lock().clear();
	}
}

#[async_trait]
impl DeliveryBackend for MemoryBackend {
	async fn deliver(&self, message: &ContactMessage) -> ContactResult<()> {
		self.messages.lock().push(message.clone());
		Ok(())
	}
}

/// Build the backend named in the settings.
pub fn backend_from_settings(
	settings: &ContactSettings,
) -> ContactResult<Arc<dyn DeliveryBackend>> {
	match settings.backend.as_str() {
		"http" => Ok(Arc::new(HttpBackend::from_settings(settings)?)),
		"console" => Ok(Arc::new(ConsoleBackend)),
		"memory" => Ok(Arc::new(MemoryBackend::default())),
		other => Err(ContactError::UnknownBackend(other.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_message() -> ContactMessage {
		ContactMessage {
			name: "Ana Silva".to_string(),
			email: "ana@example.com".to_string(),
			message: "Olá, gostaria de saber mais.".to_string(),
		}
	}

	#[tokio::test]
	async fn test_memory_backend_records_messages_in_order() {
		let backend = MemoryBackend::default();

		backend.deliver(&sample_message()).await.unwrap();
		let second = ContactMessage {
			name: "Bruno Costa".to_string(),
			..sample_message()
		};
		backend.deliver(&second).await.unwrap();

		let messages = backend.messages();
		assert_eq!(messages.len(), 2);
		assert_eq!(messages[0].name, "Ana Silva");
		assert_eq!(messages[1].name, "Bruno Costa");
	}

	#[tokio::test]
	async fn test_console_backend_always_succeeds() {
		let backend = ConsoleBackend;

		assert!(backend.deliver(&sample_message()).await.is_ok());
	}

	#[test]
	fn test_backend_from_settings_selects_by_name() {
		let mut settings = ContactSettings::default();

		settings.backend = "console".to_string();
		assert!(backend_from_settings(&settings).is_ok());

		settings.backend = "memory".to_string();
		assert!(backend_from_settings(&settings).is_ok());

		settings.backend = "http".to_string();
		assert!(backend_from_settings(&settings).is_ok());
	}

	#[test]
	fn test_backend_from_settings_rejects_unknown_name() {
		let settings = ContactSettings {
			backend: "carrier-pigeon".to_string(),
			..ContactSettings::default()
		};

		let result = backend_from_settings(&settings);
		assert!(matches!(result, Err(ContactError::UnknownBackend(name)) if name == "carrier-pigeon"));
	}
}
