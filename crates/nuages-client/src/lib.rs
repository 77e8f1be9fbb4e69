//! # Nuages Client
//!
//! The submission half of the contact form component: a pure state machine
//! driving validation and feedback, pluggable delivery backends, and the
//! orchestrating [`ContactComponent`].
//!
//! ## Architecture
//!
//! ```mermaid
//! flowchart LR
//!     Input["ContactInput<br/>(keystrokes)"] --> Component["ContactComponent"]
//!     Component -->|validate| Form["ContactForm<br/>(nuages-forms)"]
//!     Component -->|deliver| Backend["DeliveryBackend<br/>(http / console / memory)"]
//!     Component -->|banner + timer| State["FormState"]
//! ```
//!
//! ## Example
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), nuages_client::ContactError> {
//! use nuages_client::{ContactComponent, ContactSettings};
//!
//! let settings = ContactSettings::default();
//! let component = ContactComponent::from_settings(&settings)?;
//!
//! component.set_name("Ana Silva");
//! component.set_email("ana@example.com");
//! component.set_message("Olá, gostaria de saber mais.");
//!
//! component.submit().await;
//! if let Some(status) = component.status() {
//!     println!("{}", status.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod component;
pub mod contact;
pub mod settings;
pub mod state;

use thiserror::Error;

pub use backends::{
	ConsoleBackend, DeliveryBackend, HttpBackend, MemoryBackend, backend_from_settings,
};
pub use component::{ContactComponent, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use contact::{ContactForm, ContactInput, ContactMessage};
pub use settings::ContactSettings;
pub use state::{FormState, SubmitState, SubmitStatus};

#[derive(Debug, Error)]
pub enum ContactError {
	#[error("Missing field: {0}")]
	MissingField(String),

	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("Server responded with status {0}")]
	Http(u16),

	#[error("Unknown delivery backend: {0}")]
	UnknownBackend(String),
}

pub type ContactResult<T> = std::result::Result<T, ContactError>;
