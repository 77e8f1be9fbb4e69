//! # Nuages
//!
//! A headless contact form component for Rust, split into a validation
//! crate and a submission crate behind one facade.
//!
//! Nuages models the familiar three-field contact form (name, email,
//! message) as data and transitions instead of markup: declarative field
//! constraints produce per-field error messages, a four-state machine
//! drives one asynchronous POST per submit attempt, and the transient
//! status banner clears itself through a cancellable timer.
//!
//! ## Feature Flags
//!
//! - `forms` - declarative fields, validators, form binding, metadata
//! - `client` - state machine, delivery backends, settings, the component
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), nuages::client::ContactError> {
//! use nuages::prelude::*;
//!
//! let settings = ContactSettings::default();
//! let contact = ContactComponent::from_settings(&settings)?;
//!
//! contact.set_name("Ana Silva");
//! contact.set_email("ana@example.com");
//! contact.set_message("Olá, gostaria de saber mais.");
//! contact.submit().await;
//!
//! match contact.status() {
//!     Some(status) if status.success => println!("{}", status.message),
//!     Some(status) => eprintln!("{}", status.message),
//!     None => {}
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "forms")]
pub use nuages_forms as forms;

#[cfg(feature = "client")]
pub use nuages_client as client;

/// Commonly used types, re-exported for convenience.
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use nuages_forms::{
		CharField, EmailField, FieldError, Form, FormExt, FormField, FormMetadata, Widget,
	};

	#[cfg(feature = "client")]
	pub use nuages_client::{
		ContactComponent, ContactForm, ContactInput, ContactMessage, ContactSettings, SubmitState,
		SubmitStatus,
	};
}
