//! The contact form component
//!
//! [`ContactComponent`] ties the pieces together: field setters feed the
//! state machine, `submit()` validates and makes exactly one delivery call,
//! and the status banner clears itself after a configurable delay through a
//! cancellable timer task.

use crate::backends::{DeliveryBackend, backend_from_settings};
use crate::contact::{ContactForm, ContactInput};
use crate::settings::ContactSettings;
use crate::state::{FormState, SubmitState, SubmitStatus};
use crate::ContactResult;
use nuages_forms::FormMetadata;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Banner text shown after a successful delivery.
pub const SUCCESS_MESSAGE: &str = "Message sent. Thank you for getting in touch!";

/// Banner text shown after a failed delivery.
pub const FAILURE_MESSAGE: &str = "Your message could not be sent. Please try again.";

/// Headless contact form: validation, one-shot async submission, and a
/// self-clearing status banner.
///
/// The component is driven through `&self`, so it can be shared (for
/// example behind an `Arc`) between an event handler and a render loop.
/// Re-entrancy is handled by the state machine: while a submission is in
/// flight, further `submit()` calls and field edits are ignored.
pub struct ContactComponent {
	form: Mutex<ContactForm>,
	state: Arc<Mutex<FormState>>,
	backend: Arc<dyn DeliveryBackend>,
	clear_after: Duration,
	timer: Mutex<Option<JoinHandle<()>>>,
}

impl ContactComponent {
	/// Create a component with an explicit backend.
	pub fn new(backend: Arc<dyn DeliveryBackend>, settings: &ContactSettings) -> Self {
		let mut form = ContactForm::new();
		if let Some(field) = &settings.honeypot_field {
			form = form.with_honeypot(field.clone());
		}
		Self {
			form: Mutex::new(form),
			state: Arc::new(Mutex::new(FormState::new())),
			backend,
			clear_after: Duration::from_secs(settings.status_clear_seconds),
			timer: Mutex::new(None),
		}
	}

	/// Create a component with the backend named in the settings.
	pub fn from_settings(settings: &ContactSettings) -> ContactResult<Self> {
		let backend = backend_from_settings(settings)?;
		Ok(Self::new(backend, settings))
	}

	pub fn set_name(&self, value: impl Into<String>) {
		self.state.lock().set_name(value);
	}

	pub fn set_email(&self, value: impl Into<String>) {
		self.state.lock().set_email(value);
	}

	pub fn set_message(&self, value: impl Into<String>) {
		self.state.lock().set_message(value);
	}

	pub fn set_honeypot(&self, value: impl Into<String>) {
		self.state.lock().set_honeypot(value);
	}

	/// Snapshot of the current input values.
	pub fn input(&self) -> ContactInput {
		self.state.lock().input().clone()
	}

	/// Snapshot of the current per-field errors.
	pub fn errors(&self) -> HashMap<String, Vec<String>> {
		self.state.lock().errors().clone()
	}

	/// The current status banner, if one is showing.
	pub fn status(&self) -> Option<SubmitStatus> {
		self.state.lock().status().cloned()
	}

	pub fn submit_state(&self) -> SubmitState {
		self.state.lock().submit_state()
	}

	pub fn is_submitting(&self) -> bool {
		self.state.lock().is_submitting()
	}

	/// Serializable form snapshot for rendering layers.
	pub fn metadata(&self) -> FormMetadata {
		self.form.lock().to_metadata()
	}

	/// Run one submit attempt.
	///
	/// Validates the current input and, when valid, makes exactly one
	/// delivery call. Success clears the fields; failure keeps them. Either
	/// way a status banner is shown and scheduled to clear after the
	/// configured delay. A call while a submission is already in flight
	/// does nothing.
	pub async fn submit(&self) {
		// Guard, validation, and the transition into Submitting happen under
		// one lock so two racing submit calls cannot both pass the guard.
		let message = {
			let mut state = self.state.lock();
			if !state.begin_attempt() {
				tracing::debug!("submission already in flight, ignoring");
				return;
			}
			let input = state.input().clone();
			let honeypot = state.honeypot().to_string();
			let mut form = self.form.lock();
			match form.validate(&input, &honeypot) {
				Ok(message) => {
					state.enter_submitting();
					message
				}
				Err(errors) => {
					state.reject(errors);
					return;
				}
			}
		};

		let epoch = match self.backend.deliver(&message).await {
			Ok(()) => self.state.lock().succeed(SUCCESS_MESSAGE),
			Err(e) => {
				tracing::warn!(error = %e, "contact delivery failed");
				self.state.lock().fail(FAILURE_MESSAGE)
			}
		};

		self.arm_clear_timer(epoch);
	}

	// One timer is live at a time: arming a new one aborts the previous
	// task, and the epoch makes an already-fired stale timer a no-op.
	fn arm_clear_timer(&self, epoch: u64) {
		let state = Arc::clone(&self.state);
		let delay = self.clear_after;
		let handle = tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			state.lock().clear_status(epoch);
		});
		if let Some(previous) = self.timer.lock().replace(handle) {
			previous.abort();
		}
	}
}

impl Drop for ContactComponent {
	fn drop(&mut self) {
		// Teardown must not leave a timer firing into freed state.
		if let Some(timer) = self.timer.lock().take() {
			timer.abort();
		}
	}
}
