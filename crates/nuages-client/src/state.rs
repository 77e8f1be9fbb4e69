//! Pure submission state machine
//!
//! [`FormState`] owns everything the UI needs to render the form: the raw
//! input, per-field errors, the transient status banner, and the submission
//! phase. All transitions are synchronous and side-effect free, so the
//! machine is testable without a runtime or a rendering environment.
//!
//! States: `Idle -> Submitting -> (Succeeded | Failed) -> Idle`. Only
//! `Submitting` blocks new attempts and field edits; the terminal states
//! return to `Idle` when the banner is cleared.

use crate::contact::ContactInput;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Phase of the submission state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
	#[default]
	Idle,
	Submitting,
	Succeeded,
	Failed,
}

/// Transient banner shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitStatus {
	pub success: bool,
	pub message: String,
}

impl SubmitStatus {
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			success: true,
			message: message.into(),
		}
	}

	pub fn failure(message: impl Into<String>) -> Self {
		Self {
			success: false,
			message: message.into(),
		}
	}
}

/// The component's complete view state.
///
/// # Examples
///
/// ```
/// use nuages_client::{FormState, SubmitState};
///
/// let mut state = FormState::new();
/// state.set_name("Ana Silva");
///
/// assert!(state.begin_attempt());
/// state.enter_submitting();
/// assert_eq!(state.submit_state(), SubmitState::Submitting);
///
/// // A second attempt while one is in flight is refused.
/// assert!(!state.begin_attempt());
///
/// let epoch = state.succeed("Message sent.");
/// assert!(state.status().is_some());
/// assert!(state.clear_status(epoch));
/// assert_eq!(state.submit_state(), SubmitState::Idle);
/// ```
#[derive(Debug, Default)]
pub struct FormState {
	input: ContactInput,
	honeypot: String,
	errors: HashMap<String, Vec<String>>,
	status: Option<SubmitStatus>,
	submit_state: SubmitState,
	status_epoch: u64,
}

impl FormState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn input(&self) -> &ContactInput {
		&self.input
	}

	pub fn honeypot(&self) -> &str {
		&self.honeypot
	}

	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	pub fn status(&self) -> Option<&SubmitStatus> {
		self.status.as_ref()
	}

	pub fn submit_state(&self) -> SubmitState {
		self.submit_state
	}

	pub fn is_submitting(&self) -> bool {
		self.submit_state == SubmitState::Submitting
	}

	/// Update the name field. Ignored while a submission is in flight
	/// (inputs are disabled); otherwise drops the field's stale error.
	pub fn set_name(&mut self, value: impl Into<String>) {
		self.set_field("name", value, |input| &mut input.name);
	}

	/// Update the email field. Same in-flight rules as [`set_name`](Self::set_name).
	pub fn set_email(&mut self, value: impl Into<String>) {
		self.set_field("email", value, |input| &mut input.email);
	}

	/// Update the message field. Same in-flight rules as [`set_name`](Self::set_name).
	pub fn set_message(&mut self, value: impl Into<String>) {
		self.set_field("message", value, |input| &mut input.message);
	}

	/// Update the honeypot value (normally only bots do).
	pub fn set_honeypot(&mut self, value: impl Into<String>) {
		if self.is_submitting() {
			return;
		}
		self.honeypot = value.into();
	}

	fn set_field(
		&mut self,
		field: &str,
		value: impl Into<String>,
		slot: impl FnOnce(&mut ContactInput) -> &mut String,
	) {
		if self.is_submitting() {
			return;
		}
		*slot(&mut self.input) = value.into();
		self.errors.remove(field);
	}

	/// Start a new submit attempt.
	///
	/// Returns `false` while a submission is in flight. Otherwise clears any
	/// prior banner optimistically (bumping the epoch so a pending clear
	/// timer becomes stale) and resets the phase to `Idle`.
	pub fn begin_attempt(&mut self) -> bool {
		if self.is_submitting() {
			return false;
		}
		if self.status.take().is_some() {
			self.status_epoch += 1;
		}
		self.submit_state = SubmitState::Idle;
		true
	}

	/// Record a failed validation pass. The phase stays `Idle`; nothing was
	/// sent.
	pub fn reject(&mut self, errors: HashMap<String, Vec<String>>) {
		self.errors = errors;
		self.submit_state = SubmitState::Idle;
	}

	/// Enter the in-flight phase: errors cleared, inputs disabled.
	pub fn enter_submitting(&mut self) {
		self.errors.clear();
		self.submit_state = SubmitState::Submitting;
	}

	/// Record a successful delivery: fields cleared, success banner shown.
	/// Returns the banner's epoch for the auto-clear timer.
	pub fn succeed(&mut self, message: impl Into<String>) -> u64 {
		self.input = ContactInput::default();
		self.honeypot.clear();
		self.set_status(SubmitStatus::success(message), SubmitState::Succeeded)
	}

	/// Record a failed delivery: fields retained, failure banner shown.
	/// Returns the banner's epoch for the auto-clear timer.
	pub fn fail(&mut self, message: impl Into<String>) -> u64 {
		self.set_status(SubmitStatus::failure(message), SubmitState::Failed)
	}

	fn set_status(&mut self, status: SubmitStatus, phase: SubmitState) -> u64 {
		self.status = Some(status);
		self.submit_state = phase;
		self.status_epoch += 1;
		self.status_epoch
	}

	/// Clear the banner set at `epoch` and return to `Idle`.
	///
	/// A stale epoch (the banner was already replaced or cleared) leaves the
	/// state untouched and returns `false`.
	pub fn clear_status(&mut self, epoch: u64) -> bool {
		if epoch != self.status_epoch || self.status.is_none() {
			return false;
		}
		self.status = None;
		self.submit_state = SubmitState::Idle;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_initial_state_is_idle() {
		let state = FormState::new();

		assert_eq!(state.submit_state(), SubmitState::Idle);
		assert!(state.status().is_none());
		assert!(state.errors().is_empty());
		assert_eq!(state.input(), &ContactInput::default());
	}

	#[test]
	fn test_set_field_updates_input_and_drops_stale_error() {
		let mut state = FormState::new();
		state.reject(HashMap::from([(
			"name".to_string(),
			vec!["This field is required.".to_string()],
		)]));

		state.set_name("Ana Silva");

		assert_eq!(state.input().name, "Ana Silva");
		assert!(!state.errors().contains_key("name"));
	}

	#[test]
	fn test_set_field_ignored_while_submitting() {
		let mut state = FormState::new();
		state.set_name("Ana Silva");
		state.enter_submitting();

		state.set_name("Changed");
		state.set_email("changed@example.com");

		assert_eq!(state.input().name, "Ana Silva");
		assert_eq!(state.input().email, "");
	}

	#[test]
	fn test_begin_attempt_refused_while_submitting() {
		let mut state = FormState::new();
		state.enter_submitting();

		assert!(!state.begin_attempt());
		assert_eq!(state.submit_state(), SubmitState::Submitting);
	}

	#[test]
	fn test_begin_attempt_clears_prior_banner() {
		let mut state = FormState::new();
		let epoch = state.fail("Something went wrong.");

		assert!(state.begin_attempt());
		assert!(state.status().is_none());
		// The old epoch is stale now; a late timer must not clear anything.
		assert!(!state.clear_status(epoch));
	}

	#[test]
	fn test_succeed_clears_input_and_sets_banner() {
		let mut state = FormState::new();
		state.set_name("Ana Silva");
		state.set_email("ana@example.com");
		state.set_message("Olá, gostaria de saber mais.");
		state.enter_submitting();

		state.succeed("Message sent.");

		assert_eq!(state.input(), &ContactInput::default());
		assert_eq!(state.submit_state(), SubmitState::Succeeded);
		let status = state.status().unwrap();
		assert!(status.success);
		assert_eq!(status.message, "Message sent.");
	}

	#[test]
	fn test_fail_retains_input() {
		let mut state = FormState::new();
		state.set_name("Ana Silva");
		state.enter_submitting();

		state.fail("Something went wrong.");

		assert_eq!(state.input().name, "Ana Silva");
		assert_eq!(state.submit_state(), SubmitState::Failed);
		assert!(!state.status().unwrap().success);
	}

	#[test]
	fn test_clear_status_with_current_epoch() {
		let mut state = FormState::new();
		let epoch = state.succeed("Message sent.");

		assert!(state.clear_status(epoch));
		assert!(state.status().is_none());
		assert_eq!(state.submit_state(), SubmitState::Idle);
	}

	#[test]
	fn test_clear_status_with_stale_epoch_is_a_no_op() {
		let mut state = FormState::new();
		let first = state.succeed("Message sent.");
		assert!(state.begin_attempt());
		state.enter_submitting();
		let second = state.fail("Something went wrong.");

		// The first banner's timer fires late: nothing happens.
		assert!(!state.clear_status(first));
		assert!(state.status().is_some());

		// The current banner clears normally.
		assert!(state.clear_status(second));
		assert!(state.status().is_none());
	}

	#[test]
	fn test_reject_records_errors_and_stays_idle() {
		let mut state = FormState::new();

		state.reject(HashMap::from([(
			"email".to_string(),
			vec!["Enter a valid email address".to_string()],
		)]));

		assert_eq!(state.submit_state(), SubmitState::Idle);
		assert!(state.errors().contains_key("email"));
	}

	#[test]
	fn test_enter_submitting_clears_errors() {
		let mut state = FormState::new();
		state.reject(HashMap::from([(
			"name".to_string(),
			vec!["This field is required.".to_string()],
		)]));

		state.enter_submitting();

		assert!(state.errors().is_empty());
		assert!(state.is_submitting());
	}
}
