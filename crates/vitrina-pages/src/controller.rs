//! Contact form controller
//!
//! [`FormController`] connects the validity aggregator from `vitrina-forms`
//! to a set of views and runs the submission lifecycle:
//!
//! ```text
//!         submit()            Ok              after submitted_display
//!  Idle ───────────▶ Submitting ─────▶ Submitted ───────────────────▶ Idle
//!   ▲                     │
//!   │ next input          │ Err
//!   └───────────────── Failed ◀─┘   (submit() is accepted again)
//! ```
//!
//! The control is enabled exactly when the form is valid and the state
//! accepts a submission. While a submission is in flight the control stays
//! disabled no matter what the user types.
//!
//! State lives behind a mutex that is never held across an `.await`; the
//! controller is a cheap clonable handle, so DOM listeners can each own one.

use crate::submit::{SubmitError, Submitter};
use crate::timer::Timer;
use crate::view::{
	FeedbackTone, FeedbackView, FieldView, LOADING_CLASS, SubmitControl, present_result,
	reset_presentation,
};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use vitrina_conf::{FeedbackMessages, FormSettings, SubmitLabels};
use vitrina_forms::{ContactForm, ContactSubmission, FieldKind, FieldRules, FormSnapshot};

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
	#[default]
	Idle,
	Submitting,
	Submitted,
	/// The last submission failed; a new one may be started
	Failed,
}

impl SubmissionState {
	/// Whether `submit()` may start a new submission from this state
	pub fn accepts_submission(self) -> bool {
		matches!(self, SubmissionState::Idle | SubmissionState::Failed)
	}
}

impl fmt::Display for SubmissionState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			SubmissionState::Idle => "idle",
			SubmissionState::Submitting => "submitting",
			SubmissionState::Submitted => "submitted",
			SubmissionState::Failed => "failed",
		};
		f.write_str(name)
	}
}

/// Errors returned by [`FormController::submit`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
	/// A submission is already in flight or its confirmation is still showing
	#[error("Submission rejected: form is {0}")]
	SubmissionPending(SubmissionState),

	/// The form did not pass validation
	#[error("Submission rejected: form is invalid (missing: {missing:?})")]
	InvalidForm { missing: Vec<FieldKind> },

	/// The submitter reported a failure
	#[error(transparent)]
	Submission(#[from] SubmitError),
}

/// The views a controller drives
pub struct FormElements {
	pub name: Box<dyn FieldView>,
	pub email: Box<dyn FieldView>,
	pub message: Box<dyn FieldView>,
	pub submit: Box<dyn SubmitControl>,
	pub feedback: Option<Box<dyn FeedbackView>>,
}

impl FormElements {
	pub fn new(
		name: Box<dyn FieldView>,
		email: Box<dyn FieldView>,
		message: Box<dyn FieldView>,
		submit: Box<dyn SubmitControl>,
	) -> Self {
		Self {
			name,
			email,
			message,
			submit,
			feedback: None,
		}
	}

	pub fn with_feedback(mut self, feedback: Box<dyn FeedbackView>) -> Self {
		self.feedback = Some(feedback);
		self
	}

	pub fn field(&self, kind: FieldKind) -> &dyn FieldView {
		match kind {
			FieldKind::Name => self.name.as_ref(),
			FieldKind::Email => self.email.as_ref(),
			FieldKind::Message => self.message.as_ref(),
		}
	}

	fn feedback(&self, text: &str, tone: Option<FeedbackTone>) {
		if let Some(feedback) = &self.feedback {
			feedback.set_text(text);
			feedback.set_tone(tone);
		}
	}
}

/// Controller configuration
#[derive(Debug, Clone)]
pub struct ControllerConfig {
	pub rules: FieldRules,
	pub labels: SubmitLabels,
	pub feedback: FeedbackMessages,
	/// How long the submitted label stays before returning to idle
	pub submitted_display: Duration,
}

impl ControllerConfig {
	pub fn from_settings(settings: &FormSettings) -> Self {
		Self {
			rules: FieldRules::from_settings(settings),
			labels: settings.labels.clone(),
			feedback: settings.feedback.clone(),
			submitted_display: Duration::from_millis(settings.submitted_display_ms),
		}
	}
}

impl Default for ControllerConfig {
	fn default() -> Self {
		Self::from_settings(&FormSettings::default())
	}
}

struct Inner {
	form: ContactForm,
	elements: FormElements,
	state: SubmissionState,
	labels: SubmitLabels,
	feedback: FeedbackMessages,
	submit_enabled: bool,
}

impl Inner {
	/// Pull every view's value into the form and render the results
	fn sync_from_views(&mut self) -> FormSnapshot {
		let name = self.elements.name.value();
		let email = self.elements.email.value();
		let message = self.elements.message.value();
		let snapshot = self.form.set_values(&name, &email, &message);

		for (kind, result) in &snapshot.results {
			present_result(self.elements.field(*kind), result);
		}
		snapshot
	}

	fn refresh_submit_control(&mut self) {
		let enabled = self.form.is_valid() && self.state.accepts_submission();
		self.elements.submit.set_disabled(!enabled);
		self.submit_enabled = enabled;
	}

	fn transition(&mut self, next: SubmissionState) {
		tracing::info!(from = %self.state, to = %next, "contact form state changed");
		self.state = next;
	}

	fn handle_input(&mut self, kind: FieldKind) -> FormSnapshot {
		let snapshot = self.sync_from_views();
		tracing::debug!(field = %kind, valid = snapshot.valid, "contact form input");

		if self.state == SubmissionState::Failed {
			self.transition(SubmissionState::Idle);
			self.elements.submit.set_label(&self.labels.idle);
			self.elements.feedback("", None);
		}
		self.refresh_submit_control();
		snapshot
	}

	fn reject_invalid(&mut self) -> ControllerError {
		let snapshot = self.sync_from_views();
		let missing = self.form.missing_fields();

		let text = if !missing.is_empty() {
			&self.feedback.incomplete
		} else if !snapshot.result(FieldKind::Email).valid {
			&self.feedback.invalid_email
		} else {
			&self.feedback.invalid
		};
		self.elements.feedback(text, Some(FeedbackTone::Error));
		self.refresh_submit_control();

		tracing::warn!(?missing, "contact form submission rejected: form is invalid");
		ControllerError::InvalidForm { missing }
	}

	fn enter_submitting(&mut self) -> ContactSubmission {
		self.transition(SubmissionState::Submitting);
		let submit = &self.elements.submit;
		submit.set_label(&self.labels.submitting);
		submit.set_disabled(true);
		submit.add_class(LOADING_CLASS);
		self.submit_enabled = false;
		self.elements.feedback(&self.feedback.sending, None);
		self.form.submission()
	}

	fn enter_submitted(&mut self) {
		self.transition(SubmissionState::Submitted);
		let submit = &self.elements.submit;
		submit.set_label(&self.labels.submitted);
		submit.remove_class(LOADING_CLASS);
		submit.set_disabled(true);
		self.submit_enabled = false;

		for kind in FieldKind::ALL {
			reset_presentation(self.elements.field(kind));
		}
		self.form.clear();
		self.elements.feedback(&self.feedback.sent, Some(FeedbackTone::Success));
	}

	fn enter_idle(&mut self) {
		self.transition(SubmissionState::Idle);
		self.elements.submit.set_label(&self.labels.idle);
		self.refresh_submit_control();
	}

	fn enter_failed(&mut self) {
		self.transition(SubmissionState::Failed);
		let submit = &self.elements.submit;
		submit.set_label(&self.labels.failed);
		submit.remove_class(LOADING_CLASS);
		self.sync_from_views();
		self.refresh_submit_control();
		self.elements.feedback(&self.feedback.failed, Some(FeedbackTone::Error));
	}
}

/// Settles a submission whose future was dropped before it finished
///
/// A cancelled submit leaves `Submitting` as `Failed` and cuts the
/// confirmation window short, so the controller never stays locked.
struct LifecycleGuard {
	inner: Arc<Mutex<Inner>>,
	finished: bool,
}

impl LifecycleGuard {
	fn new(inner: &Arc<Mutex<Inner>>) -> Self {
		Self {
			inner: Arc::clone(inner),
			finished: false,
		}
	}

	fn finish(mut self) {
		self.finished = true;
	}
}

impl Drop for LifecycleGuard {
	fn drop(&mut self) {
		if self.finished {
			return;
		}
		let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
		match inner.state {
			SubmissionState::Submitting => {
				tracing::warn!("contact form submission cancelled before completion");
				inner.enter_failed();
			}
			SubmissionState::Submitted => inner.enter_idle(),
			SubmissionState::Idle | SubmissionState::Failed => {}
		}
	}
}

/// Drives a contact form's validation display and submission lifecycle
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use vitrina_forms::FieldKind;
/// use vitrina_pages::prelude::*;
/// use std::time::Duration;
///
/// let submit = MemorySubmitControl::new();
/// let controller = FormController::new(
///     FormElements::new(
///         Box::new(MemoryFieldView::new()),
///         Box::new(MemoryFieldView::new()),
///         Box::new(MemoryFieldView::new()),
///         Box::new(submit.clone()),
///     ),
///     SimulatedSubmitter::new(TokioTimer, Duration::ZERO),
///     TokioTimer,
///     ControllerConfig {
///         submitted_display: Duration::ZERO,
///         ..ControllerConfig::default()
///     },
/// );
///
/// controller.input(FieldKind::Name, "Ana");
/// controller.input(FieldKind::Email, "ana@ex.com");
/// controller.input(FieldKind::Message, "hello there");
/// assert!(controller.is_submit_enabled());
///
/// controller.submit().await.unwrap();
/// assert_eq!(submit.label_history(), ["Enviar", "Enviando...", "Enviado ✔", "Enviar"]);
/// # }
/// ```
pub struct FormController<S, T> {
	inner: Arc<Mutex<Inner>>,
	submitter: Arc<S>,
	timer: Arc<T>,
	submitted_display: Duration,
}

impl<S, T> Clone for FormController<S, T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
			submitter: Arc::clone(&self.submitter),
			timer: Arc::clone(&self.timer),
			submitted_display: self.submitted_display,
		}
	}
}

impl<S: Submitter, T: Timer> FormController<S, T> {
	/// Attach a controller to its views
	///
	/// The control starts with the idle label and disabled, since empty fields
	/// are never valid. Field views are left untouched until the first input.
	pub fn new(elements: FormElements, submitter: S, timer: T, config: ControllerConfig) -> Self {
		let ControllerConfig {
			rules,
			labels,
			feedback,
			submitted_display,
		} = config;

		elements.submit.set_label(&labels.idle);
		elements.submit.remove_class(LOADING_CLASS);
		elements.submit.set_disabled(true);

		Self {
			inner: Arc::new(Mutex::new(Inner {
				form: ContactForm::with_rules(rules),
				elements,
				state: SubmissionState::Idle,
				labels,
				feedback,
				submit_enabled: false,
			})),
			submitter: Arc::new(submitter),
			timer: Arc::new(timer),
			submitted_display,
		}
	}

	fn lock(&self) -> MutexGuard<'_, Inner> {
		self.inner.lock().unwrap_or_else(|e| e.into_inner())
	}

	/// Handle an input event on `kind`
	///
	/// Every field is re-read and re-validated, not only `kind`. A failed
	/// submission returns to idle here.
	pub fn on_input(&self, kind: FieldKind) -> FormSnapshot {
		self.lock().handle_input(kind)
	}

	/// Write `value` into the field's view, then handle it as an input event
	pub fn input(&self, kind: FieldKind, value: &str) -> FormSnapshot {
		let mut inner = self.lock();
		inner.elements.field(kind).set_value(value);
		inner.handle_input(kind)
	}

	/// Submit the form
	///
	/// Rejected without side effects on the lifecycle when a submission is
	/// already in flight or confirming, and rejected with feedback when the
	/// form is invalid. On success the fields are cleared, the submitted label
	/// is shown for `submitted_display` and the control returns to idle before
	/// this future resolves with the payload that was sent.
	///
	/// Dropping the future while the submitter runs leaves the form `Failed`;
	/// dropping it during the confirmation returns the form to `Idle`.
	pub async fn submit(&self) -> Result<ContactSubmission, ControllerError> {
		let submission = {
			let mut inner = self.lock();
			if !inner.state.accepts_submission() {
				tracing::warn!(
					state = %inner.state,
					"contact form submission rejected: already in progress"
				);
				return Err(ControllerError::SubmissionPending(inner.state));
			}
			if !inner.sync_from_views().valid {
				return Err(inner.reject_invalid());
			}
			inner.enter_submitting()
		};
		let guard = LifecycleGuard::new(&self.inner);

		let result = self.submitter.submit(&submission).await;

		if let Err(error) = result {
			tracing::warn!(%error, "contact form submission failed");
			self.lock().enter_failed();
			guard.finish();
			return Err(ControllerError::Submission(error));
		}

		self.lock().enter_submitted();
		self.timer.sleep(self.submitted_display).await;
		self.lock().enter_idle();
		guard.finish();

		Ok(submission)
	}

	pub fn state(&self) -> SubmissionState {
		self.lock().state
	}

	/// Whether the submit control is currently enabled
	pub fn is_submit_enabled(&self) -> bool {
		self.lock().submit_enabled
	}

	pub fn is_valid(&self) -> bool {
		self.lock().form.is_valid()
	}

	/// Run `f` against the current form state
	pub fn with_form<R>(&self, f: impl FnOnce(&ContactForm) -> R) -> R {
		f(&self.lock().form)
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use crate::submit::SimulatedSubmitter;
	use crate::timer::TokioTimer;
	use crate::view::memory::{MemoryFeedback, MemoryFieldView, MemorySubmitControl};
	use rstest::rstest;
	use vitrina_forms::{INVALID_CLASS, VALID_CLASS, Validity};

	struct Harness {
		name: MemoryFieldView,
		email: MemoryFieldView,
		message: MemoryFieldView,
		submit: MemorySubmitControl,
		feedback: MemoryFeedback,
	}

	impl Harness {
		fn new() -> Self {
			Self {
				name: MemoryFieldView::new(),
				email: MemoryFieldView::new(),
				message: MemoryFieldView::new(),
				submit: MemorySubmitControl::new(),
				feedback: MemoryFeedback::new(),
			}
		}

		fn elements(&self) -> FormElements {
			FormElements::new(
				Box::new(self.name.clone()),
				Box::new(self.email.clone()),
				Box::new(self.message.clone()),
				Box::new(self.submit.clone()),
			)
			.with_feedback(Box::new(self.feedback.clone()))
		}

		fn controller(&self) -> FormController<SimulatedSubmitter<TokioTimer>, TokioTimer> {
			FormController::new(
				self.elements(),
				SimulatedSubmitter::new(TokioTimer, Duration::from_millis(2000)),
				TokioTimer,
				ControllerConfig::default(),
			)
		}
	}

	#[rstest]
	fn test_attach_renders_idle_disabled_control() {
		// Arrange
		let harness = Harness::new();

		// Act
		let controller = harness.controller();

		// Assert
		assert_eq!(harness.submit.label(), "Enviar");
		assert!(harness.submit.is_disabled());
		assert!(!controller.is_submit_enabled());
		assert_eq!(controller.state(), SubmissionState::Idle);
		assert_eq!(harness.name.error_text(), "");
	}

	#[rstest]
	fn test_first_input_validates_every_field() {
		// Arrange
		let harness = Harness::new();
		let controller = harness.controller();

		// Act
		controller.input(FieldKind::Name, "Ana");

		// Assert
		assert!(harness.name.has_class(VALID_CLASS));
		assert!(harness.email.has_class(INVALID_CLASS));
		assert_eq!(harness.email.error_text(), "Ingresa un email válido");
		assert!(harness.message.has_class(INVALID_CLASS));
		assert!(harness.submit.is_disabled());
	}

	#[rstest]
	fn test_on_input_reads_values_typed_into_views() {
		// Arrange
		let harness = Harness::new();
		let controller = harness.controller();
		harness.name.type_text("Ana");
		harness.email.type_text("ana@ex.com");
		harness.message.type_text("hello there");

		// Act
		let snapshot = controller.on_input(FieldKind::Message);

		// Assert
		assert!(snapshot.valid);
		assert!(controller.is_submit_enabled());
		assert!(!harness.submit.is_disabled());
	}

	#[rstest]
	#[case::short_name("Al", "a@b.com", "hello!")]
	#[case::bad_email("Ana", "ana@ex", "hello!")]
	#[case::short_message("Ana", "ana@ex.com", "hi")]
	fn test_any_invalid_field_disables_control(
		#[case] name: &str,
		#[case] email: &str,
		#[case] message: &str,
	) {
		// Arrange
		let harness = Harness::new();
		let controller = harness.controller();

		// Act
		controller.input(FieldKind::Name, name);
		controller.input(FieldKind::Email, email);
		controller.input(FieldKind::Message, message);

		// Assert
		assert!(!controller.is_valid());
		assert!(!controller.is_submit_enabled());
		assert!(harness.submit.is_disabled());
	}

	#[tokio::test(start_paused = true)]
	async fn test_invalid_submit_reports_missing_fields() {
		// Arrange
		let harness = Harness::new();
		let controller = harness.controller();
		controller.input(FieldKind::Email, "ana@ex.com");

		// Act
		let result = controller.submit().await;

		// Assert
		assert_eq!(
			result,
			Err(ControllerError::InvalidForm {
				missing: vec![FieldKind::Name, FieldKind::Message]
			})
		);
		assert_eq!(controller.state(), SubmissionState::Idle);
		assert_eq!(harness.feedback.text(), "Por favor completa todos los campos.");
		assert_eq!(harness.feedback.tone(), Some(FeedbackTone::Error));
		assert_eq!(harness.submit.label_history(), vec!["Enviar"]);
	}

	#[rstest]
	#[case::bad_email("Ana", "ana@ex", "hello!", "Ingresa un correo válido.")]
	#[case::short_name("Al", "ana@ex.com", "hello!", "Revisa los campos marcados.")]
	#[tokio::test(start_paused = true)]
	async fn test_invalid_submit_feedback(
		#[case] name: &str,
		#[case] email: &str,
		#[case] message: &str,
		#[case] expected: &str,
	) {
		// Arrange
		let harness = Harness::new();
		let controller = harness.controller();
		harness.name.type_text(name);
		harness.email.type_text(email);
		harness.message.type_text(message);

		// Act
		let result = controller.submit().await;

		// Assert
		assert!(matches!(
			result,
			Err(ControllerError::InvalidForm { ref missing }) if missing.is_empty()
		));
		assert_eq!(harness.feedback.text(), expected);
	}

	#[rstest]
	fn test_submission_state_accepts() {
		assert!(SubmissionState::Idle.accepts_submission());
		assert!(SubmissionState::Failed.accepts_submission());
		assert!(!SubmissionState::Submitting.accepts_submission());
		assert!(!SubmissionState::Submitted.accepts_submission());
	}

	#[rstest]
	fn test_with_form_exposes_field_state() {
		// Arrange
		let harness = Harness::new();
		let controller = harness.controller();

		// Act
		controller.input(FieldKind::Name, "Al");

		// Assert
		let validity = controller.with_form(|form| form.field(FieldKind::Name).validity());
		assert_eq!(validity, Validity::Invalid);
	}

	#[rstest]
	fn test_controller_error_display() {
		assert_eq!(
			ControllerError::SubmissionPending(SubmissionState::Submitting).to_string(),
			"Submission rejected: form is submitting"
		);
		assert_eq!(
			ControllerError::from(SubmitError::network("offline")).to_string(),
			"Network error: offline"
		);
	}
}
