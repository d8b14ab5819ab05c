//! Presentation seams for the contact form
//!
//! The controller never touches a document directly. It talks to a field
//! view per input, a submit control and an optional feedback area. In the
//! browser these wrap DOM elements; tests and headless hosts use the
//! implementations in [`memory`].
//!
//! All methods take `&self`: DOM handles mutate through shared references, and
//! the in-memory views follow the same shape.

pub mod memory;

use crate::platform::MaybeSend;
use vitrina_forms::{INVALID_CLASS, VALID_CLASS, ValidationResult};

/// Class added to the submit control while a submission is in flight
pub const LOADING_CLASS: &str = "loading";

/// One input element plus its adjacent error-text slot
pub trait FieldView: MaybeSend {
	/// Current raw value of the input
	fn value(&self) -> String;
	fn set_value(&self, value: &str);
	fn add_class(&self, class: &str);
	fn remove_class(&self, class: &str);
	/// Replace the error slot's text; an empty string clears it
	fn set_error_text(&self, text: &str);
}

/// The form's submit button
pub trait SubmitControl: MaybeSend {
	fn set_label(&self, label: &str);
	fn set_disabled(&self, disabled: bool);
	fn add_class(&self, class: &str);
	fn remove_class(&self, class: &str);
}

/// Tone of a form-level feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTone {
	Error,
	Success,
}

impl FeedbackTone {
	/// Class applied to the feedback element
	pub fn class(self) -> &'static str {
		match self {
			FeedbackTone::Error => "error",
			FeedbackTone::Success => "success",
		}
	}
}

/// Form-level status area
pub trait FeedbackView: MaybeSend {
	fn set_text(&self, text: &str);
	/// `None` removes any tone
	fn set_tone(&self, tone: Option<FeedbackTone>);
}

/// Reflect one validation result on a field view
///
/// Valid fields get the `valid` class and an empty error slot; invalid fields
/// get the `invalid` class and the result's message. The two classes are
/// mutually exclusive.
pub fn present_result(view: &dyn FieldView, result: &ValidationResult) {
	if result.valid {
		view.remove_class(INVALID_CLASS);
		view.add_class(VALID_CLASS);
		view.set_error_text("");
	} else {
		view.remove_class(VALID_CLASS);
		view.add_class(INVALID_CLASS);
		view.set_error_text(&result.message);
	}
}

/// Empty a field view and strip every validity marker
pub fn reset_presentation(view: &dyn FieldView) {
	view.set_value("");
	view.remove_class(VALID_CLASS);
	view.remove_class(INVALID_CLASS);
	view.set_error_text("");
}
