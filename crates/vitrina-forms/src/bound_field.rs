use crate::field::{FieldKind, Validity};
use crate::form::FieldState;

/// CSS class marking a field that passed validation
pub const VALID_CLASS: &str = "valid";
/// CSS class marking a field that failed validation
pub const INVALID_CLASS: &str = "invalid";

/// BoundField is a read-only view of one field of a [`ContactForm`](crate::ContactForm)
pub struct BoundField<'a> {
	state: &'a FieldState,
}

impl<'a> BoundField<'a> {
	pub(crate) fn new(state: &'a FieldState) -> Self {
		Self { state }
	}

	pub fn kind(&self) -> FieldKind {
		self.state.kind
	}

	/// Get the HTML name attribute
	///
	/// # Examples
	///
	/// ```
	/// use vitrina_forms::{ContactForm, FieldKind};
	///
	/// let form = ContactForm::new();
	/// assert_eq!(form.field(FieldKind::Message).html_name(), "message");
	/// ```
	pub fn html_name(&self) -> &'static str {
		self.state.kind.input_name()
	}

	/// Get the HTML id attribute
	pub fn html_id(&self) -> &'static str {
		self.state.kind.html_id()
	}

	pub fn value(&self) -> &'a str {
		&self.state.value
	}

	pub fn validity(&self) -> Validity {
		self.state.validity
	}

	/// Text for the field's error slot, present iff the field is invalid
	pub fn error(&self) -> Option<&'a str> {
		self.state.error.as_deref()
	}

	/// Validation marker class, `None` while untouched
	///
	/// # Examples
	///
	/// ```
	/// use vitrina_forms::{ContactForm, FieldKind};
	///
	/// let mut form = ContactForm::new();
	/// assert_eq!(form.field(FieldKind::Name).css_class(), None);
	///
	/// form.set_value(FieldKind::Name, "Ana");
	/// assert_eq!(form.field(FieldKind::Name).css_class(), Some("valid"));
	/// assert_eq!(form.field(FieldKind::Email).css_class(), Some("invalid"));
	/// ```
	pub fn css_class(&self) -> Option<&'static str> {
		match self.state.validity {
			Validity::Untouched => None,
			Validity::Valid => Some(VALID_CLASS),
			Validity::Invalid => Some(INVALID_CLASS),
		}
	}
}
