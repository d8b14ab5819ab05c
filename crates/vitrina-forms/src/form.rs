use crate::bound_field::BoundField;
use crate::field::{FieldKind, ValidationResult, Validity};
use crate::validators::{FieldRules, trim_input};
use serde::{Deserialize, Serialize};

/// Stored state of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldState {
	pub(crate) kind: FieldKind,
	pub(crate) value: String,
	pub(crate) validity: Validity,
	/// Present iff `validity` is `Invalid`
	pub(crate) error: Option<String>,
}

impl FieldState {
	fn new(kind: FieldKind) -> Self {
		Self {
			kind,
			value: String::new(),
			validity: Validity::Untouched,
			error: None,
		}
	}

	fn apply(&mut self, result: &ValidationResult) {
		self.validity = result.validity();
		self.error = if result.valid {
			None
		} else {
			Some(result.message.clone())
		};
	}
}

/// Result of one aggregate evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
	/// Per-field results, in [`FieldKind::ALL`] order
	pub results: [(FieldKind, ValidationResult); 3],
	/// Logical AND of every field's validity
	pub valid: bool,
}

impl FormSnapshot {
	pub fn result(&self, kind: FieldKind) -> &ValidationResult {
		&self.results[kind.index()].1
	}
}

/// Payload handed to a submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
	pub name: String,
	pub email: String,
	pub message: String,
}

/// The contact form's validity state
///
/// Every change re-validates all three fields, not only the changed one, so
/// the stored state always reflects one complete snapshot. Fields that were
/// never edited are validated too and fail when empty.
pub struct ContactForm {
	rules: FieldRules,
	fields: [FieldState; 3],
}

impl ContactForm {
	/// Create an empty form with the default rules
	///
	/// # Examples
	///
	/// ```
	/// use vitrina_forms::{ContactForm, FieldKind, Validity};
	///
	/// let form = ContactForm::new();
	/// assert!(!form.is_valid());
	/// assert_eq!(form.field(FieldKind::Name).validity(), Validity::Untouched);
	/// ```
	pub fn new() -> Self {
		Self::with_rules(FieldRules::default())
	}

	pub fn with_rules(rules: FieldRules) -> Self {
		Self {
			rules,
			fields: FieldKind::ALL.map(FieldState::new),
		}
	}

	pub fn rules(&self) -> &FieldRules {
		&self.rules
	}

	/// Store a field's value, then re-validate the whole form
	///
	/// # Examples
	///
	/// ```
	/// use vitrina_forms::{ContactForm, FieldKind};
	///
	/// let mut form = ContactForm::new();
	/// let snapshot = form.set_value(FieldKind::Email, "ana@ex.com");
	///
	/// assert!(snapshot.result(FieldKind::Email).valid);
	/// // The untouched name is validated as well
	/// assert!(!snapshot.result(FieldKind::Name).valid);
	/// assert!(!snapshot.valid);
	/// ```
	pub fn set_value(&mut self, kind: FieldKind, value: impl Into<String>) -> FormSnapshot {
		self.fields[kind.index()].value = value.into();
		self.revalidate()
	}

	/// Store all three values at once, then re-validate
	pub fn set_values(&mut self, name: &str, email: &str, message: &str) -> FormSnapshot {
		self.fields[FieldKind::Name.index()].value = name.to_string();
		self.fields[FieldKind::Email.index()].value = email.to_string();
		self.fields[FieldKind::Message.index()].value = message.to_string();
		self.revalidate()
	}

	/// Re-run every field's validator against its current value
	pub fn revalidate(&mut self) -> FormSnapshot {
		let results = FieldKind::ALL.map(|kind| {
			let state = &mut self.fields[kind.index()];
			let result = self.rules.validate(kind, &state.value);
			state.apply(&result);
			(kind, result)
		});
		let valid = results.iter().all(|(_, result)| result.valid);

		tracing::debug!(
			name = results[0].1.valid,
			email = results[1].1.valid,
			message = results[2].1.valid,
			valid,
			"form revalidated"
		);

		FormSnapshot { results, valid }
	}

	/// Aggregate validity at the most recent evaluation
	///
	/// Untouched fields count as not valid.
	pub fn is_valid(&self) -> bool {
		self.fields.iter().all(|f| f.validity.is_valid())
	}

	pub fn value(&self, kind: FieldKind) -> &str {
		&self.fields[kind.index()].value
	}

	pub fn field(&self, kind: FieldKind) -> BoundField<'_> {
		BoundField::new(&self.fields[kind.index()])
	}

	pub fn fields(&self) -> impl Iterator<Item = BoundField<'_>> {
		self.fields.iter().map(BoundField::new)
	}

	/// Fields whose trimmed value is empty, in document order
	pub fn missing_fields(&self) -> Vec<FieldKind> {
		self.fields
			.iter()
			.filter(|f| trim_input(&f.value).is_empty())
			.map(|f| f.kind)
			.collect()
	}

	/// Empty every value and reset every field to untouched
	pub fn clear(&mut self) {
		self.fields = FieldKind::ALL.map(FieldState::new);
	}

	/// Trimmed payload for submission
	pub fn submission(&self) -> ContactSubmission {
		ContactSubmission {
			name: trim_input(self.value(FieldKind::Name)).to_string(),
			email: trim_input(self.value(FieldKind::Email)).to_string(),
			message: trim_input(self.value(FieldKind::Message)).to_string(),
		}
	}
}

impl Default for ContactForm {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validators::{DEFAULT_EMAIL_MESSAGE, DEFAULT_MESSAGE_MESSAGE, DEFAULT_NAME_MESSAGE};
	use rstest::rstest;

	#[rstest]
	fn test_new_form_is_untouched_and_invalid() {
		// Arrange
		let form = ContactForm::new();

		// Assert
		assert!(!form.is_valid());
		for field in form.fields() {
			assert_eq!(field.validity(), Validity::Untouched);
			assert_eq!(field.error(), None);
			assert_eq!(field.value(), "");
		}
	}

	#[rstest]
	fn test_single_change_validates_untouched_fields() {
		// Arrange
		let mut form = ContactForm::new();

		// Act
		let snapshot = form.set_value(FieldKind::Name, "Ana");

		// Assert
		assert!(snapshot.result(FieldKind::Name).valid);
		assert_eq!(form.field(FieldKind::Email).error(), Some(DEFAULT_EMAIL_MESSAGE));
		assert_eq!(
			form.field(FieldKind::Message).error(),
			Some(DEFAULT_MESSAGE_MESSAGE)
		);
		assert!(!snapshot.valid);
	}

	#[rstest]
	#[case::short_name("Al", "a@b.com", "hello!", FieldKind::Name, DEFAULT_NAME_MESSAGE)]
	#[case::bad_email("Ana", "ana@ex", "hello!", FieldKind::Email, DEFAULT_EMAIL_MESSAGE)]
	#[case::short_message("Ana", "ana@ex.com", "hi", FieldKind::Message, DEFAULT_MESSAGE_MESSAGE)]
	fn test_single_invalid_field_scenarios(
		#[case] name: &str,
		#[case] email: &str,
		#[case] message: &str,
		#[case] failing: FieldKind,
		#[case] expected: &str,
	) {
		// Arrange
		let mut form = ContactForm::new();

		// Act
		let snapshot = form.set_values(name, email, message);

		// Assert
		assert!(!snapshot.valid);
		assert!(!form.is_valid());
		for kind in FieldKind::ALL {
			let field = form.field(kind);
			if kind == failing {
				assert_eq!(field.validity(), Validity::Invalid);
				assert_eq!(field.error(), Some(expected));
			} else {
				assert_eq!(field.validity(), Validity::Valid);
				assert_eq!(field.error(), None);
			}
		}
	}

	#[rstest]
	fn test_all_valid_scenario() {
		// Arrange
		let mut form = ContactForm::new();

		// Act
		let snapshot = form.set_values("Ana", "ana@ex.com", "hello there");

		// Assert
		assert!(snapshot.valid);
		assert!(form.is_valid());
		assert!(form.fields().all(|f| f.error().is_none()));
	}

	#[rstest]
	fn test_error_cleared_once_field_becomes_valid() {
		// Arrange
		let mut form = ContactForm::new();
		form.set_value(FieldKind::Name, "Al");
		assert_eq!(form.field(FieldKind::Name).error(), Some(DEFAULT_NAME_MESSAGE));

		// Act
		form.set_value(FieldKind::Name, "Ale");

		// Assert
		assert_eq!(form.field(FieldKind::Name).error(), None);
		assert_eq!(form.field(FieldKind::Name).validity(), Validity::Valid);
	}

	#[rstest]
	fn test_clear_resets_to_untouched() {
		// Arrange
		let mut form = ContactForm::new();
		form.set_values("Ana", "ana@ex.com", "hello there");

		// Act
		form.clear();

		// Assert
		assert!(!form.is_valid());
		assert!(form.fields().all(|f| f.value().is_empty()));
		assert!(form.fields().all(|f| f.validity() == Validity::Untouched));
		assert!(form.fields().all(|f| f.error().is_none()));
	}

	#[rstest]
	fn test_missing_fields_in_document_order() {
		// Arrange
		let mut form = ContactForm::new();
		form.set_values("  ", "ana@ex.com", "\u{FEFF}");

		// Act
		let missing = form.missing_fields();

		// Assert
		assert_eq!(missing, vec![FieldKind::Name, FieldKind::Message]);
	}

	#[rstest]
	fn test_submission_is_trimmed() {
		// Arrange
		let mut form = ContactForm::new();
		form.set_values(" Ana ", "\u{FEFF}ana@ex.com", "hello there  ");

		// Act
		let submission = form.submission();

		// Assert
		assert_eq!(
			submission,
			ContactSubmission {
				name: "Ana".to_string(),
				email: "ana@ex.com".to_string(),
				message: "hello there".to_string(),
			}
		);
		assert_eq!(
			serde_json::to_value(&submission).unwrap(),
			serde_json::json!({"name": "Ana", "email": "ana@ex.com", "message": "hello there"})
		);
	}
}
