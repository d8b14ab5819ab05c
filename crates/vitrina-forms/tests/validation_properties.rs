//! Property tests for the field validator and the validity aggregator
//!
//! Properties:
//! 1. Short trimmed names are invalid and keep the form invalid
//! 2. Values outside the email pattern are invalid
//! 3. Short trimmed messages are invalid
//! 4. The form is valid iff all three fields satisfy their rules
//! 5. An error message is shown iff the field is invalid

use proptest::prelude::*;
use regex::Regex;
use vitrina_forms::{ContactForm, FieldKind, Validity, validate};

const VALID_EMAIL: &str = "ana@ex.com";
const VALID_NAME: &str = "Ana";
const VALID_MESSAGE: &str = "hello there";

fn reference_email_regex() -> Regex {
	Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
}

fn short_text(max: usize) -> impl Strategy<Value = String> {
	// Up to `max - 1` visible characters padded with whitespace and BOMs
	(
		"[ \t\u{FEFF}]{0,3}",
		proptest::collection::vec(proptest::char::range('a', 'z'), 0..max),
		"[ \t\u{FEFF}]{0,3}",
	)
		.prop_map(|(lead, body, trail)| {
			format!("{lead}{}{trail}", body.into_iter().collect::<String>())
		})
}

proptest! {
	#[test]
	fn prop_short_name_always_invalid(name in short_text(3)) {
		let mut form = ContactForm::new();
		let snapshot = form.set_values(&name, VALID_EMAIL, VALID_MESSAGE);

		prop_assert!(!snapshot.result(FieldKind::Name).valid);
		prop_assert!(!snapshot.valid);
		prop_assert!(!form.is_valid());
	}

	#[test]
	fn prop_short_message_always_invalid(message in short_text(5)) {
		let result = validate(FieldKind::Message, &message);

		prop_assert!(!result.valid);
		prop_assert_eq!(result.message, "El mensaje debe tener mínimo 5 caracteres");
	}

	#[test]
	fn prop_email_validity_matches_pattern(email in "[a-zA-Z@. \\t]{0,12}") {
		let expected = reference_email_regex().is_match(email.trim());
		let result = validate(FieldKind::Email, &email);

		prop_assert_eq!(result.valid, expected);
		if !expected {
			prop_assert_eq!(result.message, "Ingresa un email válido");
		}
	}

	#[test]
	fn prop_form_valid_iff_every_field_valid(
		name in "[a-z ]{0,6}",
		email in "[a-z@.]{0,8}",
		message in "[a-z ]{0,8}",
	) {
		let mut form = ContactForm::new();
		let snapshot = form.set_values(&name, &email, &message);

		let expected = validate(FieldKind::Name, &name).valid
			&& validate(FieldKind::Email, &email).valid
			&& validate(FieldKind::Message, &message).valid;

		prop_assert_eq!(snapshot.valid, expected);
		prop_assert_eq!(form.is_valid(), expected);
	}

	#[test]
	fn prop_error_shown_iff_invalid(
		edits in proptest::collection::vec((0usize..3, "[a-z@. ]{0,8}"), 1..8),
	) {
		let mut form = ContactForm::new();

		for (index, value) in edits {
			form.set_value(FieldKind::ALL[index], value);

			for field in form.fields() {
				prop_assert_ne!(field.validity(), Validity::Untouched);
				prop_assert_eq!(field.error().is_some(), field.validity() == Validity::Invalid);
			}
		}
	}
}

#[test]
fn test_valid_constants_are_valid() {
	let mut form = ContactForm::new();
	assert!(form.set_values(VALID_NAME, VALID_EMAIL, VALID_MESSAGE).valid);
}
