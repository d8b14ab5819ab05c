//! Field validators
//!
//! Validators are pure: they look at a raw value and return a
//! [`FieldResult`]. Applying the outcome to the page is the caller's job.

use crate::field::{FieldError, FieldKind, FieldResult, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;
use vitrina_conf::FormSettings;

// local@domain.tld, where no part contains whitespace, a BOM or '@'.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Placeholder in configured length messages, replaced with the minimum
pub const MIN_PLACEHOLDER: &str = "{min}";

/// Strip surrounding whitespace, counting U+FEFF as whitespace.
///
/// # Examples
///
/// ```
/// use vitrina_forms::validators::trim_input;
///
/// assert_eq!(trim_input("\u{FEFF} Ana \n"), "Ana");
/// ```
pub fn trim_input(value: &str) -> &str {
	value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Validates that the trimmed value has at least `min` characters.
///
/// Length is counted in UTF-16 code units after [`trim_input`], so a
/// character outside the Basic Multilingual Plane counts as two.
///
/// # Examples
///
/// ```
/// use vitrina_forms::MinLengthValidator;
///
/// let validator = MinLengthValidator::new(3, "Too short");
/// assert!(validator.validate("  Ana ").is_ok());
/// assert!(validator.validate("  Al  ").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
	message: String,
}

impl MinLengthValidator {
	pub fn new(min: usize, message: impl Into<String>) -> Self {
		Self {
			min,
			message: message.into(),
		}
	}

	pub fn min(&self) -> usize {
		self.min
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if trim_input(value).encode_utf16().count() >= self.min {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

/// Validates that the trimmed value looks like `local@domain.tld`.
///
/// Matching is case-insensitive.
///
/// # Examples
///
/// ```
/// use vitrina_forms::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("ana@ex.com").is_ok());
/// assert!(validator.validate("ana@ex").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(trim_input(value)) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or(DEFAULT_EMAIL_MESSAGE);
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

pub const DEFAULT_NAME_MESSAGE: &str = "El nombre debe tener mínimo 3 caracteres";
pub const DEFAULT_EMAIL_MESSAGE: &str = "Ingresa un email válido";
pub const DEFAULT_MESSAGE_MESSAGE: &str = "El mensaje debe tener mínimo 5 caracteres";

/// The rule set applied to each contact form field.
#[derive(Debug, Clone)]
pub struct FieldRules {
	pub name: MinLengthValidator,
	pub email: EmailValidator,
	pub message: MinLengthValidator,
}

impl FieldRules {
	/// Build the rules from form settings.
	///
	/// `{min}` in a length message is replaced with the configured minimum.
	///
	/// # Examples
	///
	/// ```
	/// use vitrina_conf::FormSettings;
	/// use vitrina_forms::{FieldKind, FieldRules};
	///
	/// let mut settings = FormSettings::default();
	/// settings.name_min_length = 2;
	///
	/// let rules = FieldRules::from_settings(&settings);
	/// assert!(rules.validate(FieldKind::Name, "Al").valid);
	/// assert_eq!(
	///     rules.validate(FieldKind::Name, "A").message,
	///     "El nombre debe tener mínimo 2 caracteres"
	/// );
	/// ```
	pub fn from_settings(settings: &FormSettings) -> Self {
		let length_rule = |min: usize, template: &str| {
			MinLengthValidator::new(min, template.replace(MIN_PLACEHOLDER, &min.to_string()))
		};
		Self {
			name: length_rule(settings.name_min_length, &settings.messages.name),
			email: EmailValidator::new().with_message(&settings.messages.email),
			message: length_rule(settings.message_min_length, &settings.messages.message),
		}
	}

	/// Validate one field's raw value.
	pub fn validate(&self, kind: FieldKind, raw: &str) -> ValidationResult {
		let result = match kind {
			FieldKind::Name => self.name.validate(raw),
			FieldKind::Email => self.email.validate(raw),
			FieldKind::Message => self.message.validate(raw),
		};
		result.into()
	}
}

impl Default for FieldRules {
	fn default() -> Self {
		Self {
			name: MinLengthValidator::new(3, DEFAULT_NAME_MESSAGE),
			email: EmailValidator::new(),
			message: MinLengthValidator::new(5, DEFAULT_MESSAGE_MESSAGE),
		}
	}
}

/// Validate a raw value with the default rules.
///
/// # Examples
///
/// ```
/// use vitrina_forms::{FieldKind, validate};
///
/// let result = validate(FieldKind::Name, "Al");
/// assert!(!result.valid);
/// assert_eq!(result.message, "El nombre debe tener mínimo 3 caracteres");
/// ```
pub fn validate(kind: FieldKind, raw: &str) -> ValidationResult {
	static DEFAULT_RULES: LazyLock<FieldRules> = LazyLock::new(FieldRules::default);
	DEFAULT_RULES.validate(kind, raw)
}
