//! Field kinds, validity flags and validation results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three inputs of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
	Name,
	Email,
	Message,
}

impl FieldKind {
	/// All fields, in document order
	pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

	/// Element id used by the site markup
	///
	/// # Examples
	///
	/// ```
	/// use vitrina_forms::FieldKind;
	///
	/// assert_eq!(FieldKind::Name.html_id(), "nombre");
	/// assert_eq!(FieldKind::Message.html_id(), "mensaje");
	/// ```
	pub fn html_id(self) -> &'static str {
		match self {
			FieldKind::Name => "nombre",
			FieldKind::Email => "email",
			FieldKind::Message => "mensaje",
		}
	}

	/// `name` attribute used by the site markup
	pub fn input_name(self) -> &'static str {
		match self {
			FieldKind::Name => "name",
			FieldKind::Email => "email",
			FieldKind::Message => "message",
		}
	}

	pub(crate) fn index(self) -> usize {
		match self {
			FieldKind::Name => 0,
			FieldKind::Email => 1,
			FieldKind::Message => 2,
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.input_name())
	}
}

impl FromStr for FieldKind {
	type Err = FieldError;

	/// Accepts both the `name` attribute and the element id.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"name" | "nombre" => Ok(FieldKind::Name),
			"email" => Ok(FieldKind::Email),
			"message" | "mensaje" => Ok(FieldKind::Message),
			other => Err(FieldError::UnknownField(other.to_string())),
		}
	}
}

/// Per-field validity flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
	/// Never evaluated since the field was created or last cleared
	#[default]
	Untouched,
	Valid,
	Invalid,
}

impl Validity {
	pub fn is_valid(self) -> bool {
		self == Validity::Valid
	}
}

/// Outcome of validating one field value
///
/// `message` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
	pub valid: bool,
	pub message: String,
}

impl ValidationResult {
	/// A passing result with an empty message
	pub fn ok() -> Self {
		Self {
			valid: true,
			message: String::new(),
		}
	}

	/// A failing result carrying the message to display
	pub fn invalid(message: impl Into<String>) -> Self {
		Self {
			valid: false,
			message: message.into(),
		}
	}

	pub fn validity(&self) -> Validity {
		if self.valid {
			Validity::Valid
		} else {
			Validity::Invalid
		}
	}
}

impl From<FieldResult<()>> for ValidationResult {
	fn from(result: FieldResult<()>) -> Self {
		match result {
			Ok(()) => Self::ok(),
			Err(e) => Self::invalid(e.message()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Validation(String),
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

impl FieldError {
	/// Message suitable for the field's error slot
	pub fn message(&self) -> String {
		match self {
			FieldError::Validation(msg) => msg.clone(),
			other => other.to_string(),
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;
