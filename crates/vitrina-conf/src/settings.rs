//! Site settings
//!
//! All sections deserialize with defaults, so a TOML file only needs to name
//! the values it changes.

use crate::env::{Env, EnvError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
	/// Contact form behaviour
	#[serde(default)]
	pub form: FormSettings,

	/// Theme preference persistence
	#[serde(default)]
	pub theme: ThemeSettings,

	/// Navbar scroll state
	#[serde(default)]
	pub navbar: NavbarSettings,

	/// Logging configuration
	#[serde(default)]
	pub logging: LoggingSettings,
}

impl Settings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse settings from a TOML document
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))
	}

	/// Load settings from a TOML file
	///
	/// A missing file yields the defaults.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		if !path.exists() {
			tracing::debug!(path = %path.display(), "settings file not found, using defaults");
			return Ok(Self::default());
		}

		let contents = std::fs::read_to_string(path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		Self::from_toml_str(&contents)
	}

	/// Apply environment variable overrides
	///
	/// Recognised keys (relative to the `Env` prefix): `FORM_SUBMIT_DELAY_MS`,
	/// `FORM_SUBMITTED_DISPLAY_MS`, `FORM_NAME_MIN_LENGTH`,
	/// `FORM_MESSAGE_MIN_LENGTH`, `THEME_STORAGE_KEY`,
	/// `NAVBAR_SCROLL_THRESHOLD`, `LOG_LEVEL` and `LOG_FORMAT`.
	pub fn apply_env(&mut self, env: &Env) -> Result<(), SettingsError> {
		if let Some(ms) = env.parse_opt("FORM_SUBMIT_DELAY_MS")? {
			self.form.submit_delay_ms = ms;
		}
		if let Some(ms) = env.parse_opt("FORM_SUBMITTED_DISPLAY_MS")? {
			self.form.submitted_display_ms = ms;
		}
		if let Some(len) = env.parse_opt("FORM_NAME_MIN_LENGTH")? {
			self.form.name_min_length = len;
		}
		if let Some(len) = env.parse_opt("FORM_MESSAGE_MIN_LENGTH")? {
			self.form.message_min_length = len;
		}
		if let Some(key) = env.str_opt("THEME_STORAGE_KEY")? {
			self.theme.storage_key = key;
		}
		if let Some(threshold) = env.parse_opt("NAVBAR_SCROLL_THRESHOLD")? {
			self.navbar.scroll_threshold = threshold;
		}
		if let Some(level) = env.str_opt("LOG_LEVEL")? {
			self.logging.level = level;
		}
		if let Some(format) = env.str_opt("LOG_FORMAT")? {
			self.logging.format = format;
		}
		Ok(())
	}

	/// Validate settings
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.form.name_min_length == 0 {
			return Err(SettingsError::ValidationError(
				"form.name_min_length must be at least 1".to_string(),
			));
		}

		if self.form.message_min_length == 0 {
			return Err(SettingsError::ValidationError(
				"form.message_min_length must be at least 1".to_string(),
			));
		}

		let messages = &self.form.messages;
		for (key, text) in [
			("name", &messages.name),
			("email", &messages.email),
			("message", &messages.message),
		] {
			if text.trim().is_empty() {
				return Err(SettingsError::ValidationError(format!(
					"form.messages.{key} must not be empty"
				)));
			}
		}

		if self.theme.storage_key.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"theme.storage_key must not be empty".to_string(),
			));
		}

		if !matches!(self.logging.format.as_str(), "text" | "json") {
			return Err(SettingsError::ValidationError(format!(
				"logging.format must be \"text\" or \"json\", got \"{}\"",
				self.logging.format
			)));
		}

		Ok(())
	}
}

/// Contact form settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Simulated submission latency before the form reaches the submitted state
	pub submit_delay_ms: u64,
	/// How long the submitted label stays before the control returns to idle
	pub submitted_display_ms: u64,
	/// Minimum trimmed length of the name field
	pub name_min_length: usize,
	/// Minimum trimmed length of the message field
	pub message_min_length: usize,
	pub messages: FieldMessages,
	pub labels: SubmitLabels,
	pub feedback: FeedbackMessages,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			submit_delay_ms: 2000,
			submitted_display_ms: 2000,
			name_min_length: 3,
			message_min_length: 5,
			messages: FieldMessages::default(),
			labels: SubmitLabels::default(),
			feedback: FeedbackMessages::default(),
		}
	}
}

/// Per-field error messages
///
/// `{min}` in the name and message texts stands for the configured minimum
/// length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMessages {
	pub name: String,
	pub email: String,
	pub message: String,
}

impl Default for FieldMessages {
	fn default() -> Self {
		Self {
			name: "El nombre debe tener mínimo {min} caracteres".to_string(),
			email: "Ingresa un email válido".to_string(),
			message: "El mensaje debe tener mínimo {min} caracteres".to_string(),
		}
	}
}

/// Submit control labels for each submission state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitLabels {
	pub idle: String,
	pub submitting: String,
	pub submitted: String,
	pub failed: String,
}

impl Default for SubmitLabels {
	fn default() -> Self {
		Self {
			idle: "Enviar".to_string(),
			submitting: "Enviando...".to_string(),
			submitted: "Enviado ✔".to_string(),
			failed: "Enviar".to_string(),
		}
	}
}

/// Form-level feedback messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackMessages {
	pub incomplete: String,
	pub invalid_email: String,
	pub invalid: String,
	pub sending: String,
	pub sent: String,
	pub failed: String,
}

impl Default for FeedbackMessages {
	fn default() -> Self {
		Self {
			incomplete: "Por favor completa todos los campos.".to_string(),
			invalid_email: "Ingresa un correo válido.".to_string(),
			invalid: "Revisa los campos marcados.".to_string(),
			sending: "Enviando...".to_string(),
			sent: "Gracias — tu mensaje fue enviado.".to_string(),
			failed: "No se pudo enviar el mensaje. Inténtalo de nuevo.".to_string(),
		}
	}
}

/// Theme preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
	/// Key under which the preference is persisted
	pub storage_key: String,
}

impl Default for ThemeSettings {
	fn default() -> Self {
		Self {
			storage_key: "theme".to_string(),
		}
	}
}

/// Navbar settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarSettings {
	/// Vertical scroll offset (px) past which the navbar is marked scrolled
	pub scroll_threshold: f64,
}

impl Default for NavbarSettings {
	fn default() -> Self {
		Self {
			scroll_threshold: 80.0,
		}
	}
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// `EnvFilter` directive, e.g. `info` or `vitrina_pages=debug`
	pub level: String,
	/// `text` or `json`
	pub format: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: "text".to_string(),
		}
	}
}

/// Settings error
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment error: {0}")]
	Env(#[from] EnvError),

	#[error("Logging error: {0}")]
	Logging(String),

	#[error("A global tracing subscriber is already installed: {0}")]
	SubscriberInstalled(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults_match_stock_form() {
		// Arrange
		let settings = Settings::default();

		// Assert
		assert_eq!(settings.form.submit_delay_ms, 2000);
		assert_eq!(settings.form.submitted_display_ms, 2000);
		assert_eq!(settings.form.name_min_length, 3);
		assert_eq!(settings.form.message_min_length, 5);
		assert_eq!(settings.form.labels.idle, "Enviar");
		assert_eq!(settings.form.labels.submitting, "Enviando...");
		assert_eq!(settings.form.labels.submitted, "Enviado ✔");
		assert_eq!(
			settings.form.messages.name,
			"El nombre debe tener mínimo {min} caracteres"
		);
		assert_eq!(settings.form.messages.email, "Ingresa un email válido");
		assert_eq!(settings.theme.storage_key, "theme");
		assert_eq!(settings.navbar.scroll_threshold, 80.0);
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		// Arrange
		let toml = r#"
			[form]
			submitted_display_ms = 500

			[form.labels]
			idle = "Send"

			[logging]
			format = "json"
		"#;

		// Act
		let settings = Settings::from_toml_str(toml).unwrap();

		// Assert
		assert_eq!(settings.form.submitted_display_ms, 500);
		assert_eq!(settings.form.submit_delay_ms, 2000);
		assert_eq!(settings.form.labels.idle, "Send");
		assert_eq!(settings.form.labels.submitting, "Enviando...");
		assert_eq!(settings.logging.format, "json");
		assert_eq!(settings.logging.level, "info");
	}

	#[rstest]
	fn test_invalid_toml_is_parse_error() {
		// Act
		let result = Settings::from_toml_str("[form\nsubmit_delay_ms = ");

		// Assert
		assert!(matches!(result, Err(SettingsError::ParseError(_))));
	}

	#[rstest]
	fn test_load_missing_file_yields_defaults() {
		// Arrange
		let dir = tempfile::TempDir::new().unwrap();

		// Act
		let settings = Settings::load(dir.path().join("vitrina.toml")).unwrap();

		// Assert
		assert_eq!(settings, Settings::default());
	}

	#[rstest]
	fn test_load_from_file() {
		// Arrange
		let dir = tempfile::TempDir::new().unwrap();
		let path = dir.path().join("vitrina.toml");
		let mut file = std::fs::File::create(&path).unwrap();
		writeln!(file, "[theme]\nstorage_key = \"site-theme\"").unwrap();

		// Act
		let settings = Settings::load(&path).unwrap();

		// Assert
		assert_eq!(settings.theme.storage_key, "site-theme");
	}

	#[rstest]
	#[case::zero_name_length("[form]\nname_min_length = 0")]
	#[case::zero_message_length("[form]\nmessage_min_length = 0")]
	#[case::empty_name_message("[form.messages]\nname = \"\"")]
	#[case::empty_email_message("[form.messages]\nemail = \"\"")]
	#[case::blank_message_message("[form.messages]\nmessage = \"   \"")]
	#[case::empty_storage_key("[theme]\nstorage_key = \"  \"")]
	#[case::unknown_log_format("[logging]\nformat = \"xml\"")]
	fn test_validate_rejects(#[case] toml: &str) {
		// Arrange
		let settings = Settings::from_toml_str(toml).unwrap();

		// Act
		let result = settings.validate();

		// Assert
		assert!(matches!(result, Err(SettingsError::ValidationError(_))));
	}

	#[rstest]
	fn test_validate_accepts_defaults() {
		assert!(Settings::default().validate().is_ok());
	}
}
