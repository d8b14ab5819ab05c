//! Environment variable handling
//!
//! Reads optional, prefixed environment variables used to override settings
//! loaded from defaults or a TOML file.

use std::env;
use std::str::FromStr;

/// Prefix applied to every variable read by [`Env::vitrina`].
pub const DEFAULT_PREFIX: &str = "VITRINA_";

/// Environment variable reader with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "VITRINA_")
	pub prefix: Option<String>,
}

impl Env {
	/// Create an Env without a prefix
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Create an Env using the [`DEFAULT_PREFIX`]
	///
	/// # Examples
	///
	/// ```
	/// use vitrina_conf::Env;
	///
	/// let env = Env::vitrina();
	/// assert_eq!(env.key_name("LOG_LEVEL"), "VITRINA_LOG_LEVEL");
	/// ```
	pub fn vitrina() -> Self {
		Self::new().with_prefix(DEFAULT_PREFIX)
	}

	/// Set a prefix for all environment variable lookups
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Get the full key name with prefix
	pub fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value, `None` when the variable is unset
	pub fn str_opt(&self, key: &str) -> Result<Option<String>, EnvError> {
		let full_key = self.key_name(key);
		validate_env_var_name(&full_key)?;

		match env::var(&full_key) {
			Ok(val) => Ok(Some(val)),
			Err(env::VarError::NotPresent) => Ok(None),
			Err(env::VarError::NotUnicode(_)) => Err(EnvError::ParseError {
				key: full_key,
				value_len: 0,
				error: "value is not valid unicode".to_string(),
			}),
		}
	}

	/// Read and parse a value, `None` when the variable is unset
	///
	/// # Examples
	///
	/// ```
	/// use vitrina_conf::Env;
	///
	/// let env = Env::new().with_prefix("VITRINA_DOCTEST_UNSET_");
	/// let value: Option<u64> = env.parse_opt("DELAY").unwrap();
	/// assert_eq!(value, None);
	/// ```
	pub fn parse_opt<T>(&self, key: &str) -> Result<Option<T>, EnvError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		let Some(val) = self.str_opt(key)? else {
			return Ok(None);
		};

		val.trim()
			.parse::<T>()
			.map(Some)
			.map_err(|e| EnvError::ParseError {
				key: self.key_name(key),
				value_len: val.len(),
				error: e.to_string(),
			})
	}
}

/// Validates an environment variable name.
///
/// Rejects names that are empty, contain control characters, or contain
/// the `=` character (which is used as the key-value separator).
pub fn validate_env_var_name(name: &str) -> Result<(), EnvError> {
	if name.is_empty() {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: "environment variable name must not be empty".to_string(),
		});
	}

	if let Some(pos) = name.find(|c: char| c.is_control()) {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: format!(
				"environment variable name contains control character at position {}",
				pos
			),
		});
	}

	if name.contains('=') {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: "environment variable name must not contain '='".to_string(),
		});
	}

	Ok(())
}

/// Environment variable errors
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("Failed to parse environment variable '{key}' (value length: {value_len}): {error}")]
	ParseError {
		key: String,
		/// Length of the rejected value; the value itself is never echoed
		value_len: usize,
		error: String,
	},

	#[error("Invalid environment variable name '{name}': {reason}")]
	InvalidVariableName { name: String, reason: String },
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_key_name_with_prefix() {
		// Arrange
		let env = Env::new().with_prefix("APP_");

		// Act
		let key = env.key_name("DEBUG");

		// Assert
		assert_eq!(key, "APP_DEBUG");
	}

	#[rstest]
	fn test_key_name_without_prefix() {
		assert_eq!(Env::new().key_name("DEBUG"), "DEBUG");
	}

	#[rstest]
	#[case("")]
	#[case("BAD=NAME")]
	#[case("BAD\nNAME")]
	fn test_invalid_variable_names_rejected(#[case] name: &str) {
		// Act
		let result = validate_env_var_name(name);

		// Assert
		assert!(matches!(
			result,
			Err(EnvError::InvalidVariableName { .. })
		));
	}

	#[rstest]
	fn test_unset_variable_is_none() {
		// Arrange
		let env = Env::new().with_prefix("VITRINA_UNIT_TEST_NEVER_SET_");

		// Act
		let value: Option<u64> = env.parse_opt("VALUE").unwrap();

		// Assert
		assert!(value.is_none());
	}
}
