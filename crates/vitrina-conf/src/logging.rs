//! Logging initialisation
//!
//! Library crates only emit `tracing` events. Hosts that want them on stderr
//! call [`init_logging`] once at startup.

use crate::settings::{LoggingSettings, SettingsError};

/// Install a global `tracing` subscriber built from the logging settings.
///
/// Returns [`SettingsError::Logging`] when the level directive or format is
/// malformed and [`SettingsError::SubscriberInstalled`] when another global
/// subscriber got there first.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(settings: &LoggingSettings) -> Result<(), SettingsError> {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_new(&settings.level)
		.map_err(|e| SettingsError::Logging(format!("invalid level '{}': {}", settings.level, e)))?;

	let builder = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr);

	let result = match settings.format.as_str() {
		"json" => builder.json().try_init(),
		"text" => builder.try_init(),
		other => {
			return Err(SettingsError::Logging(format!(
				"unsupported log format '{}'",
				other
			)));
		}
	};

	result.map_err(|e| SettingsError::SubscriberInstalled(e.to_string()))
}

/// Browser builds log through whatever subscriber the host installed.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(_settings: &LoggingSettings) -> Result<(), SettingsError> {
	Ok(())
}
