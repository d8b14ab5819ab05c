//! Settings and logging
//!
//! Re-exports `vitrina-conf` and adds [`configure`], the usual start-up
//! sequence for a host.

pub use vitrina_conf::*;

use std::path::Path;

/// Load settings from `path`, apply `VITRINA_*` overrides, validate them and
/// install the logging subscriber
///
/// A missing file yields the defaults. An already installed global subscriber
/// is kept.
pub fn configure(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
	let mut settings = Settings::load(path)?;
	settings.apply_env(&Env::vitrina())?;
	settings.validate()?;

	match logging::init_logging(&settings.logging) {
		Ok(()) => {}
		Err(SettingsError::SubscriberInstalled(reason)) => {
			tracing::debug!(%reason, "keeping existing tracing subscriber");
		}
		Err(err) => return Err(err),
	}

	Ok(settings)
}
