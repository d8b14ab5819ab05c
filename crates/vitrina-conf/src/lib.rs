//! # Settings Module
//!
//! Configuration for Vitrina sites.
//!
//! Settings are layered in priority order:
//!
//! 1. Built-in defaults (the stock contact form behaviour)
//! 2. A TOML file (`Settings::load`)
//! 3. Environment variables with the `VITRINA_` prefix (`Settings::apply_env`)
//!
//! ## Example
//!
//! ```
//! use vitrina_conf::Settings;
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [form]
//!     submit_delay_ms = 500
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.form.submit_delay_ms, 500);
//! assert_eq!(settings.form.submitted_display_ms, 2000);
//! ```

pub mod env;
pub mod logging;
pub mod settings;

pub use env::{Env, EnvError};
pub use settings::{
	FeedbackMessages, FieldMessages, FormSettings, LoggingSettings, NavbarSettings, Settings,
	SettingsError, SubmitLabels, ThemeSettings,
};
