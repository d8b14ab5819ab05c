//! Dark/light theme preference
//!
//! The preference is persisted under a configurable key. When nothing is
//! stored, the system color-scheme preference decides. Only `"dark"` and
//! `"light"` are recognised as stored values; anything else counts as unset.

use crate::platform::MaybeSend;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use vitrina_conf::ThemeSettings;

/// Attribute set on the document root for the dark theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
	Dark,
	Light,
}

impl Theme {
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Dark => "dark",
			Theme::Light => "light",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Theme::Dark => Theme::Light,
			Theme::Light => Theme::Dark,
		}
	}

	/// Value of [`THEME_ATTRIBUTE`]; `None` means the attribute is removed
	pub fn root_attribute(self) -> Option<&'static str> {
		match self {
			Theme::Dark => Some("dark"),
			Theme::Light => None,
		}
	}

	/// Icon shown on the toggle: the theme it would switch to
	pub fn toggle_icon(self) -> &'static str {
		match self {
			Theme::Dark => "☀️",
			Theme::Light => "🌙",
		}
	}

	/// Accessible label for the toggle
	pub fn toggle_label(self) -> &'static str {
		match self {
			Theme::Dark => "Cambiar a modo claro",
			Theme::Light => "Cambiar a modo oscuro",
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
	type Err = UnknownTheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"dark" => Ok(Theme::Dark),
			"light" => Ok(Theme::Light),
			other => Err(UnknownTheme(other.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	#[error("Preference storage unavailable: {0}")]
	Unavailable(String),
}

/// Key-value store for user preferences
pub trait PreferenceStore: MaybeSend {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local [`PreferenceStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.get(key)
			.cloned()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		self.values
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Resolve the theme to apply on page load
///
/// # Examples
///
/// ```
/// use vitrina_pages::theme::{MemoryStore, PreferenceStore, Theme, initial_theme};
///
/// let store = MemoryStore::new();
/// assert_eq!(initial_theme(&store, "theme", true), Theme::Dark);
///
/// store.set("theme", "light").unwrap();
/// assert_eq!(initial_theme(&store, "theme", true), Theme::Light);
/// ```
pub fn initial_theme(store: &dyn PreferenceStore, key: &str, prefers_dark: bool) -> Theme {
	match store.get(key).map(|value| value.parse::<Theme>()) {
		Some(Ok(theme)) => theme,
		Some(Err(err)) => {
			tracing::debug!(%err, "ignoring stored theme preference");
			system_theme(prefers_dark)
		}
		None => system_theme(prefers_dark),
	}
}

fn system_theme(prefers_dark: bool) -> Theme {
	if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Current theme plus the store it persists to
pub struct ThemeToggle<P> {
	store: P,
	key: String,
	current: Theme,
}

impl<P: PreferenceStore> ThemeToggle<P> {
	pub fn new(store: P, key: impl Into<String>, prefers_dark: bool) -> Self {
		let key = key.into();
		let current = initial_theme(&store, &key, prefers_dark);
		Self { store, key, current }
	}

	pub fn from_settings(store: P, settings: &ThemeSettings, prefers_dark: bool) -> Self {
		Self::new(store, settings.storage_key.clone(), prefers_dark)
	}

	pub fn current(&self) -> Theme {
		self.current
	}

	/// Switch to the other theme and persist it
	///
	/// The new theme applies even when persisting fails.
	pub fn toggle(&mut self) -> Theme {
		let next = self.current.toggled();
		if let Err(err) = self.store.set(&self.key, next.as_str()) {
			tracing::warn!(%err, theme = %next, "failed to persist theme preference");
		}
		tracing::info!(from = %self.current, to = %next, "theme toggled");
		self.current = next;
		next
	}
}
