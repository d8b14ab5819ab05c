//! # Vitrina
//!
//! Client-side behaviour for a static portfolio site, written once and run
//! both in the browser (`wasm32`) and natively for tests and headless hosts.
//!
//! ## Feature Flags
//!
//! - `conf` - Settings file, environment overrides and logging setup
//! - `forms` - Contact form field validation and validity aggregation
//! - `pages` - Form controller, view traits, theme, counters, navbar and
//!   browser bindings
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```
//! use vitrina::forms::{ContactForm, FieldKind};
//!
//! let mut form = ContactForm::new();
//! let snapshot = form.set_values("Ana", "ana@ex.com", "hello there");
//! assert!(snapshot.valid);
//! assert!(!form.set_value(FieldKind::Email, "ana@ex").valid);
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "conf")]
pub use conf::{Settings, SettingsError, configure};

/// Commonly used types
#[cfg(feature = "pages")]
pub mod prelude {
	pub use crate::conf::{Settings, configure};
	pub use vitrina_forms::{
		ContactForm, ContactSubmission, FieldKind, ValidationResult, Validity,
	};
	pub use vitrina_pages::prelude::*;
}
