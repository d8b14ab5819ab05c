//! Client-side page behaviour
//!
//! The contact form controller and its view traits, plus theme, counter and
//! navbar state. On `wasm32` the `dom` module binds all of it to the current
//! document.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vitrina::pages::dom::{ContactFormIds, attach_contact_form};
//! use vitrina::Settings;
//!
//! let controller = attach_contact_form(&ContactFormIds::default(), &Settings::default())?;
//! ```

pub use vitrina_pages::*;
