//! Form validation for Vitrina contact forms
//!
//! This crate holds the pure half of the contact form:
//! - Field kinds and per-field validation results
//! - Configurable validators (minimum length, email pattern)
//! - The validity aggregator, which re-validates every field on every change
//! - Read-only bound-field views for presentation layers
//!
//! It never touches a document. Presentation and the submission lifecycle live
//! in `vitrina-pages`.
//!
//! ## Example
//!
//! ```
//! use vitrina_forms::{ContactForm, FieldKind};
//!
//! let mut form = ContactForm::new();
//! form.set_value(FieldKind::Name, "Ana");
//! form.set_value(FieldKind::Email, "ana@ex.com");
//! let snapshot = form.set_value(FieldKind::Message, "hello there");
//!
//! assert!(snapshot.valid);
//! ```

pub mod bound_field;
pub mod field;
pub mod form;
pub mod validators;

pub use bound_field::{BoundField, INVALID_CLASS, VALID_CLASS};
pub use field::{FieldError, FieldKind, FieldResult, ValidationResult, Validity};
pub use form::{ContactForm, ContactSubmission, FormSnapshot};
pub use validators::{EmailValidator, FieldRules, MinLengthValidator, trim_input, validate};
