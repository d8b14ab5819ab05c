//! Contact form validation
//!
//! Pure field validation and validity aggregation from `vitrina-forms`. No
//! document access; see [`crate::pages`] for presentation.
//!
//! # Examples
//!
//! ```
//! use vitrina::forms::{FieldKind, validate};
//!
//! assert!(validate(FieldKind::Email, "ana@ex.com").valid);
//! assert_eq!(
//!     validate(FieldKind::Name, "Al").message,
//!     "El nombre debe tener mínimo 3 caracteres"
//! );
//! ```

pub use vitrina_forms::*;
