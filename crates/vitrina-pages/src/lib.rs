//! Client-side behaviour for Vitrina sites
//!
//! The centrepiece is [`FormController`], which owns the contact form's
//! validity state and drives the submission lifecycle:
//!
//! ```text
//!            input events                     submit()
//!  views ──────────────────▶ ContactForm ──────────────────▶ Submitter
//!    ▲    (all fields re-     (vitrina-forms)                   │
//!    │     validated)                                           │
//!    └──── labels, classes, error text ◀──── SubmissionState ◀──┘
//!          Idle → Submitting → Submitted → Idle   (or → Failed)
//! ```
//!
//! Everything the controller touches is injected: field views, the submit
//! control, the submitter and the timer. The same controller therefore runs in
//! the browser (see `dom`, `wasm32` only) and headless against the in-memory
//! views in [`view::memory`].
//!
//! Smaller behaviours from the site live alongside it: [`theme`] (persisted
//! dark/light preference), [`counter`] (animated counters) and [`navbar`]
//! (scrolled state).
//!
//! ## Example
//!
//! ```
//! use vitrina_forms::FieldKind;
//! use vitrina_pages::prelude::*;
//!
//! let submit = MemorySubmitControl::new();
//! let elements = FormElements::new(
//!     Box::new(MemoryFieldView::new()),
//!     Box::new(MemoryFieldView::new()),
//!     Box::new(MemoryFieldView::new()),
//!     Box::new(submit.clone()),
//! );
//! let controller = FormController::new(
//!     elements,
//!     SimulatedSubmitter::new(TokioTimer, std::time::Duration::from_millis(0)),
//!     TokioTimer,
//!     ControllerConfig::default(),
//! );
//!
//! controller.input(FieldKind::Name, "Al");
//! assert!(submit.is_disabled());
//! assert_eq!(submit.label(), "Enviar");
//! ```

pub mod controller;
pub mod counter;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod navbar;
pub mod platform;
pub mod submit;
pub mod theme;
pub mod timer;
pub mod view;

pub use controller::{
	ControllerConfig, ControllerError, FormController, FormElements, SubmissionState,
};
pub use counter::CounterAnimation;
pub use navbar::NavbarState;
pub use platform::MaybeSend;
pub use submit::{SimulatedSubmitter, SubmitError, Submitter};
pub use theme::{MemoryStore, PreferenceStore, StoreError, Theme, ThemeToggle};
#[cfg(target_arch = "wasm32")]
pub use timer::BrowserTimer;
pub use timer::Timer;
#[cfg(not(target_arch = "wasm32"))]
pub use timer::TokioTimer;
pub use view::{FeedbackTone, FeedbackView, FieldView, SubmitControl};

/// Commonly used types
pub mod prelude {
	pub use crate::controller::{
		ControllerConfig, ControllerError, FormController, FormElements, SubmissionState,
	};
	pub use crate::submit::{SimulatedSubmitter, SubmitError, Submitter};
	#[cfg(target_arch = "wasm32")]
	pub use crate::timer::BrowserTimer;
	pub use crate::timer::Timer;
	#[cfg(not(target_arch = "wasm32"))]
	pub use crate::timer::TokioTimer;
	pub use crate::view::memory::{MemoryFeedback, MemoryFieldView, MemorySubmitControl};
	pub use crate::view::{FeedbackTone, FeedbackView, FieldView, SubmitControl};
}
