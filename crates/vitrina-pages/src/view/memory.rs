//! In-memory views
//!
//! Each view is a cheap handle over shared state, so a test can keep a clone
//! and inspect what the controller rendered.

use super::{FeedbackTone, FeedbackView, FieldView, SubmitControl};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
	state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Rendered state of a [`MemoryFieldView`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldViewState {
	pub value: String,
	pub classes: BTreeSet<String>,
	pub error_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFieldView {
	state: Arc<Mutex<FieldViewState>>,
}

impl MemoryFieldView {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_value(value: impl Into<String>) -> Self {
		let view = Self::new();
		lock(&view.state).value = value.into();
		view
	}

	/// Simulate the user typing: replace the value without notifying anyone
	pub fn type_text(&self, value: impl Into<String>) {
		lock(&self.state).value = value.into();
	}

	pub fn snapshot(&self) -> FieldViewState {
		lock(&self.state).clone()
	}

	pub fn has_class(&self, class: &str) -> bool {
		lock(&self.state).classes.contains(class)
	}

	pub fn error_text(&self) -> String {
		lock(&self.state).error_text.clone()
	}
}

impl FieldView for MemoryFieldView {
	fn value(&self) -> String {
		lock(&self.state).value.clone()
	}

	fn set_value(&self, value: &str) {
		lock(&self.state).value = value.to_string();
	}

	fn add_class(&self, class: &str) {
		lock(&self.state).classes.insert(class.to_string());
	}

	fn remove_class(&self, class: &str) {
		lock(&self.state).classes.remove(class);
	}

	fn set_error_text(&self, text: &str) {
		lock(&self.state).error_text = text.to_string();
	}
}

/// Rendered state of a [`MemorySubmitControl`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitControlState {
	pub label: String,
	pub disabled: bool,
	pub classes: BTreeSet<String>,
	/// Every label ever set, oldest first
	pub label_history: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MemorySubmitControl {
	state: Arc<Mutex<SubmitControlState>>,
}

impl MemorySubmitControl {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn label(&self) -> String {
		lock(&self.state).label.clone()
	}

	pub fn is_disabled(&self) -> bool {
		lock(&self.state).disabled
	}

	pub fn has_class(&self, class: &str) -> bool {
		lock(&self.state).classes.contains(class)
	}

	pub fn label_history(&self) -> Vec<String> {
		lock(&self.state).label_history.clone()
	}

	pub fn snapshot(&self) -> SubmitControlState {
		lock(&self.state).clone()
	}
}

impl SubmitControl for MemorySubmitControl {
	fn set_label(&self, label: &str) {
		let mut state = lock(&self.state);
		state.label = label.to_string();
		state.label_history.push(label.to_string());
	}

	fn set_disabled(&self, disabled: bool) {
		lock(&self.state).disabled = disabled;
	}

	fn add_class(&self, class: &str) {
		lock(&self.state).classes.insert(class.to_string());
	}

	fn remove_class(&self, class: &str) {
		lock(&self.state).classes.remove(class);
	}
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFeedback {
	state: Arc<Mutex<(String, Option<FeedbackTone>)>>,
}

impl MemoryFeedback {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn text(&self) -> String {
		lock(&self.state).0.clone()
	}

	pub fn tone(&self) -> Option<FeedbackTone> {
		lock(&self.state).1
	}
}

impl FeedbackView for MemoryFeedback {
	fn set_text(&self, text: &str) {
		lock(&self.state).0 = text.to_string();
	}

	fn set_tone(&self, tone: Option<FeedbackTone>) {
		lock(&self.state).1 = tone;
	}
}
