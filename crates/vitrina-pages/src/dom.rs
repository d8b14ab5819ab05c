//! Browser bindings (`wasm32` only)
//!
//! Wraps DOM elements in the view traits and wires event listeners to the
//! controllers in this crate. Listener closures are leaked with
//! `Closure::forget` and live as long as the page.

use crate::controller::{ControllerConfig, FormController, FormElements};
use crate::counter::CounterAnimation;
use crate::navbar::{NAV_SCROLL_CLASS, NavbarState};
use crate::submit::SimulatedSubmitter;
use crate::theme::{PreferenceStore, StoreError, THEME_ATTRIBUTE, Theme, ThemeToggle};
use crate::timer::BrowserTimer;
use crate::view::{FeedbackTone, FeedbackView, FieldView, SubmitControl};
use std::cell::RefCell;
use std::rc::Rc;
use vitrina_conf::{NavbarSettings, Settings, ThemeSettings};
use vitrina_forms::FieldKind;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

/// Errors raised while attaching to the document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	#[error("No global window")]
	NoWindow,

	#[error("Window has no document")]
	NoDocument,

	#[error("Missing element: #{0}")]
	MissingElement(String),

	#[error("Element #{id} is not a {expected}")]
	WrongElement { id: String, expected: &'static str },

	#[error("JavaScript error: {0}")]
	Js(String),
}

impl From<JsValue> for DomError {
	fn from(value: JsValue) -> Self {
		DomError::Js(format!("{:?}", value))
	}
}

fn document() -> Result<Document, DomError> {
	web_sys::window()
		.ok_or(DomError::NoWindow)?
		.document()
		.ok_or(DomError::NoDocument)
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, DomError> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Element ids of a contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormIds {
	pub form: String,
	pub name: String,
	pub email: String,
	pub message: String,
	pub submit: String,
	pub feedback: Option<String>,
}

impl Default for ContactFormIds {
	fn default() -> Self {
		Self {
			form: "contactForm".to_string(),
			name: FieldKind::Name.html_id().to_string(),
			email: FieldKind::Email.html_id().to_string(),
			message: FieldKind::Message.html_id().to_string(),
			submit: "submitBtn".to_string(),
			feedback: None,
		}
	}
}

impl ContactFormIds {
	fn field(&self, kind: FieldKind) -> &str {
		match kind {
			FieldKind::Name => &self.name,
			FieldKind::Email => &self.email,
			FieldKind::Message => &self.message,
		}
	}
}

/// An `<input>` or `<textarea>` plus the element right after it, which holds
/// the error text
pub struct DomFieldView {
	input: Element,
	error_slot: Option<Element>,
}

impl DomFieldView {
	pub fn new(input: Element) -> Self {
		let error_slot = input.next_element_sibling();
		Self { input, error_slot }
	}
}

impl FieldView for DomFieldView {
	fn value(&self) -> String {
		if let Some(input) = self.input.dyn_ref::<HtmlInputElement>() {
			input.value()
		} else if let Some(area) = self.input.dyn_ref::<HtmlTextAreaElement>() {
			area.value()
		} else {
			self.input.text_content().unwrap_or_default()
		}
	}

	fn set_value(&self, value: &str) {
		if let Some(input) = self.input.dyn_ref::<HtmlInputElement>() {
			input.set_value(value);
		} else if let Some(area) = self.input.dyn_ref::<HtmlTextAreaElement>() {
			area.set_value(value);
		}
	}

	fn add_class(&self, class: &str) {
		let _ = self.input.class_list().add_1(class);
	}

	fn remove_class(&self, class: &str) {
		let _ = self.input.class_list().remove_1(class);
	}

	fn set_error_text(&self, text: &str) {
		if let Some(slot) = &self.error_slot {
			slot.set_text_content(Some(text));
		}
	}
}

pub struct DomSubmitButton {
	button: HtmlButtonElement,
}

impl DomSubmitButton {
	pub fn new(button: HtmlButtonElement) -> Self {
		Self { button }
	}
}

impl SubmitControl for DomSubmitButton {
	fn set_label(&self, label: &str) {
		self.button.set_text_content(Some(label));
	}

	fn set_disabled(&self, disabled: bool) {
		self.button.set_disabled(disabled);
	}

	fn add_class(&self, class: &str) {
		let _ = self.button.class_list().add_1(class);
	}

	fn remove_class(&self, class: &str) {
		let _ = self.button.class_list().remove_1(class);
	}
}

pub struct DomFeedback {
	element: Element,
}

impl DomFeedback {
	pub fn new(element: Element) -> Self {
		Self { element }
	}
}

impl FeedbackView for DomFeedback {
	fn set_text(&self, text: &str) {
		self.element.set_text_content(Some(text));
	}

	fn set_tone(&self, tone: Option<FeedbackTone>) {
		let classes = self.element.class_list();
		let _ = classes.remove_2(FeedbackTone::Error.class(), FeedbackTone::Success.class());
		if let Some(tone) = tone {
			let _ = classes.add_1(tone.class());
		}
	}
}

/// `window.localStorage`
pub struct LocalStorageStore {
	storage: web_sys::Storage,
}

impl LocalStorageStore {
	/// `None` when storage is disabled or unavailable
	pub fn new() -> Option<Self> {
		let storage = web_sys::window()?.local_storage().ok()??;
		Some(Self { storage })
	}
}

impl PreferenceStore for LocalStorageStore {
	fn get(&self, key: &str) -> Option<String> {
		self.storage.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		self.storage
			.set_item(key, value)
			.map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
	}
}

pub type BrowserFormController = FormController<SimulatedSubmitter<BrowserTimer>, BrowserTimer>;

/// Bind a controller to the contact form in the current document
///
/// Every field gets an `input` listener; the form's `submit` event is
/// intercepted and runs [`FormController::submit`] on the local executor.
pub fn attach_contact_form(
	ids: &ContactFormIds,
	settings: &Settings,
) -> Result<BrowserFormController, DomError> {
	let document = document()?;
	let form = element_by_id(&document, &ids.form)?;

	let field_view = |kind: FieldKind| -> Result<Box<dyn FieldView>, DomError> {
		Ok(Box::new(DomFieldView::new(element_by_id(&document, ids.field(kind))?)))
	};
	let button = element_by_id(&document, &ids.submit)?
		.dyn_into::<HtmlButtonElement>()
		.map_err(|_| DomError::WrongElement {
			id: ids.submit.clone(),
			expected: "button",
		})?;

	let mut elements = FormElements::new(
		field_view(FieldKind::Name)?,
		field_view(FieldKind::Email)?,
		field_view(FieldKind::Message)?,
		Box::new(DomSubmitButton::new(button)),
	);
	if let Some(id) = &ids.feedback {
		let feedback = DomFeedback::new(element_by_id(&document, id)?);
		elements = elements.with_feedback(Box::new(feedback));
	}

	let controller = FormController::new(
		elements,
		SimulatedSubmitter::from_settings(BrowserTimer, &settings.form),
		BrowserTimer,
		ControllerConfig::from_settings(&settings.form),
	);

	for kind in FieldKind::ALL {
		let input = element_by_id(&document, ids.field(kind))?;
		let handle = controller.clone();
		let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
			handle.on_input(kind);
		}) as Box<dyn FnMut(_)>);
		input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
		closure.forget();
	}

	let handle = controller.clone();
	let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
		event.prevent_default();
		let handle = handle.clone();
		wasm_bindgen_futures::spawn_local(async move {
			if let Err(err) = handle.submit().await {
				tracing::debug!(%err, "contact form submit event ended with an error");
			}
		});
	}) as Box<dyn FnMut(_)>);
	form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
	closure.forget();

	tracing::info!(form = %ids.form, "contact form attached");
	Ok(controller)
}

fn apply_theme(root: &Element, button: &Element, theme: Theme) -> Result<(), DomError> {
	match theme.root_attribute() {
		Some(value) => root.set_attribute(THEME_ATTRIBUTE, value)?,
		None => root.remove_attribute(THEME_ATTRIBUTE)?,
	}
	button.set_text_content(Some(theme.toggle_icon()));
	button.set_attribute("aria-label", theme.toggle_label())?;
	Ok(())
}

/// Apply the stored or system theme and wire the toggle button
pub fn attach_theme_toggle(button_id: &str, settings: &ThemeSettings) -> Result<(), DomError> {
	let window = web_sys::window().ok_or(DomError::NoWindow)?;
	let document = document()?;
	let root = document
		.document_element()
		.ok_or_else(|| DomError::MissingElement("html".to_string()))?;
	let button = element_by_id(&document, button_id)?;
	let store = LocalStorageStore::new()
		.ok_or_else(|| DomError::Js("localStorage unavailable".to_string()))?;

	let prefers_dark = window
		.match_media("(prefers-color-scheme: dark)")?
		.map(|query| query.matches())
		.unwrap_or(false);

	let toggle = ThemeToggle::from_settings(store, settings, prefers_dark);
	apply_theme(&root, &button, toggle.current())?;

	let toggle = Rc::new(RefCell::new(toggle));
	let target = button.clone();
	let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
		let theme = toggle.borrow_mut().toggle();
		if let Err(err) = apply_theme(&root, &target, theme) {
			tracing::warn!(%err, "failed to apply theme");
		}
	}) as Box<dyn FnMut(_)>);
	button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Toggle the scrolled class on the first `<nav>` as the window scrolls
pub fn attach_navbar(settings: &NavbarSettings) -> Result<(), DomError> {
	let window = web_sys::window().ok_or(DomError::NoWindow)?;
	let nav = document()?
		.query_selector("nav")?
		.ok_or_else(|| DomError::MissingElement("nav".to_string()))?;

	let state = Rc::new(RefCell::new(NavbarState::from_settings(settings)));
	let scroll_window = window.clone();
	let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
		let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
		match state.borrow_mut().update(scroll_y) {
			Some(true) => {
				let _ = nav.class_list().add_1(NAV_SCROLL_CLASS);
			}
			Some(false) => {
				let _ = nav.class_list().remove_1(NAV_SCROLL_CLASS);
			}
			None => {}
		}
	}) as Box<dyn FnMut(_)>);
	window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Animate every `[data-counter]` element from zero to its attribute value
pub fn start_counters() -> Result<usize, DomError> {
	let nodes = document()?.query_selector_all("[data-counter]")?;
	let mut started = 0;

	for index in 0..nodes.length() {
		let Some(element) = nodes
			.item(index)
			.and_then(|node| node.dyn_into::<Element>().ok())
		else {
			continue;
		};
		let target = element.get_attribute("data-counter").unwrap_or_default();
		let counter = CounterAnimation::parse(&target);
		wasm_bindgen_futures::spawn_local(async move {
			counter
				.run(&BrowserTimer, |value| element.set_text_content(Some(&value.to_string())))
				.await;
		});
		started += 1;
	}

	Ok(started)
}
