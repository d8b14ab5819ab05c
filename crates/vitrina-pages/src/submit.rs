//! Submission transport
//!
//! A [`Submitter`] receives the trimmed contact payload and reports success or
//! a [`SubmitError`]. The site ships without a backend, so the default
//! implementation is [`SimulatedSubmitter`], which only waits.

use crate::platform::MaybeSend;
use crate::timer::Timer;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use vitrina_conf::FormSettings;
use vitrina_forms::ContactSubmission;

/// Errors a submitter can report
///
/// Serializable so a server-backed submitter can pass them through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SubmitError {
	/// The request never reached the server
	#[error("Network error: {0}")]
	Network(String),

	/// The server answered with an error status
	#[error("Server error ({status}): {message}")]
	Server { status: u16, message: String },

	/// The server accepted the request but rejected its content
	#[error("Application error: {0}")]
	Application(String),
}

impl SubmitError {
	pub fn network(message: impl Into<String>) -> Self {
		Self::Network(message.into())
	}

	pub fn server(status: u16, message: impl Into<String>) -> Self {
		Self::Server {
			status,
			message: message.into(),
		}
	}

	pub fn application(message: impl Into<String>) -> Self {
		Self::Application(message.into())
	}
}

/// Delivers a contact submission
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait Submitter: MaybeSend {
	async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Submitter that waits a fixed delay and always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter<T> {
	timer: T,
	delay: Duration,
}

impl<T: Timer> SimulatedSubmitter<T> {
	pub fn new(timer: T, delay: Duration) -> Self {
		Self { timer, delay }
	}

	/// Use `form.submit_delay_ms` as the delay
	pub fn from_settings(timer: T, settings: &FormSettings) -> Self {
		Self::new(timer, Duration::from_millis(settings.submit_delay_ms))
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl<T: Timer> Submitter for SimulatedSubmitter<T> {
	async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
		tracing::debug!(
			delay_ms = self.delay.as_millis() as u64,
			name_len = submission.name.len(),
			email_len = submission.email.len(),
			message_len = submission.message.len(),
			"simulating contact submission"
		);
		self.timer.sleep(self.delay).await;
		Ok(())
	}
}
