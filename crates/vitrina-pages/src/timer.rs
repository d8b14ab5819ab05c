//! Injectable delays
//!
//! The controller and the simulated submitter wait through a [`Timer`] rather
//! than calling a runtime directly, so tests can drive time with tokio's paused
//! clock and the browser build can use `setTimeout`.

use crate::platform::MaybeSend;
use std::time::Duration;

/// Asynchronous sleep
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait Timer: MaybeSend {
	async fn sleep(&self, duration: Duration);
}

/// Timer backed by `tokio::time`
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl Timer for TokioTimer {
	async fn sleep(&self, duration: Duration) {
		tokio::time::sleep(duration).await;
	}
}

/// Timer backed by the browser's `setTimeout`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl Timer for BrowserTimer {
	async fn sleep(&self, duration: Duration) {
		gloo_timers::future::sleep(duration).await;
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;

	#[tokio::test(start_paused = true)]
	async fn test_tokio_timer_advances_paused_clock() {
		// Arrange
		let start = tokio::time::Instant::now();

		// Act
		TokioTimer.sleep(Duration::from_millis(2000)).await;

		// Assert
		assert_eq!(start.elapsed(), Duration::from_millis(2000));
	}
}
