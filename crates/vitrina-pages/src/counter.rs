//! Animated number counters
//!
//! A counter climbs from zero to its target in roughly
//! [`COUNTER_DURATION`], in equal steps, and always ends exactly on the
//! target.

use crate::timer::Timer;
use std::time::Duration;

/// Nominal length of a counter animation
pub const COUNTER_DURATION: Duration = Duration::from_millis(900);

/// Shortest interval between two frames
pub const MIN_STEP_TIME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
	target: u64,
	step: u64,
	step_time: Duration,
}

impl CounterAnimation {
	/// # Examples
	///
	/// ```
	/// use vitrina_pages::CounterAnimation;
	///
	/// let counter = CounterAnimation::new(1000);
	/// assert_eq!(counter.step_time().as_millis(), 16);
	/// assert_eq!(counter.step(), 17);
	/// assert_eq!(counter.frames().last(), Some(1000));
	/// ```
	pub fn new(target: u64) -> Self {
		let duration_ms = COUNTER_DURATION.as_millis() as f64;
		let ticks = (target as f64 / 10.0).max(1.0);
		let step_time_ms = (duration_ms / ticks).floor().max(MIN_STEP_TIME.as_millis() as f64);
		let step = (target as f64 / (duration_ms / step_time_ms)).floor().max(1.0);

		Self {
			target,
			step: step as u64,
			step_time: Duration::from_millis(step_time_ms as u64),
		}
	}

	/// Build from a `data-counter` attribute
	///
	/// Leading whitespace is skipped and the leading run of digits is used.
	/// Anything without one, including negative numbers, targets zero.
	pub fn parse(attribute: &str) -> Self {
		let digits: String = attribute
			.trim_start()
			.chars()
			.take_while(char::is_ascii_digit)
			.collect();
		Self::new(digits.parse().unwrap_or(0))
	}

	pub fn target(&self) -> u64 {
		self.target
	}

	pub fn step(&self) -> u64 {
		self.step
	}

	pub fn step_time(&self) -> Duration {
		self.step_time
	}

	/// Values displayed on each tick, in order
	pub fn frames(&self) -> impl Iterator<Item = u64> + '_ {
		let mut current = 0u64;
		let mut done = false;
		std::iter::from_fn(move || {
			if done {
				return None;
			}
			current = current.saturating_add(self.step);
			if current >= self.target {
				done = true;
				Some(self.target)
			} else {
				Some(current)
			}
		})
	}

	/// Play the animation, calling `render` once per frame
	pub async fn run<T: Timer + ?Sized>(&self, timer: &T, mut render: impl FnMut(u64)) {
		for value in self.frames() {
			timer.sleep(self.step_time).await;
			render(value);
		}
	}
}
