//! Navbar scroll state

use vitrina_conf::NavbarSettings;

/// Class applied to the navbar once the page is scrolled past the threshold
pub const NAV_SCROLL_CLASS: &str = "nav-scroll";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
	threshold: f64,
	scrolled: bool,
}

impl NavbarState {
	pub fn new(threshold: f64) -> Self {
		Self {
			threshold,
			scrolled: false,
		}
	}

	pub fn from_settings(settings: &NavbarSettings) -> Self {
		Self::new(settings.scroll_threshold)
	}

	/// Record a scroll position
	///
	/// Returns the new flag when it changed, `None` otherwise.
	pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
		let scrolled = scroll_y > self.threshold;
		if scrolled == self.scrolled {
			return None;
		}
		self.scrolled = scrolled;
		Some(scrolled)
	}

	pub fn is_scrolled(&self) -> bool {
		self.scrolled
	}
}

impl Default for NavbarState {
	fn default() -> Self {
		Self::from_settings(&NavbarSettings::default())
	}
}
