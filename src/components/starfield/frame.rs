//! Frame-interval gating for the animation loop.
//!
//! `requestAnimationFrame` fires at the display refresh rate, which can be well
//! above 60Hz. The clock lets through at most one frame per interval and keeps
//! the remainder so the cadence does not drift.
//!
//! [`LoopPolicy`] holds the scheduling rules: at most one frame in flight,
//! reduced motion stops after the first painted frame, and a stopped loop
//! never requests another.

/// Target frames per second for the starfield.
pub const TARGET_FPS: f64 = 60.0;

/// Decides whether a frame callback should do any work.
#[derive(Clone, Debug)]
pub struct FrameClock {
	interval_ms: f64,
	last_ms: f64,
}

impl Default for FrameClock {
	fn default() -> Self {
		Self::with_fps(TARGET_FPS)
	}
}

impl FrameClock {
	pub fn with_fps(fps: f64) -> Self {
		Self {
			interval_ms: 1000.0 / fps,
			last_ms: 0.0,
		}
	}

	/// Returns true if at least one interval has passed since the last
	/// executed frame, and records `now_ms` as executed.
	pub fn should_render(&mut self, now_ms: f64) -> bool {
		let delta = now_ms - self.last_ms;
		if delta < self.interval_ms {
			return false;
		}
		self.last_ms = now_ms - (delta % self.interval_ms);
		true
	}
}

/// Scheduling bookkeeping for a self-rescheduling frame loop.
#[derive(Clone, Debug, Default)]
pub struct LoopPolicy {
	reduced_motion: bool,
	pending: bool,
	stopped: bool,
}

impl LoopPolicy {
	pub fn new(reduced_motion: bool) -> Self {
		Self {
			reduced_motion,
			..Self::default()
		}
	}

	pub fn is_stopped(&self) -> bool {
		self.stopped
	}

	/// Claims the next frame. False if one is already pending or the loop stopped.
	pub fn request(&mut self) -> bool {
		if self.stopped || self.pending {
			return false;
		}
		self.pending = true;
		true
	}

	/// The host could not schedule the frame it claimed.
	pub fn request_failed(&mut self) {
		self.pending = false;
	}

	/// A frame callback fired. Returns whether it may do any work.
	pub fn begin_frame(&mut self) -> bool {
		self.pending = false;
		!self.stopped
	}

	/// Returns whether to schedule another frame after this one.
	///
	/// Under reduced motion the loop keeps going only until a frame paints.
	pub fn end_frame(&self, rendered: bool) -> bool {
		!self.stopped && !(self.reduced_motion && rendered)
	}

	/// Called after a resize. A static field needs one frame at the new size.
	pub fn rearm(&mut self) -> bool {
		self.reduced_motion && self.request()
	}

	/// Stops the loop for good. Returns whether a frame was pending.
	pub fn stop(&mut self) -> bool {
		self.stopped = true;
		std::mem::take(&mut self.pending)
	}
}
