//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a fixed full-viewport canvas behind the page and runs
//! a self-rescheduling `requestAnimationFrame` loop that gates to 60fps and
//! ticks the [`ParticleField`]. The window `resize` event re-initializes the
//! field. With reduced motion the loop paints one frame and stops.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::ParticleField;
use super::frame::{FrameClock, LoopPolicy};
use super::quality::QualityTier;
use crate::error::SurfaceError;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type EventCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Bundles the simulation with the canvas it paints and loop bookkeeping.
struct StarfieldContext {
	field: ParticleField<SmallRng>,
	clock: FrameClock,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	policy: LoopPolicy,
	/// Handle of the scheduled animation frame, if any.
	pending: Option<i32>,
}

/// Shared handles the animation loop and teardown both need.
#[derive(Clone, Default)]
struct FrameLoop {
	context: Rc<RefCell<Option<StarfieldContext>>>,
	animate: FrameCallback,
	on_resize: EventCallback,
}

impl FrameLoop {
	/// Requests the next animation frame unless one is pending or the loop stopped.
	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let mut guard = self.context.borrow_mut();
		let Some(c) = guard.as_mut() else {
			return;
		};
		if c.policy.request() {
			Self::dispatch(&window, &self.animate, c);
		}
	}

	/// Hands a frame already claimed from the policy to the browser.
	fn dispatch(window: &Window, animate: &FrameCallback, c: &mut StarfieldContext) {
		c.pending = animate
			.borrow()
			.as_ref()
			.and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		if c.pending.is_none() {
			c.policy.request_failed();
		}
	}

	/// Runs one animation-frame callback. Returns whether to keep looping.
	fn frame(&self, now_ms: f64) -> bool {
		let mut guard = self.context.borrow_mut();
		let Some(c) = guard.as_mut() else {
			return false;
		};
		c.pending = None;
		if !c.policy.begin_frame() {
			return false;
		}
		let rendered = c.clock.should_render(now_ms);
		if rendered {
			c.field.tick(&mut c.ctx);
		}
		c.policy.end_frame(rendered)
	}

	fn resize(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let mut guard = self.context.borrow_mut();
		let Some(c) = guard.as_mut() else {
			return;
		};
		let (w, h) = match viewport_size() {
			Ok(size) => size,
			Err(SurfaceError::ZeroArea { width, height }) => {
				debug!("starfield: viewport collapsed to {width}x{height}");
				(0.0, 0.0)
			}
			Err(e) => {
				debug!("starfield: resize skipped: {e}");
				return;
			}
		};
		c.canvas.set_width(w as u32);
		c.canvas.set_height(h as u32);
		c.field.resize(w, h);
		// A static field still needs one frame painted at the new size.
		if c.policy.rearm() {
			Self::dispatch(&window, &self.animate, c);
		}
	}

	/// Cancels the pending frame and detaches the resize listener.
	fn shutdown(&self) {
		let window = web_sys::window();
		if let Some(ref mut c) = *self.context.borrow_mut() {
			c.policy.stop();
			if let (Some(handle), Some(win)) = (c.pending.take(), window.as_ref()) {
				let _ = win.cancel_animation_frame(handle);
			}
		}
		if let (Some(cb), Some(win)) = (self.on_resize.borrow_mut().take(), window.as_ref()) {
			let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		self.animate.borrow_mut().take();
		debug!("starfield: loop stopped");
	}
}

fn viewport_size() -> Result<(f64, f64), SurfaceError> {
	let window: Window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	if width <= 0.0 || height <= 0.0 {
		return Err(SurfaceError::ZeroArea { width, height });
	}
	Ok((width, height))
}

fn canvas_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into()
		.map_err(|_| SurfaceError::NoContext)
}

fn prefers_reduced_motion() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
		.is_some_and(|mq| mq.matches())
}

/// Sets up the context and starts the loop once the canvas is mounted.
fn start(
	frame_loop: &FrameLoop,
	canvas: HtmlCanvasElement,
	quality: QualityTier,
	reduced_motion: bool,
) -> Result<(), SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let ctx = canvas_context(&canvas)?;

	let mut field = ParticleField::new(quality, SmallRng::from_entropy());
	match viewport_size() {
		Ok((w, h)) => {
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			field.resize(w, h);
		}
		// Stay dormant until the first resize reports a real size.
		Err(e) => debug!("starfield: starting dormant: {e}"),
	}

	*frame_loop.context.borrow_mut() = Some(StarfieldContext {
		field,
		clock: FrameClock::default(),
		canvas,
		ctx,
		policy: LoopPolicy::new(reduced_motion),
		pending: None,
	});

	let resize_loop = frame_loop.clone();
	let on_resize = Closure::<dyn FnMut()>::new(move || resize_loop.resize());
	window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
	*frame_loop.on_resize.borrow_mut() = Some(on_resize);

	let anim_loop = frame_loop.clone();
	*frame_loop.animate.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
		if anim_loop.frame(now_ms) {
			anim_loop.schedule();
		}
	}));
	frame_loop.schedule();

	info!("starfield: started ({quality:?}, reduced motion: {reduced_motion})");
	Ok(())
}

/// Renders the animated starfield behind the page.
///
/// `reduced_motion` overrides the `prefers-reduced-motion` media query when set.
#[component]
pub fn Starfield(
	#[prop(default = QualityTier::Medium)] quality: QualityTier,
	#[prop(default = None)] reduced_motion: Option<bool>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = FrameLoop::default();
	let frame_loop_init = frame_loop.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			debug!("starfield: {}", SurfaceError::NoCanvas);
			return;
		};
		if frame_loop_init.context.borrow().is_some() {
			return;
		}
		let reduced = reduced_motion.unwrap_or_else(prefers_reduced_motion);
		if let Err(e) = start(&frame_loop_init, canvas.into(), quality, reduced) {
			debug!("starfield: not started: {e}");
		}
	});

	let teardown = StoredValue::new_local(frame_loop);
	on_cleanup(move || {
		let _ = teardown.try_with_value(FrameLoop::shutdown);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -10; display: block;"
		/>
	}
}
