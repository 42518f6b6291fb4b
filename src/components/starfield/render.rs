//! Drawing primitives for the starfield.
//!
//! The engine paints through the [`Surface`] trait so it can be driven by a
//! canvas in the browser and by a recording surface in tests. Per-call canvas
//! errors are swallowed: a bad frame is simply a missing frame.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::components::theme::{BackgroundStyle, Color};

/// Something the particle field can paint a frame onto.
pub trait Surface {
	/// Overwrite the whole `width` x `height` area with the background gradient.
	fn fill_background(&mut self, width: f64, height: f64, style: &BackgroundStyle);

	/// Fill a circle of radius `r` centered at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: Color);

	/// Stroke a line from `head` to `tail`, fading from `color` at the head to
	/// fully transparent at the tail.
	fn stroke_streak(&mut self, head: (f64, f64), tail: (f64, f64), color: Color, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn fill_background(&mut self, width: f64, height: f64, style: &BackgroundStyle) {
		let (cx, cy) = (width / 2.0, height / 2.0);
		match self.create_radial_gradient(cx, cy, 0.0, cx, cy, width / 2.0) {
			Ok(gradient) => {
				let _ = gradient.add_color_stop(0.0, &style.inner.to_css());
				let _ = gradient.add_color_stop(style.mid_stop as f32, &style.mid.to_css());
				let _ = gradient.add_color_stop(1.0, &style.outer.to_css());
				#[allow(deprecated)]
				self.set_fill_style(&gradient);
			}
			Err(_) => self.set_fill_style_str(&style.outer.to_css()),
		}
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, r, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_streak(&mut self, head: (f64, f64), tail: (f64, f64), color: Color, width: f64) {
		let gradient = self.create_linear_gradient(head.0, head.1, tail.0, tail.1);
		let _ = gradient.add_color_stop(0.0, &color.to_css());
		let _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
		#[allow(deprecated)]
		self.set_stroke_style(&gradient);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(head.0, head.1);
		self.line_to(tail.0, tail.1);
		self.stroke();
	}
}
