//! Errors raised while acquiring browser drawing resources.
//!
//! None of these are fatal. Callers log them and skip the frame, since the
//! background and visualizer are decoration around the page content.

use thiserror::Error;

/// Why a render surface could not be used this frame.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// Running outside a browser, or the window is gone.
	#[error("no global window")]
	NoWindow,
	/// The canvas node has not been mounted yet.
	#[error("canvas element not mounted")]
	NoCanvas,
	/// `getContext("2d")` returned nothing.
	#[error("2d context unavailable")]
	NoContext,
	#[error("zero-area viewport ({width}x{height})")]
	ZeroArea { width: f64, height: f64 },
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<wasm_bindgen::JsValue> for SurfaceError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Js(format!("{value:?}"))
	}
}
