//! Page configuration read from the host document.

use serde::Deserialize;

use crate::components::array_visualizer::sequencer::DEFAULT_VALUES;
use crate::components::starfield::QualityTier;

/// Options a page can set through a `<script id="page-config">` JSON block.
/// Every field is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
	/// Starfield density preset.
	pub quality: QualityTier,
	/// Array shown before the first "Random" click. Empty means the default.
	pub initial_array: Vec<u32>,
	/// Forces reduced motion on or off instead of asking the browser.
	pub reduced_motion: Option<bool>,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			quality: QualityTier::default(),
			initial_array: DEFAULT_VALUES.to_vec(),
			reduced_motion: None,
		}
	}
}

impl PageConfig {
	/// Parses config JSON, repairing values that would leave nothing to show.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		let mut config: Self = serde_json::from_str(json)?;
		if config.initial_array.is_empty() {
			config.initial_array = DEFAULT_VALUES.to_vec();
		}
		Ok(config)
	}
}
