//! Quality tiers controlling star density and shooting-star rarity.

use serde::Deserialize;

/// Named density preset for the starfield.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
	Low,
	#[default]
	Medium,
	High,
}

/// Concrete numbers behind a [`QualityTier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierSettings {
	/// Stars created on every (re)initialization.
	pub star_count: usize,
	/// Number of parallax layers; star layers fall in `0..layers`.
	pub layers: u32,
	/// Probability of spawning one shooting star per executed frame.
	pub shooting_star_chance: f64,
}

impl QualityTier {
	pub fn settings(self) -> TierSettings {
		match self {
			QualityTier::Low => TierSettings {
				star_count: 100,
				layers: 2,
				shooting_star_chance: 0.0001,
			},
			QualityTier::Medium => TierSettings {
				star_count: 200,
				layers: 3,
				shooting_star_chance: 0.0003,
			},
			QualityTier::High => TierSettings {
				star_count: 400,
				layers: 4,
				shooting_star_chance: 0.0005,
			},
		}
	}
}
