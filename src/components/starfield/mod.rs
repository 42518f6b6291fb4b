//! Animated starfield background.
//!
//! Renders drifting stars on a full-viewport canvas with:
//! - Depth layers that fall at different speeds (parallax)
//! - Random twinkling
//! - Rare shooting stars that fade out over about a second and a half
//! - Density presets via [`QualityTier`]
//! - A single static frame when the user prefers reduced motion
//!
//! # Example
//!
//! ```ignore
//! view! { <Starfield quality=QualityTier::High /> }
//! ```

mod component;
pub mod field;
pub mod frame;
pub mod quality;
pub mod render;

pub use component::Starfield;
pub use field::{ParticleField, ShootingStar, Star};
pub use quality::{QualityTier, TierSettings};
pub use render::Surface;
