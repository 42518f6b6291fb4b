//! Visual theming shared by the starfield and the visualizer.
//!
//! Provides the cosmic color tokens and the starfield drawing style.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Cosmic design tokens.
#[derive(Clone, Debug)]
pub struct CosmicPalette {
	/// Deepest black, main background.
	pub void: Color,
	/// Layered backgrounds.
	pub space: Color,
	/// Cards and sections.
	pub dark: Color,
	/// Elevated surfaces; pending bars.
	pub slate: Color,
	pub white: Color,
	pub light: Color,
	pub silver: Color,
	pub subtle: Color,
	pub blue: Color,
	/// Sorted bars and status text.
	pub glow: Color,
	/// Borders and shooting stars.
	pub neon: Color,
	/// Interactive elements; bars being compared.
	pub accent: Color,
}

impl Default for CosmicPalette {
	fn default() -> Self {
		Self {
			void: Color::rgb(0x00, 0x00, 0x00),
			space: Color::rgb(0x0a, 0x0a, 0x0f),
			dark: Color::rgb(0x12, 0x12, 0x18),
			slate: Color::rgb(0x1a, 0x1a, 0x24),
			white: Color::rgb(0xff, 0xff, 0xff),
			light: Color::rgb(0xf5, 0xf5, 0xf7),
			silver: Color::rgb(0xc0, 0xc0, 0xc8),
			subtle: Color::rgb(0x80, 0x80, 0x88),
			blue: Color::rgb(0x3b, 0x82, 0xf6),
			glow: Color::rgb(0x60, 0xa5, 0xfa),
			neon: Color::rgb(0x93, 0xc5, 0xfd),
			accent: Color::rgb(0x25, 0x63, 0xeb),
		}
	}
}

/// Radial "nebula" gradient painted behind the stars.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Color at the center of the surface.
	pub inner: Color,
	/// Color at the middle stop.
	pub mid: Color,
	/// Position of the middle stop in `[0, 1]`.
	pub mid_stop: f64,
	/// Color at the gradient edge (radius = half the surface width).
	pub outer: Color,
}

/// Everything the starfield needs to paint a frame.
#[derive(Clone, Debug)]
pub struct StarfieldStyle {
	pub background: BackgroundStyle,
	/// Star fill; alpha is replaced by each star's brightness.
	pub star_color: Color,
	/// Streak head color; alpha is replaced by the streak's brightness.
	pub streak_color: Color,
	pub streak_width: f64,
}

impl Default for StarfieldStyle {
	fn default() -> Self {
		let palette = CosmicPalette::default();
		Self {
			background: BackgroundStyle {
				inner: Color::rgb(10, 10, 15),
				mid: Color::rgba(10, 10, 15, 0.98),
				mid_stop: 0.5,
				outer: palette.void,
			},
			star_color: palette.white,
			streak_color: palette.neon,
			streak_width: 2.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(0x60, 0xa5, 0xfa).to_css(), "#60a5fa");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		let c = Color::rgb(147, 197, 253).with_alpha(0.5);
		assert_eq!(c.to_css(), "rgba(147, 197, 253, 0.5)");
	}

	#[test]
	fn streaks_use_the_neon_token() {
		let style = StarfieldStyle::default();
		assert_eq!(style.streak_color, Color::rgb(147, 197, 253));
		assert_eq!(style.background.outer, Color::rgb(0, 0, 0));
	}
}
