//! Ambient starfield simulation: drifting parallax stars and rare shooting stars.
//!
//! The field owns every particle and its own RNG. One call to
//! [`ParticleField::tick`] executes one frame: paint the background, advance
//! and draw each star, maybe spawn a shooting star, then advance, draw and
//! expire the active shooting stars.

use std::f64::consts::FRAC_PI_4;

use rand::Rng;

use super::quality::{QualityTier, TierSettings};
use super::render::Surface;
use crate::components::theme::StarfieldStyle;

/// Extra speed per parallax layer; layer 0 is the farthest and slowest.
const PARALLAX_STEP: f64 = 0.3;

/// Per-star, per-frame probability of resampling brightness.
const TWINKLE_CHANCE: f64 = 0.01;

/// Life lost by a shooting star on every executed frame.
const STREAK_DECAY: f64 = 0.01;

/// A background star. Only `y`, `x` (on wrap) and `brightness` change after creation.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub speed: f64,
	pub layer: u32,
	pub brightness: f64,
}

impl Star {
	fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, layers: u32) -> Self {
		Self {
			x: rng.gen_range(0.0..width),
			y: rng.gen_range(0.0..height),
			size: rng.gen_range(0.5..2.5),
			speed: rng.gen_range(0.1..0.6),
			layer: rng.gen_range(0..layers.max(1)),
			brightness: random_brightness(rng),
		}
	}

	/// Vertical displacement per frame, including the parallax boost.
	pub fn velocity(&self) -> f64 {
		self.speed * (1.0 + f64::from(self.layer) * PARALLAX_STEP)
	}
}

/// A short-lived streak that fades out over roughly 100 frames.
#[derive(Clone, Debug)]
pub struct ShootingStar {
	pub x: f64,
	pub y: f64,
	pub length: f64,
	pub speed: f64,
	pub angle: f64,
	pub brightness: f64,
	pub life: f64,
}

impl ShootingStar {
	fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
		Self {
			x: rng.gen_range(0.0..width),
			y: rng.gen_range(0.0..height / 2.0),
			length: rng.gen_range(40.0..120.0),
			speed: rng.gen_range(10.0..20.0),
			angle: FRAC_PI_4 + rng.gen_range(0.0..0.4),
			brightness: 1.0,
			life: 1.0,
		}
	}

	/// Position of the faded end of the trail.
	pub fn tail(&self) -> (f64, f64) {
		(
			self.x - self.angle.cos() * self.length,
			self.y - self.angle.sin() * self.length,
		)
	}

	/// Advances one frame. Returns false once the streak has burned out.
	fn advance(&mut self) -> bool {
		self.x += self.angle.cos() * self.speed;
		self.y += self.angle.sin() * self.speed;
		self.life -= STREAK_DECAY;
		self.brightness = self.life;
		self.life > 0.0
	}
}

fn random_brightness<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	rng.gen_range(0.5..1.0)
}

/// Owns and simulates the starfield for one viewport.
///
/// A field with a zero-area viewport is dormant: it holds no stars and
/// [`tick`](Self::tick) does nothing.
#[derive(Debug)]
pub struct ParticleField<R> {
	settings: TierSettings,
	style: StarfieldStyle,
	width: f64,
	height: f64,
	stars: Vec<Star>,
	shooting_stars: Vec<ShootingStar>,
	rng: R,
}

impl<R: Rng> ParticleField<R> {
	pub fn new(tier: QualityTier, rng: R) -> Self {
		Self {
			settings: tier.settings(),
			style: StarfieldStyle::default(),
			width: 0.0,
			height: 0.0,
			stars: Vec::new(),
			shooting_stars: Vec::new(),
			rng,
		}
	}

	/// Discards every star and recreates the full set for the new viewport.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.stars.clear();
		self.shooting_stars.clear();

		if self.is_dormant() {
			log::debug!("starfield: dormant at {width}x{height}");
			return;
		}

		let layers = self.settings.layers;
		let rng = &mut self.rng;
		self.stars = (0..self.settings.star_count)
			.map(|_| Star::random(rng, width, height, layers))
			.collect();
		log::debug!(
			"starfield: {} stars across {} layers at {width}x{height}",
			self.stars.len(),
			layers
		);
	}

	pub fn is_dormant(&self) -> bool {
		!(self.width > 0.0 && self.height > 0.0)
	}

	/// Executes one frame, painting onto `surface`.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		if self.is_dormant() {
			return;
		}
		let (width, height) = (self.width, self.height);

		surface.fill_background(width, height, &self.style.background);

		let star_color = self.style.star_color;
		for star in &mut self.stars {
			star.y += star.velocity();
			if star.y >= height {
				star.y = 0.0;
				star.x = self.rng.gen_range(0.0..width);
			}

			surface.fill_circle(star.x, star.y, star.size, star_color.with_alpha(star.brightness));

			if self.rng.gen_bool(TWINKLE_CHANCE) {
				star.brightness = random_brightness(&mut self.rng);
			}
		}

		if self.rng.gen_bool(self.settings.shooting_star_chance) {
			let streak = ShootingStar::random(&mut self.rng, width, height);
			log::trace!("starfield: shooting star at ({:.0}, {:.0})", streak.x, streak.y);
			self.shooting_stars.push(streak);
		}

		let (streak_color, streak_width) = (self.style.streak_color, self.style.streak_width);
		self.shooting_stars.retain_mut(|streak| {
			if !streak.advance() {
				return false;
			}
			surface.stroke_streak(
				(streak.x, streak.y),
				streak.tail(),
				streak_color.with_alpha(streak.brightness),
				streak_width,
			);
			true
		});
	}

	pub fn settings(&self) -> &TierSettings {
		&self.settings
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn stars(&self) -> &[Star] {
		&self.stars
	}

	pub fn shooting_stars(&self) -> &[ShootingStar] {
		&self.shooting_stars
	}

	#[cfg(test)]
	fn without_spawns(mut self) -> Self {
		self.settings.shooting_star_chance = 0.0;
		self
	}

	#[cfg(test)]
	fn push_shooting_star(&mut self, streak: ShootingStar) {
		self.shooting_stars.push(streak);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::theme::{BackgroundStyle, Color};

	/// Counts draw calls instead of painting.
	#[derive(Default)]
	struct RecordingSurface {
		backgrounds: usize,
		circles: Vec<(f64, f64, f64, f64)>,
		streaks: Vec<((f64, f64), (f64, f64), f64)>,
	}

	impl Surface for RecordingSurface {
		fn fill_background(&mut self, _width: f64, _height: f64, _style: &BackgroundStyle) {
			self.backgrounds += 1;
		}

		fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: Color) {
			self.circles.push((x, y, r, color.a));
		}

		fn stroke_streak(&mut self, head: (f64, f64), tail: (f64, f64), color: Color, _width: f64) {
			self.streaks.push((head, tail, color.a));
		}
	}

	fn field(tier: QualityTier, seed: u64) -> ParticleField<StdRng> {
		ParticleField::new(tier, StdRng::seed_from_u64(seed))
	}

	fn streak_at(x: f64, y: f64) -> ShootingStar {
		ShootingStar {
			x,
			y,
			length: 80.0,
			speed: 15.0,
			angle: FRAC_PI_4,
			brightness: 1.0,
			life: 1.0,
		}
	}

	#[test]
	fn resize_creates_tier_count_inside_viewport() {
		for tier in [QualityTier::Low, QualityTier::Medium, QualityTier::High] {
			let mut f = field(tier, 7);
			f.resize(800.0, 600.0);
			let settings = tier.settings();
			assert_eq!(f.stars().len(), settings.star_count);
			for s in f.stars() {
				assert!((0.0..800.0).contains(&s.x));
				assert!((0.0..600.0).contains(&s.y));
				assert!((0.5..2.5).contains(&s.size));
				assert!((0.1..0.6).contains(&s.speed));
				assert!(s.layer < settings.layers);
				assert!((0.5..1.0).contains(&s.brightness));
			}
		}
	}

	#[test]
	fn resize_replaces_the_whole_set() {
		let mut f = field(QualityTier::Low, 1);
		f.resize(800.0, 600.0);
		f.resize(100.0, 50.0);
		assert_eq!(f.stars().len(), 100);
		assert!(f.stars().iter().all(|s| s.x < 100.0 && s.y < 50.0));
	}

	#[test]
	fn zero_area_viewport_is_a_silent_noop() {
		let mut f = field(QualityTier::High, 3);
		f.resize(0.0, 600.0);
		assert!(f.is_dormant());
		assert!(f.stars().is_empty());

		let mut surface = RecordingSurface::default();
		f.tick(&mut surface);
		assert_eq!(surface.backgrounds, 0);
		assert!(surface.circles.is_empty());
	}

	#[test]
	fn every_frame_paints_background_then_each_star() {
		let mut f = field(QualityTier::Medium, 11);
		f.resize(640.0, 480.0);
		let mut surface = RecordingSurface::default();
		for _ in 0..5 {
			f.tick(&mut surface);
		}
		assert_eq!(surface.backgrounds, 5);
		assert_eq!(surface.circles.len(), 5 * 200);
		assert!(surface.circles.iter().all(|&(_, _, _, a)| (0.5..1.0).contains(&a)));
	}

	#[test]
	fn stars_stay_inside_the_viewport_forever() {
		let mut f = field(QualityTier::High, 42);
		f.resize(320.0, 40.0);
		let mut surface = RecordingSurface::default();
		for _ in 0..2_000 {
			f.tick(&mut surface);
			for s in f.stars() {
				assert!((0.0..40.0).contains(&s.y), "y = {}", s.y);
				assert!((0.0..320.0).contains(&s.x));
			}
		}
		assert_eq!(f.stars().len(), 400);
	}

	#[test]
	fn nearer_layers_fall_faster() {
		let star = |layer| Star {
			x: 0.0,
			y: 0.0,
			size: 1.0,
			speed: 0.5,
			layer,
			brightness: 1.0,
		};
		assert_eq!(star(0).velocity(), 0.5);
		assert!((star(3).velocity() - 0.5 * 1.9).abs() < 1e-12);
	}

	#[test]
	fn shooting_star_fades_and_is_dropped_when_spent() {
		let mut f = field(QualityTier::Low, 5).without_spawns();
		f.resize(10_000.0, 10_000.0);
		f.push_shooting_star(streak_at(0.0, 0.0));

		let mut last_life = 1.0;
		let mut frames = 0;
		while !f.shooting_stars().is_empty() {
			let mut surface = RecordingSurface::default();
			f.tick(&mut surface);
			frames += 1;
			if let Some(s) = f.shooting_stars().first() {
				assert!(s.life < last_life);
				assert!(s.life > 0.0);
				assert_eq!(s.brightness, s.life);
				last_life = s.life;
			}
			assert!(frames <= 101, "streak outlived its life");
		}
		assert!((99..=101).contains(&frames));
	}

	#[test]
	fn shooting_star_moves_along_its_angle_and_trails_behind() {
		let mut f = field(QualityTier::Low, 9).without_spawns();
		f.resize(10_000.0, 10_000.0);
		f.push_shooting_star(streak_at(100.0, 100.0));

		let mut surface = RecordingSurface::default();
		f.tick(&mut surface);

		let s = &f.shooting_stars()[0];
		let step = 15.0 * FRAC_PI_4.cos();
		assert!((s.x - (100.0 + step)).abs() < 1e-9);
		assert!((s.y - (100.0 + step)).abs() < 1e-9);
		assert!((s.life - 0.99).abs() < 1e-12);

		let (head, tail, alpha) = surface.streaks[0];
		assert_eq!(head, (s.x, s.y));
		assert!(tail.0 < head.0 && tail.1 < head.1);
		let len = ((head.0 - tail.0).powi(2) + (head.1 - tail.1).powi(2)).sqrt();
		assert!((len - 80.0).abs() < 1e-9);
		assert!((alpha - 0.99).abs() < 1e-12);
	}

	#[test]
	fn a_streak_on_its_last_frame_is_removed_without_drawing() {
		let mut f = field(QualityTier::Low, 13).without_spawns();
		f.resize(10_000.0, 10_000.0);
		f.push_shooting_star(ShootingStar {
			life: 0.005,
			..streak_at(0.0, 0.0)
		});
		let mut surface = RecordingSurface::default();
		f.tick(&mut surface);
		assert!(surface.streaks.is_empty());
		assert!(f.shooting_stars().is_empty());
	}

	#[test]
	fn collapsing_a_live_field_to_zero_area_silences_it() {
		let mut f = field(QualityTier::Medium, 21).without_spawns();
		f.resize(800.0, 600.0);
		f.push_shooting_star(streak_at(10.0, 10.0));

		f.resize(0.0, 0.0);
		assert!(f.is_dormant());
		assert!(f.stars().is_empty());
		assert!(f.shooting_stars().is_empty());

		let mut surface = RecordingSurface::default();
		f.tick(&mut surface);
		assert_eq!(surface.backgrounds, 0);
		assert!(surface.circles.is_empty());
		assert!(surface.streaks.is_empty());
	}

	#[test]
	fn spawned_streaks_start_in_the_top_half() {
		let mut f = field(QualityTier::High, 21);
		f.resize(1_000.0, 800.0);
		let mut rng = StdRng::seed_from_u64(99);
		for _ in 0..500 {
			let s = ShootingStar::random(&mut rng, f.width(), f.height());
			assert!((0.0..1_000.0).contains(&s.x));
			assert!((0.0..400.0).contains(&s.y));
			assert!((40.0..120.0).contains(&s.length));
			assert!((10.0..20.0).contains(&s.speed));
			assert!((FRAC_PI_4..FRAC_PI_4 + 0.4).contains(&s.angle));
			assert_eq!(s.life, 1.0);
		}
	}
}
