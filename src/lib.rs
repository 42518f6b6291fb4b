//! dsa-learn: interactive sorting visualizations over an animated starfield.
//!
//! This crate provides a WASM page that animates bubble sort step by step and
//! paints a parallax starfield with occasional shooting stars behind it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed to enable the `js` entropy backend for `rand` on wasm32.
use getrandom as _;

pub mod components;
pub mod config;
pub mod error;

use components::chrome::{Card, CardVariant, Navbar};
use components::code_panel::CodePanel;

pub use components::array_visualizer::{ArrayVisualizer, SortSequencer, SortSnapshot};
pub use components::starfield::{ParticleField, QualityTier, Starfield};
pub use config::PageConfig;

const BUBBLE_SORT_SOURCE: &str = "fn bubble_sort(values: &mut [u32]) {
    let n = values.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                // Swap elements
                values.swap(j, j + 1);
            }
        }
    }
}";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("dsa-learn: logging initialized");
}

/// Load page options from a script element with id="page-config".
/// Expected format: JSON with optional { quality, initialArray, reducedMotion }
fn load_page_config() -> Option<PageConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("page-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PageConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"dsa-learn: loaded config ({:?}, {} values)",
				config.quality,
				config.initial_array.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("dsa-learn: failed to parse page config: {}", e);
			None
		}
	}
}

#[component]
fn Feature(title: &'static str, blurb: &'static str) -> impl IntoView {
	view! {
		<Card>
			<h3 class="cosmic-feature-title">{title}</h3>
			<p class="cosmic-feature-blurb">{blurb}</p>
		</Card>
	}
}

/// Main application component.
/// Reads page config from the DOM and lays out the visualizer page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_page_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="DSA Learning - Interactive Data Structures & Algorithms" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="Learn data structures and algorithms with interactive visualizations"
		/>

		<Starfield quality=config.quality reduced_motion=config.reduced_motion />
		<Navbar />
		<main class="cosmic-main">
			<section class="cosmic-hero">
				<h1 class="cosmic-glow-text">"Master Data Structures & Algorithms"</h1>
				<p>
					"Interactive visualizations and elegant design to help you understand complex algorithms with clarity and precision."
				</p>
			</section>

			<ArrayVisualizer initial=config.initial_array class="cosmic-section" />

			<section class="cosmic-features">
				<Feature
					title="Lightning Fast"
					blurb="Smooth visualizations on every device with adaptive quality settings."
				/>
				<Feature
					title="Accessible Design"
					blurb="High contrast colors, keyboard navigation and respect for reduced motion."
				/>
				<Feature
					title="Interactive Learning"
					blurb="Step through algorithms visually and see how they work as they run."
				/>
			</section>

			<section class="cosmic-section">
				<h2>"Clean, Readable Code"</h2>
				<CodePanel
					code=BUBBLE_SORT_SOURCE
					language="rust"
					highlight_lines=vec![6, 7, 8]
					title="Bubble Sort Implementation"
				/>
			</section>

			<section class="cosmic-cta">
				<Card variant=CardVariant::Pulse hoverable=false>
					<h3>"Ready to Start Learning?"</h3>
					<p>"Explore our collection of algorithms and data structures."</p>
					<a class="cosmic-button cosmic-button-accent" href="/algorithms">
						"Get Started"
					</a>
				</Card>
			</section>
		</main>
	}
}
