//! Leptos component showing the sequencer as a row of bars.
//!
//! The sequencer lives in a local `StoredValue` shared with the timer chain;
//! every publish is copied into a signal the view reads. Steps with a delay
//! are resumed with `set_timeout`, zero-delay steps run straight through.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use log::info;

use super::sequencer::{SortSequencer, SortSnapshot, StepKind};
use crate::components::chrome::Card;
use crate::components::theme::{Color, CosmicPalette};

type SequencerHandle = StoredValue<SortSequencer, LocalStorage>;

/// Bar fill: sorted wins over comparing, anything else is pending.
pub fn bar_color(snapshot: &SortSnapshot, index: usize, palette: &CosmicPalette) -> Color {
	if snapshot.is_sorted(index) {
		palette.glow
	} else if snapshot.is_comparing(index) {
		palette.accent
	} else {
		palette.slate
	}
}

/// Bar height as a percentage of the tallest value.
pub fn bar_height_percent(value: u32, max: u32) -> f64 {
	if max == 0 {
		return 0.0;
	}
	f64::from(value) / f64::from(max) * 100.0
}

pub fn status_message(snapshot: &SortSnapshot) -> Option<&'static str> {
	if snapshot.is_animating {
		Some("Sorting in progress...")
	} else if snapshot.is_complete() {
		Some("Array sorted!")
	} else {
		None
	}
}

/// Advances the running animation until it needs to wait or finishes.
fn pump(sequencer: SequencerHandle, snapshot: RwSignal<SortSnapshot>) {
	loop {
		// The handle is gone once the component unmounts mid-run.
		let Some(step) = sequencer.try_update_value(SortSequencer::advance).flatten() else {
			return;
		};
		let delay = step.delay;
		let finished = step.kind == StepKind::Finished;
		snapshot.set(step.snapshot);

		if finished {
			info!("sequencer: animation finished");
			return;
		}
		if !delay.is_zero() {
			set_timeout(move || pump(sequencer, snapshot), delay);
			return;
		}
	}
}

/// Animated bubble-sort visualizer with "Random" and "Bubble Sort" controls.
///
/// Both controls are disabled while an animation runs; the sequencer also
/// ignores them, so a stale click cannot disturb the run in flight.
#[component]
pub fn ArrayVisualizer(
	#[prop(optional)] initial: Option<Vec<u32>>,
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	let sequencer: SequencerHandle = StoredValue::new_local(
		initial
			.filter(|v| !v.is_empty())
			.map(SortSequencer::new)
			.unwrap_or_default(),
	);
	let snapshot = RwSignal::new(sequencer.with_value(SortSequencer::snapshot));
	let palette = CosmicPalette::default();

	let on_random = move |_| {
		let replaced = sequencer
			.try_update_value(|seq| seq.randomize(&mut rand::thread_rng()).then(|| seq.snapshot()))
			.flatten();
		if let Some(next) = replaced {
			snapshot.set(next);
		}
	};

	let on_sort = move |_| {
		let started = sequencer.try_update_value(SortSequencer::start_sort).flatten();
		if let Some(step) = started {
			snapshot.set(step.snapshot);
			pump(sequencer, snapshot);
		}
	};

	let animating = move || snapshot.with(|s| s.is_animating);

	let bars = move || {
		let snap = snapshot.get();
		let max = snap.max_value();
		snap.values
			.iter()
			.enumerate()
			.map(|(i, &value)| {
				let style = format!(
					"flex: 1; height: {:.2}%; background: {}; border-radius: 0.5rem 0.5rem 0 0; position: relative; transition: height 0.3s;",
					bar_height_percent(value, max),
					bar_color(&snap, i, &palette).to_css(),
				);
				view! {
					<div class="array-bar" style=style title=value.to_string()>
						<span class="array-bar-label">{value}</span>
					</div>
				}
			})
			.collect_view()
	};

	view! {
		<Card hoverable=false class=class>
			<div class="array-visualizer">
				<div class="array-visualizer-header">
					<h2>"Array Visualizer"</h2>
					<div class="array-visualizer-controls">
						<button class="cosmic-button" on:click=on_random disabled=animating>
							"Random"
						</button>
						<button class="cosmic-button cosmic-button-accent" on:click=on_sort disabled=animating>
							"Bubble Sort"
						</button>
					</div>
				</div>
				<div
					class="array-visualizer-bars"
					style="display: flex; align-items: flex-end; gap: 0.5rem; height: 16rem;"
				>
					{bars}
				</div>
				<div class="array-visualizer-status">
					{move || snapshot.with(status_message).map(|msg| view! { <p>{msg}</p> })}
				</div>
			</div>
		</Card>
	}
}
