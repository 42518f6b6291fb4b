//! Sorting visualizer.
//!
//! Animates bubble sort over a small array, one comparison or swap at a time:
//! - Pairs under comparison are highlighted, then swapped if out of order
//! - Settled elements are marked from the back as each pass completes
//! - "Random" and "Bubble Sort" are ignored while a run is in flight

mod component;
pub mod sequencer;

pub use component::{ArrayVisualizer, bar_color, bar_height_percent, status_message};
pub use sequencer::{SortSequencer, SortSnapshot, Step, StepKind};
