//! Step-by-step bubble sort with observable intermediate states.
//!
//! [`SortSequencer`] is a small state machine (`Idle -> Animating -> Idle`).
//! A host calls [`start_sort`](SortSequencer::start_sort) once and then keeps
//! calling [`advance`](SortSequencer::advance), waiting [`Step::delay`] after
//! each published snapshot, until a [`StepKind::Finished`] step arrives. The
//! sequencer never sleeps itself, so it can be driven by browser timers or
//! drained synchronously in tests.

use std::collections::BTreeSet;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;

/// Pause after highlighting a pair under comparison.
pub const COMPARE_DELAY: Duration = Duration::from_millis(500);

/// Pause after swapping a pair.
pub const SWAP_DELAY: Duration = Duration::from_millis(300);

/// Length of arrays produced by [`SortSequencer::randomize`].
pub const RANDOM_LEN: usize = 7;

/// Half-open range randomized values are drawn from.
pub const RANDOM_RANGE: std::ops::Range<u32> = 10..110;

/// Array shown before the user asks for a new one.
pub const DEFAULT_VALUES: [u32; 7] = [64, 34, 25, 12, 22, 11, 90];

/// What the display layer sees after each publish.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSnapshot {
	pub values: Vec<u32>,
	/// At most two adjacent indices.
	pub comparing_indices: Vec<usize>,
	pub sorted_indices: BTreeSet<usize>,
	pub is_animating: bool,
}

impl SortSnapshot {
	pub fn is_comparing(&self, index: usize) -> bool {
		self.comparing_indices.contains(&index)
	}

	pub fn is_sorted(&self, index: usize) -> bool {
		self.sorted_indices.contains(&index)
	}

	/// True once a finished run has labeled every index of a non-empty array.
	pub fn is_complete(&self) -> bool {
		!self.is_animating
			&& !self.values.is_empty()
			&& self.sorted_indices.len() == self.values.len()
	}

	pub fn max_value(&self) -> u32 {
		self.values.iter().copied().max().unwrap_or(0)
	}
}

/// Why a snapshot was published.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
	/// Animation began; labels cleared.
	Started,
	Compare { left: usize, right: usize },
	Swap { left: usize, right: usize },
	/// A pass finished and the element at `index` is final.
	Settled { index: usize },
	/// Every index is sorted and the sequencer is idle again.
	Finished,
}

/// One publish plus how long the host should wait before the next advance.
#[derive(Clone, Debug)]
pub struct Step {
	pub kind: StepKind,
	pub snapshot: SortSnapshot,
	pub delay: Duration,
}

/// Position inside the nested bubble-sort loops.
#[derive(Clone, Copy, Debug, Default)]
struct Cursor {
	/// Outer pass.
	pass: usize,
	/// Left index of the current pair.
	j: usize,
	/// Whether the pair at `j` has been published as compared.
	compared: bool,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
	Idle,
	Animating(Cursor),
}

/// Owns the array and its labels and animates bubble sort over them.
#[derive(Clone, Debug)]
pub struct SortSequencer {
	values: Vec<u32>,
	comparing: Vec<usize>,
	sorted: BTreeSet<usize>,
	phase: Phase,
}

impl Default for SortSequencer {
	fn default() -> Self {
		Self::new(DEFAULT_VALUES.to_vec())
	}
}

impl SortSequencer {
	pub fn new(values: Vec<u32>) -> Self {
		Self {
			values,
			comparing: Vec::new(),
			sorted: BTreeSet::new(),
			phase: Phase::Idle,
		}
	}

	pub fn is_animating(&self) -> bool {
		matches!(self.phase, Phase::Animating(_))
	}

	pub fn values(&self) -> &[u32] {
		&self.values
	}

	pub fn snapshot(&self) -> SortSnapshot {
		SortSnapshot {
			values: self.values.clone(),
			comparing_indices: self.comparing.clone(),
			sorted_indices: self.sorted.clone(),
			is_animating: self.is_animating(),
		}
	}

	/// Replaces the array with fresh random values and clears all labels.
	///
	/// Ignored while animating; returns whether the array was replaced.
	pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
		if self.is_animating() {
			log::debug!("sequencer: randomize ignored while animating");
			return false;
		}
		self.values = (0..RANDOM_LEN)
			.map(|_| rng.gen_range(RANDOM_RANGE))
			.collect();
		self.comparing.clear();
		self.sorted.clear();
		true
	}

	/// Begins an animation run. Returns `None` if one is already in flight.
	pub fn start_sort(&mut self) -> Option<Step> {
		if self.is_animating() {
			log::debug!("sequencer: sort ignored while animating");
			return None;
		}
		self.comparing.clear();
		self.sorted.clear();
		self.phase = Phase::Animating(Cursor::default());
		log::debug!("sequencer: sorting {:?}", self.values);
		Some(self.publish(StepKind::Started, Duration::ZERO))
	}

	/// Produces the next publish of the running animation, or `None` when idle.
	pub fn advance(&mut self) -> Option<Step> {
		let Phase::Animating(mut cursor) = self.phase else {
			return None;
		};
		let n = self.values.len();

		let step = loop {
			if cursor.pass + 1 >= n {
				break self.finish();
			}
			let pass_end = n - cursor.pass - 1;
			if cursor.j >= pass_end {
				let index = n - 1 - cursor.pass;
				self.sorted.insert(index);
				cursor = Cursor {
					pass: cursor.pass + 1,
					..Cursor::default()
				};
				self.phase = Phase::Animating(cursor);
				break self.publish(StepKind::Settled { index }, Duration::ZERO);
			}

			let (left, right) = (cursor.j, cursor.j + 1);
			if !cursor.compared {
				self.comparing = vec![left, right];
				cursor.compared = true;
				self.phase = Phase::Animating(cursor);
				break self.publish(StepKind::Compare { left, right }, COMPARE_DELAY);
			}

			cursor.j += 1;
			cursor.compared = false;
			self.phase = Phase::Animating(cursor);
			if self.values[left] > self.values[right] {
				self.values.swap(left, right);
				break self.publish(StepKind::Swap { left, right }, SWAP_DELAY);
			}
		};
		Some(step)
	}

	fn finish(&mut self) -> Step {
		self.sorted = (0..self.values.len()).collect();
		self.comparing.clear();
		self.phase = Phase::Idle;
		log::debug!("sequencer: sorted {:?}", self.values);
		self.publish(StepKind::Finished, Duration::ZERO)
	}

	fn publish(&self, kind: StepKind, delay: Duration) -> Step {
		log::trace!("sequencer: {kind:?}");
		Step {
			kind,
			snapshot: self.snapshot(),
			delay,
		}
	}

	/// Runs a whole animation without waiting, returning every publish in order.
	pub fn run_to_completion(&mut self) -> Vec<Step> {
		let Some(first) = self.start_sort() else {
			return Vec::new();
		};
		let mut steps = vec![first];
		while let Some(step) = self.advance() {
			steps.push(step);
		}
		steps
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn count(steps: &[Step], pred: impl Fn(&StepKind) -> bool) -> usize {
		steps.iter().filter(|s| pred(&s.kind)).count()
	}

	fn inversions(values: &[u32]) -> usize {
		(0..values.len())
			.flat_map(|i| (i + 1..values.len()).map(move |j| (i, j)))
			.filter(|&(i, j)| values[i] > values[j])
			.count()
	}

	#[test]
	fn default_array_sorts_with_one_swap_per_inversion() {
		let mut seq = SortSequencer::default();
		let steps = seq.run_to_completion();

		assert_eq!(count(&steps, |k| matches!(k, StepKind::Compare { .. })), 21);
		assert_eq!(count(&steps, |k| matches!(k, StepKind::Swap { .. })), 14);
		assert_eq!(inversions(&DEFAULT_VALUES), 14);

		let last = steps.last().unwrap();
		assert_eq!(last.kind, StepKind::Finished);
		assert_eq!(last.snapshot.values, vec![11, 12, 22, 25, 34, 64, 90]);
		assert_eq!(last.snapshot.sorted_indices, (0..7).collect());
		assert!(last.snapshot.comparing_indices.is_empty());
		assert!(!last.snapshot.is_animating);
		assert!(last.snapshot.is_complete());
	}

	#[test]
	fn publishes_follow_bubble_sort_order() {
		let mut seq = SortSequencer::new(vec![3, 1, 2]);
		let kinds: Vec<_> = seq.run_to_completion().into_iter().map(|s| s.kind).collect();
		assert_eq!(
			kinds,
			vec![
				StepKind::Started,
				StepKind::Compare { left: 0, right: 1 },
				StepKind::Swap { left: 0, right: 1 },
				StepKind::Compare { left: 1, right: 2 },
				StepKind::Swap { left: 1, right: 2 },
				StepKind::Settled { index: 2 },
				StepKind::Compare { left: 0, right: 1 },
				StepKind::Settled { index: 1 },
				StepKind::Finished,
			]
		);
	}

	#[test]
	fn delays_follow_each_compare_and_swap_only() {
		let mut seq = SortSequencer::default();
		for step in seq.run_to_completion() {
			let expected = match step.kind {
				StepKind::Compare { .. } => COMPARE_DELAY,
				StepKind::Swap { .. } => SWAP_DELAY,
				_ => Duration::ZERO,
			};
			assert_eq!(step.delay, expected, "{:?}", step.kind);
		}
	}

	#[test]
	fn every_intermediate_state_is_consistent() {
		let mut seq = SortSequencer::new(vec![5, 4, 3, 2, 1]);
		let steps = seq.run_to_completion();
		for step in &steps[..steps.len() - 1] {
			let snap = &step.snapshot;
			assert!(snap.is_animating);
			assert!(snap.comparing_indices.len() <= 2);
			if let &[a, b] = &snap.comparing_indices[..] {
				assert_eq!(b, a + 1);
			}
			let mut values = snap.values.clone();
			values.sort_unstable();
			assert_eq!(values, vec![1, 2, 3, 4, 5]);
		}
		// Settled indices grow from the back.
		let settled: Vec<_> = steps
			.iter()
			.filter_map(|s| match s.kind {
				StepKind::Settled { index } => Some(index),
				_ => None,
			})
			.collect();
		assert_eq!(settled, vec![4, 3, 2, 1]);
	}

	#[test]
	fn swap_count_matches_inversions_for_random_arrays() {
		let mut rng = StdRng::seed_from_u64(2024);
		for _ in 0..50 {
			let mut seq = SortSequencer::default();
			assert!(seq.randomize(&mut rng));
			let before = seq.values().to_vec();
			let steps = seq.run_to_completion();

			assert_eq!(
				count(&steps, |k| matches!(k, StepKind::Swap { .. })),
				inversions(&before)
			);
			assert_eq!(count(&steps, |k| matches!(k, StepKind::Compare { .. })), 21);
			let last = &steps.last().unwrap().snapshot;
			assert!(last.values.windows(2).all(|w| w[0] <= w[1]));
			assert_eq!(last.sorted_indices.len(), 7);
		}
	}

	#[test]
	fn randomize_produces_seven_values_in_range() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut seq = SortSequencer::default();
		for _ in 0..200 {
			assert!(seq.randomize(&mut rng));
			assert_eq!(seq.values().len(), RANDOM_LEN);
			assert!(seq.values().iter().all(|v| RANDOM_RANGE.contains(v)));
		}
	}

	#[test]
	fn randomize_clears_labels_from_a_finished_run() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut seq = SortSequencer::default();
		seq.run_to_completion();
		assert!(seq.randomize(&mut rng));
		let snap = seq.snapshot();
		assert!(snap.sorted_indices.is_empty());
		assert!(snap.comparing_indices.is_empty());
		assert!(!snap.is_complete());
	}

	#[test]
	fn randomize_and_start_are_ignored_mid_animation() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut seq = SortSequencer::default();
		seq.start_sort().unwrap();
		seq.advance().unwrap();
		let before = seq.values().to_vec();

		assert!(!seq.randomize(&mut rng));
		assert!(seq.start_sort().is_none());
		assert_eq!(seq.values(), before.as_slice());

		while seq.advance().is_some() {}
		assert_eq!(seq.values(), &[11, 12, 22, 25, 34, 64, 90]);
	}

	#[test]
	fn advance_is_a_noop_when_idle() {
		let mut seq = SortSequencer::default();
		assert!(seq.advance().is_none());
		seq.run_to_completion();
		assert!(seq.advance().is_none());
		assert!(!seq.is_animating());
	}

	#[test]
	fn tiny_arrays_finish_immediately() {
		for values in [vec![], vec![42]] {
			let len = values.len();
			let mut seq = SortSequencer::new(values);
			let kinds: Vec<_> = seq.run_to_completion().into_iter().map(|s| s.kind).collect();
			assert_eq!(kinds, vec![StepKind::Started, StepKind::Finished]);
			assert_eq!(seq.snapshot().sorted_indices.len(), len);
		}
	}

	#[test]
	fn snapshot_serializes_with_display_keys() {
		let json = serde_json::to_value(SortSequencer::new(vec![2, 1]).snapshot()).unwrap();
		assert_eq!(json["values"], serde_json::json!([2, 1]));
		assert_eq!(json["isAnimating"], serde_json::json!(false));
		assert!(json.get("comparingIndices").is_some());
		assert!(json.get("sortedIndices").is_some());
	}
}
