//! Greedy log-sum borders.
//!
//! Bins are split one at a time. Every bin proposes a split at the edge of the
//! run of values equal to its median element and scores it by
//! `ln(left size) + ln(right size)`; the bin with the best score is split
//! next. Splitting near the median keeps bin sizes balanced while never
//! cutting through a run of equal values.

use super::{check_inputs, midpoint, sorted_values, Binarizer};
use crate::core::error::Result;
use crate::core::types::FeatureValue;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// `GreedyLogSum` border selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianInBinBinarizer;

impl Binarizer for MedianInBinBinarizer {
    fn best_split(
        &self,
        values: &[FeatureValue],
        border_count: u32,
        is_sorted: bool,
    ) -> Result<Vec<FeatureValue>> {
        check_inputs(values, border_count)?;
        let sorted = sorted_values(values, is_sorted);
        Ok(greedy_borders(&sorted, border_count))
    }

    fn name(&self) -> &'static str {
        "GreedyLogSum"
    }
}

/// Half-open range `[start, end)` of the sorted values with its best split.
#[derive(Debug, Clone, Copy)]
struct FeatureBin {
    start: usize,
    end: usize,
    split: usize,
    score: f64,
}

impl FeatureBin {
    fn new(sorted: &[FeatureValue], start: usize, end: usize) -> Self {
        let mid = start + (end - start) / 2;
        let mid_value = sorted[mid];
        let lower = start + sorted[start..mid].partition_point(|&v| v < mid_value);
        let upper = mid + sorted[mid..end].partition_point(|&v| v <= mid_value);

        let score_at = |split: usize| {
            (split != start && split != end)
                .then(|| ((split - start) as f64).ln() + ((end - split) as f64).ln())
        };

        let (split, score) = match (score_at(lower), score_at(upper)) {
            (Some(left), Some(right)) if right > left => (upper, right),
            (Some(left), _) => (lower, left),
            (None, Some(right)) => (upper, right),
            (None, None) => (start, f64::NEG_INFINITY),
        };

        FeatureBin {
            start,
            end,
            split,
            score,
        }
    }

    fn can_split(&self) -> bool {
        self.split != self.start && self.split != self.end
    }
}

impl PartialEq for FeatureBin {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FeatureBin {}

impl PartialOrd for FeatureBin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FeatureBin {
    // Max-heap on score; ties go to the leftmost bin.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.start.cmp(&self.start))
    }
}

fn greedy_borders(sorted: &[FeatureValue], border_count: u32) -> Vec<FeatureValue> {
    let mut heap = BinaryHeap::new();
    heap.push(FeatureBin::new(sorted, 0, sorted.len()));

    let mut splits = 0u32;
    while splits < border_count {
        let Some(bin) = heap.peek().copied() else {
            break;
        };
        if !bin.can_split() {
            break;
        }
        heap.pop();
        heap.push(FeatureBin::new(sorted, bin.start, bin.split));
        heap.push(FeatureBin::new(sorted, bin.split, bin.end));
        splits += 1;
    }
    log::trace!("greedy log-sum made {} of {} splits", splits, border_count);

    let mut starts: Vec<usize> = heap
        .into_iter()
        .map(|bin| bin.start)
        .filter(|&start| start > 0)
        .collect();
    starts.sort_unstable();

    starts
        .into_iter()
        .map(|start| midpoint(sorted[start - 1], sorted[start]))
        .collect()
}
