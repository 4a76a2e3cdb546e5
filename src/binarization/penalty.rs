//! Penalty-minimizing borders found by dynamic programming.
//!
//! Sorted values are collapsed into distinct values weighted by their
//! multiplicity. The distinct values are then grouped into at most
//! `border_count + 1` contiguous bins so that the sum of a per-bin penalty is
//! minimal. Each DP layer is filled with divide and conquer over monotone
//! split positions, costing `O(bins * n log n)` penalty evaluations for `n`
//! distinct values.
//!
//! The choice tables hold `bins * n` entries. When that exceeds
//! [`MAX_DP_CELLS`], neighboring distinct values are first merged into
//! groups of roughly equal weight and borders are only placed between
//! groups.

use super::{check_inputs, midpoint, sorted_values, values_and_weights, Binarizer};
use crate::core::constants::{MAX_DP_CELLS, PENALTY_EPSILON};
use crate::core::error::Result;
use crate::core::types::FeatureValue;

/// Per-bin penalty minimized by the dynamic program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyKind {
    /// `w * ln(w)`: favors bins of equal weight (minimum entropy loss)
    MinEntropy,
    /// `-ln(w)`: maximizes the sum of log bin weights
    MaxSumLog,
}

impl PenaltyKind {
    /// Penalty of a bin holding total weight `weight`.
    pub fn penalty(&self, weight: f64) -> f64 {
        match self {
            PenaltyKind::MinEntropy => weight * (weight + PENALTY_EPSILON).ln(),
            PenaltyKind::MaxSumLog => -(weight + PENALTY_EPSILON).ln(),
        }
    }
}

/// `MinEntropy` border selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinEntropyBinarizer;

impl Binarizer for MinEntropyBinarizer {
    fn best_split(
        &self,
        values: &[FeatureValue],
        border_count: u32,
        is_sorted: bool,
    ) -> Result<Vec<FeatureValue>> {
        check_inputs(values, border_count)?;
        let sorted = sorted_values(values, is_sorted);
        Ok(penalty_borders(&sorted, border_count, PenaltyKind::MinEntropy))
    }

    fn name(&self) -> &'static str {
        "MinEntropy"
    }
}

/// `MaxLogSum` border selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxSumLogBinarizer;

impl Binarizer for MaxSumLogBinarizer {
    fn best_split(
        &self,
        values: &[FeatureValue],
        border_count: u32,
        is_sorted: bool,
    ) -> Result<Vec<FeatureValue>> {
        check_inputs(values, border_count)?;
        let sorted = sorted_values(values, is_sorted);
        Ok(penalty_borders(&sorted, border_count, PenaltyKind::MaxSumLog))
    }

    fn name(&self) -> &'static str {
        "MaxLogSum"
    }
}

fn penalty_borders(sorted: &[FeatureValue], border_count: u32, kind: PenaltyKind) -> Vec<FeatureValue> {
    penalty_borders_within(sorted, border_count, kind, MAX_DP_CELLS)
}

fn penalty_borders_within(
    sorted: &[FeatureValue],
    border_count: u32,
    kind: PenaltyKind,
    max_cells: usize,
) -> Vec<FeatureValue> {
    let (values, weights) = values_and_weights(sorted);
    let bin_count = (border_count as usize).saturating_add(1);
    let max_groups = (max_cells / bin_count).max(bin_count);

    let group_starts: Vec<usize> = if values.len() > max_groups {
        group_by_weight(&weights, max_groups)
    } else {
        (0..values.len()).collect()
    };
    let group_weights: Vec<f64> = group_starts
        .iter()
        .enumerate()
        .map(|(group, &start)| {
            let end = group_starts.get(group + 1).copied().unwrap_or(weights.len());
            weights[start..end].iter().sum()
        })
        .collect();

    let starts: Vec<usize> = if group_weights.len() <= bin_count {
        (1..group_weights.len()).collect()
    } else {
        best_partition(&group_weights, bin_count, kind)
    };
    log::trace!(
        "{:?} grouped {} distinct values ({} groups) into {} bins",
        kind,
        values.len(),
        group_weights.len(),
        starts.len() + 1
    );

    starts
        .into_iter()
        .map(|group| group_starts[group])
        .map(|start| midpoint(values[start - 1], values[start]))
        .collect()
}

/// Merge neighboring entries of `weights` into at most `max_groups` groups
/// of roughly equal total weight. Returns the start index of every group.
fn group_by_weight(weights: &[f64], max_groups: usize) -> Vec<usize> {
    let total: f64 = weights.iter().sum();
    let mut starts = vec![0];
    let mut accumulated = 0.0;
    for (index, &weight) in weights[..weights.len() - 1].iter().enumerate() {
        accumulated += weight;
        if starts.len() == max_groups {
            break;
        }
        if accumulated >= total * starts.len() as f64 / max_groups as f64 {
            starts.push(index + 1);
        }
    }
    starts
}

/// Start indices of bins 2..=`bin_count` in an optimal grouping of `weights`.
///
/// Requires `1 < bin_count < weights.len()`.
fn best_partition(weights: &[f64], bin_count: usize, kind: PenaltyKind) -> Vec<usize> {
    let n = weights.len();
    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    for &weight in weights {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + weight);
    }
    let layer = Layer {
        prefix: &prefix,
        kind,
    };

    // previous[i]: best cost of grouping the first i values into `bins` bins.
    let mut previous: Vec<f64> = (0..=n).map(|i| layer.cost(0, i)).collect();
    let mut current = vec![f64::INFINITY; n + 1];
    let mut choices: Vec<Vec<u32>> = Vec::with_capacity(bin_count - 1);

    for bins in 2..=bin_count {
        let mut choice = vec![0u32; n + 1];
        current.iter_mut().for_each(|c| *c = f64::INFINITY);
        layer.fill(&previous, &mut current, &mut choice, bins, n, bins - 1, n - 1);
        std::mem::swap(&mut previous, &mut current);
        choices.push(choice);
    }

    let mut starts = Vec::with_capacity(bin_count - 1);
    let mut end = n;
    for choice in choices.iter().rev() {
        end = choice[end] as usize;
        starts.push(end);
    }
    starts.reverse();
    starts
}

struct Layer<'a> {
    prefix: &'a [f64],
    kind: PenaltyKind,
}

impl Layer<'_> {
    /// Penalty of one bin holding values `[from, to)`.
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.kind.penalty(self.prefix[to] - self.prefix[from])
    }

    /// Fill `current[lo..=hi]`, searching split positions in `[opt_lo, opt_hi]`.
    #[allow(clippy::too_many_arguments)]
    fn fill(
        &self,
        previous: &[f64],
        current: &mut [f64],
        choice: &mut [u32],
        lo: usize,
        hi: usize,
        opt_lo: usize,
        opt_hi: usize,
    ) {
        if lo > hi {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        let mut best = (f64::INFINITY, opt_lo);
        for split in opt_lo..=opt_hi.min(mid - 1) {
            let candidate = previous[split] + self.cost(split, mid);
            if candidate < best.0 {
                best = (candidate, split);
            }
        }
        current[mid] = best.0;
        choice[mid] = best.1 as u32;

        if mid > lo {
            self.fill(previous, current, choice, lo, mid - 1, opt_lo, best.1);
        }
        self.fill(previous, current, choice, mid + 1, hi, best.1, opt_hi);
    }
}
