//! Quantile borders.

use super::{check_inputs, midpoint, sort_unique, sorted_values, Binarizer};
use crate::core::error::Result;
use crate::core::types::FeatureValue;

/// Places borders at the `(i + 1) / (border_count + 1)` quantiles.
///
/// A quantile that falls inside a run of equal values produces no border, so
/// heavily duplicated features get fewer borders than requested.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianBinarizer;

impl Binarizer for MedianBinarizer {
    fn best_split(
        &self,
        values: &[FeatureValue],
        border_count: u32,
        is_sorted: bool,
    ) -> Result<Vec<FeatureValue>> {
        check_inputs(values, border_count)?;
        let sorted = sorted_values(values, is_sorted);
        Ok(sort_unique(median_borders(&sorted, border_count)))
    }

    fn name(&self) -> &'static str {
        "Median"
    }
}

/// Quantile borders over non-empty sorted values. Zero borders yields none.
pub(crate) fn median_borders(sorted: &[FeatureValue], border_count: u32) -> Vec<FeatureValue> {
    let total = sorted.len() as u128;
    let count = border_count as u128;
    let mut borders = Vec::with_capacity(border_count as usize);

    for i in 0..count {
        let index = ((i + 1) * total / (count + 1)).min(total - 1) as usize;
        if index > 0 && sorted[index - 1] != sorted[index] {
            borders.push(midpoint(sorted[index - 1], sorted[index]));
        }
    }

    borders
}
