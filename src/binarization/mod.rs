//! Border selection strategies.
//!
//! A [`Binarizer`] turns the values of one feature into a set of thresholds.
//! Strategies are stateless, so one instance can serve any number of
//! features from any thread.
//!
//! | [`BorderSelectionType`](crate::BorderSelectionType) | Binarizer |
//! |---|---|
//! | `Median` | [`MedianBinarizer`] |
//! | `Uniform` | [`UniformBinarizer`] |
//! | `UniformAndQuantiles` | [`MedianPlusUniformBinarizer`] |
//! | `GreedyLogSum` | [`MedianInBinBinarizer`] |
//! | `MinEntropy` | [`MinEntropyBinarizer`] |
//! | `MaxLogSum` | [`MaxSumLogBinarizer`] |

pub mod greedy;
pub mod median;
pub mod penalty;
pub mod uniform;

pub use greedy::MedianInBinBinarizer;
pub use median::MedianBinarizer;
pub use penalty::{MaxSumLogBinarizer, MinEntropyBinarizer, PenaltyKind};
pub use uniform::{MedianPlusUniformBinarizer, UniformBinarizer};

use crate::core::constants::MAX_BORDER_COUNT;
use crate::core::error::{GridError, Result};
use crate::core::types::FeatureValue;
use std::borrow::Cow;
use std::fmt::Debug;

/// Threshold selection algorithm for a single feature.
pub trait Binarizer: Default + Debug + Send + Sync {
    /// Select at most `border_count` borders for `values`.
    ///
    /// The returned borders are unique but carry no ordering guarantee.
    /// When `is_sorted` is false the strategy sorts a private copy; the
    /// input slice is never modified.
    ///
    /// # Errors
    ///
    /// Fails on empty input, on a `border_count` of zero or above
    /// [`MAX_BORDER_COUNT`], and on NaN or infinite values.
    fn best_split(
        &self,
        values: &[FeatureValue],
        border_count: u32,
        is_sorted: bool,
    ) -> Result<Vec<FeatureValue>>;

    /// Strategy name used in log messages.
    fn name(&self) -> &'static str;
}

/// Shared preconditions of every strategy.
pub(crate) fn check_inputs(values: &[FeatureValue], border_count: u32) -> Result<()> {
    if values.is_empty() {
        return Err(GridError::insufficient_data(1, 0));
    }
    if border_count == 0 {
        return Err(GridError::invalid_parameter(
            "border_count",
            "0",
            "must be at least 1",
        ));
    }
    if border_count > MAX_BORDER_COUNT {
        return Err(GridError::invalid_parameter(
            "border_count",
            border_count.to_string(),
            format!("cannot exceed {}", MAX_BORDER_COUNT),
        ));
    }
    if let Some(position) = values.iter().position(|v| !v.is_finite()) {
        return Err(GridError::numerical(format!(
            "non-finite feature value {} at position {}",
            values[position], position
        )));
    }
    Ok(())
}

/// Borrow `values` when already sorted, otherwise sort a copy.
pub(crate) fn sorted_values(values: &[FeatureValue], is_sorted: bool) -> Cow<'_, [FeatureValue]> {
    if is_sorted {
        Cow::Borrowed(values)
    } else {
        let mut copy = values.to_vec();
        copy.sort_by(|a, b| a.total_cmp(b));
        Cow::Owned(copy)
    }
}

/// Border placed between two adjacent distinct values.
pub(crate) fn midpoint(lower: FeatureValue, upper: FeatureValue) -> FeatureValue {
    ((lower as f64 + upper as f64) * 0.5) as FeatureValue
}

/// Sort ascending and drop repeated borders.
pub(crate) fn sort_unique(mut borders: Vec<FeatureValue>) -> Vec<FeatureValue> {
    borders.sort_by(|a, b| a.total_cmp(b));
    borders.dedup();
    borders
}

/// Collapse sorted values into distinct values and their multiplicities.
pub(crate) fn values_and_weights(sorted: &[FeatureValue]) -> (Vec<FeatureValue>, Vec<f64>) {
    let mut values: Vec<FeatureValue> = Vec::new();
    let mut weights: Vec<f64> = Vec::new();
    for &value in sorted {
        match values.last() {
            Some(&last) if last == value => {
                if let Some(weight) = weights.last_mut() {
                    *weight += 1.0;
                }
            }
            _ => {
                values.push(value);
                weights.push(1.0);
            }
        }
    }
    (values, weights)
}
