//! Equal-width borders, alone or mixed with quantiles.

use super::median::median_borders;
use super::{check_inputs, sort_unique, sorted_values, Binarizer};
use crate::core::error::Result;
use crate::core::types::FeatureValue;

/// Splits `[min, max]` into `border_count + 1` intervals of equal width.
///
/// Only the extremes matter, so unsorted input is never sorted.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformBinarizer;

impl Binarizer for UniformBinarizer {
    fn best_split(
        &self,
        values: &[FeatureValue],
        border_count: u32,
        is_sorted: bool,
    ) -> Result<Vec<FeatureValue>> {
        check_inputs(values, border_count)?;
        let (min, max) = if is_sorted {
            (values[0], values[values.len() - 1])
        } else {
            value_range(values)
        };
        Ok(sort_unique(uniform_borders(min, max, border_count)))
    }

    fn name(&self) -> &'static str {
        "Uniform"
    }
}

/// Uses `border_count / 2` quantile borders and fills the rest uniformly.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianPlusUniformBinarizer;

impl Binarizer for MedianPlusUniformBinarizer {
    fn best_split(
        &self,
        values: &[FeatureValue],
        border_count: u32,
        is_sorted: bool,
    ) -> Result<Vec<FeatureValue>> {
        check_inputs(values, border_count)?;
        let sorted = sorted_values(values, is_sorted);

        let median_count = border_count / 2;
        let mut borders = median_borders(&sorted, median_count);
        borders.extend(uniform_borders(
            sorted[0],
            sorted[sorted.len() - 1],
            border_count - median_count,
        ));

        Ok(sort_unique(borders))
    }

    fn name(&self) -> &'static str {
        "UniformAndQuantiles"
    }
}

fn value_range(values: &[FeatureValue]) -> (FeatureValue, FeatureValue) {
    values.iter().fold(
        (FeatureValue::INFINITY, FeatureValue::NEG_INFINITY),
        |(min, max), &v| (min.min(v), max.max(v)),
    )
}

/// A constant feature collapses to the single border `min`.
pub(crate) fn uniform_borders(
    min: FeatureValue,
    max: FeatureValue,
    border_count: u32,
) -> Vec<FeatureValue> {
    let min = min as f64;
    let width = (max as f64 - min) / (border_count as f64 + 1.0);
    (1..=border_count)
        .map(|i| (min + i as f64 * width) as FeatureValue)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const FIBONACCI: [f32; 10] = [1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];

    #[test]
    fn test_uniform_split_spans_range() {
        let borders = UniformBinarizer.best_split(&FIBONACCI, 3, true).unwrap();
        assert_eq!(borders.len(), 3);
        assert_abs_diff_eq!(borders[0], 14.5, epsilon = 1e-5);
        assert_abs_diff_eq!(borders[1], 28.0, epsilon = 1e-5);
        assert_abs_diff_eq!(borders[2], 41.5, epsilon = 1e-5);
    }

    #[test]
    fn test_uniform_ignores_order() {
        let mut shuffled = FIBONACCI;
        shuffled.reverse();
        let sorted = UniformBinarizer.best_split(&FIBONACCI, 5, true).unwrap();
        let unsorted = UniformBinarizer.best_split(&shuffled, 5, false).unwrap();
        assert_eq!(sorted, unsorted);
    }

    #[test]
    fn test_uniform_constant_feature() {
        let borders = UniformBinarizer.best_split(&[2.0; 4], 8, true).unwrap();
        assert_eq!(borders, vec![2.0]);
    }

    #[test]
    fn test_median_plus_uniform_mixes_both() {
        let borders = MedianPlusUniformBinarizer
            .best_split(&FIBONACCI, 4, true)
            .unwrap();
        // Quantile borders 2.5 and 10.5, uniform borders 19 and 37.
        assert_eq!(borders, vec![2.5, 10.5, 19.0, 37.0]);
    }

    #[test]
    fn test_median_plus_uniform_single_border_is_uniform() {
        let mixed = MedianPlusUniformBinarizer
            .best_split(&FIBONACCI, 1, true)
            .unwrap();
        let uniform = UniformBinarizer.best_split(&FIBONACCI, 1, true).unwrap();
        assert_eq!(mixed, uniform);
    }
}
