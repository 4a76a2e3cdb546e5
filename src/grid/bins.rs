//! Bin lookup over a border set.

use crate::core::types::{BinIndex, FeatureValue};

/// Bin of `value` under `borders`: the number of borders strictly below it.
///
/// A value equal to a border lands in the lower bin. NaN compares false
/// against every border and lands in bin 0.
///
/// ```rust
/// use grid_creator::grid::find_bin;
///
/// let borders = [1.5, 4.0, 9.0];
/// assert_eq!(find_bin(&borders, 0.0), 0);
/// assert_eq!(find_bin(&borders, 4.0), 1);
/// assert_eq!(find_bin(&borders, 4.5), 2);
/// assert_eq!(find_bin(&borders, 100.0), 3);
/// ```
pub fn find_bin(borders: &[FeatureValue], value: FeatureValue) -> BinIndex {
    borders.partition_point(|&border| value > border) as BinIndex
}

/// Bin indices of every value in `values`.
pub fn binarize(borders: &[FeatureValue], values: &[FeatureValue]) -> Vec<BinIndex> {
    values.iter().map(|&value| find_bin(borders, value)).collect()
}

/// True when `borders` is finite and strictly increasing.
pub fn is_valid_border_set(borders: &[FeatureValue]) -> bool {
    borders.iter().all(|b| b.is_finite()) && borders.windows(2).all(|w| w[0] < w[1])
}
