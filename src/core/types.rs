//! Core data types for border construction.

use crate::core::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw feature value type. Borders share it so bin lookup compares like with like.
pub type FeatureValue = f32;

/// Ordered, strictly increasing thresholds for one feature.
pub type BorderSet = Vec<FeatureValue>;

/// Bin index type for discretized feature values.
pub type BinIndex = u32;

/// Feature index type for identifying features in a dataset.
pub type FeatureIndex = usize;

/// Border selection strategy.
///
/// The set is closed: a new strategy needs a variant here and an arm in
/// [`crate::grid::TypedGridBuilderFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderSelectionType {
    /// Half of the borders from quantiles, half from uniform spacing
    UniformAndQuantiles,
    /// Greedy bin splitting maximizing the sum of log bin sizes
    GreedyLogSum,
    /// Dynamic programming minimizing bin entropy
    MinEntropy,
    /// Dynamic programming maximizing the sum of log bin weights
    MaxLogSum,
    /// Quantile borders
    Median,
    /// Equal-width borders
    Uniform,
}

impl BorderSelectionType {
    /// Every supported border selection type, in code order.
    pub const ALL: [BorderSelectionType; 6] = [
        BorderSelectionType::UniformAndQuantiles,
        BorderSelectionType::GreedyLogSum,
        BorderSelectionType::MinEntropy,
        BorderSelectionType::MaxLogSum,
        BorderSelectionType::Median,
        BorderSelectionType::Uniform,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            BorderSelectionType::UniformAndQuantiles => "UniformAndQuantiles",
            BorderSelectionType::GreedyLogSum => "GreedyLogSum",
            BorderSelectionType::MinEntropy => "MinEntropy",
            BorderSelectionType::MaxLogSum => "MaxLogSum",
            BorderSelectionType::Median => "Median",
            BorderSelectionType::Uniform => "Uniform",
        }
    }

    /// Stable numeric code, the inverse of `TryFrom<u32>`.
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

impl Default for BorderSelectionType {
    fn default() -> Self {
        BorderSelectionType::GreedyLogSum
    }
}

impl fmt::Display for BorderSelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderSelectionType {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        BorderSelectionType::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::config_error!("Invalid grid builder type: {:?}", s))
    }
}

impl TryFrom<u32> for BorderSelectionType {
    type Error = GridError;

    fn try_from(code: u32) -> Result<Self> {
        BorderSelectionType::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| crate::config_error!("Invalid grid builder type code: {}", code))
    }
}
