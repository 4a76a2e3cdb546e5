//! System constants and configuration defaults.

use crate::core::types::BorderSelectionType;

/// Default number of borders requested per feature.
pub const DEFAULT_BORDER_COUNT: u32 = 128;

/// Largest accepted border count. Bin indices of a grid must fit in `u16`.
pub const MAX_BORDER_COUNT: u32 = 65535;

/// Default border selection strategy for float features.
pub const DEFAULT_BORDER_SELECTION_TYPE: BorderSelectionType = BorderSelectionType::GreedyLogSum;

/// Offset added to bin weights before taking logarithms.
pub const PENALTY_EPSILON: f64 = 1e-8;

/// Upper bound on `bins * distinct values` for the penalty dynamic program.
///
/// Larger inputs are first merged into groups of neighboring distinct values.
pub const MAX_DP_CELLS: usize = 1 << 22;

/// Default log filter used by [`crate::init`] when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable overriding the default border count.
pub const BORDER_COUNT_ENV: &str = "GRID_CREATOR_BORDER_COUNT";

/// Environment variable overriding the default border selection type.
pub const BORDER_TYPE_ENV: &str = "GRID_CREATOR_BORDER_TYPE";

/// Crate version string
pub const GRID_CREATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
