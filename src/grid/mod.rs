//! Grid construction: builders that accumulate per-feature borders, the
//! factory that binds them to a strategy, and the single-feature
//! orchestrator.

pub mod bins;
pub mod borders;
pub mod builder;
pub mod factory;

pub use bins::{binarize, find_bin, is_valid_border_set};
pub use borders::{build_all, BordersBuilder};
pub use builder::{CpuGridBuilder, GridBuilder};
pub use factory::{
    CpuGrid, CpuGridBuilderFactory, GridBuilderFactory, GridBuilderKind, TypedGridBuilderFactory,
};
