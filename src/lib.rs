//! # grid-creator
//!
//! Border (quantization grid) construction for gradient boosting.
//!
//! Gradient boosting trainers do not split on raw feature values. Each
//! continuous feature is first reduced to a short list of increasing
//! thresholds, its *borders*, and every sample is replaced by the index of
//! the bin its value falls into. This crate builds those borders.
//!
//! ## Layers
//!
//! - [`binarization`]: the six border selection strategies behind the
//!   [`Binarizer`] trait
//! - [`grid`]: [`GridBuilder`] accumulates one border set per feature,
//!   [`GridBuilderFactory`] binds a builder to the strategy named by a
//!   [`BorderSelectionType`], and [`BordersBuilder`] covers the common
//!   single-feature case
//! - [`config`]: serializable [`BinarizationDescription`] and per-feature
//!   [`BinarizationConfig`]
//! - [`core`]: error type, scalar types and constants
//!
//! ## Quick Start
//!
//! ```rust
//! use grid_creator::{
//!     find_bin, BorderSelectionType, CpuGridBuilderFactory, GridBuilderFactory,
//! };
//!
//! # fn main() -> grid_creator::Result<()> {
//! grid_creator::init();
//!
//! let factory = CpuGridBuilderFactory::new();
//! let mut builder = factory.create(BorderSelectionType::GreedyLogSum)?;
//! builder
//!     .add_feature(&[0.3, 1.7, 0.9, 2.4, 1.1, 0.2], 2)?
//!     .add_feature(&[10.0, 30.0, 20.0, 40.0], 1)?;
//!
//! let borders = builder.into_borders();
//! assert_eq!(borders.len(), 2);
//! assert_eq!(find_bin(&borders[1], 35.0), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Threading
//!
//! Everything runs synchronously on the calling thread. Builders are `Send`,
//! so independent builders can be moved to worker threads, one builder per
//! thread.

#![doc(html_root_url = "https://docs.rs/grid-creator/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Border selection strategies
pub mod binarization;

// Configuration management module
pub mod config;

// Grid builders, factory and orchestrator
pub mod grid;

pub use crate::core::{
    constants::*,
    error::{GridError, Result},
    types::*,
};

pub use binarization::{
    Binarizer, MaxSumLogBinarizer, MedianBinarizer, MedianInBinBinarizer,
    MedianPlusUniformBinarizer, MinEntropyBinarizer, PenaltyKind, UniformBinarizer,
};

pub use config::{BinarizationConfig, BinarizationDescription, FeatureBinarization};

pub use grid::{
    binarize, build_all, find_bin, is_valid_border_set, BordersBuilder, CpuGrid,
    CpuGridBuilder, CpuGridBuilderFactory, GridBuilder, GridBuilderFactory, GridBuilderKind,
    TypedGridBuilderFactory,
};

// Version information
pub use crate::core::constants::GRID_CREATOR_VERSION as VERSION;

/// Initialize logging for the library.
///
/// Installs `env_logger` honoring `RUST_LOG` (default `info`). Applications
/// that install their own `log` backend do not need to call this.
pub fn init() {
    crate::core::initialize_logging()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_initialization() {
        init();
        init();
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_integration() {
        let err = CpuGridBuilderFactory::new()
            .create_from_name("NotAStrategy")
            .unwrap_err();
        assert_eq!(err.category(), "config");
        assert!(!err.is_recoverable());
    }
}
