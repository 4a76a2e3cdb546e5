//! Configuration for border construction.
//!
//! A [`BinarizationDescription`] pairs a strategy with a border count. A
//! [`BinarizationConfig`] assigns descriptions to the features of a dataset
//! and can be loaded from TOML or JSON.

pub mod binarization;

pub use binarization::{BinarizationConfig, BinarizationDescription, FeatureBinarization};
