//! Mapping from border selection type to a concrete grid builder.

use super::builder::{CpuGridBuilder, GridBuilder};
use crate::binarization::{
    Binarizer, MaxSumLogBinarizer, MedianBinarizer, MedianInBinBinarizer,
    MedianPlusUniformBinarizer, MinEntropyBinarizer, UniformBinarizer,
};
use crate::core::error::Result;
use crate::core::types::BorderSelectionType;
use std::fmt;
use std::marker::PhantomData;

/// Creates grid builders bound to a border selection strategy.
///
/// The returned box is the only handle to the new builder.
pub trait GridBuilderFactory {
    /// Create an empty builder for `kind`.
    fn create(&self, kind: BorderSelectionType) -> Result<Box<dyn GridBuilder>>;

    /// Create a builder from a strategy name such as `"GreedyLogSum"`.
    ///
    /// Unknown names fail with a configuration error and no builder is made.
    fn create_from_name(&self, name: &str) -> Result<Box<dyn GridBuilder>> {
        self.create(name.parse()?)
    }

    /// Create a builder from a numeric strategy code.
    fn create_from_code(&self, code: u32) -> Result<Box<dyn GridBuilder>> {
        self.create(BorderSelectionType::try_from(code)?)
    }
}

/// Family of grid builders sharing an execution substrate.
///
/// A family knows how to wrap any strategy in its builder type; the strategy
/// choice itself stays in [`TypedGridBuilderFactory`].
pub trait GridBuilderKind {
    /// Family name used in log messages.
    const NAME: &'static str;

    /// An empty builder of this family running strategy `B`.
    fn builder<B: Binarizer + 'static>() -> Box<dyn GridBuilder>;
}

/// Builders that run on the calling CPU thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuGrid;

impl GridBuilderKind for CpuGrid {
    const NAME: &'static str = "cpu";

    fn builder<B: Binarizer + 'static>() -> Box<dyn GridBuilder> {
        Box::new(CpuGridBuilder::<B>::new())
    }
}

/// Factory for the builder family `K`.
pub struct TypedGridBuilderFactory<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> TypedGridBuilderFactory<K> {
    /// Create a factory.
    pub fn new() -> Self {
        TypedGridBuilderFactory { _kind: PhantomData }
    }
}

impl<K> Default for TypedGridBuilderFactory<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: GridBuilderKind> fmt::Debug for TypedGridBuilderFactory<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedGridBuilderFactory")
            .field("kind", &K::NAME)
            .finish()
    }
}

impl<K: GridBuilderKind> GridBuilderFactory for TypedGridBuilderFactory<K> {
    fn create(&self, kind: BorderSelectionType) -> Result<Box<dyn GridBuilder>> {
        let builder = match kind {
            BorderSelectionType::UniformAndQuantiles => K::builder::<MedianPlusUniformBinarizer>(),
            BorderSelectionType::GreedyLogSum => K::builder::<MedianInBinBinarizer>(),
            BorderSelectionType::MinEntropy => K::builder::<MinEntropyBinarizer>(),
            BorderSelectionType::MaxLogSum => K::builder::<MaxSumLogBinarizer>(),
            BorderSelectionType::Median => K::builder::<MedianBinarizer>(),
            BorderSelectionType::Uniform => K::builder::<UniformBinarizer>(),
        };
        log::debug!("created {} grid builder for {}", K::NAME, kind);
        Ok(builder)
    }
}

/// Factory for [`CpuGridBuilder`]s.
pub type CpuGridBuilderFactory = TypedGridBuilderFactory<CpuGrid>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GridError;

    #[test]
    fn test_every_type_creates_empty_builder() {
        let factory = CpuGridBuilderFactory::new();
        for kind in BorderSelectionType::ALL {
            let builder = factory.create(kind).unwrap();
            assert!(builder.borders().is_empty(), "{} builder not empty", kind);
        }
    }

    #[test]
    fn test_dispatch_selects_strategy() {
        let factory = CpuGridBuilderFactory::new();
        let values = [1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];

        let mut uniform = factory.create(BorderSelectionType::Uniform).unwrap();
        uniform.add_feature(&values, 3).unwrap();
        let mut median = factory.create(BorderSelectionType::Median).unwrap();
        median.add_feature(&values, 3).unwrap();

        assert_eq!(uniform.borders()[0], vec![14.5, 28.0, 41.5]);
        assert_eq!(median.borders()[0], vec![6.5, 17.0]);
    }

    #[test]
    fn test_unknown_name_is_config_error() {
        let factory = CpuGridBuilderFactory::default();
        let err = factory.create_from_name("Quantiles").unwrap_err();
        assert!(matches!(err, GridError::Config { .. }));
        assert!(!err.is_recoverable());

        assert!(factory.create_from_name("MinEntropy").is_ok());
    }

    #[test]
    fn test_unknown_code_is_config_error() {
        let factory = CpuGridBuilderFactory::new();
        assert!(matches!(
            factory.create_from_code(42),
            Err(GridError::Config { .. })
        ));
        assert!(factory.create_from_code(0).is_ok());
    }

    #[test]
    fn test_factory_debug_names_family() {
        let factory = CpuGridBuilderFactory::new();
        assert!(format!("{:?}", factory).contains("cpu"));
    }
}
