//! Single-feature border construction on top of a factory.

use super::factory::GridBuilderFactory;
use crate::config::{BinarizationConfig, BinarizationDescription};
use crate::core::error::{GridError, Result};
use crate::core::types::{BorderSet, FeatureValue};
use ndarray::ArrayView2;

/// Builds the border set of one feature for any description.
///
/// Each call creates a fresh builder, so calls are independent of each
/// other.
///
/// ```rust
/// use grid_creator::{
///     BinarizationDescription, BorderSelectionType, BordersBuilder, CpuGridBuilderFactory,
/// };
///
/// let factory = CpuGridBuilderFactory::new();
/// let values = [1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
/// let borders = BordersBuilder::new(&factory, &values)
///     .build(&BinarizationDescription::new(BorderSelectionType::Uniform, 3))?;
/// assert_eq!(borders, vec![14.5, 28.0, 41.5]);
/// # Ok::<(), grid_creator::GridError>(())
/// ```
#[derive(Clone, Copy)]
pub struct BordersBuilder<'a> {
    factory: &'a dyn GridBuilderFactory,
    values: &'a [FeatureValue],
}

impl<'a> BordersBuilder<'a> {
    /// Borrow a factory and the values of one feature.
    pub fn new(factory: &'a dyn GridBuilderFactory, values: &'a [FeatureValue]) -> Self {
        BordersBuilder { factory, values }
    }

    /// Border set of the feature under `description`.
    pub fn build(&self, description: &BinarizationDescription) -> Result<BorderSet> {
        let mut builder = self.factory.create(description.border_selection_type)?;
        builder.add_feature(self.values, description.discretization)?;
        builder
            .into_borders()
            .into_iter()
            .next()
            .ok_or_else(|| GridError::insufficient_data(1, self.values.len()))
    }
}

impl std::fmt::Debug for BordersBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BordersBuilder")
            .field("num_values", &self.values.len())
            .finish()
    }
}

/// Border sets for every column of `features`, one builder per column.
///
/// Each column uses the description `config` resolves for its index.
pub fn build_all(
    factory: &dyn GridBuilderFactory,
    config: &BinarizationConfig,
    features: ArrayView2<'_, FeatureValue>,
) -> Result<Vec<BorderSet>> {
    config.validate()?;
    let mut result = Vec::with_capacity(features.ncols());
    for (feature, column) in features.columns().into_iter().enumerate() {
        let values = column.to_vec();
        let description = config.description_for(feature);
        result.push(BordersBuilder::new(factory, &values).build(&description)?);
    }
    log::debug!("built borders for {} features", result.len());
    Ok(result)
}
