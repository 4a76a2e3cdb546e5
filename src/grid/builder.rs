//! Grid builder abstraction and its CPU implementation.

use crate::binarization::{sort_unique, Binarizer};
use crate::core::error::Result;
use crate::core::types::{BorderSet, FeatureValue};
use ndarray::ArrayView2;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Accumulates one border set per feature.
///
/// A builder is bound to a single strategy when it is created. Features are
/// added in order and [`borders`](GridBuilder::borders) is indexed by that
/// order. Builders are `Send` so independent builders can run on separate
/// threads, but a single builder has no internal synchronization.
pub trait GridBuilder: Send + Debug {
    /// Sort a copy of `values`, build its borders and append them.
    ///
    /// Nothing is appended when border construction fails. Returns the
    /// builder so calls can be chained:
    ///
    /// ```rust
    /// use grid_creator::{BorderSelectionType, CpuGridBuilderFactory, GridBuilderFactory};
    ///
    /// let mut builder = CpuGridBuilderFactory::new().create(BorderSelectionType::Median)?;
    /// builder
    ///     .add_feature(&[3.0, 1.0, 2.0, 4.0], 1)?
    ///     .add_feature(&[10.0, 20.0], 1)?;
    /// assert_eq!(builder.borders(), &[vec![2.5], vec![15.0]]);
    /// # Ok::<(), grid_creator::GridError>(())
    /// ```
    fn add_feature(
        &mut self,
        values: &[FeatureValue],
        border_count: u32,
    ) -> Result<&mut dyn GridBuilder>;

    /// Border sets of all features added so far, in insertion order.
    fn borders(&self) -> &[BorderSet];

    /// Borders for values that are already sorted ascending.
    ///
    /// Does not touch the accumulated state.
    fn build_borders(&self, sorted_values: &[FeatureValue], border_count: u32)
        -> Result<BorderSet>;

    /// Consume the builder and take ownership of its border sets.
    fn into_borders(self: Box<Self>) -> Vec<BorderSet>;

    /// Number of features added so far.
    fn num_features(&self) -> usize {
        self.borders().len()
    }

    /// Add every column of `features` as a separate feature.
    ///
    /// Columns are processed left to right; on error the columns before the
    /// failing one stay added.
    fn add_features(
        &mut self,
        features: ArrayView2<'_, FeatureValue>,
        border_count: u32,
    ) -> Result<()> {
        for column in features.columns() {
            let values = column.to_vec();
            self.add_feature(&values, border_count)?;
        }
        Ok(())
    }
}

/// Grid builder running the strategy `B` on the calling thread.
#[derive(Debug, Default, Clone)]
pub struct CpuGridBuilder<B: Binarizer> {
    binarizer: B,
    result: Vec<BorderSet>,
}

impl<B: Binarizer> CpuGridBuilder<B> {
    /// Create an empty builder with a default strategy instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder around an existing strategy instance.
    pub fn with_binarizer(binarizer: B) -> Self {
        CpuGridBuilder {
            binarizer,
            result: Vec::new(),
        }
    }

    /// The strategy this builder delegates to.
    pub fn binarizer(&self) -> &B {
        &self.binarizer
    }
}

impl<B: Binarizer + 'static> GridBuilder for CpuGridBuilder<B> {
    fn add_feature(
        &mut self,
        values: &[FeatureValue],
        border_count: u32,
    ) -> Result<&mut dyn GridBuilder> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let borders = self.build_borders(&sorted, border_count)?;
        log::debug!(
            "{} grid: feature {} with {} values -> {} borders (requested {})",
            self.binarizer.name(),
            self.result.len(),
            values.len(),
            borders.len(),
            border_count
        );
        self.result.push(borders);
        Ok(self)
    }

    fn borders(&self) -> &[BorderSet] {
        &self.result
    }

    fn build_borders(
        &self,
        sorted_values: &[FeatureValue],
        border_count: u32,
    ) -> Result<BorderSet> {
        debug_assert!(
            sorted_values
                .windows(2)
                .all(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Greater)),
            "build_borders expects values sorted ascending"
        );
        let borders = self
            .binarizer
            .best_split(sorted_values, border_count, true)?;
        Ok(sort_unique(borders))
    }

    fn into_borders(self: Box<Self>) -> Vec<BorderSet> {
        self.result
    }
}
