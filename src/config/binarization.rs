//! Binarization descriptions and per-feature binarization configuration.

use crate::core::constants::*;
use crate::core::error::{GridError, Result};
use crate::core::types::{BorderSelectionType, FeatureIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Strategy and border count for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinarizationDescription {
    /// Border selection strategy
    pub border_selection_type: BorderSelectionType,
    /// Number of borders requested
    pub discretization: u32,
}

impl Default for BinarizationDescription {
    fn default() -> Self {
        BinarizationDescription {
            border_selection_type: DEFAULT_BORDER_SELECTION_TYPE,
            discretization: DEFAULT_BORDER_COUNT,
        }
    }
}

impl BinarizationDescription {
    /// Create a description.
    pub fn new(border_selection_type: BorderSelectionType, discretization: u32) -> Self {
        BinarizationDescription {
            border_selection_type,
            discretization,
        }
    }

    /// Validate the border count.
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.discretization > 0,
            GridError::invalid_parameter("discretization", "0", "must be at least 1")
        );
        crate::ensure!(
            self.discretization <= MAX_BORDER_COUNT,
            GridError::invalid_parameter(
                "discretization",
                self.discretization.to_string(),
                format!("cannot exceed {}", MAX_BORDER_COUNT),
            )
        );
        Ok(())
    }
}

/// Description override for a single feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureBinarization {
    /// Feature index the override applies to
    pub feature: FeatureIndex,
    /// Border selection strategy
    pub border_selection_type: BorderSelectionType,
    /// Number of borders requested
    pub discretization: u32,
}

impl FeatureBinarization {
    /// The override as a plain description.
    pub fn description(&self) -> BinarizationDescription {
        BinarizationDescription::new(self.border_selection_type, self.discretization)
    }
}

/// Binarization settings for every feature of a dataset.
///
/// Features without an override use `float_features`.
///
/// ```toml
/// [float_features]
/// border_selection_type = "MinEntropy"
/// discretization = 64
///
/// [[per_feature]]
/// feature = 3
/// border_selection_type = "Uniform"
/// discretization = 16
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BinarizationConfig {
    /// Default description for float features
    pub float_features: BinarizationDescription,
    /// Per-feature overrides
    pub per_feature: Vec<FeatureBinarization>,
}

impl BinarizationConfig {
    /// Create a configuration using `float_features` for every feature.
    pub fn new(float_features: BinarizationDescription) -> Self {
        BinarizationConfig {
            float_features,
            per_feature: Vec::new(),
        }
    }

    /// Set the description of one feature, replacing an earlier override.
    pub fn with_feature(mut self, feature: FeatureIndex, description: BinarizationDescription) -> Self {
        self.per_feature.retain(|o| o.feature != feature);
        self.per_feature.push(FeatureBinarization {
            feature,
            border_selection_type: description.border_selection_type,
            discretization: description.discretization,
        });
        self
    }

    /// Description to use for `feature`.
    pub fn description_for(&self, feature: FeatureIndex) -> BinarizationDescription {
        self.per_feature
            .iter()
            .find(|o| o.feature == feature)
            .map(FeatureBinarization::description)
            .unwrap_or(self.float_features)
    }

    /// Validate every description and reject duplicate overrides.
    pub fn validate(&self) -> Result<()> {
        self.float_features.validate()?;
        for (position, entry) in self.per_feature.iter().enumerate() {
            entry.description().validate()?;
            if self.per_feature[..position]
                .iter()
                .any(|o| o.feature == entry.feature)
            {
                return Err(GridError::invalid_parameter(
                    "per_feature",
                    entry.feature.to_string(),
                    "feature has more than one override",
                ));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BinarizationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: BinarizationConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a `.toml` or `.json` file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(crate::config_error!(
                "Unsupported config file format for {}. Use .json or .toml",
                path.display()
            )),
        }
    }

    /// Override the float feature defaults from string parameters.
    ///
    /// Recognized keys are `border_count` and `border_type`; other keys are
    /// ignored with a warning.
    ///
    /// The overrides are applied atomically: on error `self` is unchanged.
    pub fn apply_overrides(&mut self, params: &HashMap<String, String>) -> Result<()> {
        let mut updated = self.clone();
        for (key, value) in params {
            match key.as_str() {
                "border_count" => {
                    updated.float_features.discretization = value.trim().parse().map_err(|_| {
                        GridError::invalid_parameter(
                            "border_count",
                            value.clone(),
                            "must be an unsigned integer",
                        )
                    })?;
                }
                "border_type" => {
                    updated.float_features.border_selection_type = value.parse()?;
                }
                _ => log::warn!("Unknown binarization parameter: {}", key),
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Apply overrides from the `GRID_CREATOR_BORDER_COUNT` and
    /// `GRID_CREATOR_BORDER_TYPE` environment variables.
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        let mut params = HashMap::new();
        if let Ok(value) = std::env::var(BORDER_COUNT_ENV) {
            params.insert("border_count".to_string(), value);
        }
        if let Ok(value) = std::env::var(BORDER_TYPE_ENV) {
            params.insert("border_type".to_string(), value);
        }
        self.apply_overrides(&params)
    }
}
