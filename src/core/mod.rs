//! Core infrastructure: scalar types, constants, error handling and
//! logging setup shared by the binarization and grid layers.
//!
//! - [`types`]: feature value, border set and strategy identifier types
//! - [`constants`]: defaults and limits
//! - [`error`]: the crate error type
//!
//! ```rust
//! use grid_creator::core::{
//!     constants::DEFAULT_BORDER_COUNT,
//!     error::{GridError, Result},
//!     types::BorderSelectionType,
//! };
//!
//! let kind: BorderSelectionType = "Median".parse()?;
//! assert_eq!(kind, BorderSelectionType::Median);
//! assert!(DEFAULT_BORDER_COUNT > 0);
//! # Ok::<(), GridError>(())
//! ```

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{GridError, Result};
pub use types::*;

use std::sync::Once;

static LOGGING_INIT: Once = Once::new();

/// Initialize the `env_logger` backend for the `log` facade.
///
/// Honors `RUST_LOG` and falls back to [`DEFAULT_LOG_FILTER`]. Safe to call
/// repeatedly; a logger installed by the host application is left alone.
pub fn initialize_logging() {
    LOGGING_INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
        if env_logger::Builder::from_env(env).try_init().is_ok() {
            log::debug!("grid-creator {} logging initialized", GRID_CREATOR_VERSION);
        }
    });
}
