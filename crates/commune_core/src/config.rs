//! Store configuration.
//!
//! # Responsibility
//! - Carry the dataset shape and picker truncation settings.
//!
//! # Invariants
//! - Defaults reproduce the capped picker (first 100 records) and accept
//!   both dataset layouts.

use crate::dataset::DatasetShape;
use serde::{Deserialize, Serialize};

/// Default maximum number of picker items.
pub const DEFAULT_SELECTABLE_LIMIT: usize = 100;

fn default_selectable_limit() -> Option<usize> {
    Some(DEFAULT_SELECTABLE_LIMIT)
}

/// Configuration for `ReferenceDataStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Accepted top-level layout of the dataset document.
    #[serde(default)]
    pub dataset_shape: DatasetShape,
    /// Picker truncation. `None` lists every record.
    #[serde(default = "default_selectable_limit")]
    pub selectable_limit: Option<usize>,
}

impl StoreConfig {
    /// Config with no picker truncation.
    pub fn unbounded() -> Self {
        Self {
            selectable_limit: None,
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dataset_shape: DatasetShape::default(),
            selectable_limit: default_selectable_limit(),
        }
    }
}
