//! Reference dataset boundary.
//!
//! # Responsibility
//! - Decode commune records from JSON documents.
//! - Accept the bare-array and `{"results": [...]}` layouts.
//! - Fail fast with a shape error instead of a downstream field error.
//!
//! # Invariants
//! - Record order is preserved exactly as in the source document.
//! - An empty record array is valid input.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod load;

pub use load::{bundled_dataset, load_dataset_file, parse_dataset, BUNDLED_DATASET_JSON};

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Accepted top-level layout of a dataset document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetShape {
    /// `[ {record}, ... ]`
    BareArray,
    /// `{ "results": [ {record}, ... ] }`
    Envelope,
    /// Either of the above.
    #[default]
    Auto,
}

impl DatasetShape {
    fn describe(self) -> &'static str {
        match self {
            Self::BareArray => "a JSON array of records",
            Self::Envelope => "an object with a `results` array",
            Self::Auto => "a JSON array of records or an object with a `results` array",
        }
    }
}

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidShape {
        expected: DatasetShape,
        found: &'static str,
    },
    InvalidRecord {
        index: usize,
        message: String,
    },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read dataset: {err}"),
            Self::Json(err) => write!(f, "dataset is not valid JSON: {err}"),
            Self::InvalidShape { expected, found } => write!(
                f,
                "invalid dataset shape: expected {}, found {found}",
                expected.describe()
            ),
            Self::InvalidRecord { index, message } => {
                write!(f, "invalid dataset record at index {index}: {message}")
            }
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidShape { .. } | Self::InvalidRecord { .. } => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
