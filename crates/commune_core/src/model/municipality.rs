//! Commune reference records and their picker projection.
//!
//! # Responsibility
//! - Mirror the dataset field names (`com_code`, `epci_name`, ...).
//! - Project records into display-ready `SelectableMunicipality` items.
//!
//! # Invariants
//! - `com_code` and `com_name` are required on every record.
//! - Unknown dataset fields are ignored on decode.

use serde::{Deserialize, Serialize};

/// One related organization entry attached to a commune record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSiren {
    pub siren: String,
}

impl ReferenceSiren {
    pub fn new(siren: impl Into<String>) -> Self {
        Self {
            siren: siren.into(),
        }
    }
}

/// Commune record as provided by the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityRecord {
    /// Official commune code, e.g. `01001`.
    pub com_code: String,
    pub com_name: String,
    /// Name of the inter-municipal grouping (EPCI), when the commune has one.
    #[serde(default)]
    pub epci_name: Option<String>,
    #[serde(default)]
    pub epci_code: Option<String>,
    /// Organization identifier of the commune itself.
    #[serde(default)]
    pub siren: Option<String>,
    /// Related organizations. Missing entirely in older dataset exports.
    #[serde(default)]
    pub reference_sirens: Option<Vec<ReferenceSiren>>,
}

impl MunicipalityRecord {
    /// Creates a record with only the required fields set.
    pub fn new(com_code: impl Into<String>, com_name: impl Into<String>) -> Self {
        Self {
            com_code: com_code.into(),
            com_name: com_name.into(),
            epci_name: None,
            epci_code: None,
            siren: None,
            reference_sirens: None,
        }
    }

    /// Projects this record into its picker item.
    pub fn to_selectable(&self) -> SelectableMunicipality {
        SelectableMunicipality {
            code: self.com_code.clone(),
            name: self.com_name.clone(),
            inter_name: self.epci_name.clone(),
            inter_code: self.epci_code.clone(),
            siren: self.siren.clone(),
        }
    }
}

/// Display-ready picker item derived from a `MunicipalityRecord`.
///
/// Absent grouping/siren fields stay `None` and are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableMunicipality {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inter_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siren: Option<String>,
}

impl From<&MunicipalityRecord> for SelectableMunicipality {
    fn from(value: &MunicipalityRecord) -> Self {
        value.to_selectable()
    }
}
