//! Selection input contract and flat selection state.
//!
//! # Responsibility
//! - Define the explicit input accepted by the selection update.
//! - Define the denormalized state read by views.
//!
//! # Invariants
//! - `SelectionState` fields are never optional; absence is `""` or `[]`.
//! - `SelectionState::from_input` always overwrites every field.

use crate::model::municipality::{MunicipalityRecord, ReferenceSiren, SelectableMunicipality};
use serde::{Deserialize, Serialize};

/// Input accepted by `SelectionStore::set_selected_municipality`.
///
/// Field names match the picker projection so a UI payload decodes as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInput {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub inter_name: Option<String>,
    #[serde(default)]
    pub inter_code: Option<String>,
    #[serde(default)]
    pub siren: Option<String>,
    #[serde(default)]
    pub reference_sirens: Option<Vec<ReferenceSiren>>,
}

impl SelectionInput {
    /// Creates an input carrying only the required commune name and code.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            ..Self::default()
        }
    }
}

impl From<&SelectableMunicipality> for SelectionInput {
    fn from(value: &SelectableMunicipality) -> Self {
        Self {
            name: value.name.clone(),
            code: value.code.clone(),
            inter_name: value.inter_name.clone(),
            inter_code: value.inter_code.clone(),
            siren: value.siren.clone(),
            reference_sirens: None,
        }
    }
}

impl From<&MunicipalityRecord> for SelectionInput {
    fn from(value: &MunicipalityRecord) -> Self {
        Self {
            name: value.com_name.clone(),
            code: value.com_code.clone(),
            inter_name: value.epci_name.clone(),
            inter_code: value.epci_code.clone(),
            siren: value.siren.clone(),
            reference_sirens: value.reference_sirens.clone(),
        }
    }
}

/// Currently selected commune, flattened for direct view binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_municipality: String,
    pub selected_municipality_code: String,
    pub selected_inter_municipality: String,
    pub selected_inter_municipality_code: String,
    pub selected_siren: String,
    /// Sirens of related organizations, in input order.
    pub selected_reference_sirens: Vec<String>,
}

impl SelectionState {
    /// Builds a full state from one input, normalizing absent fields.
    pub fn from_input(input: &SelectionInput) -> Self {
        Self {
            selected_municipality: input.name.clone(),
            selected_municipality_code: input.code.clone(),
            selected_inter_municipality: input.inter_name.clone().unwrap_or_default(),
            selected_inter_municipality_code: input.inter_code.clone().unwrap_or_default(),
            selected_siren: input.siren.clone().unwrap_or_default(),
            selected_reference_sirens: input
                .reference_sirens
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|entry| entry.siren.clone())
                .collect(),
        }
    }

    /// Returns whether every field holds its empty value.
    ///
    /// An all-empty state is indistinguishable from "nothing selected".
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
