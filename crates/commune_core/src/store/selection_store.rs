//! Current commune selection.
//!
//! # Responsibility
//! - Hold exactly one `SelectionState` for the session.
//! - Apply a selection as one wholesale overwrite.
//!
//! # Invariants
//! - No partial updates: every field is replaced on each call.
//! - Updates cannot fail; no format validation is performed.

use crate::model::selection::{SelectionInput, SelectionState};
use log::debug;

/// Session store for the selected commune.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    state: SelectionState,
}

impl SelectionStore {
    /// Creates a store with an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole selection from `input`.
    ///
    /// # Contract
    /// - `name`/`code` are copied verbatim, empty strings included.
    /// - Absent `inter_name`, `inter_code`, `siren` become `""`.
    /// - `selected_reference_sirens` lists each entry's `siren` in order, or
    ///   is empty when `reference_sirens` is absent.
    pub fn set_selected_municipality(&mut self, input: &SelectionInput) {
        self.state = SelectionState::from_input(input);
        debug!(
            "event=selection_set module=selection_store status=ok code={} reference_sirens={}",
            self.state.selected_municipality_code,
            self.state.selected_reference_sirens.len()
        );
    }

    /// Resets the selection to its empty state.
    pub fn clear(&mut self) {
        self.state = SelectionState::default();
        debug!("event=selection_clear module=selection_store status=ok");
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }
}
