//! Picker session wiring both stores.
//!
//! # Responsibility
//! - Own one reference store and one selection store per user session.
//! - Resolve a picked commune code into a full selection.
//!
//! # Invariants
//! - A failed lookup leaves the current selection untouched.

use crate::config::StoreConfig;
use crate::model::selection::{SelectionInput, SelectionState};
use crate::store::reference_store::ReferenceDataStore;
use crate::store::selection_store::SelectionStore;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    UnknownCode(String),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCode(code) => write!(f, "commune not found: {code}"),
        }
    }
}

impl Error for SessionError {}

/// Explicit session context passed to view handlers.
#[derive(Debug, Clone, Default)]
pub struct PickerSession {
    pub reference: ReferenceDataStore,
    pub selection: SelectionStore,
}

impl PickerSession {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            reference: ReferenceDataStore::new(config),
            selection: SelectionStore::new(),
        }
    }

    /// Selects the commune with code `code`, reference sirens included.
    ///
    /// # Errors
    /// - `UnknownCode` when no loaded record has this commune code.
    pub fn select_by_code(&mut self, code: &str) -> Result<&SelectionState, SessionError> {
        let Some(record) = self.reference.find_by_code(code) else {
            warn!(
                "event=selection_lookup module=session status=error reason=unknown_code code={}",
                code
            );
            return Err(SessionError::UnknownCode(code.to_string()));
        };
        let input = SelectionInput::from(record);
        self.selection.set_selected_municipality(&input);
        Ok(self.selection.state())
    }
}
