//! Core state containers for the commune picker.
//! Holds the reference commune list and the current selection for one session.

pub mod config;
pub mod dataset;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;

pub use config::{StoreConfig, DEFAULT_SELECTABLE_LIMIT};
pub use dataset::{
    bundled_dataset, load_dataset_file, parse_dataset, DatasetError, DatasetResult, DatasetShape,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::municipality::{MunicipalityRecord, ReferenceSiren, SelectableMunicipality};
pub use model::selection::{SelectionInput, SelectionState};
pub use session::{PickerSession, SessionError};
pub use store::reference_store::{project_selectable, ReferenceDataStore};
pub use store::selection_store::SelectionStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
