//! Reference commune list and picker projection.
//!
//! # Responsibility
//! - Keep the loaded commune records for the session.
//! - Derive `SelectableMunicipality` items on demand.
//!
//! # Invariants
//! - Loading reassigns the backing list; it never accumulates.
//! - The projection is recomputed on every read and keeps source order.

use crate::config::StoreConfig;
use crate::dataset::{bundled_dataset, DatasetResult};
use crate::model::municipality::{MunicipalityRecord, SelectableMunicipality};
use log::debug;

/// Projects records into picker items, keeping at most `limit` of them.
pub fn project_selectable(
    records: &[MunicipalityRecord],
    limit: Option<usize>,
) -> Vec<SelectableMunicipality> {
    records
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(MunicipalityRecord::to_selectable)
        .collect()
}

/// Session store for the commune reference dataset.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataStore {
    config: StoreConfig,
    records: Vec<MunicipalityRecord>,
}

impl ReferenceDataStore {
    /// Creates an empty store. Call `initialize` before reading the list.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Loads the bundled dataset into the store.
    ///
    /// Safe to call repeatedly; each call replaces the list with the same data.
    ///
    /// # Errors
    /// - Returns a dataset error if the bundled asset does not decode under
    ///   the configured `dataset_shape`. The store keeps its previous list in
    ///   that case.
    pub fn initialize(&mut self) -> DatasetResult<()> {
        let records = bundled_dataset(self.config.dataset_shape)?;
        self.initialize_with(records);
        Ok(())
    }

    /// Replaces the backing list with `records`.
    pub fn initialize_with(&mut self, records: Vec<MunicipalityRecord>) {
        self.records = records;
        debug!(
            "event=reference_init module=reference_store status=ok count={}",
            self.records.len()
        );
    }

    /// Returns the picker projection, capped by `selectable_limit`.
    pub fn selectable_list(&self) -> Vec<SelectableMunicipality> {
        project_selectable(&self.records, self.config.selectable_limit)
    }

    /// Returns all loaded records in source order.
    pub fn records(&self) -> &[MunicipalityRecord] {
        &self.records
    }

    /// Returns the first record whose commune code equals `code`.
    pub fn find_by_code(&self, code: &str) -> Option<&MunicipalityRecord> {
        self.records.iter().find(|record| record.com_code == code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
