//! JSON export and import of the whole catalog.
//!
//! Export always covers every live record, regardless of the active filter or any
//! search. The format is the persisted layout, pretty-printed.
//!
//! Import replaces the catalog wholesale (no merging). The payload must be a JSON
//! array; its elements are repaired by [`crate::normalize`] rather than rejected.
//! On `InvalidFormat` the catalog is left exactly as it was.

use super::{Catalog, CatalogEvent};
use crate::error::Result;
use crate::normalize::parse_records;
use crate::store::backend::StorageBackend;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub reassigned_ids: usize,
}

impl<B: StorageBackend> Catalog<B> {
    pub fn export(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.records())?)
    }

    pub fn import(&mut self, payload: &str) -> Result<ImportReport> {
        let normalized = parse_records(payload)?;
        let report = ImportReport {
            imported: normalized.records.len(),
            skipped: normalized.skipped,
            reassigned_ids: normalized.reassigned_ids,
        };

        self.records = normalized.records;
        self.editing_id = None;
        self.commit(CatalogEvent::Imported {
            count: report.imported,
        });
        tracing::debug!(
            imported = report.imported,
            skipped = report.skipped,
            reassigned_ids = report.reassigned_ids,
            "imported projects"
        );
        Ok(report)
    }
}
