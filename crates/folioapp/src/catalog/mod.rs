//! # Project Catalog
//!
//! [`Catalog`] owns the live, ordered list of [`ProjectRecord`]s and is the only thing
//! that mutates it. Every mutation writes a full snapshot through the
//! [`RecordStore`] before returning.
//!
//! ## Invariants
//!
//! - Ids are unique across the live list at all times.
//! - New records are prepended, so the list reads most-recent-first.
//! - Updates replace a record in place; nothing is ever re-sorted.
//!
//! ## View State
//!
//! Besides the records, the catalog carries the view state a UI needs:
//! the active category filter and the id of the record being edited (if any).
//! Changing either is a pure state transition and never touches storage.
//!
//! ## Notifications
//!
//! Each operation returns its outcome directly. A UI that prefers to react to
//! changes can also register a single listener with [`Catalog::on_change`].
//!
//! ## Submodules
//!
//! - [`filter`]: category + search views over the list
//! - [`transfer`]: JSON export and import
//! - [`samples`]: first-run sample projects

use crate::error::{FolioError, Result};
use crate::model::{CategoryFilter, ProjectId, ProjectInput, ProjectPatch, ProjectRecord};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

pub mod filter;
pub mod samples;
pub mod transfer;

pub use transfer::ImportReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    Created(ProjectId),
    Updated(ProjectId),
    Deleted(ProjectId),
    Imported { count: usize },
    Seeded { count: usize },
}

type Listener = Box<dyn FnMut(&CatalogEvent)>;

pub struct Catalog<B: StorageBackend> {
    records: Vec<ProjectRecord>,
    active_filter: CategoryFilter,
    editing_id: Option<ProjectId>,
    store: RecordStore<B>,
    listener: Option<Listener>,
}

impl<B: StorageBackend> Catalog<B> {
    /// Opens the catalog with whatever the store holds (possibly nothing).
    /// A snapshot that needed repair (fresh ids, dropped entries) is saved back
    /// right away, so later sessions see the same ids.
    pub fn open(store: RecordStore<B>) -> Self {
        let loaded = store.load_normalized();
        if loaded.was_repaired() {
            store.save(&loaded.records);
        }
        Self {
            records: loaded.records,
            active_filter: CategoryFilter::All,
            editing_id: None,
            store,
            listener: None,
        }
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.active_filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.active_filter = filter;
    }

    pub fn editing_id(&self) -> Option<&ProjectId> {
        self.editing_id.as_ref()
    }

    pub fn set_editing(&mut self, id: Option<ProjectId>) {
        self.editing_id = id;
    }

    /// Registers the change listener, replacing any previous one.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&CatalogEvent) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Creates a record from `input` and puts it at the top of the list.
    /// Input is trusted as-is; trimming and title checks belong to the caller.
    pub fn create(&mut self, input: ProjectInput) -> ProjectRecord {
        let mut record = ProjectRecord::new(input);
        while self.contains(&record.id) {
            record.id = ProjectId::generate();
        }

        self.records.insert(0, record.clone());
        self.commit(CatalogEvent::Created(record.id.clone()));
        tracing::debug!(id = %record.id, title = %record.title, "created project");
        record
    }

    /// Merges `patch` into the record with `id`, keeping its position.
    pub fn update(&mut self, id: &ProjectId, patch: ProjectPatch) -> Result<ProjectRecord> {
        let position = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| FolioError::NotFound(id.clone()))?;

        let merged = self.records[position].merged(patch);
        self.records[position] = merged.clone();
        self.commit(CatalogEvent::Updated(id.clone()));
        tracing::debug!(id = %id, "updated project");
        Ok(merged)
    }

    /// Removes the record with `id`. Returns false (and writes nothing) when absent.
    pub fn delete(&mut self, id: &ProjectId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        if self.records.len() == before {
            return false;
        }

        if self.editing_id.as_ref() == Some(id) {
            self.editing_id = None;
        }
        self.commit(CatalogEvent::Deleted(id.clone()));
        tracing::debug!(id = %id, "deleted project");
        true
    }

    /// Persists the full list and tells the listener what happened.
    fn commit(&mut self, event: CatalogEvent) {
        self.store.save(&self.records);
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
    }
}
