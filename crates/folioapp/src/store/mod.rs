//! # Storage Layer
//!
//! Folio persists the whole catalog as one JSON array under a single namespaced key
//! of a synchronous key-value store.
//!
//! ## Split Responsibilities
//!
//! - [`backend::StorageBackend`]: raw key-value I/O (`get` / `set` / `remove`).
//! - [`RecordStore`]: the persistence adapter. Knows the key, serializes record
//!   snapshots, and **never fails**.
//!
//! ## Soft-Fail Policy
//!
//! Losing persistence must never block the user. So:
//!
//! - `load()` returns an empty list on a missing key, corrupt data, or an unavailable
//!   backend, and logs a warning.
//! - `save()` logs an error when the write fails and returns normally. The in-memory
//!   catalog stays the source of truth for the rest of the session.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store backed by [`fs_backend::FsBackend`].
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── portfolio_projects.json   # [{id, title, description, category, image, url, tags, date}, ...]
//! └── folio.toml                # optional configuration (see config.rs)
//! ```
//!
//! Every save writes the complete list, so no record is ever partially written.

use crate::model::ProjectRecord;
use crate::normalize::{parse_records, Normalized};
use backend::StorageBackend;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub const DEFAULT_STORAGE_KEY: &str = "portfolio_projects";

pub struct RecordStore<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored snapshot. Never fails: anything unreadable loads as empty.
    pub fn load(&self) -> Vec<ProjectRecord> {
        self.load_normalized().records
    }

    /// Like [`RecordStore::load`], but also reports what had to be repaired so the
    /// caller can write the repaired snapshot back.
    pub fn load_normalized(&self) -> Normalized {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Normalized::default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "storage unavailable, starting empty");
                return Normalized::default();
            }
        };

        match parse_records(&raw) {
            Ok(normalized) => {
                if normalized.was_repaired() {
                    tracing::warn!(
                        key = %self.key,
                        skipped = normalized.skipped,
                        reassigned_ids = normalized.reassigned_ids,
                        "repaired stored projects while loading"
                    );
                }
                tracing::debug!(key = %self.key, count = normalized.records.len(), "loaded projects");
                normalized
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored projects are corrupt, starting empty");
                Normalized::default()
            }
        }
    }

    /// Writes a full snapshot. Failures are logged and swallowed.
    pub fn save(&self, records: &[ProjectRecord]) {
        let payload = match serde_json::to_string(records) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to serialize projects");
                return;
            }
        };

        match self.backend.set(&self.key, &payload) {
            Ok(()) => tracing::debug!(key = %self.key, count = records.len(), "saved projects"),
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to save projects, keeping them in memory only")
            }
        }
    }
}
