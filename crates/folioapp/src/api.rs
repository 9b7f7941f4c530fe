//! # API Facade
//!
//! The API layer is a **thin facade** over the catalog. It serves as the single
//! entry point for UI clients, whatever the UI is.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Validates form input** (trims text fields, rejects empty titles)
//! - **Resolves ids** (exact id, or a unique prefix of one)
//! - **Runs the edit workflow** (`begin_edit` → `submit` → create-or-update)
//! - **Returns structured types** (`Result<CmdResult>`) with leveled messages the UI
//!   can show as notifications
//!
//! ## What the API Does NOT Do
//!
//! - **Catalog logic**: ordering, merging, persistence live in [`crate::catalog`]
//! - **Presentation**: no stdout/stderr, no colors, no exit codes
//!
//! ## Edit Workflow
//!
//! A form-based UI edits a project in three steps:
//!
//! 1. `begin_edit(id)` marks the record as being edited and returns its values as a
//!    [`ProjectInput`] to prefill the form.
//! 2. The user changes the form.
//! 3. `submit(input)` updates the record being edited (or creates a new one when
//!    nothing is being edited) and clears the editing state.
//!
//! Every update coming through the facade stamps a fresh `date`, so `date` reads as
//! "last saved".
//!
//! ## Generic Over StorageBackend
//!
//! `FolioApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `FolioApi<FsBackend>`
//! - Testing: `FolioApi<MemBackend>`

use crate::catalog::Catalog;
use crate::error::{FolioError, Result};
use crate::model::{CategoryFilter, ProjectId, ProjectInput, ProjectPatch, ProjectRecord};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "projects.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, updated, or removed by the operation.
    pub affected: Vec<ProjectRecord>,
    /// Records to display.
    pub listed: Vec<ProjectRecord>,
    /// Serialized output (export).
    pub payload: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<ProjectRecord>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<ProjectRecord>) -> Self {
        self.listed = records;
        self
    }
}

/// The main API facade for folio operations.
pub struct FolioApi<B: StorageBackend> {
    catalog: Catalog<B>,
}

impl<B: StorageBackend> FolioApi<B> {
    pub fn new(catalog: Catalog<B>) -> Self {
        Self { catalog }
    }

    pub fn open(store: RecordStore<B>) -> Self {
        Self::new(Catalog::open(store))
    }

    pub fn catalog(&self) -> &Catalog<B> {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog<B> {
        &mut self.catalog
    }

    /// Resolves a user-supplied id: an exact match first, then a unique prefix.
    pub fn resolve_id(&self, raw: &str) -> Result<ProjectId> {
        let raw = raw.trim();
        let exact = ProjectId::from(raw);
        if self.catalog.contains(&exact) {
            return Ok(exact);
        }
        if raw.is_empty() {
            return Err(FolioError::Validation("Project id cannot be empty".into()));
        }

        let mut candidates = self
            .catalog
            .records()
            .iter()
            .filter(|r| r.id.as_str().starts_with(raw));
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Ok(only.id.clone()),
            (Some(_), Some(_)) => Err(FolioError::Validation(format!(
                "Id prefix '{}' matches more than one project",
                raw
            ))),
            (None, _) => Err(FolioError::NotFound(exact)),
        }
    }

    pub fn create_project(&mut self, input: ProjectInput) -> Result<CmdResult> {
        let input = validated(input)?;
        let record = self.catalog.create(input);

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Project saved: {}",
            record.title
        )));
        Ok(result.with_affected(vec![record]))
    }

    /// Applies a partial update. The record's `date` is restamped unless the patch
    /// sets one explicitly.
    pub fn update_project(&mut self, raw_id: &str, patch: ProjectPatch) -> Result<CmdResult> {
        let id = self.resolve_id(raw_id)?;
        let patch = validated_patch(patch)?;
        let patch = match patch.date {
            Some(_) => patch,
            None => patch.with_date(Utc::now()),
        };
        let record = self.catalog.update(&id, patch)?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Project updated: {}",
            record.title
        )));
        Ok(result.with_affected(vec![record]))
    }

    pub fn delete_project(&mut self, raw_id: &str) -> Result<CmdResult> {
        let id = self.resolve_id(raw_id)?;
        let record = self
            .catalog
            .get(&id)
            .cloned()
            .ok_or_else(|| FolioError::NotFound(id.clone()))?;
        if !self.catalog.delete(&id) {
            return Err(FolioError::NotFound(id));
        }

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Project deleted: {}",
            record.title
        )));
        Ok(result.with_affected(vec![record]))
    }

    pub fn get_project(&self, raw_id: &str) -> Result<CmdResult> {
        let id = self.resolve_id(raw_id)?;
        let record = self
            .catalog
            .get(&id)
            .cloned()
            .ok_or(FolioError::NotFound(id))?;
        Ok(CmdResult::default().with_listed(vec![record]))
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.catalog.set_filter(filter);
    }

    /// Lists with the active filter. Passing `Some(filter)` makes it the active one.
    pub fn list_projects(
        &mut self,
        filter: Option<CategoryFilter>,
        search_term: &str,
    ) -> Result<CmdResult> {
        if let Some(filter) = filter {
            self.catalog.set_filter(filter);
        }
        let listed: Vec<ProjectRecord> = self
            .catalog
            .list_active(search_term)
            .into_iter()
            .cloned()
            .collect();

        let mut result = CmdResult::default();
        if self.catalog.is_empty() {
            result.add_message(CmdMessage::info(
                "No projects yet. Add one to get started.",
            ));
        } else if listed.is_empty() {
            result.add_message(CmdMessage::info("No projects match the current filter."));
        }
        Ok(result.with_listed(listed))
    }

    /// Starts editing a project and returns its current values for a form.
    pub fn begin_edit(&mut self, raw_id: &str) -> Result<ProjectInput> {
        let id = self.resolve_id(raw_id)?;
        let record = self
            .catalog
            .get(&id)
            .ok_or_else(|| FolioError::NotFound(id.clone()))?;
        let form = ProjectInput {
            title: record.title.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            image: record.image.clone(),
            url: record.url.clone(),
            tags_raw: record.tags.join(", "),
            date: None,
        };
        self.catalog.set_editing(Some(id));
        Ok(form)
    }

    pub fn cancel_edit(&mut self) {
        self.catalog.set_editing(None);
    }

    /// Saves a submitted form: updates the record being edited, or creates a new one.
    /// The editing state is cleared either way.
    pub fn submit(&mut self, input: ProjectInput) -> Result<CmdResult> {
        let input = validated(input)?;
        let Some(id) = self.catalog.editing_id().cloned() else {
            return self.create_project(input);
        };
        self.catalog.set_editing(None);

        let mut patch = ProjectPatch::from(input);
        patch.date = Some(patch.date.unwrap_or_else(Utc::now));
        let record = self.catalog.update(&id, patch)?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Project saved: {}",
            record.title
        )));
        Ok(result.with_affected(vec![record]))
    }

    pub fn export_projects(&self) -> Result<CmdResult> {
        let payload = self.catalog.export()?;
        let mut result = CmdResult::default();
        result.payload = Some(payload);
        Ok(result)
    }

    pub fn export_to_file(&self, path: &Path) -> Result<CmdResult> {
        let payload = self.catalog.export()?;
        fs::write(path, payload).map_err(FolioError::Io)?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Exported {} projects to {}",
            self.catalog.len(),
            path.display()
        )));
        Ok(result)
    }

    pub fn import_projects(&mut self, payload: &str) -> Result<CmdResult> {
        let report = self.catalog.import(payload)?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Imported {} projects",
            report.imported
        )));
        if report.skipped > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Skipped {} entries that were not projects",
                report.skipped
            )));
        }
        if report.reassigned_ids > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Assigned new ids to {} projects with missing or duplicate ids",
                report.reassigned_ids
            )));
        }
        Ok(result)
    }

    pub fn import_from_file(&mut self, path: &Path) -> Result<CmdResult> {
        let payload = fs::read_to_string(path).map_err(FolioError::Io)?;
        self.import_projects(&payload)
    }

    pub fn seed_samples(&mut self) -> CmdResult {
        let count = self.catalog.seed_samples_if_empty();
        let mut result = CmdResult::default();
        if count > 0 {
            result.add_message(CmdMessage::info(format!(
                "Added {} sample projects",
                count
            )));
        }
        result
    }
}

fn validated(input: ProjectInput) -> Result<ProjectInput> {
    let input = input.trimmed();
    if input.title.is_empty() {
        return Err(FolioError::Validation("Title cannot be empty".into()));
    }
    Ok(input)
}

fn validated_patch(mut patch: ProjectPatch) -> Result<ProjectPatch> {
    if let Some(title) = patch.title.as_mut() {
        *title = title.trim().to_string();
        if title.is_empty() {
            return Err(FolioError::Validation("Title cannot be empty".into()));
        }
    }
    for field in [&mut patch.description, &mut patch.image, &mut patch.url] {
        if let Some(value) = field.as_mut() {
            *value = value.trim().to_string();
        }
    }
    Ok(patch)
}
