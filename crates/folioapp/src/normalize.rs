//! Turns loosely-typed JSON (an import payload, or whatever sits under the storage
//! key) into well-formed [`ProjectRecord`]s.
//!
//! This runs at the two boundaries where data enters the catalog, so nothing past
//! them ever re-checks field presence. The only hard requirement is that the
//! top-level value is an array; individual elements are repaired, not rejected:
//!
//! | Field | Missing / malformed becomes |
//! |-------|-----------------------------|
//! | `title`, `description`, `url` | `""` |
//! | `category` | `other` (any string is kept as given) |
//! | `image` | the category default |
//! | `tags` | `[]` (a string is split on commas) |
//! | `date` | the time of normalization |
//! | `id` | a fresh id (also when it repeats an earlier element's id) |
//!
//! Elements that are not objects at all are skipped.

use crate::error::{FolioError, Result};
use crate::model::{clean_tags, parse_tags, resolve_image, Category, ProjectId, ProjectRecord};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct Normalized {
    pub records: Vec<ProjectRecord>,
    /// Elements dropped because they were not JSON objects.
    pub skipped: usize,
    /// Elements whose id was missing or duplicated and got a fresh one.
    pub reassigned_ids: usize,
}

impl Normalized {
    /// True when the input differed structurally from what was kept.
    pub fn was_repaired(&self) -> bool {
        self.skipped > 0 || self.reassigned_ids > 0
    }
}

/// Parses `text` and normalizes it. Fails with `InvalidFormat` unless it is a JSON array.
pub fn parse_records(text: &str) -> Result<Normalized> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| FolioError::InvalidFormat(format!("not valid JSON ({})", e)))?;
    normalize_records(value)
}

pub fn normalize_records(value: Value) -> Result<Normalized> {
    let Value::Array(items) = value else {
        return Err(FolioError::InvalidFormat(format!(
            "expected a JSON array of projects, found {}",
            kind_of(&value)
        )));
    };

    let now = Utc::now();
    let mut seen: HashSet<ProjectId> = HashSet::new();
    let mut out = Normalized::default();

    for item in items {
        let Value::Object(fields) = item else {
            out.skipped += 1;
            continue;
        };
        let mut record = normalize_record(&fields, now);
        if record.id.as_str().is_empty() || seen.contains(&record.id) {
            record.id = fresh_id(&seen);
            out.reassigned_ids += 1;
        }
        seen.insert(record.id.clone());
        out.records.push(record);
    }

    Ok(out)
}

fn normalize_record(fields: &Map<String, Value>, now: DateTime<Utc>) -> ProjectRecord {
    let category = fields
        .get("category")
        .and_then(Value::as_str)
        .map(Category::from)
        .unwrap_or_default();

    let image = resolve_image(&text_field(fields, "image"), &category);

    ProjectRecord {
        id: id_field(fields),
        title: text_field(fields, "title"),
        description: text_field(fields, "description"),
        image,
        url: text_field(fields, "url"),
        tags: tags_field(fields),
        date: date_field(fields).unwrap_or(now),
        category,
    }
}

fn text_field(fields: &Map<String, Value>, name: &str) -> String {
    fields
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn id_field(fields: &Map<String, Value>) -> ProjectId {
    match fields.get("id") {
        Some(Value::String(s)) => ProjectId::from(s.trim()),
        Some(Value::Number(n)) => ProjectId::from(n.to_string()),
        _ => ProjectId::from(""),
    }
}

fn tags_field(fields: &Map<String, Value>) -> Vec<String> {
    match fields.get("tags") {
        Some(Value::Array(items)) => clean_tags(items.iter().filter_map(Value::as_str)),
        Some(Value::String(raw)) => parse_tags(raw),
        _ => Vec::new(),
    }
}

fn date_field(fields: &Map<String, Value>) -> Option<DateTime<Utc>> {
    let raw = fields.get("date")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

fn fresh_id(seen: &HashSet<ProjectId>) -> ProjectId {
    loop {
        let id = ProjectId::generate();
        if !seen.contains(&id) {
            return id;
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
