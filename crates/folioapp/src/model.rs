//! # Data Model
//!
//! Folio manages a single entity, the [`ProjectRecord`]. Everything else in this module
//! exists to build, patch, or classify records.
//!
//! ## Identity
//!
//! [`ProjectId`] is an opaque string. Fresh ids are random (UUIDv4, simple form), so
//! they are unique without any central counter and short prefixes of them are
//! distinctive enough to type. Ids coming from an import payload are kept verbatim,
//! whatever their shape.
//!
//! ## Categories
//!
//! The known categories are `web`, `mobile`, `design` and `other`. Any other string is
//! carried through as [`Category::Unknown`] and written back exactly as it was read;
//! it is only treated as `other` when displayed or when choosing a default image.
//!
//! ## Creating vs. Patching
//!
//! - [`ProjectInput`] is the full form a user submits (tags still as a raw,
//!   comma-separated string).
//! - [`ProjectPatch`] is a shallow merge: every `Some` field replaces the record's
//!   value, every `None` field leaves it alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_WEB_IMAGE: &str =
    "https://images.unsplash.com/photo-1547658719-da2b51169166?w=400&h=300&fit=crop";
pub const DEFAULT_MOBILE_IMAGE: &str =
    "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=400&h=300&fit=crop";
pub const DEFAULT_DESIGN_IMAGE: &str =
    "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=400&h=300&fit=crop";
pub const DEFAULT_OTHER_IMAGE: &str =
    "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=400&h=300&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Web,
    Mobile,
    Design,
    #[default]
    Other,
    /// A category string we don't know about, stored as given.
    Unknown(String),
}

impl Category {
    pub const KNOWN: [Category; 4] = [
        Category::Web,
        Category::Mobile,
        Category::Design,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Design => "design",
            Category::Other => "other",
            Category::Unknown(raw) => raw,
        }
    }

    /// The category used for display purposes. Unknown values render as `Other`.
    pub fn display_kind(&self) -> Category {
        match self {
            Category::Unknown(_) => Category::Other,
            known => known.clone(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self.display_kind() {
            Category::Web => "Web Development",
            Category::Mobile => "Mobile App",
            Category::Design => "Design",
            _ => "Other",
        }
    }

    pub fn default_image(&self) -> &'static str {
        match self {
            Category::Web => DEFAULT_WEB_IMAGE,
            Category::Mobile => DEFAULT_MOBILE_IMAGE,
            Category::Design => DEFAULT_DESIGN_IMAGE,
            _ => DEFAULT_OTHER_IMAGE,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "web" => Category::Web,
            "mobile" => Category::Mobile,
            "design" => Category::Design,
            "other" => Category::Other,
            _ => Category::Unknown(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which slice of the catalog a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => CategoryFilter::All,
            other => CategoryFilter::Only(Category::from(other)),
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image: String,
    pub url: String,
    pub tags: Vec<String>,
    pub date: DateTime<Utc>,
}

impl ProjectRecord {
    /// Builds a brand new record from submitted input: fresh id, tags parsed,
    /// image defaulted by category, and `date` stamped now unless the input carries one.
    pub fn new(input: ProjectInput) -> Self {
        let image = resolve_image(&input.image, &input.category);
        Self {
            id: ProjectId::generate(),
            tags: parse_tags(&input.tags_raw),
            title: input.title,
            description: input.description,
            category: input.category,
            image,
            url: input.url,
            date: input.date.unwrap_or_else(Utc::now),
        }
    }

    /// Shallow merge: fields present in the patch win. The id never changes.
    /// A blank image falls back to the category default and tags are cleaned,
    /// the same way a stored or imported record is read back.
    pub fn merged(&self, patch: ProjectPatch) -> Self {
        let current = self.clone();
        let category = patch.category.unwrap_or(current.category);
        let image = resolve_image(&patch.image.unwrap_or(current.image), &category);
        Self {
            id: current.id,
            title: patch.title.unwrap_or(current.title),
            description: patch.description.unwrap_or(current.description),
            image,
            url: patch.url.unwrap_or(current.url),
            tags: patch.tags.map(clean_tags).unwrap_or(current.tags),
            date: patch.date.unwrap_or(current.date),
            category,
        }
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// What a user submits when creating (or fully re-submitting) a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub image: String,
    pub url: String,
    /// Comma-separated tags, e.g. `"HTML, CSS"`.
    pub tags_raw: String,
    pub date: Option<DateTime<Utc>>,
}

impl ProjectInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_tags(mut self, tags_raw: impl Into<String>) -> Self {
        self.tags_raw = tags_raw.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Trims every free-text field, the way a form submission is cleaned up.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            url: self.url.trim().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<DateTime<Utc>>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        *self == ProjectPatch::default()
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

/// A full submission becomes a patch that replaces every field. An empty image
/// resolves to the category default, as on create.
impl From<ProjectInput> for ProjectPatch {
    fn from(input: ProjectInput) -> Self {
        let image = resolve_image(&input.image, &input.category);
        Self {
            tags: Some(parse_tags(&input.tags_raw)),
            title: Some(input.title),
            description: Some(input.description),
            category: Some(input.category),
            image: Some(image),
            url: Some(input.url),
            date: input.date,
        }
    }
}

/// Splits a comma-separated tag string, trimming each entry and dropping empties.
/// Order and duplicates are preserved.
pub fn parse_tags(raw: &str) -> Vec<String> {
    clean_tags(raw.split(','))
}

/// Trims each tag and drops the blank ones, keeping order and duplicates.
pub fn clean_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// A blank image (empty or whitespace) means "use the category default".
pub(crate) fn resolve_image(image: &str, category: &Category) -> String {
    if image.trim().is_empty() {
        category.default_image().to_string()
    } else {
        image.to_string()
    }
}
