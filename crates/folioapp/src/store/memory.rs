use super::mem_backend::MemBackend;
use super::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::{Category, ProjectInput};
    use chrono::{Duration, Utc};

    /// Builds a catalog with known records, oldest first, so the last one added
    /// ends up at the top of the list.
    pub struct CatalogFixture {
        pub catalog: Catalog<MemBackend>,
        offset_days: i64,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::open(InMemoryStore::new()),
                offset_days: 30,
            }
        }

        pub fn with_project(mut self, title: &str, category: Category, tags: &str) -> Self {
            let date = Utc::now() - Duration::days(self.offset_days);
            self.offset_days -= 1;
            self.catalog.create(
                ProjectInput::new(title)
                    .with_description(format!("About {}", title))
                    .with_category(category)
                    .with_tags(tags)
                    .with_date(date),
            );
            self
        }

        pub fn with_projects(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_project(&format!("Project {}", i + 1), Category::Other, "");
            }
            self
        }

        pub fn build(self) -> Catalog<MemBackend> {
            self.catalog
        }
    }
}
