//! Filtered views over the catalog.
//!
//! Two predicates, applied together:
//! - **Category**: unless the filter is `All`, keep records whose category equals it.
//! - **Search**: unless the term is empty, keep records where the title, description,
//!   or any tag contains the term, ignoring case.
//!
//! Views never re-rank: results come back in catalog order.

use super::Catalog;
use crate::model::{CategoryFilter, ProjectRecord};
use crate::store::backend::StorageBackend;

impl<B: StorageBackend> Catalog<B> {
    pub fn list(&self, filter: &CategoryFilter, search_term: &str) -> Vec<&ProjectRecord> {
        filter_records(self.records(), filter, search_term)
    }

    /// Same as [`Catalog::list`] with the catalog's active filter.
    pub fn list_active(&self, search_term: &str) -> Vec<&ProjectRecord> {
        filter_records(self.records(), self.active_filter(), search_term)
    }
}

pub fn filter_records<'a>(
    records: &'a [ProjectRecord],
    filter: &CategoryFilter,
    search_term: &str,
) -> Vec<&'a ProjectRecord> {
    let term_lower = search_term.to_lowercase();
    records
        .iter()
        .filter(|r| filter.matches(&r.category))
        .filter(|r| term_lower.is_empty() || matches_term(r, &term_lower))
        .collect()
}

fn matches_term(record: &ProjectRecord, term_lower: &str) -> bool {
    record.title.to_lowercase().contains(term_lower)
        || record.description.to_lowercase().contains(term_lower)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::fixtures::CatalogFixture;

    fn titles(records: &[&ProjectRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn all_with_empty_term_is_the_whole_catalog() {
        let catalog = CatalogFixture::new().with_projects(3).build();
        let listed = catalog.list(&CategoryFilter::All, "");
        assert_eq!(titles(&listed), vec!["Project 3", "Project 2", "Project 1"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = CatalogFixture::new()
            .with_project("Site", Category::Web, "HTML, CSS")
            .build();

        assert_eq!(
            titles(&catalog.list(&CategoryFilter::Only(Category::Web), "")),
            vec!["Site"]
        );
        assert!(catalog
            .list(&CategoryFilter::Only(Category::Mobile), "")
            .is_empty());
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let catalog = CatalogFixture::new()
            .with_project("Site", Category::Web, "")
            .with_project("Tasker", Category::Mobile, "")
            .build();

        assert_eq!(
            titles(&catalog.list(&CategoryFilter::All, "task")),
            vec!["Tasker"]
        );
        assert_eq!(
            titles(&catalog.list(&CategoryFilter::All, "TASK")),
            vec!["Tasker"]
        );
    }

    #[test]
    fn search_looks_at_description_and_tags() {
        let catalog = CatalogFixture::new()
            .with_project("Brand", Category::Design, "Illustrator, Logo Design")
            .with_project("Shop", Category::Web, "React")
            .build();

        assert_eq!(
            titles(&catalog.list(&CategoryFilter::All, "logo")),
            vec!["Brand"]
        );
        // Fixture descriptions are "About {title}".
        assert_eq!(
            titles(&catalog.list(&CategoryFilter::All, "about shop")),
            vec!["Shop"]
        );
    }

    #[test]
    fn category_and_search_are_conjunctive() {
        let catalog = CatalogFixture::new()
            .with_project("React Site", Category::Web, "React")
            .with_project("React App", Category::Mobile, "React Native")
            .build();

        assert_eq!(
            titles(&catalog.list(&CategoryFilter::Only(Category::Mobile), "react")),
            vec!["React App"]
        );
    }

    #[test]
    fn unknown_categories_only_match_themselves() {
        let catalog = CatalogFixture::new()
            .with_project("Game", Category::from("games"), "")
            .build();

        assert!(catalog
            .list(&CategoryFilter::Only(Category::Other), "")
            .is_empty());
        assert_eq!(
            titles(&catalog.list(&"games".parse().unwrap(), "")),
            vec!["Game"]
        );
    }

    #[test]
    fn list_active_uses_stored_filter() {
        let mut catalog = CatalogFixture::new()
            .with_project("Site", Category::Web, "")
            .with_project("Tasker", Category::Mobile, "")
            .build();

        catalog.set_filter(CategoryFilter::Only(Category::Web));
        assert_eq!(titles(&catalog.list_active("")), vec!["Site"]);
        assert_eq!(catalog.len(), 2);
    }
}
