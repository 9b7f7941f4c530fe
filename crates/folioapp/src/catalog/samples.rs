use super::{Catalog, CatalogEvent};
use crate::model::{Category, ProjectId, ProjectRecord};
use crate::store::backend::StorageBackend;
use chrono::{Duration, Utc};

/// The projects shown on first run, newest first.
pub fn sample_projects() -> Vec<ProjectRecord> {
    let now = Utc::now();
    let sample = |title: &str,
                  description: &str,
                  category: Category,
                  image: &str,
                  url: &str,
                  tags: &[&str],
                  age_days: i64| ProjectRecord {
        id: ProjectId::generate(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        image: image.to_string(),
        url: url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: now - Duration::days(age_days),
    };

    vec![
        sample(
            "Corporate Website",
            "Full website build for a company, including responsive design and a content management system.",
            Category::Web,
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=300&fit=crop",
            "https://corporate-example.com",
            &["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
            0,
        ),
        sample(
            "Task Manager App",
            "Mobile app for managing tasks with cloud sync and push notifications.",
            Category::Mobile,
            "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=400&h=300&fit=crop",
            "https://play.google.com/store/apps/details?id=com.example.tasks",
            &["React Native", "Firebase", "Redux", "Push Notifications"],
            1,
        ),
        sample(
            "Visual Identity",
            "Complete visual identity for a tech startup, including logo, color palette and brand guide.",
            Category::Design,
            "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=400&h=300&fit=crop",
            "",
            &["Adobe Illustrator", "Branding", "Logo Design", "Color Theory"],
            2,
        ),
    ]
}

impl<B: StorageBackend> Catalog<B> {
    /// Fills an empty catalog with the sample projects. Returns how many were added;
    /// a catalog that already has records is left alone.
    pub fn seed_samples_if_empty(&mut self) -> usize {
        if !self.is_empty() {
            return 0;
        }
        self.records = sample_projects();
        let count = self.records.len();
        self.commit(CatalogEvent::Seeded { count });
        tracing::info!(count, "seeded sample projects");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryFilter, ProjectInput};
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[test]
    fn samples_are_newest_first_with_unique_ids() {
        let samples = sample_projects();
        assert!(samples.windows(2).all(|w| w[0].date > w[1].date));
        let ids: HashSet<_> = samples.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), samples.len());
    }

    #[test]
    fn seeds_only_an_empty_catalog() {
        let mut catalog = Catalog::open(InMemoryStore::new());
        assert_eq!(catalog.seed_samples_if_empty(), 3);
        assert_eq!(catalog.store().load().len(), 3);
        assert_eq!(catalog.seed_samples_if_empty(), 0);

        let mut other = Catalog::open(InMemoryStore::new());
        other.create(ProjectInput::new("Mine"));
        assert_eq!(other.seed_samples_if_empty(), 0);
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn samples_cover_every_known_category_but_other() {
        let mut catalog = Catalog::open(InMemoryStore::new());
        catalog.seed_samples_if_empty();
        for category in [Category::Web, Category::Mobile, Category::Design] {
            assert_eq!(
                catalog.list(&CategoryFilter::Only(category), "").len(),
                1
            );
        }
    }
}
