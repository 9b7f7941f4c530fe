use folioapp::catalog::Catalog;
use folioapp::error::FolioError;
use folioapp::model::{Category, CategoryFilter, ProjectId, ProjectInput, ProjectPatch};
use folioapp::store::fs::FileStore;
use folioapp::store::fs_backend::FsBackend;
use std::collections::HashSet;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Catalog<FsBackend> {
    Catalog::open(FileStore::open(
        dir.path().to_path_buf(),
        "portfolio_projects",
    ))
}

#[test]
fn created_records_are_unique_and_most_recent_first() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);

    let created: Vec<_> = (0..25)
        .map(|i| catalog.create(ProjectInput::new(format!("P{}", i))))
        .collect();

    let ids: HashSet<_> = created.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), created.len());

    let listed: Vec<_> = catalog
        .list(&CategoryFilter::All, "")
        .into_iter()
        .map(|r| r.id.clone())
        .collect();
    let expected: Vec<_> = created.iter().rev().map(|r| r.id.clone()).collect();
    assert_eq!(listed, expected);
}

#[test]
fn update_of_unknown_id_leaves_storage_byte_identical() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);
    catalog.create(ProjectInput::new("A"));
    catalog.create(ProjectInput::new("B"));

    let file = dir.path().join("portfolio_projects.json");
    let before = std::fs::read(&file).unwrap();

    let err = catalog
        .update(
            &ProjectId::from("missing"),
            ProjectPatch {
                title: Some("X".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, FolioError::NotFound(_)));
    assert_eq!(std::fs::read(&file).unwrap(), before);
}

#[test]
fn delete_twice_matches_delete_once() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);
    let target = catalog.create(ProjectInput::new("Target"));
    catalog.create(ProjectInput::new("Other"));

    assert!(catalog.delete(&target.id));
    let once = catalog.records().to_vec();
    assert!(!catalog.delete(&target.id));
    assert_eq!(catalog.records(), once.as_slice());
    assert_eq!(open(&dir).records(), once.as_slice());
}

#[test]
fn export_import_round_trip_across_stores() {
    let source_dir = TempDir::new().unwrap();
    let mut source = open(&source_dir);
    source.create(
        ProjectInput::new("Site")
            .with_description("d")
            .with_category("web")
            .with_tags("HTML, CSS"),
    );
    source.create(
        ProjectInput::new("Tasker")
            .with_category("mobile")
            .with_url("https://tasker.app"),
    );

    let target_dir = TempDir::new().unwrap();
    let mut target = open(&target_dir);
    target.import(&source.export().unwrap()).unwrap();

    assert_eq!(target.records(), source.records());
    assert_eq!(open(&target_dir).records(), source.records());
}

#[test]
fn edited_records_round_trip_unchanged() {
    let source_dir = TempDir::new().unwrap();
    let mut source = open(&source_dir);
    let site = source.create(
        ProjectInput::new("Site")
            .with_category("web")
            .with_image("https://example.com/shot.png"),
    );
    source
        .update(
            &site.id,
            ProjectPatch {
                image: Some(String::new()),
                tags: Some(vec![" HTML ".into(), "".into(), "CSS".into()]),
                ..Default::default()
            },
        )
        .unwrap();

    let target_dir = TempDir::new().unwrap();
    let mut target = open(&target_dir);
    target.import(&source.export().unwrap()).unwrap();

    assert_eq!(target.records(), source.records());
    assert_eq!(open(&source_dir).records(), source.records());
}

#[test]
fn invalid_imports_keep_existing_records() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);
    catalog.create(ProjectInput::new("Keep me"));
    let before = catalog.records().to_vec();

    assert!(matches!(
        catalog.import("not a json array"),
        Err(FolioError::InvalidFormat(_))
    ));
    assert!(matches!(
        catalog.import(r#"{"a":1}"#),
        Err(FolioError::InvalidFormat(_))
    ));
    assert_eq!(catalog.records(), before.as_slice());
    assert_eq!(open(&dir).records(), before.as_slice());
}

#[test]
fn scenario_filter_and_search() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);

    let site = catalog.create(
        ProjectInput::new("Site")
            .with_description("d")
            .with_category("web")
            .with_tags("HTML, CSS"),
    );
    assert_eq!(site.image, Category::Web.default_image());
    assert_eq!(site.tags, vec!["HTML", "CSS"]);

    let web = catalog.list(&CategoryFilter::Only(Category::Web), "");
    assert_eq!(web.len(), 1);
    assert_eq!(web[0].id, site.id);
    assert!(catalog
        .list(&CategoryFilter::Only(Category::Mobile), "")
        .is_empty());

    catalog.create(ProjectInput::new("Tasker").with_category("mobile"));
    let found = catalog.list(&CategoryFilter::All, "task");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Tasker");
}

#[test]
fn loading_repairs_hand_edited_storage() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("portfolio_projects.json"),
        r#"[
            {"id": "dup", "title": "First"},
            {"id": "dup", "title": "Second", "category": "design"},
            "noise"
        ]"#,
    )
    .unwrap();

    let catalog = open(&dir);
    assert_eq!(catalog.len(), 2);
    assert_ne!(catalog.records()[0].id, catalog.records()[1].id);
    assert_eq!(catalog.records()[1].category, Category::Design);

    // The repaired ids are what the next session sees.
    assert_eq!(open(&dir).records(), catalog.records());
}

#[test]
fn records_without_ids_keep_their_new_id_across_sessions() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("portfolio_projects.json"),
        r#"[{"title": "No id"}]"#,
    )
    .unwrap();

    let first = open(&dir).records()[0].id.clone();
    let second = open(&dir).records()[0].id.clone();
    assert_eq!(first, second);
}
