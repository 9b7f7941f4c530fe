use crate::api::FolioApi;
use crate::store::fs::FileStore;
use crate::store::fs_backend::FsBackend;
use crate::store::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn store(&self) -> FileStore {
        FileStore::open(self.root.clone(), DEFAULT_STORAGE_KEY)
    }

    /// A fresh API over the same directory, as a new session would see it.
    pub fn api(&self) -> FolioApi<FsBackend> {
        FolioApi::open(self.store())
    }
}
