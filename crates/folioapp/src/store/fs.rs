use super::fs_backend::FsBackend;
use super::RecordStore;
use std::path::PathBuf;

pub type FileStore = RecordStore<FsBackend>;

impl FileStore {
    /// A store whose key lives in `root` as `{key}.json`.
    pub fn open(root: PathBuf, key: &str) -> Self {
        RecordStore::with_key(FsBackend::new(root), key)
    }

    pub fn data_file(&self) -> Option<PathBuf> {
        self.backend().key_path(self.key()).ok()
    }
}
