use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileBackup {
    pub(crate) path: PathBuf,
}
