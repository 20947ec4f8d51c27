use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use crate::backup::enums::backup_error::BackupError;
use crate::backup::structs::file_backup::FileBackup;
use crate::backup::traits::backup::Backup;

impl FileBackup {
    pub fn new(path: impl Into<PathBuf>) -> FileBackup {
        FileBackup { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Backup for FileBackup {
    /// Writes next to the target and renames over it, so a crash mid-write
    /// leaves the previous snapshot intact.
    fn save(&self, snapshot: &[u8]) -> Result<(), BackupError> {
        let temp = self.temp_path();
        let mut file = File::create(&temp)?;
        file.write_all(snapshot)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<u8>>, BackupError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BackupError::Io(e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
