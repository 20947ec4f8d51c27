use crate::backup::enums::backup_error::BackupError;
use crate::backup::structs::no_backup::NoBackup;
use crate::backup::traits::backup::Backup;

impl Backup for NoBackup {
    fn save(&self, _snapshot: &[u8]) -> Result<(), BackupError> {
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<u8>>, BackupError> {
        Ok(None)
    }

    fn describe(&self) -> String {
        String::from("disabled")
    }
}
