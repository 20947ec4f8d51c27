/// Discards saves and loads an empty snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBackup;
