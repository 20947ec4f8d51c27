#[cfg(test)]
mod backup_tests {
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;
    use crate::backup::backup::{backup_target, restore_backup, save_backup};
    use crate::backup::enums::backup_error::BackupError;
    use crate::backup::structs::file_backup::FileBackup;
    use crate::backup::traits::backup::{Backup, MockBackup};
    use crate::config::structs::configuration::Configuration;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::peer_update::PeerUpdate;
    use crate::tracker::structs::tracker_context::TrackerContext;

    fn populated_context() -> TrackerContext {
        let ctx = TrackerContext::new(Arc::new(Configuration::init()));
        for n in 1..=3u8 {
            ctx.store.save(InfoHash([n; 20]), PeerId([n; 20]), &PeerUpdate {
                ip: IpAddr::V4(Ipv4Addr::new(192, 168, 1, n)),
                port: 51413,
                complete: n % 2 == 0,
                uploaded: 0,
                downloaded: 0,
                now: 1_700_000_000,
                baseline_provider: false,
            });
        }
        ctx
    }

    #[test]
    fn test_file_backup_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backup = FileBackup::new(dir.path().join("store.snapshot"));
        assert!(backup.load().unwrap().is_none());

        backup.save(b"first").unwrap();
        backup.save(b"second").unwrap();
        assert_eq!(backup.load().unwrap(), Some(b"second".to_vec()));
        assert!(!dir.path().join("store.snapshot.tmp").exists());
    }

    #[test]
    fn test_file_backup_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let backup = FileBackup::new(dir.path().join("missing").join("store.snapshot"));
        assert!(matches!(backup.save(b"data"), Err(BackupError::Io(_))));
    }

    #[test]
    fn test_save_and_restore_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let backup = FileBackup::new(dir.path().join("store.snapshot"));
        let source = populated_context();
        assert!(save_backup(source.store.as_ref(), &backup).unwrap() > 0);

        let target = TrackerContext::new(Arc::new(Configuration::init()));
        assert_eq!(restore_backup(target.store.as_ref(), &backup).unwrap(), (3, 3));
        assert_eq!(target.store.hash_stats(&InfoHash([2; 20])), (1, 0));
        assert_eq!(target.stats.get_stats().leeches, 2);
    }

    #[test]
    fn test_restore_without_snapshot_loads_nothing() {
        let mut backup = MockBackup::new();
        backup.expect_load().times(1).returning(|| Ok(None));
        backup.expect_describe().returning(|| String::from("mock"));

        let ctx = TrackerContext::new(Arc::new(Configuration::init()));
        assert_eq!(restore_backup(ctx.store.as_ref(), &backup).unwrap(), (0, 0));
        assert_eq!(ctx.store.hashes(), 0);
    }

    #[test]
    fn test_restore_rejects_corrupt_snapshot() {
        let mut backup = MockBackup::new();
        backup.expect_load().returning(|| Ok(Some(vec![0xff; 16])));
        backup.expect_describe().returning(|| String::from("mock"));

        let ctx = TrackerContext::new(Arc::new(Configuration::init()));
        assert!(restore_backup(ctx.store.as_ref(), &backup).is_err());
    }

    #[test]
    fn test_save_hands_snapshot_to_target() {
        let mut backup = MockBackup::new();
        backup.expect_save()
            .withf(|snapshot: &[u8]| snapshot.len() > 4)
            .times(1)
            .returning(|_| Ok(()));
        backup.expect_describe().returning(|| String::from("mock"));

        let ctx = populated_context();
        assert!(save_backup(ctx.store.as_ref(), &backup).is_ok());
    }

    #[test]
    fn test_save_propagates_target_errors() {
        let mut backup = MockBackup::new();
        backup.expect_save().returning(|_| Err(BackupError::Io(std::io::Error::other("disk full"))));
        backup.expect_describe().returning(|| String::from("mock"));

        let ctx = populated_context();
        assert!(matches!(save_backup(ctx.store.as_ref(), &backup), Err(BackupError::Io(_))));
    }

    #[test]
    fn test_disabled_target_is_noop() {
        let config = Configuration::init();
        let backup = backup_target(&config.backup);
        assert!(backup.save(b"ignored").is_ok());
        assert!(backup.load().unwrap().is_none());
        assert_eq!(backup.describe(), "disabled");
    }
}
