//! Integration tests for the backup/restore service

use degree_planner::config::Config;
use degree_planner::core::backup::{backups_dir, BackupService, BACKUP_DIR_ENV};
use degree_planner::core::db::Database;
use degree_planner::core::models::Timeline;
use degree_planner::core::seed::seed_database;
use serde_json::json;

#[test]
fn test_round_trip_preserves_user_collections() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    seed_database(&db).unwrap();

    db.insert_one("users", json!({"email": "a@example.com", "password": "hash"}))
        .unwrap();
    let timeline = Timeline::new(
        "Plan A".to_string(),
        "a@example.com".to_string(),
        "BEng-SOEN".to_string(),
    );
    db.save_timeline(&timeline).unwrap();
    db.insert_one("feedback", json!({"text": "works well"}))
        .unwrap();

    let service = BackupService::new(&db, dir.path().join("backups"));
    let file_name = service.create_backup().unwrap();

    // Wipe everything, then restore
    db.clear_all().unwrap();
    service.restore_backup(&file_name).unwrap();

    assert_eq!(db.read_all("users").unwrap().len(), 1);
    assert_eq!(db.read_all("feedback").unwrap().len(), 1);
    let restored = db
        .load_timeline("Plan A", "a@example.com")
        .unwrap()
        .expect("timeline restored");
    assert_eq!(restored.degree_id, "BEng-SOEN");

    // Static data was re-seeded, not restored from the backup
    assert!(!db.read_all("courses").unwrap().is_empty());
}

#[test]
fn test_backup_file_name_is_timestamped_json() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    let service = BackupService::new(&db, dir.path().join("backups"));

    let name = service.create_backup().unwrap();
    assert!(name.starts_with("backup-"));
    assert!(name.ends_with(".json"));
    assert!(!name.contains(':'));

    assert_eq!(service.list_backups().unwrap(), vec![name]);
}

#[test]
fn test_restore_unknown_file_fails_without_damage() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    db.insert_one("users", json!({"email": "keep@example.com"}))
        .unwrap();

    let service = BackupService::new(&db, dir.path().join("backups"));
    assert!(service.restore_backup("backup-missing.json").is_err());

    // The failed restore never reached the clearing step
    assert_eq!(db.read_all("users").unwrap().len(), 1);
}

#[test]
fn test_backups_dir_env_override() {
    let mut config = Config::from_defaults();
    config.paths.backups_dir = "/configured/backups".to_string();

    assert_eq!(
        backups_dir(&config),
        std::path::PathBuf::from("/configured/backups")
    );

    std::env::set_var(BACKUP_DIR_ENV, "/env/backups");
    assert_eq!(backups_dir(&config), std::path::PathBuf::from("/env/backups"));
    std::env::remove_var(BACKUP_DIR_ENV);
}
