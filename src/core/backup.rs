//! Backup/restore service for user data
//!
//! Dumps the three user-data collections to a timestamped JSON file, and
//! restores by clearing every collection, re-seeding static data, and
//! re-inserting the saved user documents. There is no locking and no
//! rollback: a restore that fails partway leaves already-cleared
//! collections empty (the caller surfaces the error).

use crate::core::config::Config;
use crate::core::db::{Database, DbError, USER_COLLECTIONS};
use crate::core::seed::seed_database;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the configured backups directory
pub const BACKUP_DIR_ENV: &str = "DEGREE_PLANNER_BACKUP_DIR";

/// Failures of backup operations
#[derive(Debug, Error)]
pub enum BackupError {
    /// Filesystem failure
    #[error("backup I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The named backup file does not exist
    #[error("backup file '{0}' does not exist")]
    MissingBackup(String),

    /// A backup file holds invalid JSON
    #[error("backup file '{0}' is corrupt")]
    CorruptBackup(String),

    /// The database directory is unreachable
    #[error("database unavailable: {0}")]
    Database(#[from] DbError),
}

/// Resolve the backups directory: environment variable first, then the
/// configured path (relative paths are taken as-is).
#[must_use]
pub fn backups_dir(config: &Config) -> PathBuf {
    std::env::var(BACKUP_DIR_ENV)
        .map_or_else(|_| PathBuf::from(&config.paths.backups_dir), PathBuf::from)
}

/// Backup/restore operations over one database and one directory
#[derive(Debug)]
pub struct BackupService<'a> {
    db: &'a Database,
    dir: PathBuf,
}

impl<'a> BackupService<'a> {
    /// Create a service writing backups under `dir` (created on demand)
    #[must_use]
    pub const fn new(db: &'a Database, dir: PathBuf) -> Self {
        Self { db, dir }
    }

    /// The directory backups are written to
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Timestamped file name for a new backup
    fn backup_file_name() -> String {
        let stamp = Utc::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        format!("backup-{stamp}.json")
    }

    /// Dump the user-data collections to a new timestamped file.
    ///
    /// A collection that fails to read is logged and saved as an empty
    /// array (degraded backup, not fatal).
    ///
    /// # Errors
    /// [`BackupError::Io`] when the directory cannot be created or the
    /// file cannot be written
    pub fn create_backup(&self) -> Result<String, BackupError> {
        fs::create_dir_all(&self.dir)?;

        let mut dump = Map::new();
        for name in USER_COLLECTIONS {
            let docs = match self.db.read_all(name) {
                Ok(docs) => docs,
                Err(err) => {
                    logger::error!("Backup: failed to read collection '{name}': {err}");
                    Vec::new()
                }
            };
            dump.insert(name.to_string(), Value::Array(docs));
        }

        let file_name = Self::backup_file_name();
        let path = self.dir.join(&file_name);
        fs::write(&path, serde_json::to_string_pretty(&Value::Object(dump))
            .expect("backup dump serializes"))?;

        logger::info!("Backup written to {}", path.display());
        Ok(file_name)
    }

    /// List backup file names (`*.json`) in the directory, sorted.
    /// A missing directory lists as empty.
    ///
    /// # Errors
    /// [`BackupError::Io`] on listing failure
    pub fn list_backups(&self) -> Result<Vec<String>, BackupError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Restore user data from a backup file.
    ///
    /// Steps, in order: (1) every existing collection is cleared,
    /// unconditionally; (2) static data is re-seeded from the bundled
    /// files; (3) the three user-data arrays are re-inserted, skipping any
    /// that is empty or missing. Any step failure aborts the operation;
    /// collections already cleared in step 1 are not rolled back.
    ///
    /// # Errors
    /// [`BackupError::MissingBackup`] when the file is absent,
    /// [`BackupError::Database`] when the database is unavailable or a
    /// step fails, [`BackupError::CorruptBackup`] on unparseable JSON
    pub fn restore_backup(&self, file_name: &str) -> Result<(), BackupError> {
        let path = self.dir.join(file_name);
        if !path.is_file() {
            return Err(BackupError::MissingBackup(file_name.to_string()));
        }
        if !self.db.is_available() {
            return Err(BackupError::Database(DbError::Unavailable(
                self.db.root().display().to_string(),
            )));
        }

        let content = fs::read_to_string(&path)?;
        let dump: Value = serde_json::from_str(&content)
            .map_err(|_| BackupError::CorruptBackup(file_name.to_string()))?;

        self.db.clear_all().map_err(|err| {
            logger::error!("Restore: clearing collections failed: {err}");
            err
        })?;
        seed_database(self.db).map_err(|err| {
            logger::error!("Restore: re-seeding static data failed: {err}");
            err
        })?;

        for name in USER_COLLECTIONS {
            let docs = dump
                .get(name)
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            if docs.is_empty() {
                continue;
            }
            self.db.insert_many(name, docs).map_err(|err| {
                logger::error!("Restore: inserting collection '{name}' failed: {err}");
                err
            })?;
        }

        logger::info!("Restored user data from {file_name}");
        Ok(())
    }

    /// Delete a backup file.
    ///
    /// # Errors
    /// [`BackupError::MissingBackup`] when the file is absent,
    /// [`BackupError::Io`] when the unlink fails
    pub fn delete_backup(&self, file_name: &str) -> Result<(), BackupError> {
        let path = self.dir.join(file_name);
        if !path.is_file() {
            return Err(BackupError::MissingBackup(file_name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn setup() -> (tempfile::TempDir, Database, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let db = Database::open(dir.path().join("data")).expect("open db");
        let backups = dir.path().join("backups");
        (dir, db, backups)
    }

    #[test]
    fn test_backup_file_name_shape() {
        let name = BackupService::backup_file_name();
        assert!(name.starts_with("backup-"));
        assert!(name.ends_with(".json"));
        // ':' and '.' from the timestamp are replaced
        let stamp = &name["backup-".len()..name.len() - ".json".len()];
        assert!(!stamp.contains(':'));
        assert!(!stamp.contains('.'));
    }

    #[test]
    fn test_create_and_list_backups() {
        let (_dir, db, backups) = setup();
        db.insert_one("users", json!({"email": "a@example.com"}))
            .unwrap();

        let service = BackupService::new(&db, backups);
        let name = service.create_backup().unwrap();

        assert_eq!(service.list_backups().unwrap(), vec![name.clone()]);

        let content = std::fs::read_to_string(service.dir().join(&name)).unwrap();
        let dump: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(dump["users"].as_array().unwrap().len(), 1);
        assert!(dump["timelines"].as_array().unwrap().is_empty());
        assert!(dump["feedback"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_degraded_backup_on_corrupt_collection() {
        let (_dir, db, backups) = setup();
        db.insert_one("feedback", json!({"text": "hello"})).unwrap();
        std::fs::write(db.root().join("users.json"), "{broken").unwrap();

        let service = BackupService::new(&db, backups);
        let name = service.create_backup().unwrap();

        let content = std::fs::read_to_string(service.dir().join(name)).unwrap();
        let dump: Value = serde_json::from_str(&content).unwrap();
        // The unreadable collection degrades to an empty array
        assert!(dump["users"].as_array().unwrap().is_empty());
        assert_eq!(dump["feedback"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_backup_round_trip() {
        let (_dir, db, backups) = setup();
        db.insert_one("users", json!({"email": "a@example.com"}))
            .unwrap();
        db.insert_one("timelines", json!({"name": "Plan A", "owner": "a@example.com"}))
            .unwrap();
        db.insert_one("feedback", json!({"text": "nice planner"}))
            .unwrap();

        let service = BackupService::new(&db, backups);
        let name = service.create_backup().unwrap();

        db.clear_all().unwrap();
        assert!(db.read_all("users").unwrap().is_empty());

        service.restore_backup(&name).unwrap();

        // User data reproduced exactly
        assert_eq!(db.read_all("users").unwrap(), vec![json!({"email": "a@example.com"})]);
        assert_eq!(
            db.read_all("timelines").unwrap(),
            vec![json!({"name": "Plan A", "owner": "a@example.com"})]
        );
        assert_eq!(db.read_all("feedback").unwrap().len(), 1);
        // Static collections re-seeded as a side effect
        assert!(!db.read_all("courses").unwrap().is_empty());
    }

    #[test]
    fn test_restore_missing_file_is_fatal() {
        let (_dir, db, backups) = setup();
        let service = BackupService::new(&db, backups);

        assert!(matches!(
            service.restore_backup("backup-nope.json"),
            Err(BackupError::MissingBackup(_))
        ));
    }

    #[test]
    fn test_restore_clears_unconditionally() {
        let (_dir, db, backups) = setup();
        let service = BackupService::new(&db, backups.clone());

        // Back up an empty database, then add data, then restore
        let name = service.create_backup().unwrap();
        db.insert_one("users", json!({"email": "late@example.com"}))
            .unwrap();

        service.restore_backup(&name).unwrap();

        // Empty arrays are skipped on re-insert, so users stays cleared
        assert!(db.read_all("users").unwrap().is_empty());
    }

    #[test]
    fn test_delete_backup() {
        let (_dir, db, backups) = setup();
        let service = BackupService::new(&db, backups);
        let name = service.create_backup().unwrap();

        service.delete_backup(&name).unwrap();
        assert!(service.list_backups().unwrap().is_empty());
        assert!(matches!(
            service.delete_backup(&name),
            Err(BackupError::MissingBackup(_))
        ));
    }

    #[test]
    fn test_corrupt_backup_fails_before_clearing() {
        let (_dir, db, backups) = setup();
        db.insert_one("users", json!({"email": "a@example.com"}))
            .unwrap();
        std::fs::create_dir_all(&backups).unwrap();
        std::fs::write(backups.join("backup-bad.json"), "not json").unwrap();

        let service = BackupService::new(&db, backups);
        assert!(matches!(
            service.restore_backup("backup-bad.json"),
            Err(BackupError::CorruptBackup(_))
        ));
        // The parse failure happened before step 1, nothing was cleared
        assert_eq!(db.read_all("users").unwrap().len(), 1);
    }
}
