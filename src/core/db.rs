//! JSON document store
//!
//! The planner's "database" is a directory of JSON files, one per
//! collection, each holding an array of documents. User data lives in the
//! `users`, `timelines`, and `feedback` collections; static reference data
//! lives in `courses`, `pools`, and `degrees` (repopulated by
//! [`crate::core::seed::seed_database`]). The admin table browser is a
//! generic pass-through over whatever collections exist on disk.

use crate::core::models::Timeline;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-data collections, dumped by backups and restored from them
pub const USER_COLLECTIONS: [&str; 3] = ["users", "timelines", "feedback"];

/// Static reference collections, repopulated by seeding
pub const STATIC_COLLECTIONS: [&str; 3] = ["courses", "pools", "degrees"];

/// Failures of the document store
#[derive(Debug, Error)]
pub enum DbError {
    /// Filesystem failure
    #[error("database I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection file holds invalid JSON
    #[error("collection '{collection}' is corrupt: {source}")]
    Corrupt {
        /// Collection name
        collection: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The data directory is missing or not a directory
    #[error("database directory '{0}' is unavailable")]
    Unavailable(String),
}

/// A directory-backed document database
#[derive(Debug, Clone)]
pub struct Database {
    root: PathBuf,
}

impl Database {
    /// Open (creating if needed) a database rooted at `root`
    ///
    /// # Errors
    /// [`DbError::Io`] when the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, DbError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The database's root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the backing directory is reachable
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.root.is_dir()
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Read every document of a collection. A missing collection file is
    /// an empty collection, not an error.
    ///
    /// # Errors
    /// [`DbError::Io`] on read failure, [`DbError::Corrupt`] on bad JSON
    pub fn read_all(&self, name: &str) -> Result<Vec<Value>, DbError> {
        let path = self.collection_path(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| DbError::Corrupt {
            collection: name.to_string(),
            source,
        })
    }

    /// Replace a collection's documents wholesale
    ///
    /// # Errors
    /// [`DbError::Io`] on write failure
    pub fn write_all(&self, name: &str, docs: &[Value]) -> Result<(), DbError> {
        let path = self.collection_path(name);
        let content = serde_json::to_string_pretty(docs).map_err(|source| DbError::Corrupt {
            collection: name.to_string(),
            source,
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Append documents to a collection
    ///
    /// # Errors
    /// Propagates read/write failures
    pub fn insert_many(&self, name: &str, docs: Vec<Value>) -> Result<usize, DbError> {
        let mut existing = self.read_all(name)?;
        let added = docs.len();
        existing.extend(docs);
        self.write_all(name, &existing)?;
        Ok(added)
    }

    /// Append a single document to a collection
    ///
    /// # Errors
    /// Propagates read/write failures
    pub fn insert_one(&self, name: &str, doc: Value) -> Result<(), DbError> {
        self.insert_many(name, vec![doc]).map(|_| ())
    }

    /// Remove the document at `index` from a collection
    ///
    /// # Errors
    /// [`DbError::Io`] with `NotFound` when the index is out of range
    pub fn remove_at(&self, name: &str, index: usize) -> Result<Value, DbError> {
        let mut docs = self.read_all(name)?;
        if index >= docs.len() {
            return Err(DbError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no document at index {index} in '{name}'"),
            )));
        }
        let removed = docs.remove(index);
        self.write_all(name, &docs)?;
        Ok(removed)
    }

    /// Empty one collection (the file remains, holding `[]`)
    ///
    /// # Errors
    /// [`DbError::Io`] on write failure
    pub fn clear(&self, name: &str) -> Result<(), DbError> {
        self.write_all(name, &[])
    }

    /// Empty every collection that currently exists on disk
    ///
    /// # Errors
    /// Propagates the first failing clear
    pub fn clear_all(&self) -> Result<(), DbError> {
        for name in self.list_collections()? {
            self.clear(&name)?;
        }
        Ok(())
    }

    /// Names of all collections on disk, sorted
    ///
    /// # Errors
    /// [`DbError::Unavailable`] when the root is gone, [`DbError::Io`] on
    /// listing failure
    pub fn list_collections(&self) -> Result<Vec<String>, DbError> {
        if !self.is_available() {
            return Err(DbError::Unavailable(self.root.display().to_string()));
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Persist a timeline, replacing any existing document with the same
    /// name and owner (created on first save, updated on edit)
    ///
    /// # Errors
    /// Propagates read/write failures
    pub fn save_timeline(&self, timeline: &Timeline) -> Result<(), DbError> {
        let mut docs = self.read_all("timelines")?;
        docs.retain(|doc| {
            !(doc.get("name").and_then(Value::as_str) == Some(timeline.name.as_str())
                && doc.get("owner").and_then(Value::as_str) == Some(timeline.owner.as_str()))
        });
        let doc = serde_json::to_value(timeline).map_err(|source| DbError::Corrupt {
            collection: "timelines".to_string(),
            source,
        })?;
        docs.push(doc);
        self.write_all("timelines", &docs)
    }

    /// Load a timeline by name and owner
    ///
    /// # Errors
    /// Propagates read failures; unparseable documents are skipped
    pub fn load_timeline(&self, name: &str, owner: &str) -> Result<Option<Timeline>, DbError> {
        let docs = self.read_all("timelines")?;
        Ok(docs
            .into_iter()
            .filter_map(|doc| serde_json::from_value::<Timeline>(doc).ok())
            .find(|t| t.name == name && t.owner == owner))
    }

    /// Delete a timeline by name and owner
    ///
    /// # Errors
    /// Propagates read/write failures
    ///
    /// # Returns
    /// `true` when a document was removed
    pub fn delete_timeline(&self, name: &str, owner: &str) -> Result<bool, DbError> {
        let mut docs = self.read_all("timelines")?;
        let before = docs.len();
        docs.retain(|doc| {
            !(doc.get("name").and_then(Value::as_str) == Some(name)
                && doc.get("owner").and_then(Value::as_str) == Some(owner))
        });
        let removed = docs.len() != before;
        if removed {
            self.write_all("timelines", &docs)?;
        }
        Ok(removed)
    }
}
