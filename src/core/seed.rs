//! Static-data seeding
//!
//! The course catalog, requirement pools, and degree definitions ship with
//! the binary as embedded JSON. Seeding repopulates the static collections
//! wholesale; user-data collections are never touched here.

use crate::core::catalog::Catalog;
use crate::core::db::{Database, DbError};
use crate::core::models::{Course, Degree, Pool};
use serde_json::Value;

/// Embedded course catalog
const SEED_COURSES: &str = include_str!("../assets/seed/courses.json");

/// Embedded requirement pools
const SEED_POOLS: &str = include_str!("../assets/seed/pools.json");

/// Embedded degree definitions
const SEED_DEGREES: &str = include_str!("../assets/seed/degrees.json");

fn embedded(name: &str, raw: &str) -> Result<Vec<Value>, DbError> {
    serde_json::from_str(raw).map_err(|source| DbError::Corrupt {
        collection: name.to_string(),
        source,
    })
}

/// Repopulate the static collections (`courses`, `pools`, `degrees`)
/// from the bundled seed data, replacing whatever is there.
///
/// # Errors
/// [`DbError`] on write failure
pub fn seed_database(db: &Database) -> Result<(), DbError> {
    db.write_all("courses", &embedded("courses", SEED_COURSES)?)?;
    db.write_all("pools", &embedded("pools", SEED_POOLS)?)?;
    db.write_all("degrees", &embedded("degrees", SEED_DEGREES)?)?;
    logger::info!("Seeded static collections from bundled data");
    Ok(())
}

fn typed<T: serde::de::DeserializeOwned>(docs: Vec<Value>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| serde_json::from_value(doc).ok())
        .collect()
}

/// Load the catalog from the database's static collections, falling back
/// to the bundled seed data when the `courses` collection is empty (first
/// run before an explicit seed).
///
/// # Errors
/// [`DbError`] on read failure
pub fn load_catalog(db: &Database) -> Result<Catalog, DbError> {
    let mut course_docs = db.read_all("courses")?;
    let (pool_docs, degree_docs) = if course_docs.is_empty() {
        course_docs = embedded("courses", SEED_COURSES)?;
        (
            embedded("pools", SEED_POOLS)?,
            embedded("degrees", SEED_DEGREES)?,
        )
    } else {
        (db.read_all("pools")?, db.read_all("degrees")?)
    };

    let courses: Vec<Course> = typed(course_docs);
    let pools: Vec<Pool> = typed(pool_docs);
    let degrees: Vec<Degree> = typed(degree_docs);

    Ok(Catalog::from_parts(courses, pools, degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_parses() {
        assert!(!embedded("courses", SEED_COURSES).unwrap().is_empty());
        assert!(!embedded("pools", SEED_POOLS).unwrap().is_empty());
        assert!(!embedded("degrees", SEED_DEGREES).unwrap().is_empty());
    }

    #[test]
    fn test_seed_database_populates_static_collections() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).unwrap();

        seed_database(&db).unwrap();

        assert!(!db.read_all("courses").unwrap().is_empty());
        assert!(!db.read_all("pools").unwrap().is_empty());
        assert!(!db.read_all("degrees").unwrap().is_empty());
    }

    #[test]
    fn test_load_catalog_from_seeded_db() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).unwrap();
        seed_database(&db).unwrap();

        let catalog = load_catalog(&db).unwrap();
        assert!(catalog.get_course("COMP248").is_some());
        assert!(catalog.get_pool("soen-core").is_some());
        assert!(catalog.get_degree("BEng-SOEN").is_some());
        assert!(catalog.validate_references().is_ok());
    }

    #[test]
    fn test_load_catalog_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).unwrap();

        // No seeding: the embedded catalog still loads
        let catalog = load_catalog(&db).unwrap();
        assert!(catalog.course_count() > 0);
        assert!(!catalog.pools.is_empty());
    }

    #[test]
    fn test_seeded_requisite_groups_fold() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).unwrap();
        let catalog = load_catalog(&db).unwrap();

        // COMP352 carries two requisite slots: COMP249 and the grouped
        // discrete-math alternatives
        let comp352 = catalog.get_course("COMP352").unwrap();
        assert_eq!(comp352.requisites.len(), 2);
        let grouped = comp352
            .requisites
            .iter()
            .find(|g| g.group.as_deref() == Some("discrete"))
            .unwrap();
        assert_eq!(grouped.alternatives, vec!["COMP232", "MATH339"]);
    }
}
