//! Course catalog
//!
//! The catalog aggregates the static reference data (courses, pools,
//! degrees) loaded once per session from the database's static collections.

use crate::core::models::{Course, Degree, Pool};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static reference data: the full course offering plus requirement pools
/// and degree definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Courses indexed by normalized code
    courses: HashMap<String, Course>,

    /// Requirement pools
    pub pools: Vec<Pool>,

    /// Degree programs
    pub degrees: Vec<Degree>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-loaded parts
    #[must_use]
    pub fn from_parts(courses: Vec<Course>, pools: Vec<Pool>, degrees: Vec<Degree>) -> Self {
        let mut catalog = Self {
            courses: HashMap::with_capacity(courses.len()),
            pools,
            degrees,
        };
        for course in courses {
            catalog.add_course(course);
        }
        catalog
    }

    /// Add a course to the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if its code was already present
    pub fn add_course(&mut self, course: Course) -> bool {
        let code = course.code.clone();
        self.courses.insert(code, course).is_none()
    }

    /// Get a course by its code
    #[must_use]
    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Credit value of a course, 0.0 when unknown
    #[must_use]
    pub fn credits_of(&self, code: &str) -> f32 {
        self.get_course(code).map_or(0.0, |c| c.credits)
    }

    /// All courses (unordered)
    #[must_use]
    pub fn courses(&self) -> Vec<&Course> {
        self.courses.values().collect()
    }

    /// All course codes, sorted
    #[must_use]
    pub fn course_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.courses.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Get a pool by id
    #[must_use]
    pub fn get_pool(&self, id: &str) -> Option<&Pool> {
        self.pools.iter().find(|p| p.id == id)
    }

    /// Get a degree by id
    #[must_use]
    pub fn get_degree(&self, id: &str) -> Option<&Degree> {
        self.degrees.iter().find(|d| d.id == id)
    }

    /// Pools belonging to a degree, in the degree's declared order
    #[must_use]
    pub fn pools_for_degree(&self, degree_id: &str) -> Vec<&Pool> {
        self.get_degree(degree_id).map_or_else(Vec::new, |degree| {
            degree
                .pools
                .iter()
                .filter_map(|id| self.get_pool(id))
                .collect()
        })
    }

    /// Validate that every requisite alternative and pool member resolves
    /// to a catalog course
    ///
    /// # Errors
    /// Returns a list of error messages for dangling references
    pub fn validate_references(&self) -> Result<(), Vec<String>> {
        let mut invalid = Vec::new();

        for course in self.courses.values() {
            for group in &course.requisites {
                for alt in &group.alternatives {
                    if !self.courses.contains_key(alt) {
                        invalid.push(format!(
                            "Course '{}': requisite alternative '{alt}' not found",
                            course.code
                        ));
                    }
                }
            }
        }

        for pool in &self.pools {
            for code in &pool.courses {
                if !self.courses.contains_key(code) {
                    invalid.push(format!("Pool '{}': member '{code}' not found", pool.id));
                }
            }
        }

        for degree in &self.degrees {
            for pool_id in &degree.pools {
                if self.get_pool(pool_id).is_none() {
                    invalid.push(format!("Degree '{}': pool '{pool_id}' not found", degree.id));
                }
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(invalid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::RequisiteKind;

    fn sample_catalog() -> Catalog {
        let mut comp249 = Course::new(
            "COMP249".to_string(),
            "Object-Oriented Programming II".to_string(),
            3.5,
        );
        comp249.add_prerequisite("COMP248".to_string());

        let courses = vec![
            Course::new(
                "COMP248".to_string(),
                "Object-Oriented Programming I".to_string(),
                3.5,
            ),
            comp249,
        ];

        let mut pool = Pool::new("cs-core".to_string(), "Computer Science Core".to_string(), 7.0);
        pool.courses = vec!["COMP248".to_string(), "COMP249".to_string()];

        let mut degree = Degree::new(
            "BCompSc".to_string(),
            "Computer Science".to_string(),
            90.0,
        );
        degree.pools = vec!["cs-core".to_string()];

        Catalog::from_parts(courses, vec![pool], vec![degree])
    }

    #[test]
    fn test_lookup() {
        let catalog = sample_catalog();

        assert_eq!(catalog.course_count(), 2);
        assert!(catalog.get_course("COMP248").is_some());
        assert!(catalog.get_course("COMP999").is_none());
        assert!((catalog.credits_of("COMP249") - 3.5).abs() < f32::EPSILON);
        assert!((catalog.credits_of("COMP999") - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut catalog = sample_catalog();
        let added = catalog.add_course(Course::new(
            "COMP248".to_string(),
            "Different Title".to_string(),
            3.0,
        ));

        assert!(!added);
        assert_eq!(catalog.course_count(), 2);
    }

    #[test]
    fn test_pools_for_degree() {
        let catalog = sample_catalog();
        let pools = catalog.pools_for_degree("BCompSc");

        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].id, "cs-core");
        assert!(catalog.pools_for_degree("unknown").is_empty());
    }

    #[test]
    fn test_validate_references_ok() {
        assert!(sample_catalog().validate_references().is_ok());
    }

    #[test]
    fn test_validate_references_reports_dangling() {
        let mut catalog = sample_catalog();
        let mut bad = Course::new("SOEN341".to_string(), "Software Process".to_string(), 3.0);
        bad.add_requisite(crate::core::models::RequisiteGroup::single(
            RequisiteKind::Pre,
            "SOEN000".to_string(),
        ));
        catalog.add_course(bad);

        let errors = catalog.validate_references().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("SOEN000"));
    }

    #[test]
    fn test_course_codes_sorted() {
        let catalog = sample_catalog();
        assert_eq!(catalog.course_codes(), vec!["COMP248", "COMP249"]);
    }
}
