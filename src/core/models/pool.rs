//! Pool model

use serde::{Deserialize, Serialize};

/// A named requirement group of courses with an aggregate credit target.
/// Read-only reference data used for degree-completion accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    /// Pool identifier (e.g., "soen-core")
    pub id: String,

    /// Display name (e.g., "Engineering Core")
    pub name: String,

    /// Total credits required from this pool
    pub required_credits: f32,

    /// Member course codes
    pub courses: Vec<String>,
}

impl Pool {
    /// Create a new pool
    #[must_use]
    pub const fn new(id: String, name: String, required_credits: f32) -> Self {
        Self {
            id,
            name,
            required_credits,
            courses: Vec::new(),
        }
    }

    /// Whether a course code belongs to this pool
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_membership() {
        let mut pool = Pool::new(
            "soen-core".to_string(),
            "Engineering Core".to_string(),
            47.5,
        );
        pool.courses.push("SOEN287".to_string());

        assert!(pool.contains("SOEN287"));
        assert!(!pool.contains("COMP248"));
        assert!((pool.required_credits - 47.5).abs() < f32::EPSILON);
    }
}
