//! Degree model

use serde::{Deserialize, Serialize};

/// Represents a degree program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Degree {
    /// Degree identifier (e.g., "BEng-SOEN")
    pub id: String,

    /// Degree name (e.g., "Software Engineering")
    pub name: String,

    /// Total credits required to graduate
    pub total_credits: f32,

    /// Ids of the requirement pools making up the degree
    #[serde(default)]
    pub pools: Vec<String>,
}

impl Degree {
    /// Create a new degree
    ///
    /// # Arguments
    /// * `id` - Degree identifier
    /// * `name` - Degree name
    /// * `total_credits` - Total credits required to graduate
    #[must_use]
    pub const fn new(id: String, name: String, total_credits: f32) -> Self {
        Self {
            id,
            name,
            total_credits,
            pools: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_creation() {
        let degree = Degree::new(
            "BEng-SOEN".to_string(),
            "Software Engineering".to_string(),
            120.0,
        );

        assert_eq!(degree.id, "BEng-SOEN");
        assert_eq!(degree.name, "Software Engineering");
        assert!((degree.total_credits - 120.0).abs() < f32::EPSILON);
        assert!(degree.pools.is_empty());
    }
}
