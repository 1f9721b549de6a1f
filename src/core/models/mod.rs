//! Data models for the degree planner

pub mod course;
pub mod degree;
pub mod pool;
pub mod requisite;
pub mod semester;
pub mod timeline;

pub use course::{normalize_course_code, Course, CourseStatus};
pub use degree::Degree;
pub use pool::Pool;
pub use requisite::{RequisiteGroup, RequisiteKind};
pub use semester::{
    compare_semesters, generate_four_year_semesters, Season, Semester, DEFICIENCIES, EXEMPTED,
};
pub use timeline::Timeline;
