//! Timeline planner
//!
//! The state store plus the pure rule checks it leans on: requisite
//! satisfaction and advisory credit caps.

pub mod credits;
pub mod requisites;
pub mod store;

pub use credits::{max_credits, over_limit, semester_credits};
pub use requisites::{requisites_met, unmet_requisites, Placements};
pub use store::{
    DropTarget, MoveOutcome, StoreError, TimelineStore, ValidationReport,
};
