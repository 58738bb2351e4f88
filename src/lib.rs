//! In-memory Educational Records
//!
//! Students, courses, instructors, enrollments, assignments and grades are held
//! in a single [`Catalog`] for the lifetime of the process.

pub mod domain;
pub use domain::{
    AssignmentStatus, Catalog, CatalogError, Config, EnrollmentStatus, EntityKind, InstructorStatus,
    LetterGrade, Prefix, Reference, Statistics,
};

/// Snapshots and the demonstration dataset.
pub mod storage;
pub use storage::{Snapshot, seed, seed_as_of};
