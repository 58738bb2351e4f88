//! Domain models for educational records.
//!
//! This module contains the entity types, their human-readable reference
//! strings, status enumerations, and the [`Catalog`] that owns them.

/// Assignment entity and due-date helpers.
pub mod assignment;
pub use assignment::{Assignment, AssignmentUpdate};

pub mod catalog;
pub use catalog::{Catalog, CatalogError, EntityKind};

mod config;
pub use config::Config;

/// Course entity.
pub mod course;
pub use course::{Course, CourseUpdate};

/// Enrollment entity.
pub mod enrollment;
pub use enrollment::{Enrollment, EnrollmentUpdate};

/// Grade entity and letter-grade derivation.
pub mod grade;
pub use grade::{Grade, GradeUpdate, LetterGrade};

/// Instructor entity.
pub mod instructor;
pub use instructor::{Instructor, InstructorUpdate};

/// Prefixed reference strings such as `STU0001`.
pub mod reference;
pub use reference::{Error as ReferenceError, Prefix, Reference};

mod statistics;
pub use statistics::Statistics;

mod status;
pub use status::{AssignmentStatus, EnrollmentStatus, InstructorStatus};

/// Student entity.
pub mod student;
pub use student::{Student, StudentUpdate};

mod update;
