use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    reference::{Prefix, Reference},
    status::EnrollmentStatus,
    update::{replace, replace_text},
};

/// Remarks recorded on a new enrollment.
pub const DEFAULT_REMARKS: &str = "Awaiting approval";

/// A student's enrollment in a course.
///
/// The student and course ids are stored as given; they are not required to
/// refer to existing records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub(crate) id: u32,
    pub(crate) student_id: u32,
    pub(crate) course_id: u32,
    pub(crate) description: String,
    pub(crate) status: EnrollmentStatus,
    pub(crate) remarks: String,
    pub(crate) date: DateTime<Utc>,
}

/// Replacement values for [`Enrollment`] fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentUpdate {
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<EnrollmentStatus>,
    /// New remarks.
    pub remarks: Option<String>,
}

impl Enrollment {
    pub(crate) fn new(id: u32, student_id: u32, course_id: u32, description: String) -> Self {
        Self {
            id,
            student_id,
            course_id,
            description,
            status: EnrollmentStatus::default(),
            remarks: DEFAULT_REMARKS.to_string(),
            date: Utc::now(),
        }
    }

    /// The numeric identifier, assigned at creation.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The enrollment reference, e.g. `ENR0001`.
    #[must_use]
    pub const fn reference(&self) -> Reference {
        Reference::new(Prefix::Enrollment, self.id)
    }

    /// The enrolled student's id.
    #[must_use]
    pub const fn student_id(&self) -> u32 {
        self.student_id
    }

    /// The course's id.
    #[must_use]
    pub const fn course_id(&self) -> u32 {
        self.course_id
    }

    /// Free-text description, e.g. the term.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> EnrollmentStatus {
        self.status
    }

    /// Remarks accompanying the status.
    #[must_use]
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    /// When the enrollment was created.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub(crate) const fn set_status(&mut self, status: EnrollmentStatus) {
        self.status = status;
    }

    pub(crate) fn apply(&mut self, update: EnrollmentUpdate) {
        replace_text(&mut self.description, update.description);
        replace(&mut self.status, update.status);
        replace_text(&mut self.remarks, update.remarks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enrollment_is_pending() {
        let enrollment = Enrollment::new(12, 1, 2, "Fall 2024".to_string());

        assert_eq!(enrollment.reference().to_string(), "ENR0012");
        assert_eq!(enrollment.status(), EnrollmentStatus::Pending);
        assert_eq!(enrollment.remarks(), DEFAULT_REMARKS);
    }

    #[test]
    fn any_status_is_reachable_from_any_other() {
        let mut enrollment = Enrollment::new(1, 1, 1, String::new());
        for &from in EnrollmentStatus::ALL {
            for &to in EnrollmentStatus::ALL {
                enrollment.set_status(from);
                enrollment.set_status(to);
                assert_eq!(enrollment.status(), to);
            }
        }
    }
}
