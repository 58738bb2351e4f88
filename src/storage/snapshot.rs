//! Point-in-time copies of a [`Catalog`].
//!
//! A [`Snapshot`] is plain data: six collections in creation order. Restoring
//! one rebuilds the identifier sequences from the highest id in each
//! collection, so records added afterwards never collide with restored ones.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Assignment, Catalog, Course, Enrollment, Grade, Instructor, Student,
    catalog::{IdSequence, IdSequences},
};

/// Every record held by a [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Students, in creation order.
    pub students: Vec<Student>,
    /// Courses, in creation order.
    pub courses: Vec<Course>,
    /// Instructors, in creation order.
    pub instructors: Vec<Instructor>,
    /// Enrollments, in creation order.
    pub enrollments: Vec<Enrollment>,
    /// Assignments, in creation order.
    pub assignments: Vec<Assignment>,
    /// Grades, in creation order.
    pub grades: Vec<Grade>,
}

fn resume<T>(records: &[T], id_of: impl Fn(&T) -> u32) -> IdSequence {
    IdSequence::after(records.iter().map(id_of).max().unwrap_or_default())
}

impl Catalog {
    /// Copies every record out of the catalog.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            students: self.students.clone(),
            courses: self.courses.clone(),
            instructors: self.instructors.clone(),
            enrollments: self.enrollments.clone(),
            assignments: self.assignments.clone(),
            grades: self.grades.clone(),
        }
    }

    /// Builds a catalog holding the snapshot's records.
    ///
    /// Each identifier sequence continues after the highest restored id of
    /// its type.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let ids = IdSequences {
            student: resume(&snapshot.students, Student::id),
            course: resume(&snapshot.courses, Course::id),
            instructor: resume(&snapshot.instructors, Instructor::id),
            enrollment: resume(&snapshot.enrollments, Enrollment::id),
            assignment: resume(&snapshot.assignments, Assignment::id),
            grade: resume(&snapshot.grades, Grade::id),
        };
        tracing::debug!(
            "Restored catalog with {} students and {} grades",
            snapshot.students.len(),
            snapshot.grades.len()
        );

        Self {
            students: snapshot.students,
            courses: snapshot.courses,
            instructors: snapshot.instructors,
            enrollments: snapshot.enrollments,
            assignments: snapshot.assignments,
            grades: snapshot.grades,
            ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EnrollmentStatus, LetterGrade};

    fn populated() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_student("John", "Doe", "john@e.com", "1");
        catalog.add_student("Jane", "Doe", "jane@e.com", "2");
        catalog.add_course("CS101", "Intro", "", 3, "CS");
        catalog.enroll(2, 1, "Fall").unwrap();
        catalog
            .set_enrollment_status(1, EnrollmentStatus::Approved)
            .unwrap();
        catalog.add_grade(2, 1, 81.0, "ok");
        catalog
    }

    #[test]
    fn restored_catalog_resumes_ids() {
        let mut restored = Catalog::from_snapshot(populated().snapshot());

        assert_eq!(restored.students().len(), 2);
        assert_eq!(restored.add_student("Bob", "X", "", "").id(), 3);
        assert_eq!(restored.add_course("CS102", "Next", "", 3, "CS").id(), 2);
        assert_eq!(restored.add_instructor("Dr", "", "", "", "").id(), 1);
        assert_eq!(restored.add_grade(1, 1, 50.0, "").id(), 2);
    }

    #[test]
    fn restored_catalog_keeps_duplicate_guard() {
        let mut restored = Catalog::from_snapshot(populated().snapshot());
        assert!(restored.enroll(2, 1, "again").is_err());
        assert_eq!(
            restored.enrollment(1).unwrap().status(),
            EnrollmentStatus::Approved
        );
    }

    #[test]
    fn snapshot_survives_json() {
        let snapshot = populated().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();

        let parsed: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, snapshot);
        assert!(json.contains("\"APPROVED\""));
        assert_eq!(parsed.grades[0].letter(), LetterGrade::B);
    }

    #[test]
    fn ids_resume_after_gaps() {
        let mut snapshot = populated().snapshot();
        snapshot.students[0].id = 40;

        let mut restored = Catalog::from_snapshot(snapshot);

        assert_eq!(restored.add_student("Next", "One", "", "").id(), 41);
    }
}
