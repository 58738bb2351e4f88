use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{
    Assignment, Enrollment, Grade,
    grade::LetterGrade,
    status::{AssignmentStatus, EnrollmentStatus},
};

/// Aggregate counts over a [`Catalog`](crate::Catalog).
///
/// Every status and letter is present in its map, with a zero count if no
/// record has it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of students.
    pub students: usize,
    /// Number of courses.
    pub courses: usize,
    /// Number of instructors.
    pub instructors: usize,
    /// Number of enrollments.
    pub enrollments: usize,
    /// Number of assignments.
    pub assignments: usize,
    /// Number of grades.
    pub grades: usize,
    /// Enrollment count per status.
    pub enrollments_by_status: BTreeMap<EnrollmentStatus, usize>,
    /// Assignment count per status.
    pub assignments_by_status: BTreeMap<AssignmentStatus, usize>,
    /// Grade count per letter.
    pub grades_by_letter: BTreeMap<LetterGrade, usize>,
    /// Mean score over all grades, or `None` if there are none.
    pub average_score: Option<f64>,
}

pub(crate) fn enrollment_counts(enrollments: &[Enrollment]) -> BTreeMap<EnrollmentStatus, usize> {
    let mut counts: BTreeMap<_, _> = EnrollmentStatus::ALL.iter().map(|&s| (s, 0)).collect();
    for enrollment in enrollments {
        *counts.entry(enrollment.status()).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn assignment_counts(assignments: &[Assignment]) -> BTreeMap<AssignmentStatus, usize> {
    let mut counts: BTreeMap<_, _> = AssignmentStatus::ALL.iter().map(|&s| (s, 0)).collect();
    for assignment in assignments {
        *counts.entry(assignment.status()).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn letter_counts(grades: &[Grade]) -> BTreeMap<LetterGrade, usize> {
    let mut counts: BTreeMap<_, _> = LetterGrade::ALL.iter().map(|&l| (l, 0)).collect();
    for grade in grades {
        *counts.entry(grade.letter()).or_insert(0) += 1;
    }
    counts
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn average_score(grades: &[Grade]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    let total: f64 = grades.iter().map(Grade::score).sum();
    Some(total / grades.len() as f64)
}
