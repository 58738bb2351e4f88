//! In-memory aggregate of every educational record.
//!
//! The [`Catalog`] owns six insertion-ordered collections and one identifier
//! sequence per entity type. Listing preserves creation order; lookups are
//! linear scans.
//!
//! References between records (an enrollment's student, a grade's assignment,
//! and so on) are stored as raw ids and are never checked for existence. The
//! only cross-record check is the duplicate (student, course) enrollment
//! guard in [`Catalog::enroll`]; nothing stops two instructors being assigned
//! the same course.

use std::fmt;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::instrument;

use crate::domain::{
    Assignment, AssignmentUpdate, Course, CourseUpdate, Enrollment, EnrollmentUpdate, Grade,
    GradeUpdate, Instructor, InstructorUpdate, Statistics, Student, StudentUpdate,
    statistics,
    status::{AssignmentStatus, EnrollmentStatus},
    update::replace_text,
};

/// The kinds of record held in a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// [`Student`]
    Student,
    /// [`Course`]
    Course,
    /// [`Instructor`]
    Instructor,
    /// [`Enrollment`]
    Enrollment,
    /// [`Assignment`]
    Assignment,
    /// [`Grade`]
    Grade,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Student => "student",
            Self::Course => "course",
            Self::Instructor => "instructor",
            Self::Enrollment => "enrollment",
            Self::Assignment => "assignment",
            Self::Grade => "grade",
        })
    }
}

/// Errors reported by catalog operations.
///
/// None of these leave the catalog modified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No record of the given kind has this id.
    #[error("{0} {1} not found")]
    NotFound(EntityKind, u32),

    /// The student already has an enrollment for the course.
    #[error("student {student_id} is already enrolled in course {course_id} (enrollment {enrollment_id})")]
    AlreadyEnrolled {
        /// Id of the student.
        student_id: u32,
        /// Id of the course.
        course_id: u32,
        /// Id of the existing enrollment.
        enrollment_id: u32,
    },
}

/// A monotonically increasing identifier source.
///
/// Ids start at 1 and are never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct IdSequence {
    last: u32,
}

impl IdSequence {
    /// A sequence that continues after `last`.
    pub(crate) const fn after(last: u32) -> Self {
        Self { last }
    }

    /// Allocate the next id.
    ///
    /// # Panics
    ///
    /// Panics if the id space is exhausted.
    pub(crate) fn next_id(&mut self) -> u32 {
        self.last = self.last.checked_add(1).expect("record ID overflow!");
        self.last
    }
}

/// One [`IdSequence`] per entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct IdSequences {
    pub(crate) student: IdSequence,
    pub(crate) course: IdSequence,
    pub(crate) instructor: IdSequence,
    pub(crate) enrollment: IdSequence,
    pub(crate) assignment: IdSequence,
    pub(crate) grade: IdSequence,
}

/// An in-memory store of students, courses, instructors, enrollments,
/// assignments and grades.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    pub(crate) students: Vec<Student>,
    pub(crate) courses: Vec<Course>,
    pub(crate) instructors: Vec<Instructor>,
    pub(crate) enrollments: Vec<Enrollment>,
    pub(crate) assignments: Vec<Assignment>,
    pub(crate) grades: Vec<Grade>,
    pub(crate) ids: IdSequences,
}

/// Find a record by id, mutably, or report which kind was missing.
fn find_mut<T>(
    records: &mut [T],
    kind: EntityKind,
    id: u32,
    id_of: impl Fn(&T) -> u32,
) -> Result<&mut T, CatalogError> {
    records
        .iter_mut()
        .find(|record| id_of(record) == id)
        .ok_or(CatalogError::NotFound(kind, id))
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Students

    /// Adds a student and returns it.
    #[instrument(level = "debug", skip(self))]
    pub fn add_student(
        &mut self,
        first_name: impl Into<String> + fmt::Debug,
        last_name: impl Into<String> + fmt::Debug,
        email: impl Into<String> + fmt::Debug,
        phone: impl Into<String> + fmt::Debug,
    ) -> &Student {
        let id = self.ids.student.next_id();
        let student = Student::new(
            id,
            first_name.into(),
            last_name.into(),
            email.into(),
            phone.into(),
        );
        tracing::info!("Added student {}", student.student_number());
        self.students.push(student);
        &self.students[self.students.len() - 1]
    }

    /// All students, in creation order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Finds a student by id.
    #[must_use]
    pub fn student(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// Students whose first name, last name or email contains `term`
    /// (case-insensitive), or whose phone number contains it.
    ///
    /// The term is lower-cased before the phone comparison too, so upper-case
    /// letters stored in a phone number never match.
    #[must_use]
    pub fn search_students(&self, term: &str) -> Vec<&Student> {
        let term = term.to_lowercase();
        let results: Vec<_> = self
            .students
            .iter()
            .filter(|student| student.matches(&term))
            .collect();
        tracing::debug!("Student search '{term}' matched {}", results.len());
        results
    }

    /// Students whose first or last name contains `term` (case-insensitive).
    #[must_use]
    pub fn students_by_name(&self, term: &str) -> Vec<&Student> {
        let term = term.to_lowercase();
        self.students
            .iter()
            .filter(|student| student.name_matches(&term))
            .collect()
    }

    /// Applies a partial update to a student.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no student has this id.
    pub fn update_student(
        &mut self,
        id: u32,
        update: StudentUpdate,
    ) -> Result<&Student, CatalogError> {
        let student = find_mut(&mut self.students, EntityKind::Student, id, |s| s.id)?;
        student.apply(update);
        tracing::debug!("Updated student {}", student.student_number());
        Ok(student)
    }

    // Courses

    /// Adds a course and returns it.
    #[instrument(level = "debug", skip(self))]
    pub fn add_course(
        &mut self,
        code: impl Into<String> + fmt::Debug,
        name: impl Into<String> + fmt::Debug,
        description: impl Into<String> + fmt::Debug,
        credits: u32,
        department: impl Into<String> + fmt::Debug,
    ) -> &Course {
        let id = self.ids.course.next_id();
        let course = Course::new(
            id,
            code.into(),
            name.into(),
            description.into(),
            credits,
            department.into(),
        );
        tracing::info!("Added course {} ({})", course.code, id);
        self.courses.push(course);
        &self.courses[self.courses.len() - 1]
    }

    /// All courses, in creation order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Finds a course by id.
    #[must_use]
    pub fn course(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Courses whose name, code or department contains `term`
    /// (case-insensitive).
    #[must_use]
    pub fn search_courses(&self, term: &str) -> Vec<&Course> {
        let term = term.to_lowercase();
        let results: Vec<_> = self
            .courses
            .iter()
            .filter(|course| course.matches(&term))
            .collect();
        tracing::debug!("Course search '{term}' matched {}", results.len());
        results
    }

    /// Applies a partial update to a course.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no course has this id.
    pub fn update_course(&mut self, id: u32, update: CourseUpdate) -> Result<&Course, CatalogError> {
        let course = find_mut(&mut self.courses, EntityKind::Course, id, |c| c.id)?;
        course.apply(update);
        tracing::debug!("Updated course {}", course.code);
        Ok(course)
    }

    // Instructors

    /// Adds an instructor and returns it.
    ///
    /// An empty `location` is recorded as "Not Specified".
    #[instrument(level = "debug", skip(self))]
    pub fn add_instructor(
        &mut self,
        name: impl Into<String> + fmt::Debug,
        contact: impl Into<String> + fmt::Debug,
        email: impl Into<String> + fmt::Debug,
        specialization: impl Into<String> + fmt::Debug,
        location: impl Into<String> + fmt::Debug,
    ) -> &Instructor {
        let id = self.ids.instructor.next_id();
        let mut instructor = Instructor::new(
            id,
            name.into(),
            contact.into(),
            email.into(),
            specialization.into(),
        );
        replace_text(&mut instructor.location, Some(location.into()));
        tracing::info!("Added instructor {}", instructor.identifier());
        self.instructors.push(instructor);
        &self.instructors[self.instructors.len() - 1]
    }

    /// All instructors, in creation order.
    #[must_use]
    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    /// Finds an instructor by id.
    #[must_use]
    pub fn instructor(&self, id: u32) -> Option<&Instructor> {
        self.instructors.iter().find(|instructor| instructor.id == id)
    }

    /// Applies a partial update to an instructor.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no instructor has this id.
    pub fn update_instructor(
        &mut self,
        id: u32,
        update: InstructorUpdate,
    ) -> Result<&Instructor, CatalogError> {
        let instructor = find_mut(&mut self.instructors, EntityKind::Instructor, id, |i| i.id)?;
        instructor.apply(update);
        tracing::debug!("Updated instructor {}", instructor.identifier());
        Ok(instructor)
    }

    /// Assigns an instructor to a course.
    ///
    /// Any previous assignment is overwritten. Other instructors already
    /// teaching the course are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if either the instructor or the
    /// course does not exist; the instructor is checked first.
    #[instrument(level = "debug", skip(self))]
    pub fn assign_instructor(
        &mut self,
        instructor_id: u32,
        course_id: u32,
    ) -> Result<&Instructor, CatalogError> {
        if self.instructor(instructor_id).is_none() {
            tracing::warn!("Cannot assign unknown instructor {instructor_id}");
            return Err(CatalogError::NotFound(EntityKind::Instructor, instructor_id));
        }
        if self.course(course_id).is_none() {
            tracing::warn!("Cannot assign instructor {instructor_id} to unknown course {course_id}");
            return Err(CatalogError::NotFound(EntityKind::Course, course_id));
        }

        let instructor = find_mut(
            &mut self.instructors,
            EntityKind::Instructor,
            instructor_id,
            |i| i.id,
        )?;
        instructor.assigned_course_id = Some(course_id);
        tracing::info!(
            "Assigned instructor {} to course {course_id}",
            instructor.identifier()
        );
        Ok(instructor)
    }

    /// Instructors currently assigned to the course.
    #[must_use]
    pub fn instructors_for_course(&self, course_id: u32) -> Vec<&Instructor> {
        self.instructors
            .iter()
            .filter(|instructor| instructor.assigned_course_id == Some(course_id))
            .collect()
    }

    // Enrollments

    /// Enrolls a student in a course.
    ///
    /// The ids are not checked against existing students or courses.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AlreadyEnrolled`] if an enrollment for the same
    /// student and course already exists, whatever its status.
    #[instrument(level = "debug", skip(self))]
    pub fn enroll(
        &mut self,
        student_id: u32,
        course_id: u32,
        description: impl Into<String> + fmt::Debug,
    ) -> Result<&Enrollment, CatalogError> {
        if let Some(existing) = self
            .enrollments
            .iter()
            .find(|e| e.student_id == student_id && e.course_id == course_id)
        {
            tracing::warn!(
                "Student {student_id} is already enrolled in course {course_id} ({})",
                existing.reference()
            );
            return Err(CatalogError::AlreadyEnrolled {
                student_id,
                course_id,
                enrollment_id: existing.id,
            });
        }

        let id = self.ids.enrollment.next_id();
        let enrollment = Enrollment::new(id, student_id, course_id, description.into());
        tracing::info!("Added enrollment {}", enrollment.reference());
        self.enrollments.push(enrollment);
        Ok(&self.enrollments[self.enrollments.len() - 1])
    }

    /// Whether the student has an enrollment for the course.
    #[must_use]
    pub fn is_enrolled(&self, student_id: u32, course_id: u32) -> bool {
        self.enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.course_id == course_id)
    }

    /// All enrollments, in creation order.
    #[must_use]
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Finds an enrollment by id.
    #[must_use]
    pub fn enrollment(&self, id: u32) -> Option<&Enrollment> {
        self.enrollments.iter().find(|enrollment| enrollment.id == id)
    }

    /// Enrollments held by the student, in creation order.
    #[must_use]
    pub fn enrollments_for_student(&self, student_id: u32) -> Vec<&Enrollment> {
        self.enrollments
            .iter()
            .filter(|enrollment| enrollment.student_id == student_id)
            .collect()
    }

    /// Sets the status of an enrollment. Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no enrollment has this id.
    pub fn set_enrollment_status(
        &mut self,
        id: u32,
        status: EnrollmentStatus,
    ) -> Result<&Enrollment, CatalogError> {
        let enrollment = find_mut(&mut self.enrollments, EntityKind::Enrollment, id, |e| e.id)?;
        tracing::debug!(
            "Enrollment {} status {} -> {status}",
            enrollment.reference(),
            enrollment.status
        );
        enrollment.set_status(status);
        Ok(enrollment)
    }

    /// Applies a partial update to an enrollment.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no enrollment has this id.
    pub fn update_enrollment(
        &mut self,
        id: u32,
        update: EnrollmentUpdate,
    ) -> Result<&Enrollment, CatalogError> {
        let enrollment = find_mut(&mut self.enrollments, EntityKind::Enrollment, id, |e| e.id)?;
        enrollment.apply(update);
        tracing::debug!("Updated enrollment {}", enrollment.reference());
        Ok(enrollment)
    }

    // Assignments

    /// Adds an assignment against an enrollment and returns it.
    ///
    /// The enrollment id is not checked.
    #[instrument(level = "debug", skip(self))]
    pub fn add_assignment(
        &mut self,
        enrollment_id: u32,
        title: impl Into<String> + fmt::Debug,
        description: impl Into<String> + fmt::Debug,
        due_date: NaiveDateTime,
    ) -> &Assignment {
        let id = self.ids.assignment.next_id();
        let assignment = Assignment::new(
            id,
            enrollment_id,
            title.into(),
            description.into(),
            due_date,
        );
        tracing::info!("Added assignment {}", assignment.reference());
        self.assignments.push(assignment);
        &self.assignments[self.assignments.len() - 1]
    }

    /// All assignments, in creation order.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Finds an assignment by id.
    #[must_use]
    pub fn assignment(&self, id: u32) -> Option<&Assignment> {
        self.assignments.iter().find(|assignment| assignment.id == id)
    }

    /// Assignments with the given status, in creation order.
    #[must_use]
    pub fn assignments_with_status(&self, status: AssignmentStatus) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.status == status)
            .collect()
    }

    /// Sets the status of an assignment. Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no assignment has this id.
    pub fn set_assignment_status(
        &mut self,
        id: u32,
        status: AssignmentStatus,
    ) -> Result<&Assignment, CatalogError> {
        let assignment = find_mut(&mut self.assignments, EntityKind::Assignment, id, |a| a.id)?;
        tracing::debug!(
            "Assignment {} status {} -> {status}",
            assignment.reference(),
            assignment.status
        );
        assignment.set_status(status);
        Ok(assignment)
    }

    /// Applies a partial update to an assignment.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no assignment has this id.
    pub fn update_assignment(
        &mut self,
        id: u32,
        update: AssignmentUpdate,
    ) -> Result<&Assignment, CatalogError> {
        let assignment = find_mut(&mut self.assignments, EntityKind::Assignment, id, |a| a.id)?;
        assignment.apply(update);
        tracing::debug!("Updated assignment {}", assignment.reference());
        Ok(assignment)
    }

    // Grades

    /// Records a grade and returns it. The letter grade is derived from
    /// `score`.
    ///
    /// Neither the student nor the assignment id is checked.
    #[instrument(level = "debug", skip(self))]
    pub fn add_grade(
        &mut self,
        student_id: u32,
        assignment_id: u32,
        score: f64,
        comments: impl Into<String> + fmt::Debug,
    ) -> &Grade {
        let id = self.ids.grade.next_id();
        let grade = Grade::new(id, student_id, assignment_id, score, comments.into());
        tracing::info!("Added grade {id} ({})", grade.letter());
        self.grades.push(grade);
        &self.grades[self.grades.len() - 1]
    }

    /// All grades, in creation order.
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Finds a grade by id.
    #[must_use]
    pub fn grade(&self, id: u32) -> Option<&Grade> {
        self.grades.iter().find(|grade| grade.id == id)
    }

    /// Applies a partial update to a grade. A new score re-derives the letter.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no grade has this id.
    pub fn update_grade(&mut self, id: u32, update: GradeUpdate) -> Result<&Grade, CatalogError> {
        let grade = find_mut(&mut self.grades, EntityKind::Grade, id, |g| g.id)?;
        grade.apply(update);
        tracing::debug!("Updated grade {id} ({})", grade.letter());
        Ok(grade)
    }

    // Derived views

    /// Counts and averages across the whole catalog.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            students: self.students.len(),
            courses: self.courses.len(),
            instructors: self.instructors.len(),
            enrollments: self.enrollments.len(),
            assignments: self.assignments.len(),
            grades: self.grades.len(),
            enrollments_by_status: statistics::enrollment_counts(&self.enrollments),
            assignments_by_status: statistics::assignment_counts(&self.assignments),
            grades_by_letter: statistics::letter_counts(&self.grades),
            average_score: statistics::average_score(&self.grades),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use test_case::test_case;

    use super::*;
    use crate::domain::{LetterGrade, assignment::end_of_day};

    fn due() -> NaiveDateTime {
        end_of_day(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
    }

    fn catalog_with_students() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_student("John", "Doe", "john.doe@email.com", "123-456-7890");
        catalog.add_student("Jane", "Smith", "jane.smith@email.com", "987-654-3210");
        catalog.add_student("Bob", "Johnson", "bob.johnson@email.com", "555-123-4567");
        catalog
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let catalog = catalog_with_students();
        let ids: Vec<_> = catalog.students().iter().map(Student::id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    fn add_three(catalog: &mut Catalog, kind: EntityKind) -> Vec<u32> {
        for n in 1..=3 {
            match kind {
                EntityKind::Student => {
                    catalog.add_student("First", "Last", "", "");
                }
                EntityKind::Course => {
                    catalog.add_course(format!("C{n}"), "Course", "", 3, "Dept");
                }
                EntityKind::Instructor => {
                    catalog.add_instructor("Dr. X", "", "", "", "");
                }
                EntityKind::Enrollment => {
                    catalog.enroll(n, 1, "").unwrap();
                }
                EntityKind::Assignment => {
                    catalog.add_assignment(1, "HW", "", due());
                }
                EntityKind::Grade => {
                    catalog.add_grade(1, n, 80.0, "");
                }
            }
        }
        match kind {
            EntityKind::Student => catalog.students().iter().map(Student::id).collect(),
            EntityKind::Course => catalog.courses().iter().map(Course::id).collect(),
            EntityKind::Instructor => catalog.instructors().iter().map(Instructor::id).collect(),
            EntityKind::Enrollment => catalog.enrollments().iter().map(Enrollment::id).collect(),
            EntityKind::Assignment => catalog.assignments().iter().map(Assignment::id).collect(),
            EntityKind::Grade => catalog.grades().iter().map(Grade::id).collect(),
        }
    }

    #[test_case(EntityKind::Student; "students")]
    #[test_case(EntityKind::Course; "courses")]
    #[test_case(EntityKind::Instructor; "instructors")]
    #[test_case(EntityKind::Enrollment; "enrollments")]
    #[test_case(EntityKind::Assignment; "assignments")]
    #[test_case(EntityKind::Grade; "grades")]
    fn every_kind_numbers_from_one(kind: EntityKind) {
        let mut catalog = Catalog::new();
        assert_eq!(add_three(&mut catalog, kind), [1, 2, 3]);
    }

    #[test]
    fn rejected_enrollment_does_not_consume_an_id() {
        let mut catalog = Catalog::new();
        catalog.enroll(1, 1, "").unwrap();
        catalog.enroll(1, 1, "").unwrap_err();
        assert_eq!(catalog.enroll(2, 1, "").unwrap().id(), 2);
    }

    #[test]
    fn each_entity_type_has_its_own_sequence() {
        let mut catalog = catalog_with_students();
        let course = catalog.add_course("CS101", "Intro", "", 3, "CS");
        assert_eq!(course.id(), 1);
        let grade = catalog.add_grade(1, 1, 50.0, "");
        assert_eq!(grade.id(), 1);
        assert_eq!(catalog.add_student("A", "B", "", "").id(), 4);
    }

    #[test]
    fn independent_catalogs_do_not_share_counters() {
        let mut first = Catalog::new();
        let mut second = Catalog::new();
        first.add_student("A", "A", "", "");
        first.add_student("B", "B", "", "");
        assert_eq!(second.add_student("C", "C", "", "").id(), 1);
    }

    #[test]
    fn reference_strings_follow_ids() {
        let mut catalog = catalog_with_students();
        assert_eq!(
            catalog.student(2).unwrap().student_number().to_string(),
            "STU0002"
        );
        let instructor = catalog.add_instructor("Dr. X", "555", "x@u.edu", "Maths", "");
        assert_eq!(instructor.identifier().to_string(), "INS0001");
        assert_eq!(instructor.location(), "Not Specified");
        let enrollment = catalog.enroll(1, 1, "").unwrap();
        assert_eq!(enrollment.reference().to_string(), "ENR0001");
        let assignment = catalog.add_assignment(1, "HW", "", due());
        assert_eq!(assignment.reference().to_string(), "ASS0001");
    }

    #[test]
    fn find_by_id_misses_return_none() {
        let catalog = catalog_with_students();
        assert!(catalog.student(0).is_none());
        assert!(catalog.student(4).is_none());
        assert!(catalog.course(1).is_none());
        assert!(catalog.grade(1).is_none());
    }

    #[test]
    fn search_students_is_case_insensitive_and_ordered() {
        let catalog = catalog_with_students();

        let names: Vec<_> = catalog
            .search_students("JO")
            .into_iter()
            .map(Student::first_name)
            .collect();
        assert_eq!(names, ["John", "Bob"]);

        assert!(catalog.search_students("nobody").is_empty());
        assert_eq!(catalog.search_students("987").len(), 1);
    }

    #[test]
    fn phone_letters_only_match_lower_case_terms() {
        let mut catalog = Catalog::new();
        catalog.add_student("Ann", "Lee", "", "555 EXT 1");
        catalog.add_student("Ben", "Ray", "", "555 ext 2");

        let names: Vec<_> = catalog
            .search_students("EXT")
            .into_iter()
            .map(Student::first_name)
            .collect();
        assert_eq!(names, ["Ben"]);
    }

    #[test]
    fn students_by_name_ignores_email_and_phone() {
        let catalog = catalog_with_students();
        assert!(catalog.students_by_name("email").is_empty());
        assert_eq!(catalog.students_by_name("smith").len(), 1);
    }

    #[test]
    fn search_courses_matches_code_name_and_department() {
        let mut catalog = Catalog::new();
        catalog.add_course("CS101", "Introduction to Programming", "", 3, "Computer Science");
        catalog.add_course("MATH101", "Calculus I", "", 4, "Mathematics");
        catalog.add_course("CS201", "Database Systems", "", 4, "Computer Science");

        let codes: Vec<_> = catalog
            .search_courses("cs")
            .into_iter()
            .map(Course::code)
            .collect();
        assert_eq!(codes, ["CS101", "MATH101", "CS201"]);

        let codes: Vec<_> = catalog
            .search_courses("cs2")
            .into_iter()
            .map(Course::code)
            .collect();
        assert_eq!(codes, ["CS201"]);

        let codes: Vec<_> = catalog
            .search_courses("101")
            .into_iter()
            .map(Course::code)
            .collect();
        assert_eq!(codes, ["CS101", "MATH101"]);

        assert!(catalog.search_courses("physics").is_empty());
    }

    #[test]
    fn update_keeps_fields_with_empty_replacements() {
        let mut catalog = catalog_with_students();
        let student = catalog
            .update_student(
                1,
                StudentUpdate {
                    first_name: Some(String::new()),
                    last_name: Some("Dough".to_string()),
                    email: None,
                    phone: Some(String::new()),
                },
            )
            .unwrap();

        assert_eq!(student.first_name(), "John");
        assert_eq!(student.last_name(), "Dough");
        assert_eq!(student.email(), "john.doe@email.com");
        assert_eq!(student.phone(), "123-456-7890");
    }

    #[test]
    fn update_of_missing_record_changes_nothing() {
        let mut catalog = catalog_with_students();
        let before = catalog.students().to_vec();

        let error = catalog
            .update_student(
                9,
                StudentUpdate {
                    first_name: Some("Ghost".to_string()),
                    ..StudentUpdate::default()
                },
            )
            .unwrap_err();

        assert_eq!(error, CatalogError::NotFound(EntityKind::Student, 9));
        assert_eq!(error.to_string(), "student 9 not found");
        assert_eq!(catalog.students(), before.as_slice());
    }

    #[test]
    fn duplicate_enrollment_is_rejected() {
        let mut catalog = catalog_with_students();
        catalog.enroll(1, 1, "Fall").unwrap();
        catalog.set_enrollment_status(1, EnrollmentStatus::Rejected).unwrap();

        let error = catalog.enroll(1, 1, "Again").unwrap_err();

        assert_eq!(
            error,
            CatalogError::AlreadyEnrolled {
                student_id: 1,
                course_id: 1,
                enrollment_id: 1,
            }
        );
        assert_eq!(catalog.enrollments().len(), 1);
        assert!(catalog.is_enrolled(1, 1));
        assert!(!catalog.is_enrolled(1, 2));

        // a different pair is still accepted and gets the next id
        assert_eq!(catalog.enroll(1, 2, "").unwrap().id(), 2);
    }

    #[test]
    fn enrollment_references_are_not_checked() {
        let mut catalog = Catalog::new();
        let enrollment = catalog.enroll(42, 7, "dangling").unwrap();
        assert_eq!(enrollment.student_id(), 42);
        assert_eq!(enrollment.course_id(), 7);
    }

    #[test]
    fn instructor_reassignment_last_write_wins() {
        let mut catalog = Catalog::new();
        catalog.add_course("A", "Course A", "", 3, "X");
        catalog.add_course("B", "Course B", "", 3, "X");
        catalog.add_instructor("X", "", "", "", "");

        catalog.assign_instructor(1, 1).unwrap();
        let instructor = catalog.assign_instructor(1, 2).unwrap();

        assert_eq!(instructor.assigned_course_id(), Some(2));
        assert!(catalog.instructors_for_course(1).is_empty());
    }

    #[test]
    fn two_instructors_may_share_a_course() {
        let mut catalog = Catalog::new();
        catalog.add_course("A", "Course A", "", 3, "X");
        catalog.add_instructor("X", "", "", "", "");
        catalog.add_instructor("Y", "", "", "", "");

        catalog.assign_instructor(1, 1).unwrap();
        catalog.assign_instructor(2, 1).unwrap();

        assert_eq!(catalog.instructors_for_course(1).len(), 2);
    }

    #[test]
    fn assigning_with_invalid_ids_changes_nothing() {
        let mut catalog = Catalog::new();
        catalog.add_course("A", "Course A", "", 3, "X");
        catalog.add_instructor("X", "", "", "", "");
        catalog.assign_instructor(1, 1).unwrap();

        assert_eq!(
            catalog.assign_instructor(2, 1).unwrap_err(),
            CatalogError::NotFound(EntityKind::Instructor, 2)
        );
        assert_eq!(
            catalog.assign_instructor(1, 5).unwrap_err(),
            CatalogError::NotFound(EntityKind::Course, 5)
        );
        assert_eq!(catalog.instructor(1).unwrap().assigned_course_id(), Some(1));
    }

    #[test]
    fn status_transitions_are_unguarded() {
        let mut catalog = Catalog::new();
        catalog.add_assignment(1, "HW", "", due());

        for &status in AssignmentStatus::ALL.iter().rev() {
            let assignment = catalog.set_assignment_status(1, status).unwrap();
            assert_eq!(assignment.status(), status);
        }
        assert_eq!(
            catalog.set_assignment_status(2, AssignmentStatus::Graded),
            Err(CatalogError::NotFound(EntityKind::Assignment, 2))
        );
    }

    #[test]
    fn enrollment_remarks_update_independently() {
        let mut catalog = Catalog::new();
        catalog.enroll(1, 1, "Fall").unwrap();

        let enrollment = catalog
            .update_enrollment(
                1,
                EnrollmentUpdate {
                    remarks: Some("Prerequisites met".to_string()),
                    ..EnrollmentUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(enrollment.status(), EnrollmentStatus::Pending);
        assert_eq!(enrollment.remarks(), "Prerequisites met");
    }

    #[test]
    fn assignments_filter_by_status() {
        let mut catalog = Catalog::new();
        catalog.add_assignment(1, "One", "", due());
        catalog.add_assignment(1, "Two", "", due());
        catalog.add_assignment(2, "Three", "", due());
        catalog.set_assignment_status(2, AssignmentStatus::Submitted).unwrap();

        let pending: Vec<_> = catalog
            .assignments_with_status(AssignmentStatus::Pending)
            .into_iter()
            .map(Assignment::title)
            .collect();
        assert_eq!(pending, ["One", "Three"]);
        assert!(catalog.assignments_with_status(AssignmentStatus::Overdue).is_empty());
    }

    #[test]
    fn grade_update_recomputes_letter() {
        let mut catalog = Catalog::new();
        catalog.add_grade(1, 1, 95.0, "Great");

        let grade = catalog
            .update_grade(
                1,
                GradeUpdate {
                    score: Some(59.999),
                    comments: Some(String::new()),
                },
            )
            .unwrap();

        assert_eq!(grade.letter(), LetterGrade::F);
        assert_eq!(grade.comments(), "Great");
    }

    #[test]
    fn statistics_summarise_catalog() {
        let mut catalog = catalog_with_students();
        catalog.enroll(1, 1, "").unwrap();
        catalog.enroll(2, 1, "").unwrap();
        catalog.set_enrollment_status(1, EnrollmentStatus::Approved).unwrap();
        catalog.add_assignment(1, "HW", "", due());
        catalog.add_grade(1, 1, 90.0, "");
        catalog.add_grade(2, 1, 70.0, "");

        let stats = catalog.statistics();

        assert_eq!(stats.students, 3);
        assert_eq!(stats.courses, 0);
        assert_eq!(stats.enrollments, 2);
        assert_eq!(stats.enrollments_by_status[&EnrollmentStatus::Approved], 1);
        assert_eq!(stats.enrollments_by_status[&EnrollmentStatus::Pending], 1);
        assert_eq!(stats.assignments_by_status[&AssignmentStatus::Pending], 1);
        assert_eq!(stats.grades_by_letter[&LetterGrade::A], 1);
        assert_eq!(stats.grades_by_letter[&LetterGrade::C], 1);
        assert_eq!(stats.average_score, Some(80.0));
    }

    #[test]
    fn empty_catalog_has_no_average() {
        let stats = Catalog::new().statistics();
        assert_eq!(stats.grades, 0);
        assert_eq!(stats.average_score, None);
    }

    #[test]
    fn end_to_end_enrollment_to_grade() {
        let mut catalog = Catalog::new();
        catalog.add_student("John", "Doe", "j@e.com", "555");
        catalog.add_course("CS101", "Intro", "Basics", 3, "CS");

        let enrollment = catalog.enroll(1, 1, "").unwrap();
        assert_eq!(enrollment.status(), EnrollmentStatus::Pending);
        catalog.set_enrollment_status(1, EnrollmentStatus::Approved).unwrap();

        let assignment = catalog.add_assignment(1, "Homework 1", "", due());
        assert_eq!(assignment.status(), AssignmentStatus::Pending);

        let grade = catalog.add_grade(1, 1, 92.5, "");
        assert_eq!(grade.letter(), LetterGrade::A);

        assert_eq!(catalog.grades().len(), 1);
        assert_eq!(
            catalog.enrollment(1).unwrap().status(),
            EnrollmentStatus::Approved
        );
        assert_eq!(catalog.enrollments_for_student(1).len(), 1);
        assert!(catalog.enrollments_for_student(2).is_empty());
    }
}
