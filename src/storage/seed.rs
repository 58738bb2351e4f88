use chrono::{Days, Local, NaiveDate};

use crate::domain::{Catalog, Enrollment, EnrollmentStatus, assignment::end_of_day};

/// Loads the demonstration dataset into `catalog`, with assignment due dates
/// counted from today.
///
/// See [`seed_as_of`].
pub fn seed(catalog: &mut Catalog) {
    seed_as_of(catalog, Local::now().date_naive());
}

/// Loads the demonstration dataset into `catalog`.
///
/// Five students, five courses, four instructors teaching the first four
/// courses, five approved enrollments, three assignments due 14 or 21 days
/// after `today`, and three grades.
///
/// Ids follow on from whatever the catalog already holds, so seeding a
/// non-empty catalog links the sample records to the wrong rows. Seed an
/// empty one.
pub fn seed_as_of(catalog: &mut Catalog, today: NaiveDate) {
    let students = [
        ("John", "Doe", "john.doe@email.com", "123-456-7890"),
        ("Jane", "Smith", "jane.smith@email.com", "987-654-3210"),
        ("Bob", "Johnson", "bob.johnson@email.com", "555-123-4567"),
        ("Alice", "Williams", "alice.williams@email.com", "444-555-6666"),
        ("Charlie", "Brown", "charlie.brown@email.com", "777-888-9999"),
    ];
    for (first, last, email, phone) in students {
        catalog.add_student(first, last, email, phone);
    }

    let courses = [
        (
            "CS101",
            "Introduction to Programming",
            "Basic programming concepts and algorithms",
            3,
            "Computer Science",
        ),
        (
            "CS201",
            "Database Systems",
            "Database design, implementation, and management",
            4,
            "Computer Science",
        ),
        (
            "CS301",
            "Web Development",
            "Full-stack web development with modern frameworks",
            4,
            "Computer Science",
        ),
        (
            "MATH101",
            "Calculus I",
            "Limits, derivatives, and integrals",
            4,
            "Mathematics",
        ),
        (
            "ENG101",
            "English Composition",
            "Academic writing and research skills",
            3,
            "English",
        ),
    ];
    for (code, name, description, credits, department) in courses {
        catalog.add_course(code, name, description, credits, department);
    }

    let instructors = [
        ("Dr. Alice Brown", "555-111-2222", "alice.brown@university.edu", "Programming"),
        ("Prof. David Wilson", "555-333-4444", "david.wilson@university.edu", "Databases"),
        ("Dr. Sarah Johnson", "555-555-6666", "sarah.johnson@university.edu", "Web Technologies"),
        ("Prof. Michael Chen", "555-777-8888", "michael.chen@university.edu", "Mathematics"),
    ];
    for (name, contact, email, specialization) in instructors {
        let instructor_id = catalog
            .add_instructor(name, contact, email, specialization, "")
            .id();
        // instructor n teaches course n
        if let Err(error) = catalog.assign_instructor(instructor_id, instructor_id) {
            tracing::warn!("Skipping sample assignment: {error}");
        }
    }

    for (student_id, course_id) in [(1, 1), (2, 1), (3, 2), (4, 3), (5, 4)] {
        let approved = catalog
            .enroll(student_id, course_id, "Fall 2024 Enrollment")
            .map(Enrollment::id)
            .and_then(|id| {
                catalog
                    .set_enrollment_status(id, EnrollmentStatus::Approved)
                    .map(|_| ())
            });
        if let Err(error) = approved {
            tracing::warn!("Skipping sample enrollment: {error}");
        }
    }

    let two_weeks = end_of_day(today + Days::new(14));
    let three_weeks = end_of_day(today + Days::new(21));
    catalog.add_assignment(
        1,
        "Programming Assignment 1",
        "Write a Java program to calculate factorial",
        two_weeks,
    );
    catalog.add_assignment(
        2,
        "Database Design Project",
        "Design a database schema for library system",
        three_weeks,
    );
    catalog.add_assignment(
        3,
        "Web Development Project",
        "Create a responsive website using HTML/CSS/JavaScript",
        two_weeks,
    );

    catalog.add_grade(1, 1, 92.5, "Excellent work!");
    catalog.add_grade(2, 1, 85.0, "Good effort");
    catalog.add_grade(3, 2, 78.5, "Needs improvement in design");

    tracing::info!(
        "Loaded sample data: {} students, {} courses, {} instructors",
        catalog.students().len(),
        catalog.courses().len(),
        catalog.instructors().len()
    );
}
