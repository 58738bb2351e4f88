//! The interactive menu.
//!
//! Every prompt is a `dialoguer` widget. Numeric, id and date prompts
//! validate in place, so a typo re-asks the same question rather than
//! abandoning the action.

use std::fmt;

use dialoguer::{Input, Select, theme::ColorfulTheme};
use edurec::{
    AssignmentStatus, Catalog, CatalogError, Config, EnrollmentStatus, InstructorStatus, Prefix,
    domain::{
        AssignmentUpdate, CourseUpdate, EnrollmentUpdate, GradeUpdate, InstructorUpdate,
        StudentUpdate,
    },
};
use tracing::instrument;

use super::{
    input::{InputError, parse_due_date, parse_id, parse_number, parse_optional},
    list::{print_everything, print_section},
    stats,
    table::Tabular,
    terminal::{Colorize, is_narrow},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Area {
    Students,
    Courses,
    Instructors,
    Enrollments,
    Assignments,
    Grades,
    Search,
    Statistics,
    ViewAll,
    Exit,
}

impl Area {
    const ALL: [Self; 10] = [
        Self::Students,
        Self::Courses,
        Self::Instructors,
        Self::Enrollments,
        Self::Assignments,
        Self::Grades,
        Self::Search,
        Self::Statistics,
        Self::ViewAll,
        Self::Exit,
    ];
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Students => "Student management",
            Self::Courses => "Course management",
            Self::Instructors => "Instructor management",
            Self::Enrollments => "Enrollment management",
            Self::Assignments => "Assignment management",
            Self::Grades => "Grade management",
            Self::Search => "Search",
            Self::Statistics => "Statistics",
            Self::ViewAll => "View all data",
            Self::Exit => "Exit",
        })
    }
}

/// An interactive session over one catalog.
pub struct Menu {
    catalog: Catalog,
    config: Config,
    theme: ColorfulTheme,
}

impl Menu {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog,
            config,
            theme: ColorfulTheme::default(),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn run(mut self) -> anyhow::Result<()> {
        println!("{}", "Education Records".info());
        if !self.catalog.students().is_empty() {
            let stats = self.catalog.statistics();
            println!(
                "{}",
                format!(
                    "Loaded {} students, {} courses, {} instructors, {} enrollments, {} assignments and {} grades.",
                    stats.students,
                    stats.courses,
                    stats.instructors,
                    stats.enrollments,
                    stats.assignments,
                    stats.grades
                )
                .dim()
            );
        }

        loop {
            match self.choose("Main menu", &Area::ALL, None)? {
                Area::Students => self.students()?,
                Area::Courses => self.courses()?,
                Area::Instructors => self.instructors()?,
                Area::Enrollments => self.enrollments()?,
                Area::Assignments => self.assignments()?,
                Area::Grades => self.grades()?,
                Area::Search => self.search()?,
                Area::Statistics => {
                    print!("{}", stats::report(&self.catalog.statistics(), is_narrow()));
                    self.pause()?;
                }
                Area::ViewAll => {
                    print_everything(&self.catalog, self.config.digits());
                    self.pause()?;
                }
                Area::Exit => break,
            }
        }

        println!("Goodbye.");
        Ok(())
    }

    // Sub-menus

    fn students(&mut self) -> anyhow::Result<()> {
        loop {
            let action = self.pick(
                "Student management",
                &["Add student", "View all students", "Search students", "Update student", "Back"],
            )?;
            match action {
                0 => self.add_student()?,
                1 => self.show("Students", self.catalog.students()),
                2 => self.search_students()?,
                3 => self.update_student()?,
                _ => return Ok(()),
            }
            self.pause()?;
        }
    }

    fn courses(&mut self) -> anyhow::Result<()> {
        loop {
            let action = self.pick(
                "Course management",
                &["Add course", "View all courses", "Search courses", "Update course", "Back"],
            )?;
            match action {
                0 => self.add_course()?,
                1 => self.show("Courses", self.catalog.courses()),
                2 => self.search_courses()?,
                3 => self.update_course()?,
                _ => return Ok(()),
            }
            self.pause()?;
        }
    }

    fn instructors(&mut self) -> anyhow::Result<()> {
        loop {
            let action = self.pick(
                "Instructor management",
                &[
                    "Add instructor",
                    "View all instructors",
                    "Assign instructor to course",
                    "Update instructor",
                    "Back",
                ],
            )?;
            match action {
                0 => self.add_instructor()?,
                1 => self.show("Instructors", self.catalog.instructors()),
                2 => self.assign_instructor()?,
                3 => self.update_instructor()?,
                _ => return Ok(()),
            }
            self.pause()?;
        }
    }

    fn enrollments(&mut self) -> anyhow::Result<()> {
        loop {
            let action = self.pick(
                "Enrollment management",
                &[
                    "Enroll student in course",
                    "View all enrollments",
                    "Update enrollment status",
                    "Back",
                ],
            )?;
            match action {
                0 => self.enroll()?,
                1 => self.show("Enrollments", self.catalog.enrollments()),
                2 => self.update_enrollment_status()?,
                _ => return Ok(()),
            }
            self.pause()?;
        }
    }

    fn assignments(&mut self) -> anyhow::Result<()> {
        loop {
            let action = self.pick(
                "Assignment management",
                &[
                    "Create assignment",
                    "View all assignments",
                    "Update assignment status",
                    "Update assignment details",
                    "Back",
                ],
            )?;
            match action {
                0 => self.add_assignment()?,
                1 => self.show("Assignments", self.catalog.assignments()),
                2 => self.update_assignment_status()?,
                3 => self.update_assignment()?,
                _ => return Ok(()),
            }
            self.pause()?;
        }
    }

    fn grades(&mut self) -> anyhow::Result<()> {
        loop {
            let action = self.pick(
                "Grade management",
                &["Add grade", "View all grades", "Update grade", "Back"],
            )?;
            match action {
                0 => self.add_grade()?,
                1 => self.show("Grades", self.catalog.grades()),
                2 => self.update_grade()?,
                _ => return Ok(()),
            }
            self.pause()?;
        }
    }

    fn search(&mut self) -> anyhow::Result<()> {
        loop {
            let action = self.pick(
                "Search",
                &[
                    "Search students",
                    "Search courses",
                    "Enrollments by student name",
                    "Assignments by status",
                    "Back",
                ],
            )?;
            match action {
                0 => self.search_students()?,
                1 => self.search_courses()?,
                2 => self.enrollments_by_student()?,
                3 => self.assignments_by_status()?,
                _ => return Ok(()),
            }
            self.pause()?;
        }
    }

    // Students

    fn add_student(&mut self) -> anyhow::Result<()> {
        let first_name = self.text("First name")?;
        let last_name = self.text("Last name")?;
        let email = self.text("Email")?;
        let phone = self.text("Phone")?;

        let student = self
            .catalog
            .add_student(first_name, last_name, email, phone);
        let message = format!(
            "Student added: {} (id {})",
            student.student_number().display(self.config.digits()),
            student.id()
        );
        println!("{}", message.success());
        Ok(())
    }

    fn search_students(&self) -> anyhow::Result<()> {
        let term = self.text("Search term (name, email or phone)")?;
        let results = self.catalog.search_students(&term);
        if results.is_empty() {
            println!("{}", format!("No students found matching '{term}'.").warning());
        } else {
            self.show(&format!("Search results ({} found)", results.len()), results);
        }
        Ok(())
    }

    fn update_student(&mut self) -> anyhow::Result<()> {
        let id = self.id("Student ID to update", Prefix::Student)?;
        let Some(student) = self.catalog.student(id) else {
            not_found("Student", id);
            return Ok(());
        };
        let (first, last, email, phone) = (
            student.first_name().to_string(),
            student.last_name().to_string(),
            student.email().to_string(),
            student.phone().to_string(),
        );

        println!("{}", "Press Enter to keep the current value.".dim());
        let update = StudentUpdate {
            first_name: Some(self.text(&format!("First name [{first}]"))?),
            last_name: Some(self.text(&format!("Last name [{last}]"))?),
            email: Some(self.text(&format!("Email [{email}]"))?),
            phone: Some(self.text(&format!("Phone [{phone}]"))?),
        };
        self.catalog.update_student(id, update)?;
        println!("{}", "Student updated.".success());
        Ok(())
    }

    // Courses

    fn add_course(&mut self) -> anyhow::Result<()> {
        let code = self.text("Course code")?;
        let name = self.text("Course name")?;
        let description = self.text("Description")?;
        let credits = self.parsed("Credits", parse_number::<u32>)?;
        let department = self.text("Department")?;

        let course = self
            .catalog
            .add_course(code, name, description, credits, department);
        println!(
            "{}",
            format!("Course added: {} (id {})", course.code(), course.id()).success()
        );
        Ok(())
    }

    fn search_courses(&self) -> anyhow::Result<()> {
        let term = self.text("Search term (name, code or department)")?;
        let results = self.catalog.search_courses(&term);
        if results.is_empty() {
            println!("{}", format!("No courses found matching '{term}'.").warning());
        } else {
            self.show(&format!("Search results ({} found)", results.len()), results);
        }
        Ok(())
    }

    fn update_course(&mut self) -> anyhow::Result<()> {
        let id = self.parsed("Course ID to update", parse_number::<u32>)?;
        let Some(course) = self.catalog.course(id) else {
            not_found("Course", id);
            return Ok(());
        };
        let (name, description, credits, department) = (
            course.name().to_string(),
            course.description().to_string(),
            course.credits(),
            course.department().to_string(),
        );

        println!("{}", "Press Enter to keep the current value.".dim());
        let update = CourseUpdate {
            name: Some(self.text(&format!("Course name [{name}]"))?),
            description: Some(self.text(&format!("Description [{description}]"))?),
            credits: self.parsed(&format!("Credits [{credits}]"), parse_optional::<u32>)?,
            department: Some(self.text(&format!("Department [{department}]"))?),
        };
        self.catalog.update_course(id, update)?;
        println!("{}", "Course updated.".success());
        Ok(())
    }

    // Instructors

    fn add_instructor(&mut self) -> anyhow::Result<()> {
        let name = self.text("Name")?;
        let email = self.text("Email")?;
        let contact = self.text("Contact")?;
        let specialization = self.text("Specialization")?;
        let location = self.text("Location")?;

        let instructor =
            self.catalog
                .add_instructor(name, contact, email, specialization, location);
        let message = format!(
            "Instructor added: {} (id {})",
            instructor.identifier().display(self.config.digits()),
            instructor.id()
        );
        println!("{}", message.success());
        Ok(())
    }

    fn assign_instructor(&mut self) -> anyhow::Result<()> {
        self.show("Available instructors", self.catalog.instructors());
        let instructor_id = self.id("Instructor ID to assign", Prefix::Instructor)?;
        self.show("Available courses", self.catalog.courses());
        let course_id = self.parsed("Course ID", parse_number::<u32>)?;

        match self.catalog.assign_instructor(instructor_id, course_id) {
            Ok(instructor) => {
                let name = instructor.name().to_string();
                let course = self
                    .catalog
                    .course(course_id)
                    .map_or_else(|| course_id.to_string(), |c| c.name().to_string());
                println!("{}", format!("Instructor {name} assigned to {course}.").success());
            }
            Err(error) => println!("{}", format!("Invalid instructor or course: {error}").error()),
        }
        Ok(())
    }

    fn update_instructor(&mut self) -> anyhow::Result<()> {
        let id = self.id("Instructor ID to update", Prefix::Instructor)?;
        let Some(instructor) = self.catalog.instructor(id) else {
            not_found("Instructor", id);
            return Ok(());
        };
        let current = instructor.status();
        let (name, contact, email, specialization, location) = (
            instructor.name().to_string(),
            instructor.contact().to_string(),
            instructor.email().to_string(),
            instructor.specialization().to_string(),
            instructor.location().to_string(),
        );

        println!("{}", "Press Enter to keep the current value.".dim());
        let update = InstructorUpdate {
            name: Some(self.text(&format!("Name [{name}]"))?),
            contact: Some(self.text(&format!("Contact [{contact}]"))?),
            email: Some(self.text(&format!("Email [{email}]"))?),
            specialization: Some(self.text(&format!("Specialization [{specialization}]"))?),
            location: Some(self.text(&format!("Location [{location}]"))?),
            status: Some(self.choose("Status", InstructorStatus::ALL, Some(current))?),
        };
        self.catalog.update_instructor(id, update)?;
        println!("{}", "Instructor updated.".success());
        Ok(())
    }

    // Enrollments

    fn enroll(&mut self) -> anyhow::Result<()> {
        self.show("Available students", self.catalog.students());
        let student_id = self.id("Student ID", Prefix::Student)?;
        self.show("Available courses", self.catalog.courses());
        let course_id = self.parsed("Course ID", parse_number::<u32>)?;
        let description = self.text("Enrollment description")?;

        match self.catalog.enroll(student_id, course_id, description) {
            Ok(enrollment) => {
                let message = format!(
                    "Enrollment created: {} (id {})",
                    enrollment.reference().display(self.config.digits()),
                    enrollment.id()
                );
                println!("{}", message.success());
            }
            Err(CatalogError::AlreadyEnrolled { .. }) => {
                println!("{}", "Student is already enrolled in this course!".warning());
            }
            Err(error) => return Err(error.into()),
        }
        Ok(())
    }

    fn update_enrollment_status(&mut self) -> anyhow::Result<()> {
        let id = self.id("Enrollment ID", Prefix::Enrollment)?;
        let Some(enrollment) = self.catalog.enrollment(id) else {
            not_found("Enrollment", id);
            return Ok(());
        };
        let current = enrollment.status();
        println!("Current status: {current}");

        let status = self.choose("New status", EnrollmentStatus::ALL, Some(current))?;
        let remarks = self.text("Remarks")?;
        self.catalog.update_enrollment(
            id,
            EnrollmentUpdate {
                status: Some(status),
                remarks: Some(remarks),
                ..EnrollmentUpdate::default()
            },
        )?;
        println!("{}", format!("Enrollment status updated to {status}.").success());
        Ok(())
    }

    fn enrollments_by_student(&self) -> anyhow::Result<()> {
        let name = self.text("Student name")?;
        let students = self.catalog.students_by_name(&name);
        if students.is_empty() {
            println!("{}", format!("No students found with name '{name}'.").warning());
            return Ok(());
        }
        for student in students {
            self.show(
                &format!("Enrollments for {}", student.full_name()),
                self.catalog.enrollments_for_student(student.id()),
            );
        }
        Ok(())
    }

    // Assignments

    fn add_assignment(&mut self) -> anyhow::Result<()> {
        self.show("Available enrollments", self.catalog.enrollments());
        let enrollment_id = self.id("Enrollment ID", Prefix::Enrollment)?;
        let title = self.text("Assignment title")?;
        let description = self.text("Description")?;
        let due = self.parsed("Due date (YYYY-MM-DD)", parse_due_date)?;

        let assignment = self
            .catalog
            .add_assignment(enrollment_id, title, description, due);
        let message = format!(
            "Assignment created: {} (id {}), due {}",
            assignment.reference().display(self.config.digits()),
            assignment.id(),
            assignment.due_date()
        );
        println!("{}", message.success());
        Ok(())
    }

    fn update_assignment_status(&mut self) -> anyhow::Result<()> {
        let id = self.id("Assignment ID", Prefix::Assignment)?;
        let Some(assignment) = self.catalog.assignment(id) else {
            not_found("Assignment", id);
            return Ok(());
        };
        let current = assignment.status();
        println!("Current status: {current}");

        let status = self.choose("New status", AssignmentStatus::ALL, Some(current))?;
        let remarks = self.text("Remarks")?;
        self.catalog.update_assignment(
            id,
            AssignmentUpdate {
                status: Some(status),
                remarks: Some(remarks),
                ..AssignmentUpdate::default()
            },
        )?;
        println!("{}", format!("Assignment status updated to {status}.").success());
        Ok(())
    }

    fn update_assignment(&mut self) -> anyhow::Result<()> {
        let id = self.id("Assignment ID to update", Prefix::Assignment)?;
        let Some(assignment) = self.catalog.assignment(id) else {
            not_found("Assignment", id);
            return Ok(());
        };
        let (title, description, due) = (
            assignment.title().to_string(),
            assignment.description().to_string(),
            assignment.due_date().date(),
        );

        println!("{}", "Press Enter to keep the current value.".dim());
        let update = AssignmentUpdate {
            title: Some(self.text(&format!("Title [{title}]"))?),
            description: Some(self.text(&format!("Description [{description}]"))?),
            due_date: self.parsed(&format!("Due date [{due}]"), |text| {
                if text.trim().is_empty() {
                    Ok(None)
                } else {
                    parse_due_date(text).map(Some)
                }
            })?,
            ..AssignmentUpdate::default()
        };
        self.catalog.update_assignment(id, update)?;
        println!("{}", "Assignment updated.".success());
        Ok(())
    }

    fn assignments_by_status(&self) -> anyhow::Result<()> {
        let status = self.choose("Status", AssignmentStatus::ALL, None)?;
        let results = self.catalog.assignments_with_status(status);
        if results.is_empty() {
            println!("{}", format!("No assignments with status {status}.").warning());
        } else {
            self.show(&format!("Assignments with status {status}"), results);
        }
        Ok(())
    }

    // Grades

    fn add_grade(&mut self) -> anyhow::Result<()> {
        self.show("Available students", self.catalog.students());
        let student_id = self.id("Student ID", Prefix::Student)?;
        self.show("Available assignments", self.catalog.assignments());
        let assignment_id = self.id("Assignment ID", Prefix::Assignment)?;
        let score = self.parsed("Score (0-100)", parse_number::<f64>)?;
        let comments = self.text("Comments")?;

        let grade = self
            .catalog
            .add_grade(student_id, assignment_id, score, comments);
        let message = format!(
            "Grade added: id {}, score {:.2}, letter {}",
            grade.id(),
            grade.score(),
            grade.letter()
        );
        println!("{}", message.success());
        Ok(())
    }

    fn update_grade(&mut self) -> anyhow::Result<()> {
        let id = self.parsed("Grade ID", parse_number::<u32>)?;
        let Some(grade) = self.catalog.grade(id) else {
            not_found("Grade", id);
            return Ok(());
        };
        println!(
            "Current: score {:.2}, letter {}, comments '{}'",
            grade.score(),
            grade.letter(),
            grade.comments()
        );
        let comments = grade.comments().to_string();

        println!("{}", "Press Enter to keep the current value.".dim());
        let update = GradeUpdate {
            score: self.parsed("New score", parse_optional::<f64>)?,
            comments: Some(self.text(&format!("Comments [{comments}]"))?),
        };
        let grade = self.catalog.update_grade(id, update)?;
        println!(
            "{}",
            format!("Grade updated: score {:.2}, letter {}.", grade.score(), grade.letter())
                .success()
        );
        Ok(())
    }

    // Prompts

    fn show<'a, T: Tabular + 'a>(&self, title: &str, records: impl IntoIterator<Item = &'a T>) {
        print_section(title, records, self.config.digits());
    }

    fn pick(&self, prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn choose<T>(&self, prompt: &str, items: &[T], current: Option<T>) -> anyhow::Result<T>
    where
        T: fmt::Display + Copy + PartialEq,
    {
        let labels: Vec<String> = items.iter().map(ToString::to_string).collect();
        let default = current
            .and_then(|current| items.iter().position(|item| *item == current))
            .unwrap_or_default();
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(labels.as_slice())
            .default(default)
            .interact()?;
        Ok(items[index])
    }

    fn text(&self, prompt: &str) -> anyhow::Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    /// Prompt until `parse` accepts the input.
    fn parsed<T>(
        &self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> anyhow::Result<T> {
        let text = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| {
                parse(input).map(|_| ()).map_err(|error| error.to_string())
            })
            .interact_text()?;
        Ok(parse(&text)?)
    }

    fn id(&self, prompt: &str, prefix: Prefix) -> anyhow::Result<u32> {
        self.parsed(prompt, |text| parse_id(text, prefix))
    }

    fn pause(&self) -> anyhow::Result<()> {
        if self.config.pause_after_action {
            Input::<String>::with_theme(&self.theme)
                .with_prompt("Press Enter to continue")
                .allow_empty(true)
                .report(false)
                .interact_text()?;
        }
        Ok(())
    }
}

fn not_found(kind: &str, id: u32) {
    println!("{}", format!("{kind} not found with ID {id}.").error());
}
