use anyhow::Context;
use clap::{Parser, ValueEnum};
use edurec::{AssignmentStatus, Catalog, Config, EnrollmentStatus, domain::Student};
use serde::Serialize;
use tracing::instrument;

use super::{
    table::{Tabular, render},
    terminal::{Colorize, is_narrow},
};

/// Command arguments for `edu list`.
#[derive(Debug, Parser)]
#[command(about = "List records, optionally filtered")]
pub struct List {
    /// The kind of record to list.
    #[arg(value_enum)]
    entity: Entity,

    /// Keep only records matching this text.
    ///
    /// Students match on name, email or phone; courses on name, code or
    /// department; enrollments on the enrolled student's name.
    #[arg(long, short)]
    search: Option<String>,

    /// Keep only enrollments or assignments with this status.
    #[arg(long)]
    status: Option<String>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Entity {
    Students,
    Courses,
    Instructors,
    Enrollments,
    Assignments,
    Grades,
    /// Every collection.
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(catalog, config))]
    pub fn run(self, catalog: &Catalog, config: &Config) -> anyhow::Result<()> {
        self.check_filters()?;
        let digits = config.digits();
        let search = self.search.as_deref();

        match self.entity {
            Entity::Students => {
                let students = match search {
                    Some(term) => catalog.search_students(term),
                    None => catalog.students().iter().collect(),
                };
                self.emit("Students", &students, digits)
            }
            Entity::Courses => {
                let courses = match search {
                    Some(term) => catalog.search_courses(term),
                    None => catalog.courses().iter().collect(),
                };
                self.emit("Courses", &courses, digits)
            }
            Entity::Instructors => {
                let instructors: Vec<_> = catalog.instructors().iter().collect();
                self.emit("Instructors", &instructors, digits)
            }
            Entity::Enrollments => {
                let status = self
                    .status
                    .as_deref()
                    .map(str::parse::<EnrollmentStatus>)
                    .transpose()?;
                let students: Option<Vec<u32>> = search.map(|term| {
                    catalog
                        .students_by_name(term)
                        .into_iter()
                        .map(Student::id)
                        .collect()
                });
                let enrollments: Vec<_> = catalog
                    .enrollments()
                    .iter()
                    .filter(|e| status.is_none_or(|status| e.status() == status))
                    .filter(|e| {
                        students
                            .as_ref()
                            .is_none_or(|ids| ids.contains(&e.student_id()))
                    })
                    .collect();
                self.emit("Enrollments", &enrollments, digits)
            }
            Entity::Assignments => {
                let assignments = match self.status.as_deref() {
                    Some(status) => {
                        catalog.assignments_with_status(status.parse::<AssignmentStatus>()?)
                    }
                    None => catalog.assignments().iter().collect(),
                };
                self.emit("Assignments", &assignments, digits)
            }
            Entity::Grades => {
                let grades: Vec<_> = catalog.grades().iter().collect();
                self.emit("Grades", &grades, digits)
            }
            Entity::All => self.emit_all(catalog, digits),
        }
    }

    fn check_filters(&self) -> anyhow::Result<()> {
        let searchable = matches!(
            self.entity,
            Entity::Students | Entity::Courses | Entity::Enrollments
        );
        if self.search.is_some() && !searchable {
            anyhow::bail!("--search applies to students, courses and enrollments only");
        }

        let has_status = matches!(self.entity, Entity::Enrollments | Entity::Assignments);
        if self.status.is_some() && !has_status {
            anyhow::bail!("--status applies to enrollments and assignments only");
        }
        Ok(())
    }

    fn emit<T: Tabular + Serialize>(
        &self,
        title: &str,
        records: &[&T],
        digits: usize,
    ) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(std::io::stdout(), records)
                    .context("failed to render json output")?;
                println!();
            }
            OutputFormat::Table => print_section(title, records.iter().copied(), digits),
        }
        Ok(())
    }

    fn emit_all(&self, catalog: &Catalog, digits: usize) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(std::io::stdout(), &catalog.snapshot())
                    .context("failed to render json output")?;
                println!();
            }
            OutputFormat::Table => print_everything(catalog, digits),
        }
        Ok(())
    }
}

/// Print a titled table, or a note when there is nothing to show.
pub fn print_section<'a, T: Tabular + 'a>(
    title: &str,
    records: impl IntoIterator<Item = &'a T>,
    digits: usize,
) {
    let records: Vec<&T> = records.into_iter().collect();
    println!("{}", title.info());
    if records.is_empty() {
        println!("{}", format!("No {} found.", title.to_lowercase()).dim());
    } else {
        print!("{}", render(records.iter().copied(), digits, is_narrow()));
        println!("{}", format!("Total: {}", records.len()).dim());
    }
    println!();
}

/// Print every collection in turn.
pub fn print_everything(catalog: &Catalog, digits: usize) {
    print_section("Students", catalog.students(), digits);
    print_section("Courses", catalog.courses(), digits);
    print_section("Instructors", catalog.instructors(), digits);
    print_section("Enrollments", catalog.enrollments(), digits);
    print_section("Assignments", catalog.assignments(), digits);
    print_section("Grades", catalog.grades(), digits);
}
