use clap::Parser;
use edurec::{Catalog, Statistics};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Parser, Default)]
#[command(about = "Show record counts, status breakdowns and the average score")]
pub struct Stats {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Stats {
    #[instrument(level = "debug", skip(self, catalog))]
    pub fn run(self, catalog: &Catalog) -> anyhow::Result<()> {
        let stats = catalog.statistics();

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            OutputFormat::Table if self.quiet => println!("{}", quiet_line(&stats)),
            OutputFormat::Table => print!("{}", report(&stats, is_narrow())),
        }
        Ok(())
    }
}

fn quiet_line(stats: &Statistics) -> String {
    format!(
        "students={} courses={} instructors={} enrollments={} assignments={} grades={}",
        stats.students,
        stats.courses,
        stats.instructors,
        stats.enrollments,
        stats.assignments,
        stats.grades
    )
}

/// The statistics as a multi-section text report.
pub fn report(stats: &Statistics, narrow: bool) -> String {
    let mut out = String::new();
    let mut section = |title: &str, rows: Vec<(String, String)>| {
        out.push_str(&format!("{}\n", title.info()));
        if narrow {
            for (label, value) in rows {
                out.push_str(&format!("{label}: {value}\n"));
            }
        } else {
            out.push_str(&format!("{}\n", "─".repeat(title.chars().count()).dim()));
            for (label, value) in rows {
                out.push_str(&format!("{label:<24}{value}\n"));
            }
        }
        out.push('\n');
    };

    section(
        "Record counts",
        vec![
            ("Students".to_string(), stats.students.to_string()),
            ("Courses".to_string(), stats.courses.to_string()),
            ("Instructors".to_string(), stats.instructors.to_string()),
            ("Enrollments".to_string(), stats.enrollments.to_string()),
            ("Assignments".to_string(), stats.assignments.to_string()),
            ("Grades".to_string(), stats.grades.to_string()),
        ],
    );

    section(
        "Enrollments by status",
        stats
            .enrollments_by_status
            .iter()
            .map(|(status, count)| (status.to_string(), count.to_string()))
            .collect(),
    );

    section(
        "Assignments by status",
        stats
            .assignments_by_status
            .iter()
            .map(|(status, count)| (status.to_string(), count.to_string()))
            .collect(),
    );

    let mut grades = vec![(
        "Average score".to_string(),
        stats
            .average_score
            .map_or_else(|| "-".to_string(), |average| format!("{average:.2}")),
    )];
    grades.extend(
        stats
            .grades_by_letter
            .iter()
            .map(|(letter, count)| (format!("{letter} grades"), count.to_string())),
    );
    section("Grades", grades);

    out
}
