//! Fixed-width tables for the catalog's records.

use edurec::domain::{Assignment, Course, Enrollment, Grade, Instructor, Student};

const TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Shorten `text` to at most `width` characters, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// A record that can be shown as a table row.
pub trait Tabular {
    /// Column headers and their widths.
    const COLUMNS: &'static [(&'static str, usize)];

    /// One cell per column, untruncated.
    ///
    /// `digits` is the padding width for reference numbers.
    fn cells(&self, digits: usize) -> Vec<String>;
}

impl Tabular for Student {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 6),
        ("Student No", 10),
        ("First Name", 15),
        ("Last Name", 15),
        ("Email", 25),
        ("Phone", 15),
        ("Created At", 19),
    ];

    fn cells(&self, digits: usize) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.student_number().display(digits).to_string(),
            self.first_name().to_string(),
            self.last_name().to_string(),
            self.email().to_string(),
            self.phone().to_string(),
            self.created_at().format(TIMESTAMP).to_string(),
        ]
    }
}

impl Tabular for Course {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 6),
        ("Course Code", 12),
        ("Course Name", 25),
        ("Description", 35),
        ("Credits", 7),
        ("Department", 15),
        ("Created At", 19),
    ];

    fn cells(&self, _digits: usize) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.code().to_string(),
            self.name().to_string(),
            self.description().to_string(),
            self.credits().to_string(),
            self.department().to_string(),
            self.created_at().format(TIMESTAMP).to_string(),
        ]
    }
}

impl Tabular for Instructor {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 6),
        ("Identifier", 10),
        ("Name", 25),
        ("Status", 10),
        ("Location", 15),
        ("Contact", 15),
        ("Email", 25),
        ("Specialization", 15),
        ("Course", 6),
        ("Assigned Since", 19),
    ];

    fn cells(&self, digits: usize) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.identifier().display(digits).to_string(),
            self.name().to_string(),
            self.status().to_string(),
            self.location().to_string(),
            self.contact().to_string(),
            self.email().to_string(),
            self.specialization().to_string(),
            self.assigned_course_id()
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.assigned_since().format(TIMESTAMP).to_string(),
        ]
    }
}

impl Tabular for Enrollment {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 6),
        ("Reference", 10),
        ("Description", 30),
        ("Date", 19),
        ("Status", 10),
        ("Remarks", 30),
        ("Student", 8),
        ("Course", 8),
    ];

    fn cells(&self, digits: usize) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.reference().display(digits).to_string(),
            self.description().to_string(),
            self.date().format(TIMESTAMP).to_string(),
            self.status().to_string(),
            self.remarks().to_string(),
            self.student_id().to_string(),
            self.course_id().to_string(),
        ]
    }
}

impl Tabular for Assignment {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 6),
        ("Reference", 10),
        ("Title", 25),
        ("Description", 35),
        ("Created", 19),
        ("Due Date", 19),
        ("Status", 10),
        ("Remarks", 25),
        ("Enrollment", 10),
    ];

    fn cells(&self, digits: usize) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.reference().display(digits).to_string(),
            self.title().to_string(),
            self.description().to_string(),
            self.date().format(TIMESTAMP).to_string(),
            self.due_date().format(TIMESTAMP).to_string(),
            self.status().to_string(),
            self.remarks().to_string(),
            self.enrollment_id().to_string(),
        ]
    }
}

impl Tabular for Grade {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 6),
        ("Score", 8),
        ("Grade", 5),
        ("Comments", 40),
        ("Created At", 19),
        ("Assignment", 10),
        ("Student", 8),
    ];

    fn cells(&self, _digits: usize) -> Vec<String> {
        vec![
            self.id().to_string(),
            format!("{:.2}", self.score()),
            self.letter().to_string(),
            self.comments().to_string(),
            self.created_at().format(TIMESTAMP).to_string(),
            self.assignment_id().to_string(),
            self.student_id().to_string(),
        ]
    }
}

/// Render records as an aligned table, or as stacked `key: value` blocks when
/// `narrow` is set.
///
/// Table cells are truncated to their column width. Stacked output shows
/// every value in full.
pub fn render<'a, T>(
    records: impl IntoIterator<Item = &'a T>,
    digits: usize,
    narrow: bool,
) -> String
where
    T: Tabular + 'a,
{
    let mut out = String::new();

    if narrow {
        for record in records {
            for ((header, _), value) in T::COLUMNS.iter().zip(record.cells(digits)) {
                out.push_str(&format!("{header}: {value}\n"));
            }
            out.push('\n');
        }
        return out;
    }

    let line = |cells: &mut dyn Iterator<Item = String>| {
        let row: Vec<String> = T::COLUMNS
            .iter()
            .zip(cells)
            .map(|(&(_, width), cell)| format!("{:<width$}", truncate(&cell, width)))
            .collect();
        let mut row = row.join("  ");
        row.truncate(row.trim_end().len());
        row.push('\n');
        row
    };

    out.push_str(&line(
        &mut T::COLUMNS.iter().map(|(header, _)| (*header).to_string()),
    ));
    out.push_str(&line(&mut T::COLUMNS.iter().map(|&(_, width)| "-".repeat(width))));
    for record in records {
        out.push_str(&line(&mut record.cells(digits).into_iter()));
    }
    out
}
