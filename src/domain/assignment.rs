use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    reference::{Prefix, Reference},
    status::AssignmentStatus,
    update::{replace, replace_text},
};

/// Remarks recorded on a new assignment.
pub const DEFAULT_REMARKS: &str = "Not submitted";

/// The due timestamp for a calendar date: the last second of that day.
///
/// # Panics
///
/// Never panics; 23:59:59 exists on every date.
#[must_use]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .expect("23:59:59 is a valid time of day")
}

/// Coursework set against an enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub(crate) id: u32,
    pub(crate) enrollment_id: u32,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) due_date: NaiveDateTime,
    pub(crate) status: AssignmentStatus,
    pub(crate) remarks: String,
    pub(crate) date: DateTime<Utc>,
}

/// Replacement values for [`Assignment`] fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New due timestamp.
    pub due_date: Option<NaiveDateTime>,
    /// New status.
    pub status: Option<AssignmentStatus>,
    /// New remarks.
    pub remarks: Option<String>,
}

impl Assignment {
    pub(crate) fn new(
        id: u32,
        enrollment_id: u32,
        title: String,
        description: String,
        due_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            enrollment_id,
            title,
            description,
            due_date,
            status: AssignmentStatus::default(),
            remarks: DEFAULT_REMARKS.to_string(),
            date: Utc::now(),
        }
    }

    /// The numeric identifier, assigned at creation.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The assignment reference, e.g. `ASS0001`.
    #[must_use]
    pub const fn reference(&self) -> Reference {
        Reference::new(Prefix::Assignment, self.id)
    }

    /// The enrollment this assignment belongs to.
    #[must_use]
    pub const fn enrollment_id(&self) -> u32 {
        self.enrollment_id
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the assignment is due.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDateTime {
        self.due_date
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Remarks accompanying the status.
    #[must_use]
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    /// When the assignment was created.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub(crate) const fn set_status(&mut self, status: AssignmentStatus) {
        self.status = status;
    }

    pub(crate) fn apply(&mut self, update: AssignmentUpdate) {
        replace_text(&mut self.title, update.title);
        replace_text(&mut self.description, update.description);
        replace(&mut self.due_date, update.due_date);
        replace(&mut self.status, update.status);
        replace_text(&mut self.remarks, update.remarks);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn end_of_day_is_last_second() {
        let due = end_of_day(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(due.date(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!((due.hour(), due.minute(), due.second()), (23, 59, 59));
    }

    #[test]
    fn new_assignment_is_pending_and_not_submitted() {
        let due = end_of_day(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        let assignment = Assignment::new(
            2,
            1,
            "Essay".to_string(),
            "Write an essay".to_string(),
            due,
        );

        assert_eq!(assignment.reference().to_string(), "ASS0002");
        assert_eq!(assignment.status(), AssignmentStatus::Pending);
        assert_eq!(assignment.remarks(), DEFAULT_REMARKS);
        assert_eq!(assignment.due_date(), due);
    }

    #[test]
    fn update_moves_due_date_and_status() {
        let due = end_of_day(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        let later = end_of_day(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        let mut assignment =
            Assignment::new(1, 1, "Essay".to_string(), String::new(), due);

        assignment.apply(AssignmentUpdate {
            due_date: Some(later),
            status: Some(AssignmentStatus::Overdue),
            remarks: Some(String::new()),
            ..AssignmentUpdate::default()
        });

        assert_eq!(assignment.due_date(), later);
        assert_eq!(assignment.status(), AssignmentStatus::Overdue);
        assert_eq!(assignment.remarks(), DEFAULT_REMARKS);
        assert_eq!(assignment.title(), "Essay");
    }
}
