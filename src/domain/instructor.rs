use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    reference::{Prefix, Reference},
    status::InstructorStatus,
    update::{replace, replace_text},
};

/// Location recorded when none is given.
pub const UNSPECIFIED_LOCATION: &str = "Not Specified";

/// A member of teaching staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) contact: String,
    pub(crate) email: String,
    pub(crate) specialization: String,
    pub(crate) location: String,
    pub(crate) status: InstructorStatus,
    /// Course this instructor teaches. Only the latest assignment is kept.
    pub(crate) assigned_course_id: Option<u32>,
    pub(crate) assigned_since: DateTime<Utc>,
}

/// Replacement values for [`Instructor`] fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructorUpdate {
    /// New name.
    pub name: Option<String>,
    /// New contact number.
    pub contact: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New specialization.
    pub specialization: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New status.
    pub status: Option<InstructorStatus>,
}

impl Instructor {
    pub(crate) fn new(
        id: u32,
        name: String,
        contact: String,
        email: String,
        specialization: String,
    ) -> Self {
        Self {
            id,
            name,
            contact,
            email,
            specialization,
            location: UNSPECIFIED_LOCATION.to_string(),
            status: InstructorStatus::default(),
            assigned_course_id: None,
            assigned_since: Utc::now(),
        }
    }

    /// The numeric identifier, assigned at creation.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The instructor identifier, e.g. `INS0001`.
    #[must_use]
    pub const fn identifier(&self) -> Reference {
        Reference::new(Prefix::Instructor, self.id)
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact number.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Subject specialization.
    #[must_use]
    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    /// Office or campus location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Employment status.
    #[must_use]
    pub const fn status(&self) -> InstructorStatus {
        self.status
    }

    /// The course currently assigned, if any.
    ///
    /// The id is not checked against the catalog after assignment.
    #[must_use]
    pub const fn assigned_course_id(&self) -> Option<u32> {
        self.assigned_course_id
    }

    /// When the instructor record was created.
    #[must_use]
    pub const fn assigned_since(&self) -> DateTime<Utc> {
        self.assigned_since
    }

    pub(crate) fn apply(&mut self, update: InstructorUpdate) {
        replace_text(&mut self.name, update.name);
        replace_text(&mut self.contact, update.contact);
        replace_text(&mut self.email, update.email);
        replace_text(&mut self.specialization, update.specialization);
        replace_text(&mut self.location, update.location);
        replace(&mut self.status, update.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_instructor_has_defaults() {
        let instructor = Instructor::new(
            3,
            "Dr. Alice Brown".to_string(),
            "555-111-2222".to_string(),
            "alice.brown@university.edu".to_string(),
            "Programming".to_string(),
        );

        assert_eq!(instructor.identifier().to_string(), "INS0003");
        assert_eq!(instructor.status(), InstructorStatus::Active);
        assert_eq!(instructor.location(), UNSPECIFIED_LOCATION);
        assert_eq!(instructor.assigned_course_id(), None);
    }
}
