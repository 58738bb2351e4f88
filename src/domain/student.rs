use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    reference::{Prefix, Reference},
    update::replace_text,
};

/// A student enrolled (or enrollable) at the institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub(crate) id: u32,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) created_at: DateTime<Utc>,
}

/// Replacement values for [`Student`] fields.
///
/// `None` or an empty string keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

impl Student {
    pub(crate) fn new(
        id: u32,
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            phone,
            created_at: Utc::now(),
        }
    }

    /// The numeric identifier, assigned at creation.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The student number, e.g. `STU0001`.
    #[must_use]
    pub const fn student_number(&self) -> Reference {
        Reference::new(Prefix::Student, self.id)
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// When the record was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether any searchable field contains `term`.
    ///
    /// `term` must already be lower-case. Names and email are compared
    /// case-insensitively; the phone number is compared as stored.
    pub(crate) fn matches(&self, term: &str) -> bool {
        self.name_matches(term)
            || self.email.to_lowercase().contains(term)
            || self.phone.contains(term)
    }

    /// Whether the first or last name contains the lower-case `term`.
    pub(crate) fn name_matches(&self, term: &str) -> bool {
        self.first_name.to_lowercase().contains(term) || self.last_name.to_lowercase().contains(term)
    }

    pub(crate) fn apply(&mut self, update: StudentUpdate) {
        replace_text(&mut self.first_name, update.first_name);
        replace_text(&mut self.last_name, update.last_name);
        replace_text(&mut self.email, update.email);
        replace_text(&mut self.phone, update.phone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Student {
        Student::new(
            1,
            "John".to_string(),
            "Doe".to_string(),
            "John.Doe@Email.com".to_string(),
            "555-123".to_string(),
        )
    }

    #[test]
    fn student_number_is_prefixed_and_padded() {
        assert_eq!(john().student_number().to_string(), "STU0001");
    }

    #[test]
    fn matches_names_and_email_case_insensitively() {
        let student = john();
        assert!(student.matches("joh"));
        assert!(student.matches("doe"));
        assert!(student.matches("email.com"));
        assert!(!student.matches("smith"));
    }

    #[test]
    fn matches_phone_by_substring() {
        assert!(john().matches("5-12"));
    }

    #[test]
    fn partial_update_keeps_unspecified_fields() {
        let mut student = john();
        student.apply(StudentUpdate {
            email: Some("jd@school.edu".to_string()),
            phone: Some(String::new()),
            ..StudentUpdate::default()
        });

        assert_eq!(student.first_name(), "John");
        assert_eq!(student.email(), "jd@school.edu");
        assert_eq!(student.phone(), "555-123");
    }
}
