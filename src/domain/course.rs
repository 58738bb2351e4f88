use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::update::{replace, replace_text};

/// A course offered by a department.
///
/// Courses have no generated reference string; the user-supplied
/// [`code`](Self::code) plays that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub(crate) id: u32,
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) credits: u32,
    pub(crate) department: String,
    pub(crate) created_at: DateTime<Utc>,
}

/// Replacement values for [`Course`] fields.
///
/// The course code is fixed at creation and cannot be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseUpdate {
    /// New course name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New credit value.
    pub credits: Option<u32>,
    /// New department.
    pub department: Option<String>,
}

impl Course {
    pub(crate) fn new(
        id: u32,
        code: String,
        name: String,
        description: String,
        credits: u32,
        department: String,
    ) -> Self {
        Self {
            id,
            code,
            name,
            description,
            credits,
            department,
            created_at: Utc::now(),
        }
    }

    /// The numeric identifier, assigned at creation.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The course code, e.g. `CS101`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Credit value.
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// Owning department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// When the record was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the name, code or department contains the lower-case `term`.
    pub(crate) fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self.code.to_lowercase().contains(term)
            || self.department.to_lowercase().contains(term)
    }

    pub(crate) fn apply(&mut self, update: CourseUpdate) {
        replace_text(&mut self.name, update.name);
        replace_text(&mut self.description, update.description);
        replace(&mut self.credits, update.credits);
        replace_text(&mut self.department, update.department);
    }
}
