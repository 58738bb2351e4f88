//! Status enumerations for enrollments, assignments and instructors.
//!
//! Transitions are unguarded: any status may be set from any other.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Error returned when text does not name a status.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown {kind} status '{value}': expected one of {expected}")]
pub struct UnknownStatus {
    kind: &'static str,
    value: String,
    expected: String,
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Every status, in menu order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the upper-case text of the status.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| UnknownStatus {
                        kind: $kind,
                        value: trimmed.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|status| status.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

status_enum! {
    /// Progress of a student's enrollment in a course.
    #[derive(Default)]
    EnrollmentStatus, "enrollment" {
        /// Awaiting approval (initial).
        #[default]
        Pending => "PENDING",
        /// Enrollment accepted.
        Approved => "APPROVED",
        /// Enrollment declined.
        Rejected => "REJECTED",
        /// Course finished.
        Completed => "COMPLETED",
    }
}

status_enum! {
    /// Progress of an assignment.
    #[derive(Default)]
    AssignmentStatus, "assignment" {
        /// Not yet submitted (initial).
        #[default]
        Pending => "PENDING",
        /// Handed in, awaiting a grade.
        Submitted => "SUBMITTED",
        /// A grade has been recorded.
        Graded => "GRADED",
        /// Past its due date without a submission.
        Overdue => "OVERDUE",
    }
}

status_enum! {
    /// Whether an instructor is currently teaching.
    #[derive(Default)]
    InstructorStatus, "instructor" {
        /// Teaching (initial).
        #[default]
        Active => "ACTIVE",
        /// Not currently teaching.
        Inactive => "INACTIVE",
    }
}
