use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::update::replace_text;

/// Letter classification of a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// 90 and above.
    A,
    /// 80 up to 90.
    B,
    /// 70 up to 80.
    C,
    /// 60 up to 70.
    D,
    /// Below 60.
    F,
}

impl LetterGrade {
    /// Every letter, best first.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    /// Classify a score.
    ///
    /// Thresholds are inclusive lower bounds. Scores that compare below every
    /// threshold, including `NaN`, are an `F`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::A
        } else if score >= 80.0 {
            Self::B
        } else if score >= 70.0 {
            Self::C
        } else if score >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// The letter as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score awarded to a student for an assignment.
///
/// The letter grade is derived from the score whenever the score is written,
/// and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredGrade")]
pub struct Grade {
    pub(crate) id: u32,
    pub(crate) student_id: u32,
    pub(crate) assignment_id: u32,
    score: f64,
    letter: LetterGrade,
    pub(crate) comments: String,
    pub(crate) created_at: DateTime<Utc>,
}

/// The deserialized form of a [`Grade`].
///
/// Any stored letter is ignored and derived again from the score.
#[derive(Deserialize)]
struct StoredGrade {
    id: u32,
    student_id: u32,
    assignment_id: u32,
    score: f64,
    comments: String,
    created_at: DateTime<Utc>,
}

impl From<StoredGrade> for Grade {
    fn from(stored: StoredGrade) -> Self {
        Self {
            id: stored.id,
            student_id: stored.student_id,
            assignment_id: stored.assignment_id,
            score: stored.score,
            letter: LetterGrade::from_score(stored.score),
            comments: stored.comments,
            created_at: stored.created_at,
        }
    }
}

/// Replacement values for [`Grade`] fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeUpdate {
    /// New score; the letter grade follows.
    pub score: Option<f64>,
    /// New comments.
    pub comments: Option<String>,
}

impl Grade {
    pub(crate) fn new(
        id: u32,
        student_id: u32,
        assignment_id: u32,
        score: f64,
        comments: String,
    ) -> Self {
        Self {
            id,
            student_id,
            assignment_id,
            score,
            letter: LetterGrade::from_score(score),
            comments,
            created_at: Utc::now(),
        }
    }

    /// The numeric identifier, assigned at creation.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The graded student's id.
    #[must_use]
    pub const fn student_id(&self) -> u32 {
        self.student_id
    }

    /// The graded assignment's id.
    #[must_use]
    pub const fn assignment_id(&self) -> u32 {
        self.assignment_id
    }

    /// The numeric score.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// The letter derived from the current score.
    #[must_use]
    pub const fn letter(&self) -> LetterGrade {
        self.letter
    }

    /// Grader's comments.
    #[must_use]
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// When the grade was recorded.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the score and re-derive the letter grade.
    pub fn set_score(&mut self, score: f64) {
        self.score = score;
        self.letter = LetterGrade::from_score(score);
    }

    pub(crate) fn apply(&mut self, update: GradeUpdate) {
        if let Some(score) = update.score {
            self.set_score(score);
        }
        replace_text(&mut self.comments, update.comments);
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(100.0, LetterGrade::A; "perfect")]
    #[test_case(90.0, LetterGrade::A; "a boundary")]
    #[test_case(89.999, LetterGrade::B; "just below a")]
    #[test_case(80.0, LetterGrade::B; "b boundary")]
    #[test_case(79.999, LetterGrade::C; "just below b")]
    #[test_case(70.0, LetterGrade::C; "c boundary")]
    #[test_case(69.999, LetterGrade::D; "just below c")]
    #[test_case(60.0, LetterGrade::D; "d boundary")]
    #[test_case(59.999, LetterGrade::F; "just below d")]
    #[test_case(0.0, LetterGrade::F; "zero")]
    #[test_case(-5.0, LetterGrade::F; "negative")]
    #[test_case(150.0, LetterGrade::A; "above range")]
    #[test_case(f64::NAN, LetterGrade::F; "not a number")]
    fn letter_boundaries(score: f64, expected: LetterGrade) {
        assert_eq!(LetterGrade::from_score(score), expected);
    }

    #[test]
    fn set_score_rederives_letter() {
        let mut grade = Grade::new(1, 1, 1, 92.5, "Excellent".to_string());
        assert_eq!(grade.letter(), LetterGrade::A);

        grade.set_score(61.0);
        assert_eq!(grade.letter(), LetterGrade::D);

        grade.set_score(79.999);
        assert_eq!(grade.letter(), LetterGrade::C);
    }

    #[test]
    fn deserializing_rederives_letter() {
        let json = r#"{
            "id": 4,
            "student_id": 2,
            "assignment_id": 1,
            "score": 71.5,
            "letter": "A",
            "comments": "",
            "created_at": "2024-09-01T10:00:00Z"
        }"#;

        let grade: Grade = serde_json::from_str(json).unwrap();
        assert_eq!(grade.letter(), LetterGrade::C);
    }

    #[test]
    fn update_without_score_keeps_letter() {
        let mut grade = Grade::new(1, 1, 1, 85.0, "Good".to_string());
        grade.apply(GradeUpdate {
            score: None,
            comments: Some("Very good".to_string()),
        });

        assert_eq!(grade.letter(), LetterGrade::B);
        assert_eq!(grade.comments(), "Very good");
    }
}
