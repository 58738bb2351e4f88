use std::{fmt, str::FromStr};

/// The number of digits a reference id is padded to.
pub const DIGITS: usize = 4;

/// The three-letter prefix of a reference string.
///
/// Courses and grades have no prefix; courses carry a user-supplied code and
/// grades are only ever addressed by their numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prefix {
    /// `STU`
    Student,
    /// `INS`
    Instructor,
    /// `ENR`
    Enrollment,
    /// `ASS`
    Assignment,
}

impl Prefix {
    /// Every prefix, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Student,
        Self::Instructor,
        Self::Enrollment,
        Self::Assignment,
    ];

    /// Returns the three-letter prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STU",
            Self::Instructor => "INS",
            Self::Enrollment => "ENR",
            Self::Assignment => "ASS",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A human-readable reference for a record.
///
/// Format: `{PREFIX}{ID}`, where the id is zero-padded to [`DIGITS`] digits.
/// Ids that need more digits are printed in full.
///
/// Examples: `STU0001`, `ENR0042`, `ASS12345`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reference {
    prefix: Prefix,
    id: u32,
}

impl Reference {
    /// Create a reference from its parts.
    #[must_use]
    pub const fn new(prefix: Prefix, id: u32) -> Self {
        Self { prefix, id }
    }

    /// Returns the prefix.
    #[must_use]
    pub const fn prefix(&self) -> Prefix {
        self.prefix
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns a displayable representation with the specified digit width.
    ///
    /// # Examples
    ///
    /// ```
    /// use edurec::{Prefix, Reference};
    ///
    /// let reference = Reference::new(Prefix::Student, 42);
    ///
    /// assert_eq!(reference.display(4).to_string(), "STU0042");
    /// assert_eq!(reference.display(2).to_string(), "STU42");
    /// ```
    #[must_use]
    pub const fn display(&self, digits: usize) -> FormattedReference<'_> {
        FormattedReference {
            reference: self,
            digits,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.display(DIGITS).fmt(f)
    }
}

/// A wrapper type that formats a [`Reference`] with a specified digit width.
#[derive(Debug, Clone, Copy)]
pub struct FormattedReference<'a> {
    reference: &'a Reference,
    digits: usize,
}

impl fmt::Display for FormattedReference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.reference.prefix,
            self.reference.id,
            width = self.digits
        )
    }
}

/// Errors that can occur when parsing a reference string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The text does not start with a known prefix.
    #[error("Invalid reference '{0}': expected one of STU, INS, ENR or ASS followed by a number")]
    Prefix(String),

    /// The text after the prefix is not a number.
    #[error("Invalid id in reference '{0}': expected a positive integer, got '{1}'")]
    Id(String, String),

    /// Ids start at 1.
    #[error("Invalid reference '{0}': id cannot be zero")]
    ZeroId(String),
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();

        let prefix = Prefix::ALL
            .into_iter()
            .find(|prefix| upper.starts_with(prefix.as_str()))
            .ok_or_else(|| Error::Prefix(trimmed.to_string()))?;

        let digits = &upper[prefix.as_str().len()..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Id(trimmed.to_string(), digits.to_string()));
        }

        let id: u32 = digits
            .parse()
            .map_err(|_| Error::Id(trimmed.to_string(), digits.to_string()))?;
        if id == 0 {
            return Err(Error::ZeroId(trimmed.to_string()));
        }

        Ok(Self::new(prefix, id))
    }
}

impl TryFrom<&str> for Reference {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(Prefix::Student, 1, "STU0001"; "student id 1")]
    #[test_case(Prefix::Instructor, 42, "INS0042"; "instructor id 42")]
    #[test_case(Prefix::Enrollment, 9999, "ENR9999"; "enrollment at boundary")]
    #[test_case(Prefix::Assignment, 10000, "ASS10000"; "assignment expansion")]
    #[test_case(Prefix::Student, 123_456, "STU123456"; "six digits")]
    fn default_display_pads_to_four_digits(prefix: Prefix, id: u32, expected: &str) {
        assert_eq!(Reference::new(prefix, id).to_string(), expected);
    }

    #[test_case(2, 1, "STU01"; "2 digits id 1")]
    #[test_case(3, 42, "STU042"; "3 digits id 42")]
    #[test_case(5, 7, "STU00007"; "5 digits id 7")]
    #[test_case(1, 100, "STU100"; "narrow width expands")]
    fn display_with_explicit_width(digits: usize, id: u32, expected: &str) {
        let reference = Reference::new(Prefix::Student, id);
        assert_eq!(reference.display(digits).to_string(), expected);
    }

    #[test]
    fn parses_padded_and_unpadded_forms() {
        let reference: Reference = "ENR0007".parse().unwrap();
        assert_eq!(reference.prefix(), Prefix::Enrollment);
        assert_eq!(reference.id(), 7);

        let reference: Reference = "ins12".parse().unwrap();
        assert_eq!(reference.prefix(), Prefix::Instructor);
        assert_eq!(reference.id(), 12);

        let reference = Reference::try_from(" ASS10001 ").unwrap();
        assert_eq!(reference.prefix(), Prefix::Assignment);
        assert_eq!(reference.id(), 10001);
    }

    #[test]
    fn parse_round_trips_display() {
        for prefix in Prefix::ALL {
            let reference = Reference::new(prefix, 305);
            assert_eq!(reference.to_string().parse::<Reference>(), Ok(reference));
        }
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert_eq!(
            "CRS0001".parse::<Reference>(),
            Err(Error::Prefix("CRS0001".to_string()))
        );
        assert!(matches!("".parse::<Reference>(), Err(Error::Prefix(_))));
    }

    #[test]
    fn rejects_missing_or_malformed_id() {
        assert_eq!(
            "STU".parse::<Reference>(),
            Err(Error::Id("STU".to_string(), String::new()))
        );
        assert_eq!(
            "STU-001".parse::<Reference>(),
            Err(Error::Id("STU-001".to_string(), "-001".to_string()))
        );
        assert!(matches!(
            "STU99999999999".parse::<Reference>(),
            Err(Error::Id(..))
        ));
    }

    #[test]
    fn rejects_zero_id() {
        assert_eq!(
            "STU0000".parse::<Reference>(),
            Err(Error::ZeroId("STU0000".to_string()))
        );
    }
}
