//! The course catalog's prerequisite table.

/// Static mapping from course code to the codes that must be completed first.
///
/// A code listed with no prerequisites is still *known*; that matters when the
/// registrar is configured to reject unknown courses.
#[derive(Debug, Clone, Copy)]
pub struct PrerequisiteTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

const STANDARD: &[(&str, &[&str])] = &[
    ("CS101", &[]),
    ("CS201", &["CS101"]),
    ("MATH201", &[]),
    ("MATH202", &[]),
    ("MATH301", &["MATH201", "MATH202"]),
];

impl PrerequisiteTable {
    /// The university's catalog.
    pub const fn standard() -> Self {
        Self { entries: STANDARD }
    }

    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Prerequisites of `course_code`. Unknown codes have none.
    pub fn prerequisites_for(&self, course_code: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(code, _)| *code == course_code)
            .map(|(_, prereqs)| *prereqs)
            .unwrap_or(&[])
    }

    pub fn is_known(&self, course_code: &str) -> bool {
        self.entries.iter().any(|(code, _)| *code == course_code)
    }
}

impl Default for PrerequisiteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = PrerequisiteTable::standard();
        assert_eq!(table.prerequisites_for("CS201"), &["CS101"]);
        assert_eq!(table.prerequisites_for("MATH301"), &["MATH201", "MATH202"]);
        assert!(table.prerequisites_for("CS101").is_empty());
        assert!(table.is_known("CS101"));
    }

    #[test]
    fn test_unknown_codes_have_no_prerequisites() {
        let table = PrerequisiteTable::standard();
        assert!(table.prerequisites_for("ART100").is_empty());
        assert!(!table.is_known("ART100"));
        // codes match exactly
        assert!(!table.is_known("cs201"));
    }
}
