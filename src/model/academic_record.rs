use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::PrerequisiteTable;

/// Immutable academic history of one student.
///
/// `completed_courses` maps course code to the grade earned. Collection
/// accessors return copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicRecord {
    student_id: String,
    major: String,
    enrollment_date: NaiveDate,
    completed_courses: BTreeMap<String, String>,
    cumulative_gpa: f64,
    academic_honors: Vec<String>,
}

impl AcademicRecord {
    pub fn new<H, S>(
        student_id: impl Into<String>,
        major: impl Into<String>,
        enrollment_date: NaiveDate,
        completed_courses: BTreeMap<String, String>,
        cumulative_gpa: f64,
        academic_honors: H,
    ) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            student_id: student_id.into(),
            major: major.into(),
            enrollment_date,
            completed_courses,
            cumulative_gpa,
            academic_honors: academic_honors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    pub fn completed_courses(&self) -> BTreeMap<String, String> {
        self.completed_courses.clone()
    }

    pub fn cumulative_gpa(&self) -> f64 {
        self.cumulative_gpa
    }

    pub fn academic_honors(&self) -> Vec<String> {
        self.academic_honors.clone()
    }

    pub fn has_completed(&self, course_code: &str) -> bool {
        self.completed_courses.contains_key(course_code)
    }

    /// True when every prerequisite of `course_code` in the standard catalog
    /// has been completed. Courses outside the catalog have no prerequisites.
    pub fn meets_prerequisites(&self, course_code: &str) -> bool {
        self.missing_prerequisites(course_code, &PrerequisiteTable::standard())
            .is_empty()
    }

    /// Prerequisites of `course_code` in `table` that are not completed yet.
    pub fn missing_prerequisites(&self, course_code: &str, table: &PrerequisiteTable) -> Vec<String> {
        table
            .prerequisites_for(course_code)
            .iter()
            .filter(|code| !self.has_completed(code))
            .map(|code| code.to_string())
            .collect()
    }
}
