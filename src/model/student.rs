use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::AcademicRecord;

/// GPA at or above which a student makes the Dean's List.
pub const DEANS_LIST_GPA: f64 = 3.5;
/// GPA below which a student is on academic probation.
pub const GOOD_STANDING_GPA: f64 = 2.0;

/// A student and the academic record created with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    student_id: String,
    academic_record: AcademicRecord,
    name: String,
    email: Option<String>,
    phone_number: Option<String>,
    current_address: Option<String>,
}

impl Student {
    /// A freshly admitted student: no completed courses, GPA 0.0, enrolled today.
    pub fn new(student_id: impl Into<String>, name: impl Into<String>, major: impl Into<String>) -> Self {
        let student_id = student_id.into();
        let record = fresh_record(&student_id, major.into(), BTreeMap::new(), 0.0);
        Self::with_academic_record(student_id, name, record)
    }

    /// A transfer student whose credits carry over. The major starts as
    /// `Undeclared`.
    pub fn with_transfer_credits(
        student_id: impl Into<String>,
        name: impl Into<String>,
        transfer_credits: BTreeMap<String, String>,
        gpa: f64,
    ) -> Self {
        let student_id = student_id.into();
        let record = fresh_record(&student_id, "Undeclared".to_string(), transfer_credits, gpa);
        Self::with_academic_record(student_id, name, record)
    }

    /// A graduate student continuing from an undergraduate record. Completed
    /// courses and GPA carry over; honors do not.
    pub fn from_undergraduate(
        student_id: impl Into<String>,
        name: impl Into<String>,
        major: impl Into<String>,
        undergraduate: &AcademicRecord,
    ) -> Self {
        let student_id = student_id.into();
        let record = fresh_record(
            &student_id,
            major.into(),
            undergraduate.completed_courses(),
            undergraduate.cumulative_gpa(),
        );
        Self::with_academic_record(student_id, name, record)
    }

    fn with_academic_record(student_id: String, name: impl Into<String>, academic_record: AcademicRecord) -> Self {
        Self {
            student_id,
            academic_record,
            name: name.into(),
            email: None,
            phone_number: None,
            current_address: None,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn academic_record(&self) -> &AcademicRecord {
        &self.academic_record
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn current_address(&self) -> Option<&str> {
        self.current_address.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = Some(phone_number.into());
    }

    pub fn set_current_address(&mut self, address: impl Into<String>) {
        self.current_address = Some(address.into());
    }

    pub fn academic_standing(&self) -> AcademicStanding {
        AcademicStanding::from_gpa(self.academic_record.cumulative_gpa())
    }

    /// `Name: .., Email: .., Phone: ..`
    pub fn contact_info(&self) -> String {
        format!(
            "Name: {}, Email: {}, Phone: {}",
            self.name,
            self.email.as_deref().unwrap_or(NOT_PROVIDED),
            self.phone_number.as_deref().unwrap_or(NOT_PROVIDED),
        )
    }
}

const NOT_PROVIDED: &str = "not provided";

fn fresh_record(
    student_id: &str,
    major: String,
    completed_courses: BTreeMap<String, String>,
    gpa: f64,
) -> AcademicRecord {
    AcademicRecord::new(
        student_id,
        major,
        Utc::now().date_naive(),
        completed_courses,
        gpa,
        Vec::<String>::new(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicStanding {
    DeansList,
    GoodStanding,
    AcademicProbation,
}

impl AcademicStanding {
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= DEANS_LIST_GPA {
            AcademicStanding::DeansList
        } else if gpa >= GOOD_STANDING_GPA {
            AcademicStanding::GoodStanding
        } else {
            AcademicStanding::AcademicProbation
        }
    }
}

impl fmt::Display for AcademicStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AcademicStanding::DeansList => "Dean's List",
            AcademicStanding::GoodStanding => "Good Standing",
            AcademicStanding::AcademicProbation => "Academic Probation",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn credits(codes: &[&str]) -> BTreeMap<String, String> {
        codes.iter().map(|c| (c.to_string(), "A".to_string())).collect()
    }

    #[test]
    fn test_new_student_starts_empty() {
        let student = Student::new("S001", "Aarav", "Physics");
        let record = student.academic_record();
        assert_eq!(record.student_id(), "S001");
        assert_eq!(record.major(), "Physics");
        assert_eq!(record.cumulative_gpa(), 0.0);
        assert!(record.completed_courses().is_empty());
        assert_eq!(student.academic_standing(), AcademicStanding::AcademicProbation);
    }

    #[test]
    fn test_transfer_student_is_undeclared() {
        let student = Student::with_transfer_credits("S002", "Bea", credits(&["CS101"]), 3.8);
        assert_eq!(student.academic_record().major(), "Undeclared");
        assert!(student.academic_record().meets_prerequisites("CS201"));
        assert_eq!(student.academic_standing(), AcademicStanding::DeansList);
    }

    #[test]
    fn test_graduate_student_carries_courses_not_honors() {
        let undergraduate = AcademicRecord::new(
            "U100",
            "Mathematics",
            NaiveDate::from_ymd_opt(2019, 9, 1).unwrap(),
            credits(&["MATH201", "MATH202"]),
            3.1,
            ["Summa Cum Laude"],
        );
        let student = Student::from_undergraduate("G001", "Chen", "Statistics", &undergraduate);
        let record = student.academic_record();
        assert_eq!(record.student_id(), "G001");
        assert_eq!(record.major(), "Statistics");
        assert_eq!(record.cumulative_gpa(), 3.1);
        assert!(record.meets_prerequisites("MATH301"));
        assert!(record.academic_honors().is_empty());
    }

    #[test]
    fn test_contact_info() {
        let mut student = Student::new("S001", "Aarav", "CS");
        assert_eq!(student.contact_info(), "Name: Aarav, Email: not provided, Phone: not provided");

        student.set_email("student@university.edu");
        student.set_phone_number("555-0100");
        student.set_current_address("12 College Rd");
        assert_eq!(
            student.contact_info(),
            "Name: Aarav, Email: student@university.edu, Phone: 555-0100"
        );
        assert_eq!(student.current_address(), Some("12 College Rd"));
    }

    #[test]
    fn test_standing_thresholds() {
        assert_eq!(AcademicStanding::from_gpa(3.5), AcademicStanding::DeansList);
        assert_eq!(AcademicStanding::from_gpa(3.49), AcademicStanding::GoodStanding);
        assert_eq!(AcademicStanding::from_gpa(2.0), AcademicStanding::GoodStanding);
        assert_eq!(AcademicStanding::from_gpa(1.99), AcademicStanding::AcademicProbation);
        assert_eq!(AcademicStanding::DeansList.to_string(), "Dean's List");
    }
}
