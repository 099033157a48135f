//! Course enrollment: the registration facade and its actor.

pub mod error;

pub use error::*;

use std::collections::HashMap;
use tracing::{info, warn};

use crate::clients::RegistrarClient;
use crate::config::{RegistrationConfig, UnknownCoursePolicy};
use crate::framework::{Registration, RegistryActor, RegistryFacade};
use crate::model::{Course, PrerequisiteTable, Student};

/// Result of a successful enrollment.
pub type Enrollment = Registration<Student>;

/// The registrar's enrollment registry.
///
/// A student is accepted into a course when every prerequisite in the
/// catalog is completed and their GPA meets the configured floor.
/// Prerequisites are checked first, so a student failing both gets the
/// prerequisite error.
#[derive(Debug, Default)]
pub struct RegistrationSystem {
    config: RegistrationConfig,
    catalog: PrerequisiteTable,
    enrolled: HashMap<String, Student>,
}

impl RegistrationSystem {
    pub fn new(config: RegistrationConfig) -> Self {
        Self::with_catalog(config, PrerequisiteTable::standard())
    }

    pub fn with_catalog(config: RegistrationConfig, catalog: PrerequisiteTable) -> Self {
        Self {
            config,
            catalog,
            enrolled: HashMap::new(),
        }
    }

    /// Validates `student` against `course` and records the enrollment.
    ///
    /// Enrolling an id again replaces the stored student.
    pub fn enroll(&mut self, student: Student, course: &Course) -> Result<Enrollment, EnrollmentError> {
        let student_id = student.student_id().to_string();
        let course_code = course.course_code();

        if let Err(e) = self.check_eligibility(&student, course_code) {
            warn!(%student_id, course = course_code, reason = %e, "Enrollment refused");
            return Err(e);
        }

        let outcome = Registration::from(self.enrolled.insert(student_id.clone(), student));
        info!(%student_id, course = course_code, new = outcome.is_new(), "Student enrolled");
        Ok(outcome)
    }

    fn check_eligibility(&self, student: &Student, course_code: &str) -> Result<(), EnrollmentError> {
        if self.config.unknown_course_policy == UnknownCoursePolicy::Reject && !self.catalog.is_known(course_code) {
            return Err(EnrollmentError::UnknownCourse(course_code.to_string()));
        }

        let record = student.academic_record();
        let missing = record.missing_prerequisites(course_code, &self.catalog);
        if !missing.is_empty() {
            return Err(EnrollmentError::PrerequisitesNotMet {
                course: course_code.to_string(),
                missing,
            });
        }

        // NaN fails every comparison; it counts as below the floor
        let gpa = record.cumulative_gpa();
        if gpa.is_nan() || gpa < self.config.min_gpa {
            return Err(EnrollmentError::GpaBelowMinimum {
                gpa,
                minimum: self.config.min_gpa,
            });
        }
        Ok(())
    }

    /// `Student: <contact info>, Standing: <standing>` for an enrolled student.
    pub fn enrollment_report(&self, student_id: &str) -> Result<String, EnrollmentError> {
        let student = self
            .enrolled
            .get(student_id)
            .ok_or_else(|| EnrollmentError::NotFound(student_id.to_string()))?;
        Ok(format!(
            "Student: {}, Standing: {}",
            student.contact_info(),
            student.academic_standing()
        ))
    }

    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.enrolled.get(student_id)
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }
}

impl RegistryFacade for RegistrationSystem {
    type Id = String;
    type Entry = Student;
    type Credential = Course;
    type Viewer = ();
    type Report = String;
    type Error = EnrollmentError;

    fn register(&mut self, entry: Student, credential: &Course) -> Result<Enrollment, EnrollmentError> {
        self.enroll(entry, credential)
    }

    fn lookup(&self, id: &String) -> Option<&Student> {
        self.student(id)
    }

    fn report(&self, id: &String, _viewer: &()) -> Result<String, EnrollmentError> {
        self.enrollment_report(id)
    }

    fn len(&self) -> usize {
        self.enrolled_count()
    }
}

/// Creates a registration actor and its client.
pub fn new(config: RegistrationConfig, buffer_size: usize) -> (RegistryActor<RegistrationSystem>, RegistrarClient) {
    let (actor, generic_client) = RegistryActor::new(buffer_size, RegistrationSystem::new(config));
    (actor, RegistrarClient::new(generic_client))
}
