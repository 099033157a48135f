//! Error types for the course registration system.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during enrollment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EnrollmentError {
    /// No student is enrolled under this id.
    #[error("Student not found: {0}")]
    NotFound(String),

    /// The student has not completed every prerequisite of the course.
    #[error("Prerequisites not met for {course}: missing {}", .missing.join(", "))]
    PrerequisitesNotMet { course: String, missing: Vec<String> },

    /// The student's cumulative GPA is under the enrollment floor.
    #[error("GPA {gpa:.2} is below the minimum of {minimum:.2}")]
    GpaBelowMinimum { gpa: f64, minimum: f64 },

    /// The course code is not in the catalog and unknown courses are rejected.
    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    /// An error occurred while communicating with the registry actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(#[from] FrameworkError),
}
