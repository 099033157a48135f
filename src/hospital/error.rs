//! Error types for the hospital registry.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during hospital operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HospitalError {
    /// No patient is registered under this id.
    #[error("Patient not found: {0}")]
    NotFound(String),

    /// The patient exists but the requester may not see their file.
    #[error("Access denied")]
    AccessDenied(String),

    /// Every bed is taken; only patients already registered can be re-admitted.
    #[error("Hospital at capacity ({capacity} patients)")]
    CapacityReached { capacity: usize },

    /// An error occurred while communicating with the registry actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(#[from] FrameworkError),
}
