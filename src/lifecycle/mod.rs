//! Runtime orchestration and lifecycle management.
//!
//! - [`RegistrySystem`] - Starts, wires and shuts down the registry actors
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod registry_system;
pub mod tracing;

pub use registry_system::*;
pub use self::tracing::*;
