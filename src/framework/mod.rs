//! Generic registry framework.
//!
//! This module provides the pieces shared by the hospital and university
//! registries: the facade contract, the actor that hosts a facade, and the
//! client used to talk to it.
//!
//! # Main Components
//!
//! - [`RegistryFacade`] - Trait the synchronous facades implement
//! - [`RegistryActor`] - Runs a facade in its own task
//! - [`RegistryClient`] - Type-safe handle for sending requests
//! - [`FrameworkError`] - Transport errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
