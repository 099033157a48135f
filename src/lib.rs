//! # Registry Recipe
//!
//! > **Two small registries, one pattern.**
//!
//! This crate models a hospital patient registry and a university course
//! registrar. Both follow the same recipe: an immutable *record* owned by a
//! mutable *person*, a *facade* that validates the person against a
//! counterpart before inserting it into an owned map, and a typed query.
//!
//! ## 🏗️ Design
//!
//! ### Closed role sets instead of runtime type checks
//! Only a [`StaffMember`](model::StaffMember) (doctor, nurse or administrator)
//! can admit a patient and only a [`Course`](model::Course) can be enrolled
//! in. Passing anything else does not compile.
//!
//! ### Errors say what happened
//! Construction failures ([`RecordError`](model::RecordError)), denials and
//! not-found are all distinct variants of
//! [`HospitalError`](hospital::HospitalError) /
//! [`EnrollmentError`](university::EnrollmentError). Nothing is signaled by a
//! bare `false` or a magic string; the errors' `Display` text still gives the
//! familiar "Access denied" / "Student not found" messages.
//!
//! ### Last write wins
//! Registering an id twice replaces the stored person. The caller learns about
//! it through [`Registration::Replaced`](framework::Registration::Replaced).
//!
//! ### Sharing a registry
//! The facades are plain synchronous values. To share one across tasks, host
//! it in a [`RegistryActor`](framework::RegistryActor): requests are processed
//! one at a time, so no caller ever sees a half-registered person.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: records, people, staff and campus resources.
//! - [`hospital`]: [`HospitalSystem`](hospital::HospitalSystem), admission and patient info.
//! - [`university`]: [`RegistrationSystem`](university::RegistrationSystem), enrollment and reports.
//! - [`framework`]: the facade trait, the generic actor and client, plus test mocks.
//! - [`clients`]: [`HospitalClient`](clients::HospitalClient) and [`RegistrarClient`](clients::RegistrarClient).
//! - [`lifecycle`]: [`RegistrySystem`](lifecycle::RegistrySystem) and tracing setup.
//! - [`config`]: capacities, GPA floor and the unknown-course policy.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod hospital;
pub mod lifecycle;
pub mod model;
pub mod university;
