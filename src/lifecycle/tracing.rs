//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the demo binary.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`. The output is the compact format with the
//! module path hidden (`with_target(false)`); the registry name travels as a
//! structured `registry` field instead.
//!
//! ```bash
//! # Admissions, enrollments and refusals
//! RUST_LOG=info cargo run
//!
//! # Every request with its full payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=registry_recipe::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: start, shutdown and the final registry size
//! - **Registry Operations**: Register, Get and Report requests
//! - **Decisions**: admissions, enrollments and the reason for each refusal
//!   (`reason`, `capacity`, `course` fields)
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started registry="HospitalSystem"
//! INFO Patient admitted patient_id="P001" staff_id="DOC001" role=doctor readmission=false
//! INFO Registered registry="HospitalSystem" new=true size=1
//! WARN Enrollment refused student_id="S002" course="CS201" reason=GPA 1.90 is below the minimum of 2.00
//! ```

/// Initializes the tracing subscriber from `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
