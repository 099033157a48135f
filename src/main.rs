//! Demo entry point: admits a patient and enrolls a student through the
//! registry actors.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use chrono::NaiveDate;
use registry_recipe::config::SystemConfig;
use registry_recipe::hospital::Requester;
use registry_recipe::lifecycle::{setup_tracing, RegistrySystem};
use registry_recipe::model::{Course, Doctor, MedicalRecord, Nurse, Patient, Professor, StaffMember, Student};
use std::collections::BTreeMap;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting registry demo");

    let system = RegistrySystem::new(&config);

    hospital_demo(&system).instrument(tracing::info_span!("hospital")).await?;
    university_demo(&system).instrument(tracing::info_span!("university")).await?;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}

async fn hospital_demo(system: &RegistrySystem) -> Result<(), String> {
    let birth_date = NaiveDate::from_ymd_opt(1990, 5, 15).ok_or("invalid birth date")?;
    let record = MedicalRecord::builder("MR001")
        .patient_dna("DNA123")
        .allergies(["Penicillin"])
        .medical_history(["Surgery 2020"])
        .birth_date(birth_date)
        .blood_type("O+")
        .build()
        .map_err(|e| e.to_string())?;

    let mut patient = Patient::new("P001", "John Doe", "Jane Doe", "INS123", record);
    patient.set_room_number(101);
    patient.set_attending_physician("DOC001");

    let doctor: StaffMember = Doctor::new("DOC001", "Cardiology", ["Board Certified"]).into();
    let nurse: StaffMember = Nurse::new("N001", "Day", ["RN", "CPR"]).into();

    let client = &system.hospital_client;
    client
        .admit_patient(patient.clone(), doctor)
        .await
        .map_err(|e| e.to_string())?;

    info!(info = %patient.public_info(), "Patient admitted");
    info!(
        allergic = patient.medical_record().is_allergic_to("penicillin"),
        "Allergy check: penicillin"
    );
    let nurse_view = client.patient_info_text("P001", nurse.into()).await;
    let visitor_view = client.patient_info_text("P001", Requester::visitor("Jane Doe")).await;
    let missing = client.patient_info_text("P404", Requester::visitor("Jane Doe")).await;
    info!(%nurse_view, %visitor_view, %missing, "Patient info queries");
    Ok(())
}

async fn university_demo(system: &RegistrySystem) -> Result<(), String> {
    let cs201 = Course::new("CS201", "Data Structures", 3, ["CS101"]);
    let professor = Professor::new("P001", "Computer Science", ["PhD", "Industry Experience"]);
    info!(
        course = cs201.course_code(),
        title = cs201.title(),
        instructor = professor.faculty_id(),
        department = professor.department(),
        "Course offered"
    );

    let completed = BTreeMap::from([("CS101".to_string(), "A".to_string())]);
    let mut student = Student::with_transfer_credits("S001", "Aarav", completed, 3.8);
    student.set_email("student@university.edu");

    let client = &system.registrar_client;
    let enrolled = client.enroll_student(student.clone(), cs201.clone()).await;
    info!(
        enrolled = enrolled.is_ok(),
        prerequisites_met = student.academic_record().meets_prerequisites("CS201"),
        standing = %student.academic_standing(),
        "Enrollment attempted"
    );

    let struggling = Student::with_transfer_credits(
        "S002",
        "Noor",
        BTreeMap::from([("CS101".to_string(), "D".to_string())]),
        1.9,
    );
    if let Err(e) = client.enroll_student(struggling, cs201).await {
        info!(reason = %e, "Second enrollment refused");
    }

    match client.enrollment_report("S001").await {
        Ok(report) => info!(%report, "Enrollment report"),
        Err(e) => error!(error = %e, "Enrollment report failed"),
    }
    Ok(())
}
