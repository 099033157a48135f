use chrono::NaiveDate;
use registry_recipe::clients::{actor_client::ActorClient, HospitalClient, RegistrarClient};
use registry_recipe::framework::{mock::MockClient, FrameworkError, Registration};
use registry_recipe::hospital::{HospitalError, HospitalSystem, Requester};
use registry_recipe::model::{MedicalRecord, Nurse, Patient};
use registry_recipe::university::{EnrollmentError, RegistrationSystem};

fn patient(id: &str) -> Patient {
    let record = MedicalRecord::builder("MR001")
        .patient_dna("DNA123")
        .birth_date(NaiveDate::from_ymd_opt(1985, 1, 2).unwrap())
        .blood_type("AB-")
        .build()
        .unwrap();
    Patient::with_record(id, record, "Mary Major")
}

/// Client-level test: HospitalClient against a mocked registry.
/// Exercises the client's request mapping without a real facade.
#[tokio::test]
async fn test_hospital_client_with_mocked_registry() {
    let mut mock = MockClient::<HospitalSystem>::new();
    mock.expect_register().return_ok(Registration::New);
    mock.expect_report("P001".to_string())
        .return_ok("Patient ID: P001, Name: Mary Major, Room: unassigned, Doctor: unassigned".to_string());
    mock.expect_report("P001".to_string())
        .return_err(HospitalError::AccessDenied("P001".to_string()));
    mock.expect_get("P002".to_string()).return_entry(None);

    let client = HospitalClient::new(mock.client());
    let nurse = Nurse::new("N001", "Night", ["RN"]);

    let outcome = client.admit_patient(patient("P001"), nurse.clone().into()).await;
    assert_eq!(outcome, Ok(Registration::New));

    let info = client.patient_info("P001", Requester::Staff(nurse.into())).await.unwrap();
    assert!(info.starts_with("Patient ID: P001"));

    let text = client.patient_info_text("P001", Requester::visitor("Jane Doe")).await;
    assert_eq!(text, "Access denied");

    assert_eq!(client.get("P002".to_string()).await.unwrap(), None);

    mock.verify();
}

/// The registrar client surfaces facade errors unchanged.
#[tokio::test]
async fn test_registrar_client_with_mocked_registry() {
    let mut mock = MockClient::<RegistrationSystem>::new();
    mock.expect_report("S001".to_string())
        .return_err(EnrollmentError::NotFound("S001".to_string()));

    let client = RegistrarClient::new(mock.client());
    let err = client.enrollment_report("S001").await.unwrap_err();
    assert_eq!(err.to_string(), "Student not found: S001");

    mock.verify();
}

/// A client whose actor is gone reports a transport error, not a denial.
#[tokio::test]
async fn test_client_after_actor_stopped() {
    let (actor, client) = registry_recipe::hospital::new(Default::default(), 4);
    drop(actor);
    let err = client.count().await.unwrap_err();
    assert_eq!(err, HospitalError::ActorCommunication(FrameworkError::ActorClosed));
}
