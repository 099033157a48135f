//! Patient admission: the hospital registry facade and its actor.

pub mod error;

pub use error::*;

use std::collections::HashMap;
use tracing::{info, warn};

use crate::clients::HospitalClient;
use crate::config::HospitalConfig;
use crate::framework::{Registration, RegistryActor, RegistryFacade};
use crate::model::{Patient, StaffMember};

/// Result of a successful admission.
pub type Admission = Registration<Patient>;

/// Whoever is asking to read a patient's file.
#[derive(Debug, Clone, PartialEq)]
pub enum Requester {
    Staff(StaffMember),
    /// Family, the patient themselves, anyone who is not staff.
    Visitor { name: String },
}

impl Requester {
    pub fn visitor(name: impl Into<String>) -> Self {
        Requester::Visitor { name: name.into() }
    }

    /// Any staff role grants access. Administrator permission lists are not
    /// consulted.
    pub fn has_clinical_access(&self) -> bool {
        matches!(self, Requester::Staff(_))
    }
}

impl From<StaffMember> for Requester {
    fn from(staff: StaffMember) -> Self {
        Requester::Staff(staff)
    }
}

/// The hospital's patient registry.
///
/// Owns the id → patient map for its whole lifetime. Admission is only
/// possible through a [`StaffMember`], so the role check happens in the type
/// system; reading a file is checked at runtime against a [`Requester`].
#[derive(Debug, Default)]
pub struct HospitalSystem {
    config: HospitalConfig,
    patients: HashMap<String, Patient>,
}

impl HospitalSystem {
    pub fn new(config: HospitalConfig) -> Self {
        Self {
            config,
            patients: HashMap::new(),
        }
    }

    /// Admits `patient` on the authority of `staff`.
    ///
    /// Re-admitting an id that is already registered replaces the stored
    /// patient and returns the old one in [`Registration::Replaced`].
    ///
    /// # Errors
    /// [`HospitalError::CapacityReached`] when a capacity is configured, the
    /// patient is new and the hospital is full. Without a capacity admission
    /// by any staff member always succeeds.
    pub fn admit(&mut self, patient: Patient, staff: &StaffMember) -> Result<Admission, HospitalError> {
        let patient_id = patient.patient_id().to_string();
        let already_admitted = self.patients.contains_key(&patient_id);

        if let Some(capacity) = self.config.max_capacity {
            if !already_admitted && self.patients.len() >= capacity {
                warn!(%patient_id, capacity, "Admission refused: at capacity");
                return Err(HospitalError::CapacityReached { capacity });
            }
        }

        info!(%patient_id, staff_id = staff.staff_id(), role = %staff.role(), readmission = already_admitted, "Patient admitted");
        Ok(self.patients.insert(patient_id, patient).into())
    }

    /// Staff-facing summary of the patient's file.
    ///
    /// # Errors
    /// [`HospitalError::NotFound`] for an unknown id, and
    /// [`HospitalError::AccessDenied`] when the requester is not staff.
    pub fn patient_info(&self, patient_id: &str, requester: &Requester) -> Result<String, HospitalError> {
        let patient = self
            .patients
            .get(patient_id)
            .ok_or_else(|| HospitalError::NotFound(patient_id.to_string()))?;

        if !requester.has_clinical_access() {
            warn!(%patient_id, ?requester, "Patient info refused");
            return Err(HospitalError::AccessDenied(patient_id.to_string()));
        }
        Ok(patient.basic_info())
    }

    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn config(&self) -> &HospitalConfig {
        &self.config
    }
}

impl RegistryFacade for HospitalSystem {
    type Id = String;
    type Entry = Patient;
    type Credential = StaffMember;
    type Viewer = Requester;
    type Report = String;
    type Error = HospitalError;

    fn register(&mut self, entry: Patient, credential: &StaffMember) -> Result<Admission, HospitalError> {
        self.admit(entry, credential)
    }

    fn lookup(&self, id: &String) -> Option<&Patient> {
        self.patient(id)
    }

    fn report(&self, id: &String, viewer: &Requester) -> Result<String, HospitalError> {
        self.patient_info(id, viewer)
    }

    fn len(&self) -> usize {
        self.patient_count()
    }
}

/// Creates a hospital registry actor and its client.
pub fn new(config: HospitalConfig, buffer_size: usize) -> (RegistryActor<HospitalSystem>, HospitalClient) {
    let (actor, generic_client) = RegistryActor::new(buffer_size, HospitalSystem::new(config));
    (actor, HospitalClient::new(generic_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Administrator, Doctor, Nurse};
    use crate::test_support::sample_patient;

    fn doctor() -> StaffMember {
        Doctor::new("DOC001", "Cardiology", ["Board Certified"]).into()
    }

    #[test]
    fn test_admit_with_doctor() {
        let mut hospital = HospitalSystem::default();
        let outcome = hospital.admit(sample_patient("P001"), &doctor()).unwrap();
        assert!(outcome.is_new());
        assert_eq!(hospital.patient_count(), 1);
    }

    #[test]
    fn test_every_staff_role_may_admit() {
        let mut hospital = HospitalSystem::default();
        let staff: [StaffMember; 3] = [
            doctor(),
            Nurse::new("N001", "Day", ["RN"]).into(),
            // an administrator with no permissions at all still gets in
            Administrator::new("A001", Vec::<String>::new()).into(),
        ];
        for (i, member) in staff.iter().enumerate() {
            hospital.admit(sample_patient(&format!("P00{i}")), member).unwrap();
        }
        assert_eq!(hospital.patient_count(), 3);
    }

    #[test]
    fn test_readmission_last_write_wins() {
        let mut hospital = HospitalSystem::default();
        let mut first = sample_patient("P001");
        first.set_room_number(101);
        hospital.admit(first.clone(), &doctor()).unwrap();

        let mut second = sample_patient("P001");
        second.set_room_number(202);
        let outcome = hospital.admit(second, &doctor()).unwrap();

        assert_eq!(outcome, Registration::Replaced(first));
        assert_eq!(hospital.patient_count(), 1);
        let info = hospital.patient_info("P001", &doctor().into()).unwrap();
        assert!(info.contains("Room: 202"), "{info}");
    }

    #[test]
    fn test_patient_info_for_staff() {
        let mut hospital = HospitalSystem::default();
        let mut patient = sample_patient("P001");
        patient.set_room_number(101);
        patient.set_attending_physician("DOC001");
        hospital.admit(patient, &doctor()).unwrap();

        let nurse: Requester = StaffMember::from(Nurse::new("N001", "Night", ["RN"])).into();
        assert_eq!(
            hospital.patient_info("P001", &nurse).unwrap(),
            "Patient ID: P001, Name: John Doe, Room: 101, Doctor: DOC001"
        );
    }

    #[test]
    fn test_not_found_differs_from_access_denied() {
        let mut hospital = HospitalSystem::default();
        hospital.admit(sample_patient("P001"), &doctor()).unwrap();

        let visitor = Requester::visitor("Jane Doe");
        let denied = hospital.patient_info("P001", &visitor).unwrap_err();
        let missing = hospital.patient_info("P999", &doctor().into()).unwrap_err();

        assert_eq!(denied, HospitalError::AccessDenied("P001".into()));
        assert_eq!(missing, HospitalError::NotFound("P999".into()));
        assert_eq!(denied.to_string(), "Access denied");
        assert_eq!(missing.to_string(), "Patient not found: P999");
    }

    #[test]
    fn test_default_hospital_has_no_capacity_limit() {
        let mut hospital = HospitalSystem::default();
        for i in 0..600 {
            hospital.admit(sample_patient(&format!("P{i:04}")), &doctor()).unwrap();
        }
        assert_eq!(hospital.patient_count(), 600);
    }

    #[test]
    fn test_capacity_limits_new_patients_only() {
        let mut hospital = HospitalSystem::new(HospitalConfig { max_capacity: Some(2) });
        hospital.admit(sample_patient("P001"), &doctor()).unwrap();
        hospital.admit(sample_patient("P002"), &doctor()).unwrap();

        let err = hospital.admit(sample_patient("P003"), &doctor()).unwrap_err();
        assert_eq!(err, HospitalError::CapacityReached { capacity: 2 });
        assert!(hospital.patient("P003").is_none());

        // an existing patient can still be re-admitted
        assert!(!hospital.admit(sample_patient("P002"), &doctor()).unwrap().is_new());
    }
}
