use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::MedicalRecord;

/// A patient known to the hospital.
///
/// The identity and the medical record are fixed at construction; the name,
/// room and attending physician are the mutable parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    patient_id: String,
    medical_record: MedicalRecord,
    name: String,
    emergency_contact: Option<String>,
    insurance_info: Option<String>,
    room_number: Option<u32>,
    attending_physician: Option<String>,
}

impl Patient {
    /// Creates a fully registered patient.
    pub fn new(
        patient_id: impl Into<String>,
        name: impl Into<String>,
        emergency_contact: impl Into<String>,
        insurance_info: impl Into<String>,
        medical_record: MedicalRecord,
    ) -> Self {
        Self {
            emergency_contact: Some(emergency_contact.into()),
            insurance_info: Some(insurance_info.into()),
            ..Self::with_record(patient_id, medical_record, name)
        }
    }

    /// Creates a patient around a record that already exists (a transfer, a
    /// returning patient). Contact and insurance details are left empty.
    pub fn with_record(patient_id: impl Into<String>, medical_record: MedicalRecord, name: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            medical_record,
            name: name.into(),
            emergency_contact: None,
            insurance_info: None,
            room_number: None,
            attending_physician: None,
        }
    }

    /// Creates a walk-in patient with a temporary `TEMP-<millis>` id and a
    /// placeholder record.
    pub fn walk_in(name: impl Into<String>) -> Self {
        let now = Utc::now();
        let placeholder = MedicalRecord::placeholder("TEMP-MR", now.date_naive());
        Self::with_record(format!("TEMP-{}", now.timestamp_millis()), placeholder, name)
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn medical_record(&self) -> &MedicalRecord {
        &self.medical_record
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emergency_contact(&self) -> Option<&str> {
        self.emergency_contact.as_deref()
    }

    pub fn insurance_info(&self) -> Option<&str> {
        self.insurance_info.as_deref()
    }

    pub fn room_number(&self) -> Option<u32> {
        self.room_number
    }

    pub fn attending_physician(&self) -> Option<&str> {
        self.attending_physician.as_deref()
    }

    pub fn set_room_number(&mut self, room_number: u32) {
        self.room_number = Some(room_number);
    }

    pub fn set_attending_physician(&mut self, physician: impl Into<String>) {
        self.attending_physician = Some(physician.into());
    }

    /// Staff-facing summary: `Patient ID: .., Name: .., Room: .., Doctor: ..`.
    ///
    /// A room or physician that was never set prints as `unassigned` rather
    /// than `0` or `null`.
    pub fn basic_info(&self) -> String {
        format!(
            "Patient ID: {}, Name: {}, Room: {}, Doctor: {}",
            self.patient_id,
            self.name,
            self.room_label(),
            self.attending_physician.as_deref().unwrap_or("unassigned"),
        )
    }

    /// Summary safe to show anyone: `Name: .., Room: ..`. An unset room
    /// prints as `unassigned`.
    pub fn public_info(&self) -> String {
        format!("Name: {}, Room: {}", self.name, self.room_label())
    }

    fn room_label(&self) -> String {
        self.room_number
            .map(|room| room.to_string())
            .unwrap_or_else(|| "unassigned".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_patient, sample_record};

    #[test]
    fn test_info_strings() {
        let mut patient = sample_patient("P001");
        assert_eq!(patient.public_info(), "Name: John Doe, Room: unassigned");

        patient.set_room_number(101);
        patient.set_attending_physician("Dr. House");
        assert_eq!(patient.public_info(), "Name: John Doe, Room: 101");
        assert_eq!(
            patient.basic_info(),
            "Patient ID: P001, Name: John Doe, Room: 101, Doctor: Dr. House"
        );
    }

    #[test]
    fn test_full_constructor_keeps_contact_details() {
        let patient = sample_patient("P001");
        assert_eq!(patient.emergency_contact(), Some("Jane Doe"));
        assert_eq!(patient.insurance_info(), Some("INS123"));
        assert!(patient.medical_record().is_allergic_to("penicillin"));
    }

    #[test]
    fn test_with_existing_record() {
        let patient = Patient::with_record("P002", sample_record(), "Mary Major");
        assert_eq!(patient.patient_id(), "P002");
        assert_eq!(patient.medical_record().record_id(), "MR001");
        assert_eq!(patient.emergency_contact(), None);
        assert_eq!(patient.room_number(), None);
    }

    #[test]
    fn test_walk_in_gets_temporary_identity() {
        let patient = Patient::walk_in("Unknown Visitor");
        assert!(patient.patient_id().starts_with("TEMP-"));
        assert_eq!(patient.name(), "Unknown Visitor");

        let record = patient.medical_record();
        assert_eq!(record.record_id(), "TEMP-MR");
        assert_eq!(record.patient_dna(), "UNKNOWN");
        assert_eq!(record.blood_type(), "UNKNOWN");
        assert!(record.allergies().is_empty());
    }
}
