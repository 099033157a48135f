use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordError;

const UNKNOWN: &str = "UNKNOWN";

/// Immutable medical facts about one patient.
///
/// Built through [`MedicalRecordBuilder`]: the record id, DNA string, birth date
/// and blood type are mandatory and a record missing any of them never exists.
/// Deserialization goes through the same builder, so it enforces the same rule.
///
/// List accessors hand out independent copies; nothing a caller does to the
/// returned `Vec` reaches the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MedicalRecordBuilder")]
pub struct MedicalRecord {
    record_id: String,
    patient_dna: String,
    allergies: Vec<String>,
    medical_history: Vec<String>,
    birth_date: NaiveDate,
    blood_type: String,
}

impl MedicalRecord {
    /// Starts a builder for a record with the given id.
    pub fn builder(record_id: impl Into<String>) -> MedicalRecordBuilder {
        MedicalRecordBuilder {
            record_id: Some(record_id.into()),
            ..MedicalRecordBuilder::default()
        }
    }

    /// Stand-in record for a patient whose history is not on file yet.
    pub(crate) fn placeholder(record_id: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            record_id: record_id.into(),
            patient_dna: UNKNOWN.to_string(),
            allergies: Vec::new(),
            medical_history: Vec::new(),
            birth_date: today,
            blood_type: UNKNOWN.to_string(),
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn patient_dna(&self) -> &str {
        &self.patient_dna
    }

    /// Copy of the allergy list.
    pub fn allergies(&self) -> Vec<String> {
        self.allergies.clone()
    }

    /// Copy of the medical history.
    pub fn medical_history(&self) -> Vec<String> {
        self.medical_history.clone()
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn blood_type(&self) -> &str {
        &self.blood_type
    }

    /// Returns true if any recorded allergy matches `substance`, ignoring case.
    pub fn is_allergic_to(&self, substance: &str) -> bool {
        self.allergies
            .iter()
            .any(|allergy| eq_ignore_case(allergy, substance))
    }
}

/// Collects the fields of a [`MedicalRecord`] and validates them in [`build`](Self::build).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MedicalRecordBuilder {
    record_id: Option<String>,
    patient_dna: Option<String>,
    allergies: Vec<String>,
    medical_history: Vec<String>,
    birth_date: Option<NaiveDate>,
    blood_type: Option<String>,
}

impl MedicalRecordBuilder {
    pub fn patient_dna(mut self, dna: impl Into<String>) -> Self {
        self.patient_dna = Some(dna.into());
        self
    }

    pub fn allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = allergies.into_iter().map(Into::into).collect();
        self
    }

    pub fn medical_history<I, S>(mut self, history: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medical_history = history.into_iter().map(Into::into).collect();
        self
    }

    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn blood_type(mut self, blood_type: impl Into<String>) -> Self {
        self.blood_type = Some(blood_type.into());
        self
    }

    /// Validates the required fields and produces the record.
    ///
    /// # Errors
    /// [`RecordError::MissingField`] for the first required field that is
    /// absent or blank.
    pub fn build(self) -> Result<MedicalRecord, RecordError> {
        Ok(MedicalRecord {
            record_id: required_text(self.record_id, "record_id")?,
            patient_dna: required_text(self.patient_dna, "patient_dna")?,
            birth_date: self.birth_date.ok_or(RecordError::MissingField("birth_date"))?,
            blood_type: required_text(self.blood_type, "blood_type")?,
            allergies: self.allergies,
            medical_history: self.medical_history,
        })
    }
}

impl TryFrom<MedicalRecordBuilder> for MedicalRecord {
    type Error = RecordError;

    fn try_from(builder: MedicalRecordBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Char-wise case folding; nothing is allocated.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, RecordError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(RecordError::MissingField(field)),
    }
}
