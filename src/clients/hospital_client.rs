use crate::clients::actor_client::ActorClient;
use crate::framework::RegistryClient;
use crate::hospital::{Admission, HospitalError, HospitalSystem, Requester};
use crate::model::{Patient, StaffMember};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the hospital registry actor.
#[derive(Clone)]
pub struct HospitalClient {
    inner: RegistryClient<HospitalSystem>,
}

impl HospitalClient {
    pub fn new(inner: RegistryClient<HospitalSystem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, patient, staff), fields(patient_id = patient.patient_id(), staff_id = staff.staff_id()))]
    pub async fn admit_patient(&self, patient: Patient, staff: StaffMember) -> Result<Admission, HospitalError> {
        debug!(?patient, "admit_patient called");
        self.inner.register(patient, staff).await
    }

    #[instrument(skip(self, requester))]
    pub async fn patient_info(&self, patient_id: impl Into<String> + std::fmt::Debug, requester: Requester) -> Result<String, HospitalError> {
        debug!("Sending request");
        self.inner.report(patient_id.into(), requester).await
    }

    /// [`patient_info`](Self::patient_info) rendered for display: the summary,
    /// or the error's fixed message ("Access denied", "Patient not found: ..").
    pub async fn patient_info_text(&self, patient_id: impl Into<String> + std::fmt::Debug, requester: Requester) -> String {
        self.patient_info(patient_id, requester)
            .await
            .unwrap_or_else(|e| e.to_string())
    }
}

#[async_trait]
impl ActorClient<HospitalSystem> for HospitalClient {
    fn inner(&self) -> &RegistryClient<HospitalSystem> {
        &self.inner
    }
}
