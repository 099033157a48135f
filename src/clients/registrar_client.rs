use crate::clients::actor_client::ActorClient;
use crate::framework::RegistryClient;
use crate::model::{Course, Student};
use crate::university::{Enrollment, EnrollmentError, RegistrationSystem};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the registration actor.
#[derive(Clone)]
pub struct RegistrarClient {
    inner: RegistryClient<RegistrationSystem>,
}

impl RegistrarClient {
    pub fn new(inner: RegistryClient<RegistrationSystem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, student, course), fields(student_id = student.student_id(), course = course.course_code()))]
    pub async fn enroll_student(&self, student: Student, course: Course) -> Result<Enrollment, EnrollmentError> {
        debug!(?student, "enroll_student called");
        self.inner.register(student, course).await
    }

    #[instrument(skip(self))]
    pub async fn enrollment_report(&self, student_id: impl Into<String> + std::fmt::Debug) -> Result<String, EnrollmentError> {
        debug!("Sending request");
        self.inner.report(student_id.into(), ()).await
    }
}

#[async_trait]
impl ActorClient<RegistrationSystem> for RegistrarClient {
    fn inner(&self) -> &RegistryClient<RegistrationSystem> {
        &self.inner
    }
}
