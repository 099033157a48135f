use crate::framework::{RegistryClient, RegistryFacade};
use async_trait::async_trait;

/// Trait for registry-specific clients to inherit the read operations.
///
/// Implementors only expose their inner [`RegistryClient`]; `get` and `count`
/// come for free.
#[async_trait]
pub trait ActorClient<F: RegistryFacade>: Send + Sync {
    /// Access the inner generic RegistryClient.
    fn inner(&self) -> &RegistryClient<F>;

    /// Fetch a registered entry by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: F::Id) -> Result<Option<F::Entry>, F::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Number of registered entries.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, F::Error> {
        tracing::debug!("Sending request");
        self.inner().count().await
    }
}
