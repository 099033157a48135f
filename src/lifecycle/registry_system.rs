use tracing::{error, info};

use crate::clients::{HospitalClient, RegistrarClient};
use crate::config::SystemConfig;

/// The runtime orchestrator that owns both registry actors.
///
/// `RegistrySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the hospital and registrar actors
/// - **Configuration**: Handing each facade its slice of [`SystemConfig`]
///
/// The two registries are independent; neither actor talks to the other.
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new(&SystemConfig::from_env()?);
///
/// system.hospital_client.admit_patient(patient, doctor.into()).await?;
/// system.registrar_client.enroll_student(student, cs201).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for the hospital registry actor
    pub hospital_client: HospitalClient,

    /// Client for the registration actor
    pub registrar_client: RegistrarClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegistrySystem {
    /// Creates both facades and spawns an actor for each.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let (hospital_actor, hospital_client) =
            crate::hospital::new(config.hospital.clone(), config.channel_capacity);
        let (registrar_actor, registrar_client) =
            crate::university::new(config.registration.clone(), config.channel_capacity);

        let hospital_handle = tokio::spawn(async move {
            let hospital = hospital_actor.run().await;
            info!(patients = hospital.patient_count(), "Hospital registry stopped");
        });
        let registrar_handle = tokio::spawn(async move {
            let registrar = registrar_actor.run().await;
            info!(students = registrar.enrolled_count(), "Registrar stopped");
        });

        Self {
            hospital_client,
            registrar_client,
            handles: vec![hospital_handle, registrar_handle],
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels; each actor drains what is
    /// already queued and exits. Clones of a client held elsewhere keep their
    /// actor alive, so drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.hospital_client);
        drop(self.registrar_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
