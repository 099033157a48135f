//! Type-safe wrappers around [`RegistryClient`](crate::framework::RegistryClient).

pub mod actor_client;
pub mod hospital_client;
pub mod registrar_client;

pub use actor_client::*;
pub use hospital_client::*;
pub use registrar_client::*;
