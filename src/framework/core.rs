//! # Core Registry Framework
//!
//! This module defines the generic building blocks shared by both registries.
//!
//! ## Key Types
//!
//! - [`RegistryFacade`]: The trait a synchronous registry facade implements.
//! - [`Registration`]: Outcome of a successful register call (new or replaced).
//! - [`RegistryActor`]: Hosts a facade in its own task and serializes access to it.
//! - [`RegistryClient`]: The generic, cloneable handle for talking to the actor.
//! - [`FrameworkError`]: Transport errors (the actor went away).

use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait implemented by every registry facade (hospital, university).
///
/// # Architecture Note
/// Both subsystems share the same shape: validate a person against a
/// counterpart (a staff member, a course), insert it keyed by its identifier,
/// and answer queries. Capturing that shape once lets [`RegistryActor`] host
/// either facade without knowing anything about patients or students.
///
/// The facade stays synchronous and owns its map outright. Mutation needs
/// `&mut self`, so a plain facade can only be touched from one call path at a
/// time; the actor extends that guarantee to many concurrent callers.
///
/// Associated types keep the two domains apart at compile time: a
/// `HospitalSystem` only accepts a `StaffMember` credential, and you can't hand
/// it a `Course`.
pub trait RegistryFacade: Send + 'static {
    /// Registry key (patient id, student id).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The person stored under [`RegistryFacade::Id`].
    type Entry: Clone + Send + Sync + Debug;

    /// Counterpart validated on registration (staff member, course).
    type Credential: Send + Sync + Debug;

    /// Whoever is asking for a report. Use `()` when queries are open.
    type Viewer: Send + Sync + Debug;

    /// Query result on success.
    type Report: Send + Sync + Debug;

    /// Domain error. Transport failures must convert into it so clients can
    /// return one error type.
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Validates `entry` against `credential` and inserts it on success.
    /// An existing entry under the same id is replaced.
    fn register(
        &mut self,
        entry: Self::Entry,
        credential: &Self::Credential,
    ) -> Result<Registration<Self::Entry>, Self::Error>;

    /// Returns the entry stored under `id`, if any.
    fn lookup(&self, id: &Self::Id) -> Option<&Self::Entry>;

    /// Builds the query report for `id` on behalf of `viewer`.
    fn report(&self, id: &Self::Id, viewer: &Self::Viewer) -> Result<Self::Report, Self::Error>;

    /// Number of registered entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration<E> {
    /// The id was not registered before.
    New,
    /// The id was already registered; the previous entry was overwritten.
    Replaced(E),
}

impl<E> Registration<E> {
    pub fn is_new(&self) -> bool {
        matches!(self, Registration::New)
    }

    /// The overwritten entry, when there was one.
    pub fn replaced(self) -> Option<E> {
        match self {
            Registration::New => None,
            Registration::Replaced(previous) => Some(previous),
        }
    }
}

impl<E> From<Option<E>> for Registration<E> {
    fn from(previous: Option<E>) -> Self {
        match previous {
            Some(previous) => Registration::Replaced(previous),
            None => Registration::New,
        }
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors raised by the actor plumbing itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// One-shot response channel carrying the facade's own error type.
pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

/// Message sent from a [`RegistryClient`] to its [`RegistryActor`].
///
/// Each variant mirrors one facade operation. Reads and writes travel through
/// the same queue, so a `Get` issued after a `Register` for the same id always
/// sees the inserted entry.
#[derive(Debug)]
pub enum RegistryRequest<F: RegistryFacade> {
    Register {
        entry: F::Entry,
        credential: F::Credential,
        respond_to: Response<Registration<F::Entry>, F::Error>,
    },
    Get {
        id: F::Id,
        respond_to: oneshot::Sender<Option<F::Entry>>,
    },
    Report {
        id: F::Id,
        viewer: F::Viewer,
        respond_to: Response<F::Report, F::Error>,
    },
    Count {
        respond_to: oneshot::Sender<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Hosts a [`RegistryFacade`] inside a Tokio task.
///
/// **Concurrency Model**:
/// The actor owns the facade and processes its queue one message at a time, so
/// the facade needs no `Mutex`. An insert is fully applied before the next
/// request is looked at: nobody can observe a half-registered person.
pub struct RegistryActor<F: RegistryFacade> {
    receiver: mpsc::Receiver<RegistryRequest<F>>,
    facade: F,
}

impl<F: RegistryFacade> RegistryActor<F> {
    pub fn new(buffer_size: usize, facade: F) -> (Self, RegistryClient<F>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, facade };
        let client = RegistryClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped, then hands the
    /// facade back.
    pub async fn run(mut self) -> F {
        // "HospitalSystem" rather than the full module path
        let registry = std::any::type_name::<F>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(registry, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Register { entry, credential, respond_to } => {
                    debug!(registry, ?entry, ?credential, "Register");
                    let result = self.facade.register(entry, &credential);
                    match &result {
                        Ok(outcome) => {
                            info!(registry, new = outcome.is_new(), size = self.facade.len(), "Registered")
                        }
                        Err(e) => warn!(registry, error = %e, "Register rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Get { id, respond_to } => {
                    let entry = self.facade.lookup(&id).cloned();
                    debug!(registry, %id, found = entry.is_some(), "Get");
                    let _ = respond_to.send(entry);
                }
                RegistryRequest::Report { id, viewer, respond_to } => {
                    debug!(registry, %id, ?viewer, "Report");
                    let result = self.facade.report(&id, &viewer);
                    if let Err(e) = &result {
                        warn!(registry, %id, error = %e, "Report refused");
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Count { respond_to } => {
                    let _ = respond_to.send(self.facade.len());
                }
            }
        }

        info!(registry, size = self.facade.len(), "Shutdown");
        self.facade
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe handle for a [`RegistryActor`]. Cheap to clone.
pub struct RegistryClient<F: RegistryFacade> {
    sender: mpsc::Sender<RegistryRequest<F>>,
}

impl<F: RegistryFacade> Clone for RegistryClient<F> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<F: RegistryFacade> RegistryClient<F> {
    pub fn new(sender: mpsc::Sender<RegistryRequest<F>>) -> Self {
        Self { sender }
    }

    pub async fn register(
        &self,
        entry: F::Entry,
        credential: F::Credential,
    ) -> Result<Registration<F::Entry>, F::Error> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::Register { entry, credential, respond_to }).await?;
        response.await.map_err(|_| F::Error::from(FrameworkError::ActorDropped))?
    }

    pub async fn get(&self, id: F::Id) -> Result<Option<F::Entry>, F::Error> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::Get { id, respond_to }).await?;
        response.await.map_err(|_| F::Error::from(FrameworkError::ActorDropped))
    }

    pub async fn report(&self, id: F::Id, viewer: F::Viewer) -> Result<F::Report, F::Error> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::Report { id, viewer, respond_to }).await?;
        response.await.map_err(|_| F::Error::from(FrameworkError::ActorDropped))?
    }

    pub async fn count(&self) -> Result<usize, F::Error> {
        let (respond_to, response) = oneshot::channel();
        self.send(RegistryRequest::Count { respond_to }).await?;
        response.await.map_err(|_| F::Error::from(FrameworkError::ActorDropped))
    }

    async fn send(&self, request: RegistryRequest<F>) -> Result<(), F::Error> {
        self.sender
            .send(request)
            .await
            .map_err(|_| F::Error::from(FrameworkError::ActorClosed))
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Member {
        id: String,
        age: u32,
    }

    #[derive(Debug)]
    struct MinimumAge(u32);

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum ClubError {
        #[error("too young: {0}")]
        TooYoung(u32),
        #[error("not found: {0}")]
        NotFound(String),
        #[error(transparent)]
        Framework(#[from] FrameworkError),
    }

    #[derive(Default)]
    struct Club {
        members: HashMap<String, Member>,
    }

    impl RegistryFacade for Club {
        type Id = String;
        type Entry = Member;
        type Credential = MinimumAge;
        type Viewer = ();
        type Report = String;
        type Error = ClubError;

        fn register(&mut self, entry: Member, credential: &MinimumAge) -> Result<Registration<Member>, ClubError> {
            if entry.age < credential.0 {
                return Err(ClubError::TooYoung(entry.age));
            }
            Ok(self.members.insert(entry.id.clone(), entry).into())
        }

        fn lookup(&self, id: &String) -> Option<&Member> {
            self.members.get(id)
        }

        fn report(&self, id: &String, _viewer: &()) -> Result<String, ClubError> {
            self.members
                .get(id)
                .map(|m| format!("{} ({})", m.id, m.age))
                .ok_or_else(|| ClubError::NotFound(id.clone()))
        }

        fn len(&self) -> usize {
            self.members.len()
        }
    }

    fn member(id: &str, age: u32) -> Member {
        Member { id: id.to_string(), age }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_registry_actor_round_trip() {
        let (actor, client) = RegistryActor::new(10, Club::default());
        let handle = tokio::spawn(actor.run());

        // 1. Register
        let outcome = client.register(member("m1", 30), MinimumAge(18)).await.unwrap();
        assert_eq!(outcome, Registration::New);

        // 2. Rejected registration leaves no trace
        let err = client.register(member("m2", 12), MinimumAge(18)).await.unwrap_err();
        assert_eq!(err, ClubError::TooYoung(12));
        assert_eq!(client.get("m2".to_string()).await.unwrap(), None);

        // 3. Last write wins
        let outcome = client.register(member("m1", 31), MinimumAge(18)).await.unwrap();
        assert_eq!(outcome, Registration::Replaced(member("m1", 30)));
        assert_eq!(client.report("m1".to_string(), ()).await.unwrap(), "m1 (31)");
        assert_eq!(client.count().await.unwrap(), 1);

        // 4. Not found is the facade's error
        let err = client.report("nobody".to_string(), ()).await.unwrap_err();
        assert_eq!(err, ClubError::NotFound("nobody".to_string()));

        // 5. Dropping the last client stops the actor and returns the facade
        drop(client);
        let club = handle.await.unwrap();
        assert_eq!(club.len(), 1);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = RegistryActor::new(1, Club::default());
        drop(actor);

        let err = client.count().await.unwrap_err();
        assert_eq!(err, ClubError::Framework(FrameworkError::ActorClosed));
    }

    #[test]
    fn test_registration_from_previous_entry() {
        assert!(Registration::<u8>::from(None).is_new());
        assert_eq!(Registration::from(Some(3u8)).replaced(), Some(3));
    }
}
