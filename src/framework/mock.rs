//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! [`MockClient`] answers requests from a queue of expectations instead of a
//! real facade. Use [`create_mock_client`] plus [`expect_register`] or
//! [`expect_report`] when a test needs to inspect the request payload itself.

use crate::framework::{Registration, RegistryClient, RegistryFacade, RegistryRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response to send back.
enum Expectation<F: RegistryFacade> {
    Register {
        response: Result<Registration<F::Entry>, F::Error>,
    },
    Get {
        id: F::Id,
        response: Option<F::Entry>,
    },
    Report {
        id: F::Id,
        response: Result<F::Report, F::Error>,
    },
}

type Expectations<F> = Arc<Mutex<VecDeque<Expectation<F>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<HospitalSystem>::new();
/// mock.expect_register().return_ok(Registration::New);
/// mock.expect_report("P001".to_string()).return_err(HospitalError::AccessDenied("P001".into()));
///
/// let client = HospitalClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<F: RegistryFacade> {
    client: RegistryClient<F>,
    expectations: Expectations<F>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<F: RegistryFacade> MockClient<F> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RegistryRequest<F>>(100);
        let expectations: Expectations<F> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation lock poisoned")
                    .pop_front();

                match (request, expectation) {
                    (RegistryRequest::Register { respond_to, .. }, Some(Expectation::Register { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (RegistryRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (RegistryRequest::Report { id, respond_to, .. }, Some(Expectation::Report { id: expected, response })) => {
                        assert_eq!(id, expected, "report called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: RegistryClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RegistryClient<F> {
        self.client.clone()
    }

    /// Expects a `register` operation.
    pub fn expect_register(&mut self) -> RegisterExpectationBuilder<F> {
        RegisterExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: F::Id) -> GetExpectationBuilder<F> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `report` operation.
    pub fn expect_report(&mut self, id: F::Id) -> ReportExpectationBuilder<F> {
        ReportExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("expectation lock poisoned").len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<F: RegistryFacade> Default for MockClient<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn push<F: RegistryFacade>(expectations: &Expectations<F>, expectation: Expectation<F>) {
    expectations
        .lock()
        .expect("expectation lock poisoned")
        .push_back(expectation);
}

/// Builder for `register` expectations.
pub struct RegisterExpectationBuilder<F: RegistryFacade> {
    expectations: Expectations<F>,
}

impl<F: RegistryFacade> RegisterExpectationBuilder<F> {
    pub fn return_ok(self, outcome: Registration<F::Entry>) {
        push(&self.expectations, Expectation::Register { response: Ok(outcome) });
    }

    pub fn return_err(self, error: F::Error) {
        push(&self.expectations, Expectation::Register { response: Err(error) });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<F: RegistryFacade> {
    id: F::Id,
    expectations: Expectations<F>,
}

impl<F: RegistryFacade> GetExpectationBuilder<F> {
    pub fn return_entry(self, entry: Option<F::Entry>) {
        push(&self.expectations, Expectation::Get { id: self.id, response: entry });
    }
}

/// Builder for `report` expectations.
pub struct ReportExpectationBuilder<F: RegistryFacade> {
    id: F::Id,
    expectations: Expectations<F>,
}

impl<F: RegistryFacade> ReportExpectationBuilder<F> {
    pub fn return_ok(self, report: F::Report) {
        push(&self.expectations, Expectation::Report { id: self.id, response: Ok(report) });
    }

    pub fn return_err(self, error: F::Error) {
        push(&self.expectations, Expectation::Report { id: self.id, response: Err(error) });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client together with the receiving end of its channel.
///
/// Nothing answers on its own: the test pulls requests off the receiver and
/// responds by hand. Prefer [`MockClient`] unless the request payload itself
/// needs asserting.
pub fn create_mock_client<F: RegistryFacade>(
    buffer_size: usize,
) -> (RegistryClient<F>, mpsc::Receiver<RegistryRequest<F>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Receives the next request, returning it only if it is a `Register`.
#[allow(clippy::type_complexity)]
pub async fn expect_register<F: RegistryFacade>(
    receiver: &mut mpsc::Receiver<RegistryRequest<F>>,
) -> Option<(F::Entry, F::Credential, oneshot::Sender<Result<Registration<F::Entry>, F::Error>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Register { entry, credential, respond_to }) => Some((entry, credential, respond_to)),
        _ => None,
    }
}

/// Receives the next request, returning it only if it is a `Report`.
#[allow(clippy::type_complexity)]
pub async fn expect_report<F: RegistryFacade>(
    receiver: &mut mpsc::Receiver<RegistryRequest<F>>,
) -> Option<(F::Id, F::Viewer, oneshot::Sender<Result<F::Report, F::Error>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Report { id, viewer, respond_to }) => Some((id, viewer, respond_to)),
        _ => None,
    }
}
