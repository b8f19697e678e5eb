//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! A [`MockClient`] hands out a real [`ResourceClient`] whose requests are
//! answered from a queue of scripted expectations instead of a live actor.
//! Set up expectations with [`MockClient::expect_get`] and friends, run the
//! code under test, then call [`MockClient::verify`].

use crate::framework::{ActorEntity, ActorError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Scripted response for one expected request.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, ActorError<T::Error>>,
    },
    Create {
        response: Result<T::Id, ActorError<T::Error>>,
    },
    List {
        response: Result<Vec<T>, ActorError<T::Error>>,
    },
    Update {
        response: Result<T, ActorError<T::Error>>,
    },
    Delete {
        response: Result<(), ActorError<T::Error>>,
    },
    Action {
        response: Result<T::ActionResult, ActorError<T::Error>>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<MenuItem>::new();
/// mock.expect_list().return_ok(vec![item]);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answering each request from the expectation queue.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut exps = expectations_clone.lock().unwrap();
                    exps.pop_front()
                };

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Get { response }),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Create { response }),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::List { response }),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Update { response }),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Delete { response }),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Action { response }),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder recording the scripted response for one expectation.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: Box<dyn FnOnce(Result<R, ActorError<T::Error>>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ActorError<T::Error>) {
        let expectation = (self.wrap)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DietaryFlags, MenuItem, MenuItemCreate};
    use rust_decimal_macros::dec;

    fn burger() -> MenuItem {
        MenuItem::new("item_1", "Club Burger", dec!(14.50), "mains")
    }

    #[tokio::test]
    async fn scripted_create_and_get() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_create().return_ok("item_1".to_string());
        mock.expect_get().return_ok(Some(burger()));

        let client = mock.client();

        let params = MenuItemCreate {
            name: "Club Burger".to_string(),
            price: dec!(14.50),
            category_id: "mains".to_string(),
            available: true,
            dietary: DietaryFlags::default(),
            prep_minutes: 15,
        };
        let id = client.create(params).await.unwrap();
        assert_eq!(id, "item_1");

        let fetched = client.get("item_1".to_string()).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Club Burger");

        mock.verify();
    }

    #[tokio::test]
    async fn scripted_delete() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_delete().return_ok(());
        mock.expect_delete()
            .return_err(ActorError::NotFound("item_9".to_string()));

        let client = mock.client();

        client.delete("item_1".to_string()).await.unwrap();
        let err = client.delete("item_9".to_string()).await.unwrap_err();
        assert_eq!(err, ActorError::NotFound("item_9".to_string()));

        mock.verify();
    }

    #[tokio::test]
    async fn scripted_list_and_transport_error() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list().return_ok(vec![burger()]);
        mock.expect_get().return_err(ActorError::Closed);

        let client = mock.client();

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);

        let err = client.get("item_1".to_string()).await.unwrap_err();
        assert_eq!(err, ActorError::Closed);

        mock.verify();
    }
}
