//! # Mock Framework
//!
//! Fetchers for testing the form without a user-record service.
//!
//! [`create_mock_fetcher`] hands every lookup to the test through a channel, so the
//! test decides when and how each fetch resolves. Use [`expect_fetch`] to take the
//! next lookup and [`assert_no_fetch`] to prove none was issued.
//! [`RoutedFetcher`] answers immediately from a fixed table, like a mocked route.

use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use crate::domain::{Identifier, UserRecord};
use crate::fetcher::{FetchError, UserFetcher};

pub type FetchResponder = oneshot::Sender<Result<UserRecord, FetchError>>;

/// A lookup captured by [`MockFetcher`].
#[derive(Debug)]
pub struct FetchCall {
    pub identifier: Identifier,
    pub respond_to: FetchResponder,
}

#[derive(Debug, Clone)]
pub struct MockFetcher {
    sender: mpsc::Sender<FetchCall>,
}

#[async_trait]
impl UserFetcher for MockFetcher {
    async fn fetch_user(&self, id: Identifier) -> Result<UserRecord, FetchError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FetchCall { identifier: id, respond_to })
            .await
            .map_err(|_| FetchError::Network("Mock closed".to_string()))?;
        response.await.map_err(|_| FetchError::Network("Mock dropped".to_string()))?
    }
}

/// Creates a mock fetcher and the receiver on which its lookups arrive.
pub fn create_mock_fetcher(buffer_size: usize) -> (MockFetcher, mpsc::Receiver<FetchCall>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MockFetcher { sender }, receiver)
}

/// Waits for the next lookup.
pub async fn expect_fetch(receiver: &mut mpsc::Receiver<FetchCall>) -> Option<(Identifier, FetchResponder)> {
    receiver.recv().await.map(|call| (call.identifier, call.respond_to))
}

/// Panics if a lookup is waiting on the receiver.
pub fn assert_no_fetch(receiver: &mut mpsc::Receiver<FetchCall>) {
    if let Ok(call) = receiver.try_recv() {
        panic!("Unexpected fetch for identifier {}", call.identifier);
    }
}

/// Answers from a fixed table and reports 404 for anything else.
#[derive(Debug, Clone, Default)]
pub struct RoutedFetcher {
    users: HashMap<Identifier, UserRecord>,
}

impl RoutedFetcher {
    pub fn with_user(mut self, id: Identifier, user: UserRecord) -> Self {
        self.users.insert(id, user);
        self
    }
}

#[async_trait]
impl UserFetcher for RoutedFetcher {
    async fn fetch_user(&self, id: Identifier) -> Result<UserRecord, FetchError> {
        self.users.get(&id).cloned().ok_or(FetchError::Status(404))
    }
}

pub fn id(value: i64) -> Identifier {
    Identifier::new(value).expect("identifier in range")
}

pub fn leanne() -> UserRecord {
    UserRecord::new("Leanne Graham", "Sincere@april.biz", "Bret")
}

pub fn ervin() -> UserRecord {
    UserRecord::new("Ervin Howell", "Shanna@melissa.tv", "Antonette")
}

pub fn clementine() -> UserRecord {
    UserRecord::new("Clementine Bauch", "Nathan@yesenia.net", "Samantha")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_fetcher() {
        let (fetcher, mut receiver) = create_mock_fetcher(10);

        let fetch_task = tokio::spawn(async move { fetcher.fetch_user(id(1)).await });

        let (identifier, responder) = expect_fetch(&mut receiver).await.expect("Expected fetch");
        assert_eq!(identifier, id(1));
        responder.send(Ok(leanne())).unwrap();

        assert_eq!(fetch_task.await.unwrap(), Ok(leanne()));
        assert_no_fetch(&mut receiver);
    }

    #[tokio::test]
    async fn test_routed_fetcher() {
        let fetcher = RoutedFetcher::default().with_user(id(1), leanne());
        assert_eq!(fetcher.fetch_user(id(1)).await, Ok(leanne()));
        assert_eq!(fetcher.fetch_user(id(3)).await, Err(FetchError::Status(404)));
    }
}
