//! Notification collaborator: owner of the unread-count cell.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use tokio::sync::watch;
use tracing::debug;

use crate::{ApiError, BankClient};

/// Owner of the unread-notification count.
///
/// The count is an observable cell: readers subscribe once and see every
/// value published by [`NotificationProvider::fetch_unread_count`].
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Read-only view of the unread count.
    fn unread_count(&self) -> watch::Receiver<u32>;

    /// Refreshes the count from its source and publishes it.
    async fn fetch_unread_count(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct UnreadCountResponse {
    count: u32,
}

/// Notification store backed by `GET /notifications/unread-count`.
#[derive(Debug)]
pub struct HttpNotificationStore {
    client: BankClient,
    unread: watch::Sender<u32>,
}

impl HttpNotificationStore {
    pub fn new(client: BankClient) -> Self {
        let (unread, _) = watch::channel(0);
        Self { client, unread }
    }
}

#[async_trait]
impl NotificationProvider for HttpNotificationStore {
    fn unread_count(&self) -> watch::Receiver<u32> {
        self.unread.subscribe()
    }

    async fn fetch_unread_count(&self) -> Result<(), ApiError> {
        let response = self.client.send(Method::GET, "/notifications/unread-count").await?;
        let count = parse_unread_count(&response.bytes().await?)?;
        debug!(count, "fetched unread count");
        self.unread.send_replace(count);
        Ok(())
    }
}

fn parse_unread_count(body: &[u8]) -> Result<u32, ApiError> {
    let parsed: UnreadCountResponse = serde_json::from_slice(body)?;
    Ok(parsed.count)
}
