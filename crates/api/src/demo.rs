//! Offline collaborators used by `neobank --demo`.
//!
//! They behave like the HTTP stores without a backend: the session holds a
//! fixed user until sign-out, and every unread-count fetch adds a few
//! notifications so the badge visibly changes (and eventually caps).

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use neobank_types::SessionUser;
use tokio::sync::watch;
use tokio::time;

use crate::{ApiError, NotificationProvider, SessionProvider};

const DEMO_LATENCY: Duration = Duration::from_millis(150);

#[derive(Debug)]
pub struct DemoSession {
    user: RwLock<Option<SessionUser>>,
}

impl DemoSession {
    pub fn new(user: Option<SessionUser>) -> Self {
        Self { user: RwLock::new(user) }
    }
}

#[async_trait]
impl SessionProvider for DemoSession {
    fn current_user(&self) -> Option<SessionUser> {
        self.user.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.user.write().unwrap_or_else(PoisonError::into_inner).take();
        time::sleep(DEMO_LATENCY).await;
        Ok(())
    }
}

#[derive(Debug)]
pub struct DemoNotifications {
    step: u32,
    fetches: AtomicU32,
    unread: watch::Sender<u32>,
}

impl DemoNotifications {
    /// Starts at `initial` and grows by `step` per fetch after the first.
    pub fn new(initial: u32, step: u32) -> Self {
        let (unread, _) = watch::channel(initial);
        Self {
            step,
            fetches: AtomicU32::new(0),
            unread,
        }
    }
}

#[async_trait]
impl NotificationProvider for DemoNotifications {
    fn unread_count(&self) -> watch::Receiver<u32> {
        self.unread.subscribe()
    }

    async fn fetch_unread_count(&self) -> Result<(), ApiError> {
        time::sleep(DEMO_LATENCY).await;
        let previous = self.fetches.fetch_add(1, Ordering::Relaxed);
        if previous > 0 {
            self.unread.send_modify(|count| *count = count.saturating_add(self.step));
        }
        Ok(())
    }
}
