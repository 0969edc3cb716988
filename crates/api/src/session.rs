//! Session collaborator: who is signed in, and how to sign them out.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use neobank_types::SessionUser;
use reqwest::{Method, StatusCode};
use tracing::{debug, info};

use crate::{ApiError, BankClient};

/// Source of the current user and the sign-out capability.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<SessionUser>;

    /// Terminates the session. Completion says nothing about what the
    /// backend did; callers must not rely on it for navigation decisions.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Session store backed by the banking API.
#[derive(Debug)]
pub struct HttpSessionStore {
    client: BankClient,
    user: RwLock<Option<SessionUser>>,
}

impl HttpSessionStore {
    pub fn new(client: BankClient) -> Self {
        Self {
            client,
            user: RwLock::new(None),
        }
    }

    /// Fetches the signed-in user from `GET /auth/me`.
    ///
    /// A 401 means "nobody is signed in" and is not an error.
    pub async fn restore(&self) -> Result<Option<SessionUser>, ApiError> {
        let response = self.client.request(Method::GET, "/auth/me").send().await?;
        let user = match response.status() {
            StatusCode::UNAUTHORIZED => None,
            status if status.is_success() => Some(serde_json::from_slice::<SessionUser>(&response.bytes().await?)?),
            status => {
                return Err(ApiError::Status {
                    method: Method::GET.to_string(),
                    path: "/auth/me".into(),
                    status: status.as_u16(),
                });
            }
        };
        debug!(signed_in = user.is_some(), "restored session");
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = user.clone();
        Ok(user)
    }
}

#[async_trait]
impl SessionProvider for HttpSessionStore {
    fn current_user(&self) -> Option<SessionUser> {
        self.user.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        // Cleared up front: callers may stop waiting on the backend.
        self.user.write().unwrap_or_else(PoisonError::into_inner).take();
        let result = self.client.send(Method::POST, "/auth/logout").await.map(|_| ());
        info!(remote_ok = result.is_ok(), "session terminated");
        result
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Local backend that answers `GET /auth/me` and never answers anything else.
    async fn spawn_backend(me_status: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let read = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..read]).to_string();
                    if request.starts_with("GET /auth/me") {
                        let body = r#"{"name":"Ada","role":"ADMIN"}"#;
                        let response = format!(
                            "HTTP/1.1 {me_status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                            body.len()
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                });
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn restore_reads_the_signed_in_user() {
        let base = spawn_backend("200 OK").await;
        let store = HttpSessionStore::new(BankClient::new(&base, None).unwrap());

        let user = store.restore().await.unwrap();

        assert_eq!(user, Some(SessionUser::new("Ada", "ADMIN")));
        assert_eq!(store.current_user(), user);
    }

    #[tokio::test]
    async fn unauthorized_restore_means_signed_out() {
        let base = spawn_backend("401 Unauthorized").await;
        let store = HttpSessionStore::new(BankClient::new(&base, None).unwrap());

        assert_eq!(store.restore().await.unwrap(), None);
        assert_eq!(store.current_user(), None);
    }

    #[tokio::test]
    async fn abandoned_logout_still_clears_local_user() {
        let base = spawn_backend("200 OK").await;
        let store = HttpSessionStore::new(BankClient::new(&base, None).unwrap());
        store.restore().await.unwrap();
        assert!(store.current_user().is_some());

        let waited = tokio::time::timeout(Duration::from_millis(200), store.logout()).await;

        assert!(waited.is_err(), "backend never answers logout");
        assert_eq!(store.current_user(), None);
    }
}
