//! Thin HTTP client for the banking API.
//!
//! The client pre-configures default headers (bearer auth, JSON accept,
//! User-Agent) and builds requests against a validated base URL.

use std::env;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, header};
use tracing::debug;
use url::Url;

use crate::ApiError;

/// Hostnames allowed to use plain HTTP for local development.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1", "[::1]"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct BankClient {
    base_url: String,
    http: Client,
    user_agent: String,
}

impl BankClient {
    /// Builds a client for `base_url`, authenticating with `token` when given.
    ///
    /// Non-localhost hosts must use HTTPS.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        validate_base_url(base_url)?;

        let mut default_headers = header::HeaderMap::new();
        if let Some(token) = token {
            let value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|error| ApiError::InvalidToken(error.to_string()))?;
            default_headers.insert(header::AUTHORIZATION, value);
        }
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            user_agent: format!("neobank-shell/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request for a method and API-relative path.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, %method, "building request");
        self.http.request(method, url).header(header::USER_AGENT, &self.user_agent)
    }

    /// Sends a request and turns non-success statuses into [`ApiError::Status`].
    pub async fn send(&self, method: Method, path: &str) -> Result<Response, ApiError> {
        let response = self.request(method.clone(), path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: method.to_string(),
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

/// Rules:
/// - localhost hosts: `http` or `https`
/// - anything else: `https` only
fn validate_base_url(base: &str) -> Result<(), ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };

    let parsed = Url::parse(base).map_err(|error| invalid(error.to_string()))?;
    let host = parsed.host_str().ok_or_else(|| invalid("missing host".into()))?;
    let scheme = parsed.scheme();

    if LOCALHOST_DOMAINS.iter().any(|allowed| host.eq_ignore_ascii_case(allowed)) {
        return match scheme {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        };
    }

    if scheme != "https" {
        return Err(invalid(format!("non-localhost hosts must use https; got '{scheme}://'")));
    }
    Ok(())
}
