//! HTTP client for the provider's personal account API.
//!
//! The API is session based: `POST /auth` sets a cookie that later requests
//! must carry, so each [`BalanceClient`] owns a cookie-enabled
//! [`reqwest::Client`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{AccountConfig, ApiConfig};

const USER_AGENT: &str = "Mozilla/5.0";
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Errors returned by the account API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport failure.
    #[error("balance request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Response did not match the expected schema.
    #[error("failed to parse balance response: {0}")]
    Parse(String),
    /// The API answered with an error status.
    #[error("account API returned non-success status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, whitespace-collapsed and shortened.
        body: String,
    },
}

/// Login request body.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    /// Account login.
    pub login: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Balance response body. Other fields are ignored.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct BalanceResponse {
    /// Current balance.
    pub money: f64,
}

/// Something that can report the current balance.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch the current balance.
    async fn fetch_money(&self) -> Result<f64, ClientError>;
}

/// Cookie-session client for the account API.
#[derive(Debug, Clone)]
pub struct BalanceClient {
    client: reqwest::Client,
    base_url: String,
}

impl BalanceClient {
    /// Build a client for `api`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Request`] if the HTTP client cannot be built.
    pub fn new(api: &ApiConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(api.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Log in, storing the session cookie in this client.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn authenticate(&self, login: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(format!("{}/auth", self.base_url))
            .json(&AuthRequest { login, password })
            .send()
            .await?;

        check_http_response(response).await?;
        info!(login, "authenticated");
        Ok(())
    }

    /// Read the current balance using the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// without a numeric `money` field.
    pub async fn fetch_balance(&self) -> Result<f64, ClientError> {
        let response = self
            .client
            .get(format!("{}/get_base_info", self.base_url))
            .header("accept", "application/json")
            .send()
            .await?;

        let body = check_http_response(response).await?;
        let money = parse_balance(&body)?;
        debug!(money, "balance fetched");
        Ok(money)
    }
}

/// A [`BalanceClient`] paired with the credentials it logs in with.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    client: BalanceClient,
    account: AccountConfig,
}

impl AuthenticatedClient {
    /// Pair a client with account credentials.
    pub fn new(client: BalanceClient, account: AccountConfig) -> Self {
        Self { client, account }
    }
}

#[async_trait]
impl BalanceSource for AuthenticatedClient {
    async fn fetch_money(&self) -> Result<f64, ClientError> {
        self.client
            .authenticate(&self.account.login, &self.account.password)
            .await?;
        self.client.fetch_balance().await
    }
}

/// Extract the balance from a `get_base_info` response body.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] when the body is not JSON with a numeric
/// `money` field.
pub fn parse_balance(body: &str) -> Result<f64, ClientError> {
    serde_json::from_str::<BalanceResponse>(body)
        .map(|response| response.money)
        .map_err(|e| ClientError::Parse(e.to_string()))
}

/// Check the HTTP status and return the body text or a structured error.
///
/// # Errors
///
/// Returns [`ClientError::HttpStatus`] for non-success statuses.
async fn check_http_response(response: reqwest::Response) -> Result<String, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::HttpStatus {
            status: status.as_u16(),
            body: shorten_error_body(&body),
        });
    }
    Ok(body)
}

fn shorten_error_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > MAX_ERROR_BODY_CHARS {
        let shortened: String = collapsed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{shortened}...")
    } else {
        collapsed
    }
}
