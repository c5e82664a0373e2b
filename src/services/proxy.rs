//! Credential proxy client
//!
//! All network interaction with the remote authorization service lives
//! here. The proxy brokers short-lived GitHub push tokens after a
//! human-mediated approval step delivered over Telegram.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FlotoolError, Result};
use crate::models::PushCredential;

/// Default auth proxy base URL
const DEFAULT_PROXY_URL: &str = "https://auth-proxy.finetunetech-e.workers.dev";

/// Environment variable overriding the proxy base URL
pub const PROXY_URL_ENV: &str = "FLOTOOL_AUTH_PROXY_URL";

/// Per-request timeout for proxy calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of an authorization request
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorizationOutcome {
    /// The approval prompt was delivered to the user's Telegram
    Dispatched,
    /// The identity is not linked to the Telegram bot; carries guidance
    NotRegistered(RegistrationHelp),
    /// The proxy refused the request for some other reason
    Rejected(String),
}

/// Registration guidance returned by the proxy for unlinked identities
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationHelp {
    pub message: Option<String>,
    pub bot_url: Option<String>,
    pub instructions: Vec<String>,
}

#[derive(Deserialize)]
struct HasPatResponse {
    // Missing or mistyped fields decode as None and count as "no PAT"
    #[serde(default)]
    has_pat: Option<bool>,
}

#[derive(Deserialize, Default)]
struct NotRegisteredResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    bot_url: Option<String>,
    #[serde(default)]
    instructions: Option<Vec<String>>,
}

#[derive(Serialize)]
struct IdentityBody<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
struct CredentialBody<'a> {
    repo: &'a str,
    user_id: &'a str,
}

#[derive(Deserialize)]
struct CredentialResponse {
    #[serde(default)]
    token: Option<String>,
}

/// HTTP client for the credential proxy
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a client using `FLOTOOL_AUTH_PROXY_URL` or the default base
    pub fn from_env() -> Self {
        let base = std::env::var(PROXY_URL_ENV).unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());
        Self::new(base.trim_end_matches('/').to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether a PAT exists for the identity.
    ///
    /// Never fails: any transport error, non-200 status, or schema
    /// mismatch reads as "not yet authorized" so the flow falls through
    /// to requesting authorization instead of pushing unauthenticated.
    pub async fn has_credential(&self, identity: &str) -> bool {
        if identity.is_empty() {
            return false;
        }
        match self.try_has_credential(identity).await {
            Ok(has_pat) => has_pat,
            Err(e) => {
                tracing::debug!("PAT status check failed for {identity}: {e}");
                false
            }
        }
    }

    async fn try_has_credential(&self, identity: &str) -> Result<bool> {
        let response = self
            .http
            .get(format!("{}/user/{}/has-github-pat", self.base_url, identity))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body: HasPatResponse = response.json().await?;
        Ok(body.has_pat.unwrap_or(false))
    }

    /// Ask the proxy to deliver an authorization prompt over Telegram
    pub async fn request_authorization(&self, identity: &str) -> Result<AuthorizationOutcome> {
        let response = self
            .http
            .post(format!("{}/notify/authorize", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .json(&IdentityBody { user_id: identity })
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            let text = response.text().await.unwrap_or_default();
            let body: NotRegisteredResponse = serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::debug!("Malformed not-registered response: {e}");
                NotRegisteredResponse::default()
            });
            if body.status.as_deref() == Some("not_registered") {
                return Ok(AuthorizationOutcome::NotRegistered(RegistrationHelp {
                    message: body.message,
                    bot_url: body.bot_url,
                    instructions: body.instructions.unwrap_or_default(),
                }));
            }
            return Ok(AuthorizationOutcome::Rejected(format!("{status}: {text}")));
        }

        if status.is_success() {
            return Ok(AuthorizationOutcome::Dispatched);
        }

        let text = response.text().await.unwrap_or_default();
        Ok(AuthorizationOutcome::Rejected(format!("{status}: {text}")))
    }

    /// Exchange an authorized identity for a repository-scoped token
    pub async fn fetch_credential(&self, identity: &str, repo: &str) -> Result<PushCredential> {
        let response = self
            .http
            .post(format!("{}/github/git-cred", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .json(&CredentialBody {
                repo,
                user_id: identity,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FlotoolError::Integration(format!(
                "credential fetch failed ({status}): {text}"
            )));
        }

        let body: CredentialResponse = response
            .json()
            .await
            .map_err(|e| FlotoolError::Integration(format!("malformed credential response: {e}")))?;

        match body.token {
            Some(token) if !token.is_empty() => Ok(PushCredential::new(token, repo.to_string())),
            _ => Err(FlotoolError::Integration(
                "proxy response did not include a token".to_string(),
            )),
        }
    }
}
