//! Auth service client — the single point of entry for every call to the
//! hosted auth provider. No other module talks to the auth service.
//!
//! The provider is a black box reached over HTTP: sign-up triggers a
//! 6-digit emailed code, verification exchanges the code for a session,
//! sign-in exchanges credentials for a session. Failures carry a
//! human-readable message; this module turns the well-known ones into
//! tailored text and passes the rest through.

pub mod handlers;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::session::Session;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shown whenever the service cannot be reached at all.
pub const GENERIC_NETWORK_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Auth service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Auth service returned an unexpected response")]
    UnexpectedResponse,
}

impl AuthError {
    /// The message to surface to the user for a general auth failure.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Service { message, .. } => message.clone(),
            AuthError::Http(_) | AuthError::UnexpectedResponse => {
                GENERIC_NETWORK_MESSAGE.to_string()
            }
        }
    }

    /// The message for a failed code verification. Known failure kinds get
    /// tailored text; anything else surfaces the raw service message.
    pub fn verify_message(&self) -> String {
        match self {
            AuthError::Service { message, .. } => {
                let lower = message.to_lowercase();
                if lower.contains("expired") {
                    "Your verification code has expired. Please request a new one.".to_string()
                } else if lower.contains("invalid") {
                    "The verification code you entered is incorrect. Please try again.".to_string()
                } else {
                    message.clone()
                }
            }
            _ => self.user_message(),
        }
    }
}

/// The auth service boundary. Held in `AppState` as `Arc<dyn AuthProvider>`
/// so handlers never depend on the transport.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Registers the account and triggers the emailed 6-digit code.
    async fn sign_up(&self, email: &str, password: &str, display_name: &str)
        -> Result<(), AuthError>;

    /// Exchanges an emailed code for a session.
    async fn verify_code(&self, email: &str, code: &str) -> Result<Session, AuthError>;

    /// Sends a fresh code to the same address.
    async fn resend_code(&self, email: &str) -> Result<(), AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
}

#[derive(Serialize)]
struct VerifyBody<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    email: &'a str,
    token: &'a str,
}

#[derive(Serialize)]
struct ResendBody<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct PasswordGrantBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SessionPayload {
    access_token: String,
    user: UserPayload,
}

#[derive(Deserialize)]
struct UserPayload {
    id: Uuid,
    email: String,
}

/// Error bodies vary across provider endpoints; accept the common shapes.
#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg.or(self.message).or(self.error_description)
    }
}

/// Reqwest-backed `AuthProvider` talking to the configured auth service.
#[derive(Clone)]
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
    service_key: String,
}

impl HttpAuthClient {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        }
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, AuthError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("apikey", &self.service_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Auth call {path} succeeded ({status})");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Auth call {path} failed ({status}): {body}");
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or(body);
        Err(AuthError::Service { status: status.as_u16(), message })
    }

    async fn session_from(&self, response: reqwest::Response) -> Result<Session, AuthError> {
        let payload: SessionPayload = response
            .json()
            .await
            .map_err(|_| AuthError::UnexpectedResponse)?;
        Ok(Session {
            user_id: payload.user.id,
            email: payload.user.email,
            access_token: payload.access_token,
        })
    }
}

#[async_trait]
impl AuthProvider for HttpAuthClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<(), AuthError> {
        self.post_json(
            "/signup",
            &SignUpBody { email, password, data: SignUpMetadata { full_name: display_name } },
        )
        .await?;
        Ok(())
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<Session, AuthError> {
        let response = self
            .post_json("/verify", &VerifyBody { kind: "email", email, token: code })
            .await?;
        self.session_from(response).await
    }

    async fn resend_code(&self, email: &str) -> Result<(), AuthError> {
        self.post_json("/resend", &ResendBody { kind: "signup", email }).await?;
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .post_json("/token?grant_type=password", &PasswordGrantBody { email, password })
            .await?;
        self.session_from(response).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/logout", self.base_url))
            .header("apikey", &self.service_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(AuthError::Service { status, message })
        }
    }
}
