//! HTTP client for the auth service
//!
//! The auth service is an external collaborator speaking JSON over HTTP:
//! a validation endpoint consulted by the interceptor, plus login/logout
//! endpoints the gateway forwards credentials to verbatim.

use std::time::Duration;

use chrono::{DateTime, Utc};
use identity_propagation::Claim;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::AuthError;

/// Validation verdict returned by `GET {base}/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenValidation {
    pub is_valid: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

/// Successful login payload, passed through to the caller unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub client: ClientInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub full_name: String,
}

/// Credentials forwarded to the auth service. Clients may identify by
/// email or username; the gateway does not interpret either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password: String,
}

pub struct AuthServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthServiceClient {
    /// # Panics
    /// Panics if the underlying HTTP client cannot be constructed; this
    /// runs once at startup.
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .expect("Failed to build auth service HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Ask the auth service whether a bearer credential is valid.
    ///
    /// The original authorization header is forwarded verbatim.
    ///
    /// Returns:
    /// - `Ok(Some(verdict))`: the service produced a validation verdict
    /// - `Ok(None)`: the service answered but produced no usable verdict
    ///   (non-success status or undecodable body); callers treat this the
    ///   same as an invalid token
    /// - `Err(Unavailable)`: transport failure or timeout; never to be
    ///   cached as a decision
    pub async fn validate(&self, auth_header: &str) -> Result<Option<TokenValidation>, AuthError> {
        let url = format!("{}/validate", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, auth_header)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "auth service returned non-success for validation");
            return Ok(None);
        }

        match response.json::<TokenValidation>().await {
            Ok(verdict) => Ok(Some(verdict)),
            Err(e) if e.is_timeout() => Err(transport_error(e)),
            Err(e) => {
                warn!(error = %e, "undecodable validation response from auth service");
                Ok(None)
            }
        }
    }

    /// Forward a login request; the token in the response is issued by the
    /// auth service, the gateway only relays it.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let url = format!("{}/login", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::Unauthenticated("Invalid credentials".to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: if message.is_empty() {
                    "Login failed".to_string()
                } else {
                    message
                },
            });
        }

        response.json::<LoginResponse>().await.map_err(|e| {
            warn!(error = %e, "invalid login response from auth service");
            AuthError::Rejected {
                status: 500,
                message: "Invalid response from authentication service".to_string(),
            }
        })
    }

    /// Forward a logout request carrying the original bearer header.
    pub async fn logout(&self, auth_header: &str) -> Result<(), AuthError> {
        let url = format!("{}/logout", self.base_url);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, auth_header)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: if message.is_empty() {
                    "Logout failed".to_string()
                } else {
                    message
                },
            });
        }

        Ok(())
    }
}

fn transport_error(e: reqwest::Error) -> AuthError {
    AuthError::Unavailable(e.to_string())
}
