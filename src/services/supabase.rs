//! Client for the Supabase Auth REST API
//!
//! The service's only contract with the collaborator is "give me an
//! identity and a role string, or fail". Failures surface verbatim to the
//! initiating request; nothing is retried automatically.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::domain::auth::{
    Role, SupabaseAuthResponse, SupabaseErrorResponse, SupabaseSignupResponse, SupabaseUser,
};
use crate::error::ApiError;

/// Typed client for the collaborator's auth endpoints.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    base_url: String,
    anon_key: String,
}

/// What a signup produced: a live session when confirmation is disabled,
/// or a pending user when the collaborator sent a confirmation email.
pub enum SignupOutcome {
    Session(SupabaseAuthResponse),
    Pending(SupabaseSignupResponse),
}

impl SupabaseAuth {
    pub fn new(client: Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a new identity; the role lands in explicit user metadata.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        role: Role,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<SignupOutcome, ApiError> {
        let mut metadata = json!({ "role": role.as_str() });
        if let Some(name) = name {
            metadata["name"] = json!(name);
        }
        if let Some(phone) = phone {
            metadata["phone"] = json!(phone);
        }

        let response = self
            .client
            .post(self.url("/auth/v1/signup"))
            .header("apikey", &self.anon_key)
            .json(&json!({
                "email": email,
                "password": password,
                "data": metadata,
            }))
            .send()
            .await
            .map_err(connect_error)?;

        if !response.status().is_success() {
            let error = error_body(response).await;
            return Err(ApiError::bad_request(error.get_message()));
        }

        // The response body shape depends on whether email confirmation
        // is enabled for the project, so try both formats.
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::upstream(format!("Failed to read auth response: {e}")))?;

        if let Ok(session) = serde_json::from_str::<SupabaseAuthResponse>(&body) {
            return Ok(SignupOutcome::Session(session));
        }
        if let Ok(pending) = serde_json::from_str::<SupabaseSignupResponse>(&body) {
            return Ok(SignupOutcome::Pending(pending));
        }

        Err(ApiError::upstream(
            "Failed to parse auth response: unexpected format",
        ))
    }

    /// Password grant.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SupabaseAuthResponse, ApiError> {
        debug!(email = %email, "Password grant request");

        let response = self
            .client
            .post(self.url("/auth/v1/token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(connect_error)?;

        if !response.status().is_success() {
            let error = error_body(response).await;
            return Err(ApiError::unauthorized(error.get_message()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::upstream(format!("Failed to parse auth response: {e}")))
    }

    /// Refresh grant.
    pub async fn refresh(&self, refresh_token: &str) -> Result<SupabaseAuthResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/auth/v1/token?grant_type=refresh_token"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .map_err(connect_error)?;

        if !response.status().is_success() {
            let error = error_body(response).await;
            return Err(ApiError::unauthorized(error.get_message()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::upstream(format!("Failed to parse auth response: {e}")))
    }

    /// Revoke the caller's session. A collaborator failure here is logged
    /// but not surfaced; the caller's token is discarded regardless.
    pub async fn sign_out(&self, access_token: &str) {
        let result = self
            .client
            .post(self.url("/auth/v1/logout"))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await;

        if let Err(e) = result {
            tracing::warn!(error = %e, "Sign-out call to auth service failed");
        }
    }

    /// Fetch the identity behind a token.
    pub async fn get_user(&self, access_token: &str) -> Result<SupabaseUser, ApiError> {
        let response = self
            .client
            .get(self.url("/auth/v1/user"))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(connect_error)?;

        if !response.status().is_success() {
            return Err(ApiError::unauthorized("Invalid session"));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::upstream(format!("Failed to parse user response: {e}")))
    }

    /// Check collaborator reachability.
    pub async fn health_check(&self) -> Result<()> {
        self.client
            .get(self.url("/auth/v1/health"))
            .header("apikey", &self.anon_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Auth service health check failed")?
            .error_for_status()
            .context("Auth service unhealthy")?;

        Ok(())
    }
}

fn connect_error(e: reqwest::Error) -> ApiError {
    ApiError::upstream(format!("Failed to connect to auth service: {e}"))
}

async fn error_body(response: reqwest::Response) -> SupabaseErrorResponse {
    response
        .json()
        .await
        .unwrap_or_else(|_| SupabaseErrorResponse {
            error: Some("Unknown error".to_string()),
            ..Default::default()
        })
}
