//! Authentication domain types
//!
//! Requests and responses for the auth endpoints, which act as a proxy to
//! Supabase Auth. The role tag is read from the explicit `role` field in
//! the identity's user metadata and from nowhere else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Agent,
    Seeker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Seeker => "seeker",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "agent" => Some(Self::Agent),
            "seeker" => Some(Self::Seeker),
            _ => None,
        }
    }
}

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// User identity as exposed by this API
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    /// `None` when the identity carries no role metadata.
    pub role: Option<Role>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Auth response with tokens (signin, refresh, or auto-confirmed signup)
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: User,
}

/// Signup response when email confirmation is required
#[derive(Debug, Clone, Serialize)]
pub struct SignupPendingResponse {
    pub user_id: String,
    pub email: String,
    pub confirmation_required: bool,
    pub message: String,
}

/// Session response
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: User,
    pub access_token: String,
    pub expires_at: i64,
}

// Supabase Auth API response types

/// Response when the grant returns tokens
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseAuthResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: SupabaseUser,
}

/// Response when signup requires email confirmation: just the user object,
/// no tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSignupResponse {
    pub id: String,
    pub email: Option<String>,
    pub confirmation_sent_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseUser {
    pub id: String,
    pub email: Option<String>,
    pub created_at: Option<String>,
    pub user_metadata: Option<serde_json::Value>,
}

/// Supabase error body; field names vary across API versions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseErrorResponse {
    pub msg: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub message: Option<String>,
}

impl SupabaseErrorResponse {
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown authentication error".to_string())
    }
}

impl From<SupabaseUser> for User {
    fn from(su: SupabaseUser) -> Self {
        // Only the explicit role field counts; anything else in the
        // metadata is ignored.
        let role = su
            .user_metadata
            .as_ref()
            .and_then(|m| m.get("role"))
            .and_then(|v| v.as_str())
            .and_then(Role::parse);

        Self {
            id: su.id,
            email: su.email,
            role,
            created_at: su.created_at.and_then(|s| s.parse().ok()),
        }
    }
}

impl From<SupabaseSignupResponse> for SignupPendingResponse {
    fn from(sr: SupabaseSignupResponse) -> Self {
        Self {
            user_id: sr.id,
            email: sr.email.unwrap_or_default(),
            confirmation_required: sr.confirmation_sent_at.is_some(),
            message: "Please check your email to confirm your account.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supabase_user(metadata: serde_json::Value) -> SupabaseUser {
        SupabaseUser {
            id: "5bd9e3c0-3a71-4a6e-a9b3-0f6b2a4a9f11".to_string(),
            email: Some("sarah.johnson@propertymatch.com".to_string()),
            created_at: None,
            user_metadata: Some(metadata),
        }
    }

    #[test]
    fn role_comes_from_explicit_metadata_field() {
        let user: User = supabase_user(serde_json::json!({ "role": "agent" })).into();
        assert_eq!(user.role, Some(Role::Agent));
    }

    #[test]
    fn unrelated_metadata_never_implies_a_role() {
        let user: User =
            supabase_user(serde_json::json!({ "favorite_team": "Giants" })).into();
        assert_eq!(user.role, None);
    }

    #[test]
    fn unknown_role_string_maps_to_none() {
        let user: User = supabase_user(serde_json::json!({ "role": "admin" })).into();
        assert_eq!(user.role, None);
    }
}
