use uuid::Uuid;

use super::Claims;
use crate::domain::auth::Role;

/// Authenticated user context extracted from a verified JWT.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID (from JWT sub claim)
    pub user_id: Uuid,

    /// User email if available
    pub email: Option<String>,

    /// Account role; `None` when the token carries no role metadata
    pub role: Option<Role>,

    /// Raw JWT token, forwarded on collaborator calls
    token: String,

    /// JWT claims
    claims: Claims,
}

impl AuthContext {
    pub fn from_claims(claims: &Claims, token: &str) -> Result<Self, &'static str> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| "Invalid user ID in token")?;

        // Role comes from the explicit metadata field only.
        let role = claims
            .user_metadata
            .as_ref()
            .and_then(|m| m.get("role"))
            .and_then(|v| v.as_str())
            .and_then(Role::parse);

        Ok(Self {
            user_id,
            email: claims.email.clone(),
            role,
            token: token.to_string(),
            claims: claims.clone(),
        })
    }

    /// Get the raw JWT token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the JWT claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Fails unless the caller holds the agent role.
    pub fn require_agent(&self) -> Result<(), crate::error::ApiError> {
        match self.role {
            Some(Role::Agent) => Ok(()),
            _ => Err(crate::error::ApiError::forbidden(
                "Only agents may perform this action",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(metadata: Option<serde_json::Value>) -> Claims {
        Claims {
            sub: "5bd9e3c0-3a71-4a6e-a9b3-0f6b2a4a9f11".to_string(),
            aud: "authenticated".to_string(),
            iss: "https://example.supabase.co/auth/v1".to_string(),
            iat: 0,
            exp: i64::MAX,
            nbf: None,
            email: Some("user@example.com".to_string()),
            user_metadata: metadata,
        }
    }

    #[test]
    fn role_is_read_from_explicit_metadata() {
        let ctx =
            AuthContext::from_claims(&claims(Some(serde_json::json!({"role": "agent"}))), "tok")
                .unwrap();
        assert_eq!(ctx.role, Some(Role::Agent));
        assert!(ctx.require_agent().is_ok());
    }

    #[test]
    fn missing_role_denies_agent_actions() {
        let ctx = AuthContext::from_claims(&claims(None), "tok").unwrap();
        assert_eq!(ctx.role, None);
        assert!(ctx.require_agent().is_err());
    }

    #[test]
    fn seeker_role_denies_agent_actions() {
        let ctx =
            AuthContext::from_claims(&claims(Some(serde_json::json!({"role": "seeker"}))), "tok")
                .unwrap();
        assert!(ctx.require_agent().is_err());
    }

    #[test]
    fn malformed_subject_is_an_error() {
        let mut c = claims(None);
        c.sub = "not-a-uuid".to_string();
        assert!(AuthContext::from_claims(&c, "tok").is_err());
    }
}
