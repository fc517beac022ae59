use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    #[allow(dead_code)]
    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

/// Policy for bedroom/bathroom threshold values that are neither a number
/// nor the "any" sentinel. The upstream data entry paths are inconsistent
/// here, so the behavior is an explicit deployment choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidThresholdPolicy {
    /// Treat a malformed threshold as "no constraint".
    #[default]
    Ignore,
    /// Reject the request with a validation error.
    Reject,
}

impl InvalidThresholdPolicy {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "reject" | "strict" => Self::Reject,
            _ => Self::Ignore,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Supabase Auth (the hosted identity collaborator)
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_jwt_jwks_url: String,
    pub supabase_jwt_issuer: String,
    pub supabase_jwt_audience: String,
    pub jwks_cache_ttl_seconds: u64,
    pub auth_timeout_seconds: u64,

    // Search behavior
    pub invalid_threshold_policy: InvalidThresholdPolicy,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Supabase
        let supabase_url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        url::Url::parse(&supabase_url).context("SUPABASE_URL is not a valid URL")?;
        let supabase_url = supabase_url.trim_end_matches('/').to_string();

        let supabase_anon_key =
            env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?;

        let supabase_jwt_jwks_url = env::var("SUPABASE_JWT_JWKS_URL")
            .unwrap_or_else(|_| format!("{supabase_url}/auth/v1/.well-known/jwks.json"));
        let supabase_jwt_issuer =
            env::var("SUPABASE_JWT_ISSUER").unwrap_or_else(|_| format!("{supabase_url}/auth/v1"));
        let supabase_jwt_audience =
            env::var("SUPABASE_JWT_AUDIENCE").unwrap_or_else(|_| "authenticated".to_string());
        let jwks_cache_ttl_seconds = env::var("JWKS_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1800); // 30 minutes default
        let auth_timeout_seconds = env::var("AUTH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let invalid_threshold_policy = InvalidThresholdPolicy::from_str(
            &env::var("SEARCH_INVALID_THRESHOLD").unwrap_or_else(|_| "ignore".to_string()),
        );

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            supabase_url,
            supabase_anon_key,
            supabase_jwt_jwks_url,
            supabase_jwt_issuer,
            supabase_jwt_audience,
            jwks_cache_ttl_seconds,
            auth_timeout_seconds,
            invalid_threshold_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing_defaults_to_dev() {
        assert_eq!(Environment::from_str("production"), Environment::Prod);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("anything-else"), Environment::Dev);
    }

    #[test]
    fn threshold_policy_defaults_to_ignore() {
        assert_eq!(
            InvalidThresholdPolicy::from_str("reject"),
            InvalidThresholdPolicy::Reject
        );
        assert_eq!(
            InvalidThresholdPolicy::from_str("strict"),
            InvalidThresholdPolicy::Reject
        );
        assert_eq!(
            InvalidThresholdPolicy::from_str("whatever"),
            InvalidThresholdPolicy::Ignore
        );
    }
}
