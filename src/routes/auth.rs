//! Authentication routes
//!
//! These routes proxy credential handling to the hosted collaborator and
//! translate its responses into this API's identity/role shape. A
//! collaborator failure rejects the request; no local state is touched.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::response::{Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::auth::{
    AuthResponse, RefreshTokenRequest, SessionResponse, SignInRequest, SignUpRequest,
    SignupPendingResponse, User,
};
use crate::error::ApiError;
use crate::services::SignupOutcome;

/// POST /auth/signup
///
/// Register a new identity with the collaborator. The chosen role is
/// recorded in the identity's explicit metadata.
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignUpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state
        .supabase
        .sign_up(
            &req.email,
            &req.password,
            req.role,
            req.name.as_deref(),
            req.phone.as_deref(),
        )
        .await?;

    match outcome {
        SignupOutcome::Session(session) => {
            let user: User = session.user.into();
            tracing::info!(user_id = %user.id, role = ?user.role, "Signup complete");
            Ok(Created(DataResponse::new(serde_json::to_value(
                AuthResponse {
                    access_token: session.access_token,
                    refresh_token: session.refresh_token,
                    expires_in: session.expires_in,
                    user,
                },
            )
            .map_err(anyhow::Error::from)?))
            .into_response())
        }
        SignupOutcome::Pending(pending) => {
            let pending: SignupPendingResponse = pending.into();
            tracing::info!(user_id = %pending.user_id, "Signup pending email confirmation");
            Ok(Created(DataResponse::new(
                serde_json::to_value(pending).map_err(anyhow::Error::from)?,
            ))
            .into_response())
        }
    }
}

/// POST /auth/signin
///
/// Sign in with email and password.
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.supabase.sign_in(&req.email, &req.password).await?;

    let user: User = session.user.into();
    tracing::debug!(user_id = %user.id, role = ?user.role, "Signin complete");

    Ok(Json(DataResponse::new(AuthResponse {
        access_token: session.access_token,
        refresh_token: session.refresh_token,
        expires_in: session.expires_in,
        user,
    })))
}

/// POST /auth/signout
///
/// Sign out the current user.
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    state.supabase.sign_out(auth.token()).await;
    Ok(NoContent)
}

/// GET /auth/session
///
/// Current session and identity, with the role re-read from the
/// collaborator's profile record.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let supabase_user = state.supabase.get_user(auth.token()).await?;

    let user: User = supabase_user.into();
    let session = SessionResponse {
        user,
        access_token: auth.token().to_string(),
        expires_at: auth.claims().exp,
    };

    Ok(Json(DataResponse::new(session)))
}

/// POST /auth/refresh
///
/// Refresh the access token.
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.supabase.refresh(&req.refresh_token).await?;

    let user: User = session.user.into();

    Ok(Json(DataResponse::new(AuthResponse {
        access_token: session.access_token,
        refresh_token: session.refresh_token,
        expires_in: session.expires_in,
        user,
    })))
}
