//! Current-user route

use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::api::response::DataResponse;
use crate::auth::RequireAuth;
use crate::domain::auth::Role;

#[derive(Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// GET /me
///
/// Identity and role straight from the verified token; no collaborator
/// round trip.
pub async fn get_me(auth: RequireAuth) -> impl IntoResponse {
    Json(DataResponse::new(MeResponse {
        id: auth.user_id.to_string(),
        email: auth.email.clone(),
        role: auth.role,
    }))
}
