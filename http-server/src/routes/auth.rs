use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    AppState,
    error::ApiError,
    models::{MockUser, auth_cookie_header, session_token},
};

// Login and register response
#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: MockUser,
}

// Login endpoint, accepts anything and hands out a session cookie
pub async fn login(State(state): State<AppState>, body: Bytes) -> Response {
    tokio::time::sleep(state.latency.login).await;

    let token = session_token(&body);
    tracing::info!(path = "/api/auth/login", "Mock login");

    let response = AuthResponse {
        success: true,
        user: MockUser::default(),
    };
    ([(SET_COOKIE, auth_cookie_header(&token))], Json(response)).into_response()
}

// Register endpoint, only fails when the body is not JSON or is `null`.
// Missing or non-string fields are tolerated and the email is echoed when present.
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AuthResponse>, ApiError> {
    tokio::time::sleep(state.latency.register).await;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Registration API error");
        ApiError::RegistrationFailed
    })?;
    if payload.is_null() {
        tracing::warn!("Registration API error: null body");
        return Err(ApiError::RegistrationFailed);
    }

    let email = payload
        .get("email")
        .and_then(Value::as_str)
        .map(str::to_string);
    tracing::info!(
        path = "/api/auth/register",
        email = email.as_deref().unwrap_or_default(),
        "Mock registration"
    );

    Ok(Json(AuthResponse {
        success: true,
        user: MockUser::with_email(email),
    }))
}

// Canned registration answer for requests without a body
pub async fn register_canned(State(state): State<AppState>) -> Json<AuthResponse> {
    tokio::time::sleep(state.latency.register).await;
    tracing::info!(path = "/api/auth/register", "Mock registration");

    Json(AuthResponse {
        success: true,
        user: MockUser::default(),
    })
}
