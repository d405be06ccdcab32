use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{AppState, models::has_auth_cookie};

// Pages reachable without signing in
pub const PUBLIC_PAGES: [&str; 2] = ["/", "/auth"];

pub fn is_public_page(path: &str) -> bool {
    PUBLIC_PAGES.contains(&path)
}

// API and health endpoints are never guarded
fn is_unguarded(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/") || path == "/health"
}

// Route guard: logs page requests without an `auth` cookie and, only when
// enforcement is configured, redirects them to the login page
pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    if is_unguarded(&path) || is_public_page(&path) || has_auth_cookie(request.headers()) {
        return next.run(request).await;
    }

    if state.config.enforce_auth {
        let target = state.config.url("/auth?mode=login");
        tracing::info!(path = %path, target = %target, "Redirecting unauthenticated request");
        return Redirect::to(&target).into_response();
    }

    tracing::warn!(path = %path, "Unauthenticated request to protected page");
    next.run(request).await
}
