use axum::http::{HeaderMap, header::COOKIE};
use sha2::{Digest, Sha256};

pub const AUTH_COOKIE: &str = "auth";

// Opaque session token derived from whatever the client sent to the login endpoint
pub fn session_token(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"storefront-session:");
    hasher.update(body);
    hex::encode(hasher.finalize())
}

pub fn auth_cookie_header(token: &str) -> String {
    format!("{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

// True when any Cookie header carries an `auth` cookie, whatever its value
pub fn has_auth_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.split_once('=').map(|(name, _)| name))
        .any(|name| name.trim() == AUTH_COOKIE)
}
