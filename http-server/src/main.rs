use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use storefront::{Latency, MockRepository};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod middleware;
mod models;
mod routes;

use config::Config;
use error::ApiError;
use middleware::route_guard;
use routes::auth::{login, register, register_canned};
use routes::orders::{list_orders, order_detail};

// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<MockRepository>,
    pub latency: Latency,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            repository: Arc::new(MockRepository::new()),
            latency: config.latency(),
            config: Arc::new(config),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/auth/login", get(login).post(login))
        .route("/api/auth/register", post(register).get(register_canned))
        .route("/api/orders", get(list_orders).post(list_orders))
        .route("/api/orders/detail", get(order_detail).post(order_detail))
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), route_guard))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let bind_addr = config.bind_addr;
    tracing::info!(
        latency_scale = config.latency_scale,
        enforce_auth = config.enforce_auth,
        api_base_url = %config.api_base_url,
        "Configuration loaded"
    );

    let state = AppState::new(config);
    tracing::info!(orders = state.repository.len(), "Mock order repository loaded");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server running on http://{}", bind_addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}

// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// Root endpoint
async fn root() -> &'static str {
    "Storefront mock API - POST /api/auth/login, POST /api/auth/register, GET /api/orders, GET /api/orders/detail?id=<id>"
}

// Anything not matched above
async fn not_found() -> ApiError {
    ApiError::NotFound
}
