//! # Evently API
//!
//! The API crate exposes the recurring-event engine over HTTP so the
//! dashboard's event dialog can validate, normalize and submit drafts.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate JSON requests into calls on `evently-core`
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Nothing is persisted here.

/// Configuration module for API settings
pub mod config;
/// Request handlers for the event form
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use evently_core::shortcuts::ShortcutConfig;
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// The date-picker shortcut table lives here rather than in a global so each
/// server (and each test) carries its own.
#[derive(Debug, Clone, Default)]
pub struct ApiState {
    /// Quick picks offered by the start/end date pickers
    pub shortcuts: ShortcutConfig,
}

/// Builds the application router with all routes and the given state
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Event form endpoints
        .merge(routes::event::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// Sets up logging, layers CORS, tracing and a request timeout over the
/// router, and serves until the listener fails.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = evently_api::config::ApiConfig::from_env()?;
/// evently_api::start_server(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        shortcuts: config.shortcuts.clone(),
    });
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
}
