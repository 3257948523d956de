//! # Slotbook API
//!
//! The API crate provides the web server for the Slotbook appointment scheduler.
//! It exposes endpoints for listing, booking, rescheduling and cancelling hourly
//! appointments per operator, plus free-slot queries.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into lifecycle operations
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Business rules live in `slotbook-core`; handlers only call
//! [`AppointmentService`].

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping for handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, Router};
use eyre::{Result, WrapErr};
use slotbook_core::service::AppointmentService;
use slotbook_core::store::AppointmentStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Lifecycle manager over the configured appointment store
    pub service: AppointmentService,
}

impl ApiState {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Arc<Self> {
        Arc::new(Self {
            service: AppointmentService::new(store),
        })
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Appointment endpoints
        .merge(routes::appointment::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and appointment store
///
/// This function sets up logging, configures routes and middleware, and
/// serves HTTP until the listener fails.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use slotbook_core::store::memory::InMemoryStore;
/// # async fn run() -> eyre::Result<()> {
/// let config = slotbook_api::config::ApiConfig::from_env()?;
/// slotbook_api::start_server(config, Arc::new(InMemoryStore::new())).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    store: Arc<dyn AppointmentStore>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = router(ApiState::new(store));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<HeaderValue>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS value")?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
