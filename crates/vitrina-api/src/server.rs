//! API server implementation.
//!
//! Provides health, ready, welcome, and catalog endpoints.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use vitrina_catalog::ProductCatalog;
use vitrina_rest::metrics::serve_metrics;
use vitrina_rest::router::catalog_router;
use vitrina_rest::state::{RestConfig, RestState};

use crate::config::{Config, CorsConfig};

// ============================================================================
// Health, Ready, and Welcome Responses
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ReadyResponse {
    /// Service readiness status.
    pub ready: bool,
}

/// Welcome payload served at the root path.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct WelcomeResponse {
    /// Greeting line.
    pub message: String,
    /// Crate version.
    pub version: String,
    /// Where the interesting endpoints live.
    pub endpoints: WelcomeEndpoints,
}

/// Endpoint index inside the welcome payload.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct WelcomeEndpoints {
    /// Product API base path.
    pub products: String,
    /// `OpenAPI` document path.
    pub docs: String,
    /// Prometheus metrics path.
    pub metrics: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn ready() -> Json<ReadyResponse> {
    // The catalog is seeded in-process; once the server answers, it is ready.
    Json(ReadyResponse { ready: true })
}

async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Vitrina Products API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: WelcomeEndpoints {
            products: "/api/products".to_string(),
            docs: "/api/openapi.json".to_string(),
            metrics: "/metrics".to_string(),
        },
    })
}

// ============================================================================
// Server
// ============================================================================

/// The Vitrina API server.
pub struct Server {
    config: Config,
    catalog: Arc<ProductCatalog>,
}

impl Server {
    /// Creates a server over the static seed catalog.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, Arc::new(ProductCatalog::seed()))
    }

    /// Creates a server over an explicit catalog (tests, fixtures).
    #[must_use]
    pub fn with_catalog(config: Config, catalog: Arc<ProductCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Builds the full router without binding to a port.
    #[must_use]
    pub fn router(&self) -> Router {
        let rest_state = RestState::new(Arc::clone(&self.catalog)).with_config(RestConfig {
            concurrency_limit: self.config.concurrency_limit,
        });

        Router::new()
            .route("/", get(welcome))
            .route("/health", get(health))
            .route("/ready", get(ready))
            .route("/metrics", get(|| async { serve_metrics().into_response() }))
            .nest("/api", catalog_router(rest_state))
            .layer(cors_layer(&self.config.cors))
    }

    /// Binds the configured port and serves until the process stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot bind to the port.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let router = self.router();

        tracing::info!(%addr, "vitrina-api listening");
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bind to {addr}: {e}"))?;
        axum::serve(listener, router).await?;
        Ok(())
    }
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .max_age(Duration::from_secs(config.max_age_seconds.max(60)));

    if config.allowed_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
