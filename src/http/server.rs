//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request timeout, request ID)
//! - Build the upstream client and metrics registry once at startup
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::holidays::{CalendarificClient, HolidayService, HolidaySource};
use crate::http::handlers::{self, HOLIDAYS_ENDPOINT};
use crate::observability::Metrics;

const METRICS_UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub holidays: HolidayService,
    pub metrics: Arc<Metrics>,
}

/// Errors building the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to build metrics registry: {0}")]
    Metrics(#[from] BuildError),
}

/// HTTP server for the holiday service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    metrics: Arc<Metrics>,
}

impl HttpServer {
    /// Create a server that talks to the configured upstream.
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        let client = CalendarificClient::new(&config.upstream)?;
        Self::with_source(config, Arc::new(client))
    }

    /// Create a server backed by an arbitrary holiday source.
    pub fn with_source(
        config: ServiceConfig,
        source: Arc<dyn HolidaySource>,
    ) -> Result<Self, ServerError> {
        let metrics = Arc::new(Metrics::new()?);
        let state = AppState {
            holidays: HolidayService::new(source, config.upstream.api_key.clone()),
            metrics: metrics.clone(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            metrics,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::index))
            .route("/api/countries", get(handlers::countries))
            .route(HOLIDAYS_ENDPOINT, get(handlers::holidays))
            .route("/health", get(handlers::health));

        if config.observability.metrics_enabled {
            router = router.route("/metrics", get(handlers::metrics));
        }

        router
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            api_key_configured = !self.config.upstream.api_key.is_empty(),
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        let metrics = self.metrics.clone();
        let upkeep = tokio::spawn(async move {
            let mut interval = tokio::time::interval(METRICS_UPKEEP_INTERVAL);
            loop {
                interval.tick().await;
                metrics.run_upkeep();
            }
        });

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await;

        upkeep.abort();
        tracing::info!("HTTP server stopped");
        result
    }

    /// The fully layered router, for in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared handle to the metrics registry.
    pub fn metrics(&self) -> Arc<Metrics> {
        self.metrics.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
