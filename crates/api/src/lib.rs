//! HTTP API for the entry service.
//!
//! Serves the insert-and-count route, a liveness route and Prometheus
//! metrics, with structured logging (tracing) on every request.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use entry_store::{EntryStore, PostgresEntryStore, SchemaStatus};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;

use config::DatabaseConfig;
use routes::entries::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: EntryStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::entries::create::<S>))
        .route("/status", get(routes::status::check))
        .with_state(state)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}

/// Wraps a store into the state shared by all handlers.
pub fn create_state<S: EntryStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState { store })
}

/// Builds a pool that opens connections on first use.
///
/// Never fails: an unreachable database surfaces later as errors from
/// bootstrap and from individual requests.
pub fn connect_lazy(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(config.connect_options())
}

/// Result of the best-effort schema bootstrap run at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The `entries` table is in place.
    Ready(SchemaStatus),
    /// Bootstrap failed; the server keeps starting and requests that need
    /// the table will fail until it exists.
    Failed(String),
}

impl BootstrapOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, BootstrapOutcome::Ready(_))
    }
}

/// Ensures the target database and the `entries` table exist, logging and
/// swallowing any error.
///
/// A failed database step does not stop the table step: the database may
/// already exist while the maintenance database is off limits to this user.
pub async fn bootstrap_schema(store: &PostgresEntryStore) -> BootstrapOutcome {
    match store.ensure_database().await {
        Ok(status) => {
            metrics::counter!("database_bootstrap_total", "outcome" => status.as_str())
                .increment(1);
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not verify that the database exists");
            metrics::counter!("database_bootstrap_total", "outcome" => "failed").increment(1);
        }
    }

    match store.ensure_schema().await {
        Ok(status) => {
            metrics::counter!("schema_bootstrap_total", "outcome" => status.as_str()).increment(1);
            BootstrapOutcome::Ready(status)
        }
        Err(err) => {
            tracing::error!(error = %err, "an error occurred while setting up the database");
            metrics::counter!("schema_bootstrap_total", "outcome" => "failed").increment(1);
            BootstrapOutcome::Failed(err.to_string())
        }
    }
}
