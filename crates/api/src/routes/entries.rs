//! Insert-and-count endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use entry_store::{EntryData, EntryStore};
use serde::Serialize;

use crate::error::ApiError;

/// Message returned with every successfully created entry.
pub const ENTRY_CREATED_MESSAGE: &str = "Entry added successfully with random data.";

/// Shared application state accessible from all handlers.
pub struct AppState<S: EntryStore> {
    pub store: S,
}

#[derive(Serialize)]
pub struct EntryCreatedResponse {
    pub message: &'static str,
    pub data: String,
    pub count: i64,
}

/// GET / — store a freshly generated UUID and report the total row count.
#[tracing::instrument(skip(state))]
pub async fn create<S: EntryStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<EntryCreatedResponse>, ApiError> {
    tracing::info!("handling request for '/' endpoint");

    let entry = state.store.insert(EntryData::generate()).await?;
    let count = state.store.count().await?;

    tracing::info!(id = %entry.id, count, "entry created");
    metrics::counter!("entries_created_total").increment(1);

    Ok(Json(EntryCreatedResponse {
        message: ENTRY_CREATED_MESSAGE,
        data: entry.data,
        count,
    }))
}
