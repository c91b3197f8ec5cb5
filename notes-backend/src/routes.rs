//! Axum route handlers for the notes REST API.

use crate::store::NoteStore;
use crate::summarizer::Summarizer;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use notes_types::*;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const MISSING_FIELDS: &str = "Title and content are required";
const MISSING_CONTENT: &str = "Content is required for summarization";
const NOT_FOUND: &str = "Note not found";
const NO_API_KEY: &str = "Error: GOOGLE_API_KEY not configured.";

pub struct AppState {
    pub store: NoteStore,
    /// `None` when no API key is configured
    pub summarizer: Option<Arc<dyn Summarizer>>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: NoteStore, summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        Self {
            store,
            summarizer,
            start_time: Instant::now(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/api/health", get(health))
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/summarize", post(summarize_note))
        .route(
            "/api/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .with_state(state)
        .layer(cors)
}

/// Body of create/update. Fields are optional so missing keys can be
/// reported as a 400 instead of a decode rejection.
#[derive(Debug, Deserialize)]
pub struct NotePayload {
    title: Option<String>,
    content: Option<String>,
}

impl NotePayload {
    fn into_fields(self) -> Option<(String, String)> {
        Some((self.title?, self.content?))
    }
}

#[derive(Debug, Deserialize)]
pub struct SummarizePayload {
    content: Option<String>,
}

fn error(status: StatusCode, msg: &str) -> Response {
    (status, Json(ApiError::new(msg))).into_response()
}

fn summary(status: StatusCode, text: String) -> Response {
    (status, Json(SummarizeResponse { summary: text })).into_response()
}

fn store_failure(e: crate::store::StoreError) -> Response {
    log::error!("Note store failure: {}", e);
    error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save notes")
}

// GET /api/health
async fn health(State(state): State<Arc<AppState>>) -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "version": VERSION,
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "summarizer_configured": state.summarizer.is_some(),
    }))
    .into_response()
}

// GET /api/notes
async fn list_notes(State(state): State<Arc<AppState>>) -> Response {
    Json(state.store.list().await).into_response()
}

// GET /api/notes/:id
async fn get_note(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.store.get(&id).await {
        Some(note) => Json(note).into_response(),
        None => error(StatusCode::NOT_FOUND, NOT_FOUND),
    }
}

// POST /api/notes
async fn create_note(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Response {
    let Some((title, content)) = payload.ok().and_then(|Json(p)| p.into_fields()) else {
        return error(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    };

    match state.store.create(&title, &content).await {
        Ok(note) => {
            log::info!("Created note {}", note.id);
            (StatusCode::CREATED, Json(note)).into_response()
        }
        Err(e) => store_failure(e),
    }
}

// PUT /api/notes/:id
async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Response {
    let Some((title, content)) = payload.ok().and_then(|Json(p)| p.into_fields()) else {
        return error(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    };

    match state.store.update(&id, &title, &content).await {
        Ok(Some(note)) => {
            log::info!("Updated note {}", id);
            Json(note).into_response()
        }
        Ok(None) => error(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(e) => store_failure(e),
    }
}

// DELETE /api/notes/:id
async fn delete_note(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.store.delete(&id).await {
        Ok(true) => {
            log::info!("Deleted note {}", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => error(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(e) => store_failure(e),
    }
}

// POST /api/notes/summarize
async fn summarize_note(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizePayload>, JsonRejection>,
) -> Response {
    let Some(content) = payload.ok().and_then(|Json(p)| p.content) else {
        return error(StatusCode::BAD_REQUEST, MISSING_CONTENT);
    };

    let Some(summarizer) = state.summarizer.clone() else {
        return summary(StatusCode::INTERNAL_SERVER_ERROR, NO_API_KEY.to_string());
    };

    match summarizer.summarize(&content).await {
        Ok(text) => summary(StatusCode::OK, text),
        Err(e) => {
            log::error!("Summarization failed: {}", e);
            summary(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error during summarization: {}", e),
            )
        }
    }
}
