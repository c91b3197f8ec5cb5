//! Shared types for the notes backend and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A note as stored by the backend. Ids are assigned server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
}

// =====================================================
// Request Types
// =====================================================

/// Body of a create (POST /notes) or update (PUT /notes/{id}) request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Body of POST /notes/summarize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub content: String,
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Error body returned with 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
