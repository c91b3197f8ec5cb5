//! Notes backend. Stores notes in a JSON file and summarizes them with Gemini.
//!
//! Serves the REST contract consumed by `notes-client` under `/api`.

pub mod config;
pub mod routes;
pub mod store;
pub mod summarizer;

pub use routes::{router, AppState};
pub use store::NoteStore;
