//! Notes client: lists, creates, edits, deletes and summarizes notes held
//! by a notes REST backend.
//!
//! The controller talks to the backend through the [`api::NotesApi`]
//! capability and renders into a [`view::NoteView`], so both ends can be
//! replaced in tests.

pub mod api;
pub mod card;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http_client;
pub mod terminal;
pub mod view;

pub use api::NotesApi;
pub use controller::NoteListController;
pub use error::ClientError;
pub use http_client::HttpNotesApi;
pub use view::NoteView;
