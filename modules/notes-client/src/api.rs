//! The notes API capability consumed by the controller.

use async_trait::async_trait;
use notes_types::{Note, NoteInput};

use crate::error::ClientError;

/// Operations the client needs from the notes backend.
///
/// Object safe so the controller can hold an `Arc<dyn NotesApi>` and tests
/// can swap in a fake.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// GET /notes
    async fn list(&self) -> Result<Vec<Note>, ClientError>;

    /// POST /notes
    ///
    /// Any 2xx counts as success. The stored note is `Some` only when the
    /// response body decodes as one.
    async fn create(&self, input: &NoteInput) -> Result<Option<Note>, ClientError>;

    /// PUT /notes/{id}, same success rule as `create`
    async fn update(&self, id: &str, input: &NoteInput) -> Result<Option<Note>, ClientError>;

    /// DELETE /notes/{id}
    async fn delete(&self, id: &str) -> Result<(), ClientError>;

    /// POST /notes/summarize, returns the `summary` field
    async fn summarize(&self, content: &str) -> Result<String, ClientError>;

    /// Latest server copy of one note.
    ///
    /// The contract has no single-note endpoint, so this re-fetches the list.
    async fn get(&self, id: &str) -> Result<Option<Note>, ClientError> {
        let notes = self.list().await?;
        Ok(notes.into_iter().find(|n| n.id == id))
    }
}
