//! NoteStore, a JSON-file backed note storage
//!
//! All notes live in memory in insertion order and are written through to a
//! single JSON object keyed by note id (`{"<id>": {id, title, content}}`).

use notes_types::Note;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("notes file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("notes file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct NoteStore {
    /// `None` keeps everything in memory
    path: Option<PathBuf>,
    notes: Mutex<Vec<Note>>,
}

impl NoteStore {
    /// Open (or lazily create) the notes file at `path`
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let notes = match tokio::fs::read(&path).await {
            Ok(bytes) => decode(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        log::info!("Loaded {} notes from {}", notes.len(), path.display());

        Ok(Self {
            path: Some(path),
            notes: Mutex::new(notes),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            notes: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All notes in insertion order
    pub async fn list(&self) -> Vec<Note> {
        self.notes.lock().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Note> {
        self.notes.lock().await.iter().find(|n| n.id == id).cloned()
    }

    pub async fn create(&self, title: &str, content: &str) -> Result<Note, StoreError> {
        let note = Note {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
        };

        let mut guard = self.notes.lock().await;
        let mut next = guard.clone();
        next.push(note.clone());
        self.persist(&next).await?;
        *guard = next;

        Ok(note)
    }

    /// `Ok(None)` when no note has this id
    pub async fn update(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Option<Note>, StoreError> {
        let mut guard = self.notes.lock().await;
        let Some(pos) = guard.iter().position(|n| n.id == id) else {
            return Ok(None);
        };

        let mut next = guard.clone();
        next[pos].title = title.to_string();
        next[pos].content = content.to_string();
        let updated = next[pos].clone();
        self.persist(&next).await?;
        *guard = next;

        Ok(Some(updated))
    }

    /// `Ok(false)` when no note has this id
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut guard = self.notes.lock().await;
        if !guard.iter().any(|n| n.id == id) {
            return Ok(false);
        }

        let next: Vec<Note> = guard.iter().filter(|n| n.id != id).cloned().collect();
        self.persist(&next).await?;
        *guard = next;

        Ok(true)
    }

    async fn persist(&self, notes: &[Note]) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let bytes = encode(notes)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}

fn encode(notes: &[Note]) -> Result<Vec<u8>, StoreError> {
    let mut map = Map::new();
    for note in notes {
        map.insert(note.id.clone(), serde_json::to_value(note)?);
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    map.serialize(&mut ser)?;
    Ok(buf)
}

fn decode(bytes: &[u8]) -> Result<Vec<Note>, StoreError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let map: Map<String, Value> = serde_json::from_slice(bytes)?;
    map.into_iter()
        .map(|(_, value)| serde_json::from_value(value).map_err(StoreError::from))
        .collect()
}
