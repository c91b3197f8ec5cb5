//! Create/edit form state.

use notes_types::{Note, NoteInput};

pub const CREATE_HEADING: &str = "Create a New Note";
pub const EDIT_HEADING: &str = "Edit Note";

/// Transient form bound to zero or one note.
///
/// `editing_id == None` is create mode; `Some(id)` is edit mode for that note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub editing_id: Option<String>,
    pub title: String,
    pub content: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            EDIT_HEADING
        } else {
            CREATE_HEADING
        }
    }

    /// The cancel control only makes sense while editing
    pub fn shows_cancel(&self) -> bool {
        self.is_editing()
    }

    /// Back to create mode with empty fields
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Switch to edit mode for `note`
    pub fn load(&mut self, note: &Note) {
        self.editing_id = Some(note.id.clone());
        self.title = note.title.clone();
        self.content = note.content.clone();
    }

    pub fn input(&self) -> NoteInput {
        NoteInput::new(self.title.clone(), self.content.clone())
    }
}
