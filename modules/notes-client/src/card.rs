use notes_types::Note;

/// Number of content characters shown on a card
pub const PREVIEW_CHARS: usize = 100;

/// What a note looks like in the rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: String,
    pub title: String,
    pub preview: String,
}

impl NoteCard {
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            preview: preview(&note.content),
        }
    }
}

/// First `PREVIEW_CHARS` characters followed by an ellipsis.
///
/// The ellipsis is appended even when nothing was cut. Content is not escaped.
pub fn preview(content: &str) -> String {
    let mut out: String = content.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}
