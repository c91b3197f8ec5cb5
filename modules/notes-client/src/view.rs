use async_trait::async_trait;

use crate::card::NoteCard;
use crate::form::FormState;

/// A front end the controller renders into.
#[async_trait]
pub trait NoteView: Send {
    /// Replace the whole rendered collection
    async fn render_notes(&mut self, cards: &[NoteCard]);

    async fn render_form(&mut self, form: &FormState);

    /// Ask the user a yes/no question
    async fn confirm(&mut self, message: &str) -> bool;

    /// Show `text` in the summary panel, replacing whatever was there
    async fn show_summary(&mut self, text: &str);
}
