//! Line-oriented terminal front end.

use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::card::NoteCard;
use crate::form::FormState;
use crate::view::NoteView;

/// Renders onto any writer and reads answers from any async line source.
pub struct TerminalView<R, W> {
    lines: Lines<R>,
    out: W,
    write_failed: bool,
}

impl<R, W> TerminalView<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
            write_failed: false,
        }
    }

    /// Next input line, `None` once input is closed
    pub async fn read_line(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                None
            }
        }
    }

    pub fn print(&mut self, text: &str) {
        self.emit(&format!("{}\n", text));
    }

    pub fn prompt(&mut self, text: &str) {
        self.emit(text);
    }

    /// Set once a write to the output has failed, e.g. a closed pipe
    pub fn write_failed(&self) -> bool {
        self.write_failed
    }

    /// Write and flush, logging only the first failure
    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());

        if let Err(e) = result {
            if !self.write_failed {
                log::error!("Failed to write output: {}", e);
            }
            self.write_failed = true;
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl<R, W> NoteView for TerminalView<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn render_notes(&mut self, cards: &[NoteCard]) {
        let mut text = format!("\n== Notes ({}) ==\n", cards.len());
        if cards.is_empty() {
            text.push_str("(no notes yet)\n");
        }
        for card in cards {
            text.push_str(&format!("[{}] {}\n    {}\n", card.id, card.title, card.preview));
        }
        self.emit(&text);
    }

    async fn render_form(&mut self, form: &FormState) {
        let mut text = format!(
            "\n== {} ==\nTitle:   {}\nContent: {}\n",
            form.heading(),
            form.title,
            form.content
        );
        if let Some(id) = form.editing_id.as_deref().filter(|_| form.shows_cancel()) {
            text.push_str(&format!("(editing {}; `cancel` to discard)\n", id));
        }
        self.emit(&text);
    }

    async fn confirm(&mut self, message: &str) -> bool {
        self.prompt(&format!("{} [y/N] ", message));
        match self.read_line().await {
            Some(answer) => is_yes(&answer),
            None => false,
        }
    }

    async fn show_summary(&mut self, text: &str) {
        self.emit(&format!("\n== Summary ==\n{}\n", text));
    }
}
