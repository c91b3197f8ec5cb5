//! Note list controller: glues the API capability, the form, and a view.

use std::sync::Arc;

use crate::api::NotesApi;
use crate::card::NoteCard;
use crate::error::ClientError;
use crate::form::FormState;
use crate::view::NoteView;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";
pub const SUMMARY_PLACEHOLDER: &str = "Summarizing...";

pub struct NoteListController<V: NoteView> {
    api: Arc<dyn NotesApi>,
    view: V,
    form: FormState,
}

impl<V: NoteView> NoteListController<V> {
    pub fn new(api: Arc<dyn NotesApi>, view: V) -> Self {
        Self {
            api,
            view,
            form: FormState::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Initial render on load
    pub async fn start(&mut self) -> Result<(), ClientError> {
        self.view.render_form(&self.form).await;
        self.list().await
    }

    /// Fetch every note and replace the rendered cards, in server order
    pub async fn list(&mut self) -> Result<(), ClientError> {
        let notes = self.api.list().await?;
        let cards: Vec<NoteCard> = notes.iter().map(NoteCard::from_note).collect();
        self.view.render_notes(&cards).await;
        Ok(())
    }

    pub async fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
        self.view.render_form(&self.form).await;
    }

    pub async fn set_content(&mut self, content: impl Into<String>) {
        self.form.content = content.into();
        self.view.render_form(&self.form).await;
    }

    /// Create or update depending on the form mode, then reset and re-list.
    ///
    /// Fields are sent as typed, empty ones included. On failure the form
    /// keeps its contents.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let input = self.form.input();

        match &self.form.editing_id {
            Some(id) => {
                log::info!("Updating note {}", id);
                self.api.update(id, &input).await?;
            }
            None => match self.api.create(&input).await? {
                Some(note) => log::info!("Created note {}", note.id),
                None => log::info!("Created note"),
            },
        }

        self.reset_form().await;
        self.list().await
    }

    /// Load the latest server copy of `id` into the form in edit mode
    pub async fn edit(&mut self, id: &str) -> Result<(), ClientError> {
        let Some(note) = self.api.get(id).await? else {
            log::warn!("Edit ignored, note {} not found", id);
            return Ok(());
        };

        self.form.load(&note);
        self.view.render_form(&self.form).await;
        Ok(())
    }

    /// Delete after confirmation. Declining sends nothing.
    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        if !self.view.confirm(DELETE_PROMPT).await {
            log::debug!("Delete of {} declined", id);
            return Ok(());
        }

        self.api.delete(id).await?;
        log::info!("Deleted note {}", id);
        self.list().await
    }

    /// Show a placeholder, ask the backend for a summary, then show it
    pub async fn summarize(&mut self, id: &str) -> Result<(), ClientError> {
        let Some(note) = self.api.get(id).await? else {
            log::warn!("Summarize ignored, note {} not found", id);
            return Ok(());
        };

        self.view.show_summary(SUMMARY_PLACEHOLDER).await;

        match self.api.summarize(&note.content).await {
            Ok(summary) => {
                self.view.show_summary(&summary).await;
                Ok(())
            }
            Err(e) => {
                self.view
                    .show_summary(&format!("Summary failed: {}", e))
                    .await;
                Err(e)
            }
        }
    }

    /// Cancel: back to create mode
    pub async fn reset_form(&mut self) {
        self.form.reset();
        self.view.render_form(&self.form).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use notes_types::{Note, NoteInput};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        List,
        Create(NoteInput),
        Update(String, NoteInput),
        Delete(String),
        Summarize(String),
        Summary(String),
        Confirm,
    }

    type Log = Arc<Mutex<Vec<Event>>>;

    struct FakeApi {
        notes: Mutex<Vec<Note>>,
        log: Log,
        fail_writes: bool,
        /// `false` mimics a backend whose 2xx bodies are not notes
        echo_notes: bool,
    }

    impl FakeApi {
        fn new(notes: Vec<Note>, log: Log) -> Self {
            Self {
                notes: Mutex::new(notes),
                log,
                fail_writes: false,
                echo_notes: true,
            }
        }

        fn failing(log: Log) -> Self {
            Self {
                fail_writes: true,
                ..Self::new(vec![], log)
            }
        }

        fn record(&self, event: Event) {
            self.log.lock().unwrap().push(event);
        }

        fn write_result(&self) -> Result<(), ClientError> {
            if self.fail_writes {
                return Err(ClientError::Status {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl NotesApi for FakeApi {
        async fn list(&self) -> Result<Vec<Note>, ClientError> {
            self.record(Event::List);
            Ok(self.notes.lock().unwrap().clone())
        }

        async fn create(&self, input: &NoteInput) -> Result<Option<Note>, ClientError> {
            self.record(Event::Create(input.clone()));
            self.write_result()?;
            let mut notes = self.notes.lock().unwrap();
            let note = Note {
                id: format!("id-{}", notes.len() + 1),
                title: input.title.clone(),
                content: input.content.clone(),
            };
            notes.push(note.clone());
            Ok(self.echo_notes.then_some(note))
        }

        async fn update(&self, id: &str, input: &NoteInput) -> Result<Option<Note>, ClientError> {
            self.record(Event::Update(id.to_string(), input.clone()));
            self.write_result()?;
            let mut notes = self.notes.lock().unwrap();
            let note = notes.iter_mut().find(|n| n.id == id).ok_or(ClientError::Status {
                status: 404,
                message: "Note not found".to_string(),
            })?;
            note.title = input.title.clone();
            note.content = input.content.clone();
            Ok(self.echo_notes.then(|| note.clone()))
        }

        async fn delete(&self, id: &str) -> Result<(), ClientError> {
            self.record(Event::Delete(id.to_string()));
            self.notes.lock().unwrap().retain(|n| n.id != id);
            Ok(())
        }

        async fn summarize(&self, content: &str) -> Result<String, ClientError> {
            self.record(Event::Summarize(content.to_string()));
            if self.fail_writes {
                return Err(ClientError::Status {
                    status: 500,
                    message: "Error: GOOGLE_API_KEY not configured.".to_string(),
                });
            }
            Ok(format!("short: {}", content))
        }
    }

    struct FakeView {
        log: Log,
        answer: bool,
        cards: Vec<NoteCard>,
        form_renders: Vec<FormState>,
    }

    #[async_trait]
    impl NoteView for FakeView {
        async fn render_notes(&mut self, cards: &[NoteCard]) {
            self.cards = cards.to_vec();
        }

        async fn render_form(&mut self, form: &FormState) {
            self.form_renders.push(form.clone());
        }

        async fn confirm(&mut self, message: &str) -> bool {
            assert_eq!(message, DELETE_PROMPT);
            self.log.lock().unwrap().push(Event::Confirm);
            self.answer
        }

        async fn show_summary(&mut self, text: &str) {
            self.log.lock().unwrap().push(Event::Summary(text.to_string()));
        }
    }

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn setup(notes: Vec<Note>, answer: bool) -> (NoteListController<FakeView>, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let api = Arc::new(FakeApi::new(notes, log.clone()));
        let view = FakeView {
            log: log.clone(),
            answer,
            cards: vec![],
            form_renders: vec![],
        };
        (NoteListController::new(api, view), log)
    }

    fn events(log: &Log) -> Vec<Event> {
        log.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn test_list_renders_one_card_per_note_in_order() {
        let long = "a".repeat(140);
        let (mut ctrl, _) = setup(
            vec![note("1", "First", &long), note("2", "Second", "short"), note("3", "Third", "")],
            true,
        );

        ctrl.list().await.unwrap();

        let cards = &ctrl.view().cards;
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "First");
        assert_eq!(cards[0].preview, format!("{}...", "a".repeat(100)));
        assert_eq!(cards[1].preview, "short...");
        assert_eq!(cards[2].id, "3");
    }

    #[tokio::test]
    async fn test_submit_in_create_mode_posts_and_resets() {
        let (mut ctrl, log) = setup(vec![], true);
        ctrl.set_title("A").await;
        ctrl.set_content("B").await;

        ctrl.submit().await.unwrap();

        assert_eq!(
            events(&log),
            vec![Event::Create(NoteInput::new("A", "B")), Event::List]
        );
        assert_eq!(ctrl.form(), &FormState::default());
        assert_eq!(ctrl.view().form_renders.last(), Some(&FormState::default()));
        assert_eq!(ctrl.view().cards.len(), 1);
        assert_eq!(ctrl.view().cards[0].title, "A");
    }

    #[tokio::test]
    async fn test_submit_sends_empty_fields_as_is() {
        let (mut ctrl, log) = setup(vec![], true);

        ctrl.submit().await.unwrap();

        assert_eq!(events(&log)[0], Event::Create(NoteInput::new("", "")));
    }

    #[tokio::test]
    async fn test_submit_in_edit_mode_puts_to_that_id() {
        let (mut ctrl, log) = setup(vec![note("n-7", "Old", "old body")], true);
        ctrl.edit("n-7").await.unwrap();
        ctrl.set_title("New").await;

        ctrl.submit().await.unwrap();

        assert!(events(&log).contains(&Event::Update(
            "n-7".to_string(),
            NoteInput::new("New", "old body")
        )));
        assert!(!ctrl.form().is_editing());
        assert_eq!(ctrl.view().cards[0].title, "New");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let view = FakeView {
            log: log.clone(),
            answer: true,
            cards: vec![],
            form_renders: vec![],
        };
        let mut ctrl = NoteListController::new(Arc::new(FakeApi::failing(log.clone())), view);
        ctrl.set_title("Keep me").await;

        let err = ctrl.submit().await.unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 500, .. }));
        assert_eq!(ctrl.form().title, "Keep me");
        assert!(!events(&log).contains(&Event::List));
    }

    #[tokio::test]
    async fn test_submit_succeeds_without_note_in_response() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let api = FakeApi {
            echo_notes: false,
            ..FakeApi::new(vec![note("n-1", "Old", "old")], log.clone())
        };
        let view = FakeView {
            log: log.clone(),
            answer: true,
            cards: vec![],
            form_renders: vec![],
        };
        let mut ctrl = NoteListController::new(Arc::new(api), view);

        ctrl.set_title("A").await;
        ctrl.set_content("B").await;
        ctrl.submit().await.unwrap();
        assert_eq!(ctrl.form(), &FormState::default());
        assert_eq!(ctrl.view().cards.len(), 2);

        ctrl.edit("n-1").await.unwrap();
        ctrl.set_title("New").await;
        ctrl.submit().await.unwrap();
        assert!(!ctrl.form().is_editing());
        assert_eq!(ctrl.view().cards[0].title, "New");
    }

    #[tokio::test]
    async fn test_edit_populates_form_from_server() {
        let (mut ctrl, _) = setup(vec![note("x", "Title X", "Body X")], true);

        ctrl.edit("x").await.unwrap();

        let form = ctrl.form();
        assert_eq!(form.editing_id.as_deref(), Some("x"));
        assert_eq!(form.title, "Title X");
        assert_eq!(form.content, "Body X");
        assert_eq!(ctrl.view().form_renders.last(), Some(form));
    }

    #[tokio::test]
    async fn test_edit_unknown_id_is_a_noop() {
        let (mut ctrl, _) = setup(vec![note("x", "T", "C")], true);

        ctrl.edit("missing").await.unwrap();

        assert!(!ctrl.form().is_editing());
        assert!(ctrl.view().form_renders.is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirmed_issues_delete_then_lists() {
        let (mut ctrl, log) = setup(vec![note("d", "Doomed", "")], true);

        ctrl.delete("d").await.unwrap();

        assert_eq!(
            events(&log),
            vec![Event::Confirm, Event::Delete("d".to_string()), Event::List]
        );
        assert!(ctrl.view().cards.is_empty());
    }

    #[tokio::test]
    async fn test_delete_declined_issues_nothing() {
        let (mut ctrl, log) = setup(vec![note("d", "Kept", "")], false);

        ctrl.delete("d").await.unwrap();

        assert_eq!(events(&log), vec![Event::Confirm]);
    }

    #[tokio::test]
    async fn test_summarize_shows_placeholder_before_request() {
        let (mut ctrl, log) = setup(vec![note("s", "T", "long text")], true);

        ctrl.summarize("s").await.unwrap();

        assert_eq!(
            events(&log),
            vec![
                Event::List,
                Event::Summary(SUMMARY_PLACEHOLDER.to_string()),
                Event::Summarize("long text".to_string()),
                Event::Summary("short: long text".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_summarize_unknown_id_shows_nothing() {
        let (mut ctrl, log) = setup(vec![], true);

        ctrl.summarize("nope").await.unwrap();

        assert_eq!(events(&log), vec![Event::List]);
    }

    #[tokio::test]
    async fn test_summarize_failure_replaces_placeholder() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let api = FakeApi::failing(log.clone());
        api.notes.lock().unwrap().push(note("s", "T", "text"));
        let view = FakeView {
            log: log.clone(),
            answer: true,
            cards: vec![],
            form_renders: vec![],
        };
        let mut ctrl = NoteListController::new(Arc::new(api), view);

        assert!(ctrl.summarize("s").await.is_err());

        let last = events(&log).pop().unwrap();
        assert_eq!(
            last,
            Event::Summary(
                "Summary failed: HTTP 500: Error: GOOGLE_API_KEY not configured.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_reset_form_cancels_edit() {
        let (mut ctrl, _) = setup(vec![note("x", "T", "C")], true);
        ctrl.edit("x").await.unwrap();

        ctrl.reset_form().await;

        assert_eq!(ctrl.form(), &FormState::default());
    }

    #[tokio::test]
    async fn test_start_renders_form_then_notes() {
        let (mut ctrl, log) = setup(vec![note("1", "One", "")], true);

        ctrl.start().await.unwrap();

        assert_eq!(ctrl.view().form_renders.len(), 1);
        assert_eq!(ctrl.view().cards.len(), 1);
        assert_eq!(events(&log), vec![Event::List]);
    }
}
