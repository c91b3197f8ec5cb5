//! Typed HTTP client for the notes REST API.

use async_trait::async_trait;
use notes_types::{Note, NoteInput, SummarizeRequest, SummarizeResponse};
use reqwest::{Response, Url};
use std::time::Duration;

use crate::api::NotesApi;
use crate::error::ClientError;

pub struct HttpNotesApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNotesApi {
    /// `base_url` is the parent of the `/notes` resource, e.g. `http://127.0.0.1:5001/api`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Same as `new`, but every request gives up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    /// `{base}/notes/{id}` with `id` percent-encoded as one path segment
    fn note_url(&self, id: &str) -> Result<Url, ClientError> {
        let invalid = || ClientError::InvalidUrl(self.base_url.clone());

        let mut url = Url::parse(&self.notes_url()).map_err(|_| invalid())?;
        url.path_segments_mut().map_err(|_| invalid())?.push(id);
        Ok(url)
    }
}

/// Pass 2xx responses through, turn anything else into `ClientError::Status`
async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::from_body(status.as_u16(), &body))
}

/// Decode the note echoed by a successful write, if the body holds one
async fn echoed_note(resp: Response) -> Option<Note> {
    match resp.json::<Note>().await {
        Ok(note) => Some(note),
        Err(e) => {
            log::debug!("Write succeeded without a note in the body: {}", e);
            None
        }
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list(&self) -> Result<Vec<Note>, ClientError> {
        let resp = self.client.get(self.notes_url()).send().await?;
        let notes = check(resp).await?.json::<Vec<Note>>().await?;
        log::debug!("Fetched {} notes", notes.len());
        Ok(notes)
    }

    async fn create(&self, input: &NoteInput) -> Result<Option<Note>, ClientError> {
        let resp = self
            .client
            .post(self.notes_url())
            .json(input)
            .send()
            .await?;

        Ok(echoed_note(check(resp).await?).await)
    }

    async fn update(&self, id: &str, input: &NoteInput) -> Result<Option<Note>, ClientError> {
        let resp = self
            .client
            .put(self.note_url(id)?)
            .json(input)
            .send()
            .await?;

        Ok(echoed_note(check(resp).await?).await)
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.client.delete(self.note_url(id)?).send().await?;
        check(resp).await?;
        Ok(())
    }

    async fn summarize(&self, content: &str) -> Result<String, ClientError> {
        let body = SummarizeRequest {
            content: content.to_string(),
        };

        let resp = self
            .client
            .post(format!("{}/summarize", self.notes_url()))
            .json(&body)
            .send()
            .await?;

        let result = check(resp).await?.json::<SummarizeResponse>().await?;
        Ok(result.summary)
    }
}
