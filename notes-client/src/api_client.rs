//! API client layer for the notes REST surface.
//!
//! `NotesApi` is the seam the cache and views depend on; `RestClient`
//! is the production implementation over reqwest. Tests substitute an
//! in-memory implementation.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ClientError;
use notes_api::types::{CreateNoteRequest, DeleteNoteResponse, NoteResponse, UpdateNoteRequest};
use notes_api::ApiError;
use notes_core::NoteId;

/// The five remote procedures of the notes service.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// All notes, ordered by creation time ascending.
    async fn list_notes(&self) -> Result<Vec<NoteResponse>, ClientError>;

    /// A single note, or `ClientError::NotFound`.
    async fn get_note(&self, id: NoteId) -> Result<NoteResponse, ClientError>;

    /// Create a note; the returned record carries the generated id and
    /// timestamp, with favorite false.
    async fn create_note(&self, req: &CreateNoteRequest) -> Result<NoteResponse, ClientError>;

    /// Apply a partial patch; `ClientError::NotFound` when the id is gone.
    async fn update_note(
        &self,
        id: NoteId,
        req: &UpdateNoteRequest,
    ) -> Result<NoteResponse, ClientError>;

    /// Delete a note. Idempotent: reports success even for absent ids.
    async fn delete_note(&self, id: NoteId) -> Result<DeleteNoteResponse, ClientError>;
}

/// REST implementation of [`NotesApi`].
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn notes_url(&self) -> String {
        format!("{}/api/v1/notes", self.base_url)
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/api/v1/notes/{}", self.base_url, id)
    }

    /// Turn a non-success response into a structured client error.
    async fn read_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(api_error) => ClientError::Api(api_error),
            Err(_) => ClientError::InvalidResponse(format!("unexpected status {}", status)),
        }
    }
}

#[async_trait]
impl NotesApi for RestClient {
    async fn list_notes(&self) -> Result<Vec<NoteResponse>, ClientError> {
        let response = self.client.get(self.notes_url()).send().await?;
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn get_note(&self, id: NoteId) -> Result<NoteResponse, ClientError> {
        let response = self.client.get(self.note_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn create_note(&self, req: &CreateNoteRequest) -> Result<NoteResponse, ClientError> {
        let response = self.client.post(self.notes_url()).json(req).send().await?;
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn update_note(
        &self,
        id: NoteId,
        req: &UpdateNoteRequest,
    ) -> Result<NoteResponse, ClientError> {
        let response = self
            .client
            .patch(self.note_url(id))
            .json(req)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_note(&self, id: NoteId) -> Result<DeleteNoteResponse, ClientError> {
        let response = self.client.delete(self.note_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_construction() -> Result<(), ClientError> {
        let config = ClientConfig {
            api_base_url: "http://localhost:3000/".to_string(),
            ..ClientConfig::default()
        };
        let client = RestClient::new(&config)?;

        assert_eq!(client.notes_url(), "http://localhost:3000/api/v1/notes");
        assert_eq!(client.note_url(7), "http://localhost:3000/api/v1/notes/7");
        Ok(())
    }
}
