//! Client for the quiz generation / history HTTP API.

use serde::Serialize;
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::models::{HistorySummary, Quiz, QuizId};
use crate::traits::{json_headers, Headers, HttpClient, Response};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    url: &'a str,
}

/// Quiz API client.
///
/// Cheap to clone; clones share the underlying HTTP client. Each call issues
/// exactly one request and never retries.
#[derive(Clone)]
pub struct QuizApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for QuizApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl QuizApiClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.base_url)
    }

    pub fn history_url(&self) -> String {
        format!("{}/history", self.base_url)
    }

    pub fn detail_url(&self, id: QuizId) -> String {
        format!("{}/history/{}", self.base_url, id)
    }

    /// `POST /generate` for a Wikipedia article URL.
    pub async fn generate(&self, article_url: &str) -> ApiResult<Quiz> {
        let body = serde_json::to_string(&GenerateRequest { url: article_url })?;
        let url = self.generate_url();
        tracing::info!(%url, article = article_url, "requesting quiz generation");

        let response = self.http.post(&url, &body, &json_headers()).await?;
        let response = Self::check_status(response)?;
        Quiz::from_json(&response.body)
    }

    /// `GET /history`, in server order (newest first).
    pub async fn list_history(&self) -> ApiResult<Vec<HistorySummary>> {
        let url = self.history_url();
        tracing::info!(%url, "requesting quiz history");

        let response = self.http.get(&url, &Headers::new()).await?;
        let response = Self::check_status(response)?;
        Ok(response.json()?)
    }

    /// `GET /history/{id}`.
    pub async fn fetch_quiz(&self, id: QuizId) -> ApiResult<Quiz> {
        let url = self.detail_url(id);
        tracing::info!(%url, id, "requesting stored quiz");

        let response = self.http.get(&url, &Headers::new()).await?;
        let response = Self::check_status(response)?;
        Quiz::from_json(&response.body)
    }

    fn check_status(response: Response) -> Result<Response, ApiError> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::status(response.status, &response.text_lossy()))
        }
    }
}
