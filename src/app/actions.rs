//! Request tasks for the App.
//!
//! Each controller request descriptor becomes one `tokio::spawn`ed task that
//! calls the API and posts a single [`AppMessage`] back with the request's
//! token. Nothing here touches controller state.

use crate::state::{DetailRequest, GenerateRequest, ListRequest};

use super::{App, AppMessage};

impl App {
    /// Run `POST /generate` in the background.
    pub fn spawn_generate(&self, request: GenerateRequest) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = api.generate(&request.url).await;
            let _ = tx.send(AppMessage::QuizGenerated {
                token: request.token,
                result,
            });
        });
    }

    /// Run `GET /history` in the background.
    pub fn spawn_list_history(&self, request: ListRequest) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = api.list_history().await;
            let _ = tx.send(AppMessage::HistoryListed {
                token: request.token,
                result,
            });
        });
    }

    /// Run `GET /history/{id}` in the background.
    pub fn spawn_fetch_detail(&self, request: DetailRequest) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = api.fetch_quiz(request.id).await;
            let _ = tx.send(AppMessage::HistoryDetailLoaded {
                token: request.token,
                result,
            });
        });
    }
}
