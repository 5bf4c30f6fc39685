use crate::{APIResponse, BaseClient};
use bill_reminder_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct HistoryClient {
    base: Arc<BaseClient>,
}

impl HistoryClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_pending_history::APIResponse> {
        self.base.get("history".into(), StatusCode::OK).await
    }

    /// Returns the history and empties it in one step
    pub async fn drain(&self) -> APIResponse<drain_pending_history::APIResponse> {
        self.base
            .post((), "history/drain".into(), StatusCode::OK)
            .await
    }

    pub async fn clear(&self) -> APIResponse<clear_pending_history::APIResponse> {
        self.base.delete("history".into(), StatusCode::OK).await
    }
}
