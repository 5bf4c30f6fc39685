use crate::{APIResponse, BaseClient};
use bill_reminder_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct RecoveryQueueClient {
    base: Arc<BaseClient>,
}

impl RecoveryQueueClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_pending_recovery_queue::APIResponse> {
        self.base.get("recovery-queue".into(), StatusCode::OK).await
    }

    pub async fn clear(&self) -> APIResponse<clear_pending_recovery_queue::APIResponse> {
        self.base
            .delete("recovery-queue".into(), StatusCode::OK)
            .await
    }
}
