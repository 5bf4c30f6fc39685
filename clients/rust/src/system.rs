use crate::{APIResponse, BaseClient};
use bill_reminder_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SystemClient {
    base: Arc<BaseClient>,
}

impl SystemClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Signals that the device finished booting so lost alarms are armed again
    pub async fn boot_completed(&self) -> APIResponse<boot_completed::APIResponse> {
        self.base
            .post((), "system/boot-completed".into(), StatusCode::OK)
            .await
    }
}
