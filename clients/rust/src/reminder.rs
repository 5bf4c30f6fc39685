use crate::{APIResponse, BaseClient};
use bill_reminder_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

pub type ScheduleReminderInput = schedule_reminder::RequestBody;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn schedule(
        &self,
        input: ScheduleReminderInput,
    ) -> APIResponse<schedule_reminder::APIResponse> {
        self.base
            .post(input, "reminders".into(), StatusCode::OK)
            .await
    }

    pub async fn cancel(&self, notification_id: i32) -> APIResponse<cancel_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", notification_id), StatusCode::OK)
            .await
    }
}
