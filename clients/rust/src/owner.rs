use crate::{APIResponse, BaseClient};
use bill_reminder_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct OwnerClient {
    base: Arc<BaseClient>,
}

impl OwnerClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_current_owner::APIResponse> {
        self.base.get("owner".into(), StatusCode::OK).await
    }

    /// An empty `user_id` signs the owner out
    pub async fn set<T: Into<String>>(
        &self,
        user_id: T,
    ) -> APIResponse<set_current_owner::APIResponse> {
        let body = set_current_owner::RequestBody {
            user_id: user_id.into(),
        };
        self.base.put(body, "owner".into(), StatusCode::OK).await
    }
}
