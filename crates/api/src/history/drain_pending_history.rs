use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::dtos::HistoryEntryDTO;
use bill_reminder_api_structs::drain_pending_history::*;
use bill_reminder_domain::HistoryEntry;
use bill_reminder_infra::ReminderContext;
use tracing::error;

pub async fn drain_pending_history_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    execute(DrainPendingHistoryUseCase, &ctx)
        .await
        .map(|entries| {
            let res: APIResponse = entries.into_iter().map(HistoryEntryDTO::new).collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(ReminderError::from)
}

/// Hands the history to the host app and empties it under the same lock,
/// so an entry appended in between is neither lost nor returned twice
#[derive(Debug)]
pub struct DrainPendingHistoryUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DrainPendingHistoryUseCase {
    type Response = Vec<HistoryEntry>;

    type Error = UseCaseError;

    const NAME: &'static str = "DrainPendingHistory";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos.history.drain().await.map_err(|e| {
            error!("Unable to drain the notification history: {:?}", e);
            UseCaseError::StorageError
        })
    }
}
