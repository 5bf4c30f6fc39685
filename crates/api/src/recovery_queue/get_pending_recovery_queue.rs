use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::dtos::PendingOccurrenceDTO;
use bill_reminder_api_structs::get_pending_recovery_queue::*;
use bill_reminder_domain::PendingOccurrence;
use bill_reminder_infra::ReminderContext;
use tracing::error;

pub async fn get_pending_recovery_queue_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    execute(GetPendingRecoveryQueueUseCase, &ctx)
        .await
        .map(|occurrences| {
            let res: APIResponse = occurrences
                .into_iter()
                .map(PendingOccurrenceDTO::new)
                .collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(ReminderError::from)
}

/// Lists the rows that could be parsed, malformed rows are left out
#[derive(Debug)]
pub struct GetPendingRecoveryQueueUseCase;

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
impl UseCase for GetPendingRecoveryQueueUseCase {
    type Response = Vec<PendingOccurrence>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPendingRecoveryQueue";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .recovery_queue
            .list_all()
            .await
            .map(|listing| listing.occurrences)
            .map_err(|e| {
                error!("Unable to read the recovery queue: {:?}", e);
                UseCaseError::StorageError
            })
    }
}
