use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::clear_pending_recovery_queue::*;
use bill_reminder_infra::ReminderContext;
use tracing::error;

pub async fn clear_pending_recovery_queue_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    execute(ClearPendingRecoveryQueueUseCase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { success: true }))
        .map_err(ReminderError::from)
}

/// Called by the host app once it has folded the queue into its own bill
/// records. Armed alarms are left alone.
#[derive(Debug)]
pub struct ClearPendingRecoveryQueueUseCase;

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
impl UseCase for ClearPendingRecoveryQueueUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "ClearPendingRecoveryQueue";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .recovery_queue
            .clear()
            .await
            .map_err(|e| {
                error!("Unable to clear the recovery queue: {:?}", e);
                UseCaseError::StorageError
            })
    }
}
