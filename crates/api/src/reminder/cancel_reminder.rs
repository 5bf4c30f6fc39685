use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::cancel_reminder::*;
use bill_reminder_infra::ReminderContext;
use tracing::info;

pub async fn cancel_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = CancelReminderUseCase {
        notification_id: path_params.notification_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { success: true }))
        .map_err(ReminderError::from)
}

/// Best effort: an alarm that already started firing is caught by the
/// dedup tickets instead
#[derive(Debug)]
pub struct CancelReminderUseCase {
    pub notification_id: i32,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelReminderUseCase {
    /// Whether an armed alarm was found
    type Response = bool;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let cancelled = ctx.alarms.cancel(self.notification_id).await;
        if !cancelled {
            info!(
                "No armed alarm found for notification {}",
                self.notification_id
            );
        }
        Ok(cancelled)
    }
}
