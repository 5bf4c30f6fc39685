use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::clear_pending_history::*;
use bill_reminder_infra::ReminderContext;
use tracing::error;

pub async fn clear_pending_history_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    execute(ClearPendingHistoryUseCase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { success: true }))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct ClearPendingHistoryUseCase;

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
impl UseCase for ClearPendingHistoryUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "ClearPendingHistory";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .history
            .clear()
            .await
            .map_err(|e| {
                error!("Unable to clear the notification history: {:?}", e);
                UseCaseError::StorageError
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_context::{setup, NOW};
    use bill_reminder_domain::HistoryEntry;

    #[actix_web::main]
    #[test]
    async fn clears_history() {
        let ctx = setup();
        ctx.ctx
            .repos
            .history
            .append(HistoryEntry {
                title: "Rent".into(),
                body: "Due".into(),
                series_id: "rent".into(),
                owner_user_id: "alice".into(),
                delivered_at_epoch_ms: NOW,
            })
            .await
            .unwrap();

        ClearPendingHistoryUseCase.execute(&ctx.ctx).await.unwrap();
        assert!(ctx.ctx.repos.history.list_all().await.unwrap().is_empty());
    }
}
