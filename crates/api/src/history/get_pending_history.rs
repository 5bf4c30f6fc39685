use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::dtos::HistoryEntryDTO;
use bill_reminder_api_structs::get_pending_history::*;
use bill_reminder_domain::HistoryEntry;
use bill_reminder_infra::ReminderContext;
use tracing::error;

pub async fn get_pending_history_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    execute(GetPendingHistoryUseCase, &ctx)
        .await
        .map(|entries| {
            let res: APIResponse = entries.into_iter().map(HistoryEntryDTO::new).collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(ReminderError::from)
}

/// Reads the history without consuming it, the host app clears it once it
/// has synced the entries
#[derive(Debug)]
pub struct GetPendingHistoryUseCase;

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
impl UseCase for GetPendingHistoryUseCase {
    type Response = Vec<HistoryEntry>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPendingHistory";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .history
            .list_all()
            .await
            .map_err(|e| {
                error!("Unable to read the notification history: {:?}", e);
                UseCaseError::StorageError
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_context::{setup, NOW};

    #[actix_web::main]
    #[test]
    async fn lists_history_in_insertion_order() {
        let ctx = setup();
        for (i, title) in ["Rent", "Water"].iter().enumerate() {
            ctx.ctx
                .repos
                .history
                .append(HistoryEntry {
                    title: title.to_string(),
                    body: "Due".into(),
                    series_id: title.to_lowercase(),
                    owner_user_id: "alice".into(),
                    delivered_at_epoch_ms: NOW + i as i64,
                })
                .await
                .unwrap();
        }

        let entries = GetPendingHistoryUseCase.execute(&ctx.ctx).await.unwrap();
        let titles = entries.iter().map(|e| e.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Rent", "Water"]);

        // Reading does not consume
        assert_eq!(
            GetPendingHistoryUseCase.execute(&ctx.ctx).await.unwrap().len(),
            2
        );
    }
}
