use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::boot_completed::*;
use bill_reminder_infra::ReminderContext;
use tracing::{error, info};

pub async fn boot_completed_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    execute(RecoverAlarmsUseCase, &ctx)
        .await
        .map(|report| {
            HttpResponse::Ok().json(APIResponse {
                rearmed: report.rearmed,
                overdue: report.overdue,
                skipped_malformed: report.skipped_malformed,
            })
        })
        .map_err(ReminderError::from)
}

/// Re-arms the pending occurrences after the armed alarms were lost,
/// either by a reboot or by a fresh process.
///
/// Occurrences that are already due are left in the queue untouched for
/// the host app to reconcile as overdue bills.
#[derive(Debug)]
pub struct RecoverAlarmsUseCase;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecoveryReport {
    pub rearmed: usize,
    pub overdue: usize,
    pub skipped_malformed: usize,
}

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
impl UseCase for RecoverAlarmsUseCase {
    type Response = RecoveryReport;

    type Error = UseCaseError;

    const NAME: &'static str = "RecoverAlarms";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let listing = ctx.repos.recovery_queue.list_all().await.map_err(|e| {
            error!("Unable to read the pending recurring bills: {:?}", e);
            UseCaseError::StorageError
        })?;

        let mut report = RecoveryReport {
            skipped_malformed: listing.malformed,
            ..Default::default()
        };
        for occurrence in listing.occurrences {
            if occurrence.is_future(now) {
                ctx.alarms
                    .schedule(occurrence.fire_time_epoch_ms, occurrence.due_today_payload())
                    .await;
                report.rearmed += 1;
            } else {
                info!(
                    "Occurrence {} of {} is overdue, leaving it for the host app",
                    occurrence.sequence, occurrence.series_id
                );
                report.overdue += 1;
            }
        }

        info!("Recovered alarms: {:?}", report);
        Ok(report)
    }
}
