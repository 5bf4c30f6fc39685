use crate::shared::usecase::UseCase;
use bill_reminder_domain::{decide_fire, AlarmKey, ReminderPayload};
use bill_reminder_infra::{DisplayNotification, ReminderContext};
use tracing::{error, info};

/// Handles one alarm that went off.
///
/// Only a failure to read the signed in owner or to record the dedup ticket
/// aborts the event, before anything is written. Every later step is
/// independent: a failing history or recovery queue write is logged and the
/// remaining steps still run.
#[derive(Debug)]
pub struct HandleFireUseCase {
    pub payload: ReminderPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FireOutcome {
    /// Same occurrence was already handled within the dedup window
    Duplicate,
    Handled {
        displayed: bool,
        history_appended: bool,
        next_alarm: Option<AlarmKey>,
    },
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for HandleFireUseCase {
    type Response = FireOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "HandleFire";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let notification_key = self.payload.notification_key();

        let current_owner_id = ctx.repos.session.current_owner_id().await.map_err(|e| {
            error!("Unable to read the signed in owner: {:?}", e);
            UseCaseError::StorageError
        })?;

        let accepted = ctx
            .repos
            .dedup_tickets
            .accept(&notification_key, now)
            .await
            .map_err(|e| {
                error!("Unable to record dedup ticket for {}: {:?}", notification_key, e);
                UseCaseError::StorageError
            })?;
        if !accepted {
            info!("Suppressed duplicate fire event for {}", notification_key);
            return Ok(FireOutcome::Duplicate);
        }

        let decision = decide_fire(&self.payload, now, &current_owner_id);

        let mut history_appended = false;
        if let Some(entry) = decision.history_entry {
            match ctx.repos.history.append(entry).await {
                Ok(appended) => history_appended = appended,
                Err(e) => error!(
                    "Unable to append history entry for {}: {:?}",
                    notification_key, e
                ),
            }
        }

        let mut next_alarm = None;
        if let Some(next) = decision.next_occurrence {
            if let Err(e) = ctx.repos.recovery_queue.push(&next).await {
                error!(
                    "Unable to persist occurrence {} of {}: {:?}",
                    next.sequence, next.series_id, e
                );
            }
            let alarm_key = ctx
                .alarms
                .schedule(next.fire_time_epoch_ms, next.overdue_payload())
                .await;
            next_alarm = Some(alarm_key);
        } else {
            info!("Series {} will not fire again", self.payload.series.series_id);
        }

        if decision.display {
            let notification = DisplayNotification {
                notification_id: self.payload.notification_id,
                title: self.payload.title.clone(),
                body: self.payload.display_body(),
                bill_id: self.payload.series.occurrence_id(),
            };
            if let Err(e) = ctx.notifier.show(&notification).await {
                error!("Unable to show notification for {}: {:?}", notification_key, e);
            }
        } else {
            info!(
                "Not displaying {} since it belongs to another owner",
                notification_key
            );
        }

        Ok(FireOutcome::Handled {
            displayed: decision.display,
            history_appended,
            next_alarm,
        })
    }
}
