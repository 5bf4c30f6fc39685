use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::schedule_reminder::*;
use bill_reminder_domain::{
    major_to_minor, AlarmKey, RecurrenceRule, ReminderPayload, ReminderSeries,
};
use bill_reminder_infra::ReminderContext;

pub async fn schedule_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = ScheduleReminderUseCase::from(body.0);

    execute(usecase, &ctx)
        .await
        .map(|alarm_key| HttpResponse::Ok().json(APIResponse::new(alarm_key.inner())))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct ScheduleReminderUseCase {
    pub fire_time_epoch_ms: i64,
    pub payload: ReminderPayload,
}

impl From<RequestBody> for ScheduleReminderUseCase {
    fn from(body: RequestBody) -> Self {
        let rule_name = body.recurring_type.unwrap_or_default();
        // An unknown rule keeps the per-occurrence ids but never regenerates
        let rule = if body.is_recurring {
            rule_name.parse::<RecurrenceRule>().unwrap_or_default()
        } else {
            RecurrenceRule::None
        };
        // Reminders created without a bill are keyed by their notification
        let series_id = if body.bill_id.is_empty() {
            body.notification_id.to_string()
        } else {
            body.bill_id
        };

        Self {
            fire_time_epoch_ms: body.time,
            payload: ReminderPayload {
                notification_id: body.notification_id,
                series: ReminderSeries {
                    series_id,
                    owner_user_id: body.user_id,
                    title: body.bill_title.unwrap_or(body.title.clone()),
                    vendor: body.bill_vendor.unwrap_or_default(),
                    amount_minor: major_to_minor(body.bill_amount.unwrap_or_default()),
                    recurring: body.is_recurring,
                    rule_name,
                    rule,
                    max_occurrences: ReminderSeries::cap_from_repeat_count(body.repeat_count),
                    sequence: body.current_sequence,
                },
                title: body.title,
                body: body.body,
            },
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidSequence { sequence: u32, cap: Option<u32> },
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidSequence { sequence, cap } => Self::BadClientData(format!(
                "The sequence: {}, is not valid for a series with repeat count: {}",
                sequence,
                cap.map(|cap| cap as i64).unwrap_or(-1)
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleReminderUseCase {
    type Response = AlarmKey;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let series = &self.payload.series;
        let sequence_in_range = match series.max_occurrences {
            Some(cap) => series.sequence >= 1 && series.sequence <= cap,
            None => series.sequence >= 1,
        };
        if !sequence_in_range {
            return Err(UseCaseError::InvalidSequence {
                sequence: series.sequence,
                cap: series.max_occurrences,
            });
        }

        let alarm_key = ctx
            .alarms
            .schedule(self.fire_time_epoch_ms, self.payload.clone())
            .await;

        Ok(alarm_key)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_context::{setup, DAY, NOW};

    fn request_factory() -> RequestBody {
        RequestBody {
            time: NOW + DAY,
            title: "Rent due".into(),
            body: "Rent is due tomorrow".into(),
            notification_id: 17,
            user_id: "alice".into(),
            bill_id: "rent".into(),
            is_recurring: true,
            recurring_type: Some("Monthly".into()),
            bill_title: Some("Rent".into()),
            bill_amount: Some(1250.5),
            bill_vendor: Some("Landlord".into()),
            current_sequence: 1,
            repeat_count: 12,
        }
    }

    #[actix_web::main]
    #[test]
    async fn arms_alarm_for_recurring_series() {
        let ctx = setup();
        let usecase = ScheduleReminderUseCase::from(request_factory());

        let alarm_key = execute(usecase, &ctx.ctx).await.unwrap();
        assert_eq!(alarm_key, AlarmKey::for_occurrence("rent", 1));

        let registered = ctx.alarm_service.registered();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].fire_time_epoch_ms, NOW + DAY);
        let series = &registered[0].payload.series;
        assert_eq!(series.rule, RecurrenceRule::Monthly);
        assert_eq!(series.rule_name, "Monthly");
        assert_eq!(series.max_occurrences, Some(12));
        assert_eq!(series.amount_minor, 125_050);
        assert_eq!(series.title, "Rent");
    }

    #[actix_web::main]
    #[test]
    async fn plain_reminder_is_one_shot() {
        let ctx = setup();
        let usecase = ScheduleReminderUseCase::from(RequestBody {
            is_recurring: false,
            bill_id: "".into(),
            bill_title: None,
            repeat_count: -1,
            ..request_factory()
        });
        assert_eq!(usecase.payload.series.rule, RecurrenceRule::None);
        assert_eq!(usecase.payload.series.series_id, "17");
        assert_eq!(usecase.payload.series.title, "Rent due");
        assert_eq!(usecase.payload.series.max_occurrences, None);

        assert!(execute(usecase, &ctx.ctx).await.is_ok());
        assert_eq!(ctx.ctx.alarms.armed().await.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn unknown_recurring_type_is_terminal() {
        let usecase = ScheduleReminderUseCase::from(RequestBody {
            recurring_type: Some("fortnightly".into()),
            ..request_factory()
        });
        let series = &usecase.payload.series;
        assert_eq!(series.rule, RecurrenceRule::None);
        assert_eq!(series.rule_name, "fortnightly");
        assert!(series.is_recurring());
        assert_eq!(series.notification_key(), "rent:1");
        assert_eq!(series.occurrence_id(), "rent_seq_1");
        assert!(series.next_occurrence(NOW).is_none());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_sequence_beyond_cap() {
        let ctx = setup();
        let mut usecase = ScheduleReminderUseCase::from(RequestBody {
            current_sequence: 13,
            ..request_factory()
        });
        let res = usecase.execute(&ctx.ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::InvalidSequence {
                sequence: 13,
                cap: Some(12)
            }
        );
        assert!(ctx.alarm_service.registered().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn denied_wake_permission_still_returns_key() {
        let ctx = setup();
        ctx.alarm_service.set_wake_permission(false);
        let usecase = ScheduleReminderUseCase::from(request_factory());

        let alarm_key = execute(usecase, &ctx.ctx).await.unwrap();
        assert_eq!(alarm_key, AlarmKey::for_occurrence("rent", 1));
        assert!(ctx.alarm_service.registered().is_empty());
    }
}
