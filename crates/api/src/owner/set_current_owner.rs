use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::set_current_owner::*;
use bill_reminder_infra::ReminderContext;
use tracing::{error, info};

pub async fn set_current_owner_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = SetCurrentOwnerUseCase {
        user_id: body.0.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|user_id| HttpResponse::Ok().json(APIResponse::new(user_id)))
        .map_err(ReminderError::from)
}

/// Records who is signed in to the host app. An empty id signs out.
#[derive(Debug)]
pub struct SetCurrentOwnerUseCase {
    pub user_id: String,
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
impl UseCase for SetCurrentOwnerUseCase {
    type Response = String;

    type Error = UseCaseError;

    const NAME: &'static str = "SetCurrentOwner";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let user_id = self.user_id.trim().to_string();
        ctx.repos
            .session
            .set_current_owner_id(&user_id)
            .await
            .map_err(|e| {
                error!("Unable to store the signed in owner: {:?}", e);
                UseCaseError::StorageError
            })?;

        if user_id.is_empty() {
            info!("Owner signed out");
        } else {
            info!("Owner {} signed in", user_id);
        }
        Ok(user_id)
    }
}
