use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bill_reminder_api_structs::get_current_owner::*;
use bill_reminder_infra::ReminderContext;
use tracing::error;

pub async fn get_current_owner_controller(
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, ReminderError> {
    execute(GetCurrentOwnerUseCase, &ctx)
        .await
        .map(|user_id| HttpResponse::Ok().json(APIResponse::new(user_id)))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct GetCurrentOwnerUseCase;

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
impl UseCase for GetCurrentOwnerUseCase {
    /// Empty when nobody is signed in
    type Response = String;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCurrentOwner";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .session
            .current_owner_id()
            .await
            .map_err(|e| {
                error!("Unable to read the signed in owner: {:?}", e);
                UseCaseError::StorageError
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_context::{setup, setup_with_store, FlakyKeyValueStore};
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn nobody_signed_in_by_default() {
        let ctx = setup();
        assert_eq!(GetCurrentOwnerUseCase.execute(&ctx.ctx).await.unwrap(), "");

        ctx.ctx
            .repos
            .session
            .set_current_owner_id("alice")
            .await
            .unwrap();
        assert_eq!(
            GetCurrentOwnerUseCase.execute(&ctx.ctx).await.unwrap(),
            "alice"
        );
    }

    #[actix_web::main]
    #[test]
    async fn unreadable_session_is_a_storage_error() {
        let store = Arc::new(FlakyKeyValueStore::default());
        store.fail("session");
        let ctx = setup_with_store(store);

        assert!(matches!(
            GetCurrentOwnerUseCase.execute(&ctx.ctx).await,
            Err(UseCaseError::StorageError)
        ));
    }
}
