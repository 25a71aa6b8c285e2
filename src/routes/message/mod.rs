pub mod add;
pub mod delete;
pub mod get;
pub mod update;

use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::project::owned_project;
use sqlx::PgPool;
use uuid::Uuid;

/// A message is visible to whoever owns its project.
pub(crate) async fn owned_message(
    pg_pool: &PgPool,
    id: Uuid,
    user: &models::User,
) -> Result<models::Message, actix_web::Error> {
    let message = db::message::fetch(pg_pool, id)
        .await
        .map_err(|_err| JsonResponse::<models::Message>::build().internal_server_error(""))?
        .ok_or_else(|| {
            JsonResponse::<models::Message>::build()
                .not_found(format!("Message with ID {} not found", id))
        })?;

    owned_project(pg_pool, message.project_id, user).await?;

    Ok(message)
}
