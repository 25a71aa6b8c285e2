pub mod add;
pub mod delete;
pub mod get;
pub mod open;
pub mod update;

use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use sqlx::PgPool;
use uuid::Uuid;

/// Loads a project of the calling user; anything else is a 404.
pub(crate) async fn owned_project(
    pg_pool: &PgPool,
    id: Uuid,
    user: &models::User,
) -> Result<models::Project, actix_web::Error> {
    db::project::fetch_owned(pg_pool, id, &user.id)
        .await
        .map_err(|_err| JsonResponse::<models::Project>::build().internal_server_error(""))?
        .ok_or_else(|| {
            JsonResponse::<models::Project>::build()
                .not_found(format!("Project with ID {} not found", id))
        })
}
