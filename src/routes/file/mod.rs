pub mod add;
pub mod delete;
pub mod get;
pub mod update;

use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use sqlx::PgPool;
use uuid::Uuid;

pub(crate) async fn owned_file(
    pg_pool: &PgPool,
    id: Uuid,
    user: &models::User,
) -> Result<models::ProjectFile, actix_web::Error> {
    db::project_file::fetch_owned(pg_pool, id, &user.id)
        .await
        .map_err(|_err| JsonResponse::<models::ProjectFile>::build().internal_server_error(""))?
        .ok_or_else(|| {
            JsonResponse::<models::ProjectFile>::build()
                .not_found(format!("File with ID {} not found", id))
        })
}
