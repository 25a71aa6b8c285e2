pub mod deploy;
pub mod get;
pub mod logs;

use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use sqlx::PgPool;
use uuid::Uuid;

/// Deployments are owned through their project.
pub(crate) async fn owned_deployment(
    pg_pool: &PgPool,
    id: Uuid,
    user: &models::User,
) -> Result<models::Deployment, actix_web::Error> {
    db::deployment::fetch_owned(pg_pool, id, &user.id)
        .await
        .map_err(|_err| JsonResponse::<models::Deployment>::build().internal_server_error(""))?
        .ok_or_else(|| {
            JsonResponse::<models::Deployment>::build()
                .not_found(format!("Deployment with ID {} not found", id))
        })
}
