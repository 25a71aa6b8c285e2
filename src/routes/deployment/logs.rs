use crate::models::{self, DeploymentLogs};
use crate::routes::deployment::owned_deployment;
use actix_web::{get, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Get deployment logs.", skip(pg_pool))]
#[get("/{id}/logs")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let deployment = owned_deployment(pg_pool.get_ref(), id, &user).await?;

    Ok(HttpResponse::Ok().json(DeploymentLogs::from(&deployment)))
}
