use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::project::owned_project;
use actix_web::{get, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Get project.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), id, &user).await?;

    Ok(HttpResponse::Ok().json(project))
}

#[tracing::instrument(name = "Get user's projects.", skip(pg_pool))]
#[get("")]
pub async fn list(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::project::fetch_by_user(pg_pool.get_ref(), &user.id)
        .await
        .map(|projects| HttpResponse::Ok().json(projects))
        .map_err(|_err| JsonResponse::<models::Project>::build().internal_server_error(""))
}
