use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::message::owned_message;
use crate::routes::project::owned_project;
use actix_web::{get, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Get project messages.", skip(pg_pool))]
#[get("/projects/{project_id}")]
pub async fn list(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), project_id, &user).await?;

    db::message::fetch_by_project(pg_pool.get_ref(), project.id)
        .await
        .map(|messages| HttpResponse::Ok().json(messages))
        .map_err(|_err| JsonResponse::<models::Message>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Get message.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let message = owned_message(pg_pool.get_ref(), id, &user).await?;

    Ok(HttpResponse::Ok().json(message))
}
