use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::file::owned_file;
use crate::routes::project::owned_project;
use actix_web::{get, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Get project files.", skip(pg_pool))]
#[get("/{project_id}/files")]
pub async fn list(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), project_id, &user).await?;

    db::project_file::fetch_by_project(pg_pool.get_ref(), project.id)
        .await
        .map(|files| HttpResponse::Ok().json(files))
        .map_err(|_err| JsonResponse::<models::ProjectFile>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Get project file.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let file = owned_file(pg_pool.get_ref(), id, &user).await?;

    Ok(HttpResponse::Ok().json(file))
}
