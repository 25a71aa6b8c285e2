use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::deployment::owned_deployment;
use crate::routes::project::owned_project;
use actix_web::{get, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Get project deployments.", skip(pg_pool))]
#[get("/{project_id}/deployments")]
pub async fn list(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), project_id, &user).await?;

    db::deployment::fetch_by_project(pg_pool.get_ref(), project.id)
        .await
        .map(|deployments| HttpResponse::Ok().json(deployments))
        .map_err(|_err| JsonResponse::<models::Deployment>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Get deployment.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let deployment = owned_deployment(pg_pool.get_ref(), id, &user).await?;

    Ok(HttpResponse::Ok().json(deployment))
}
