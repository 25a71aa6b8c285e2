use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::project::owned_project;
use actix_web::{get, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Get chat history.", skip(pg_pool))]
#[get("/{project_id}/messages")]
pub async fn list(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), project_id, &user).await?;

    db::chat::fetch_by_project(pg_pool.get_ref(), project.id)
        .await
        .map(|messages| HttpResponse::Ok().json(messages))
        .map_err(|_err| JsonResponse::<models::ChatMessage>::build().internal_server_error(""))
}
