use crate::db;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::routes::project::owned_project;
use actix_web::{patch, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Update project.", skip(body, pg_pool))]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    body: web::Bytes,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    owned_project(pg_pool.get_ref(), id, &user).await?;

    let form: forms::UpdateProject = body_into_form(body)?;
    tracing::debug!("Updating project {} with {:?}", id, form);

    db::project::update(pg_pool.get_ref(), id, &user.id, &form)
        .await
        .map_err(|_err| {
            JsonResponse::<models::Project>::build().internal_server_error("Could not update")
        })?
        .map(|project| HttpResponse::Ok().json(project))
        .ok_or_else(|| {
            JsonResponse::<models::Project>::build()
                .not_found(format!("Project with ID {} not found", id))
        })
}
