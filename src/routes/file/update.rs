use crate::db;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::routes::file::owned_file;
use actix_web::{patch, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Update project file.", skip(body, pg_pool))]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    body: web::Bytes,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let file = owned_file(pg_pool.get_ref(), id, &user).await?;
    let form: forms::UpdateFile = body_into_form(body)?;

    db::project_file::update_content(pg_pool.get_ref(), file.id, &form.file_content)
        .await
        .map_err(|_err| {
            JsonResponse::<models::ProjectFile>::build().internal_server_error("Could not update")
        })?
        .map(|file| HttpResponse::Ok().json(file))
        .ok_or_else(|| {
            JsonResponse::<models::ProjectFile>::build()
                .not_found(format!("File with ID {} not found", id))
        })
}
