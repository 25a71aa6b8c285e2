use crate::db::{self, DbError};
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::routes::project::owned_project;
use actix_web::{post, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Add project file.", skip(body, pg_pool))]
#[post("/{project_id}/files")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    body: web::Bytes,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), project_id, &user).await?;

    let form: forms::CreateFile = body_into_form(body)?;
    let file = form.into_model(project.id);
    let file_path = file.file_path.clone();

    db::project_file::insert(pg_pool.get_ref(), file)
        .await
        .map(|file| HttpResponse::Created().json(file))
        .map_err(|err| match err {
            DbError::UniqueViolation(_) => JsonResponse::<models::ProjectFile>::build().bad_request(
                format!("File with path '{}' already exists in this project", file_path),
            ),
            _ => JsonResponse::<models::ProjectFile>::build()
                .internal_server_error("Failed to create file"),
        })
}
