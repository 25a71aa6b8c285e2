use crate::db;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::services::starter_files;
use actix_web::{post, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Add project.", skip(body, pg_pool))]
#[post("")]
pub async fn item(
    body: web::Bytes,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form: forms::CreateProject = body_into_form(body)?;
    let project = form.into_model(user.id.clone());

    let project = db::project::insert(pg_pool.get_ref(), project)
        .await
        .map_err(|_err| {
            JsonResponse::<models::Project>::build().internal_server_error("Failed to create project")
        })?;

    starter_files::seed(pg_pool.get_ref(), &project).await;

    Ok(HttpResponse::Created().json(project))
}
