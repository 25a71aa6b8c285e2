use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::file::owned_file;
use actix_web::{delete, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Delete project file.", skip(pg_pool))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let file = owned_file(pg_pool.get_ref(), id, &user).await?;

    db::project_file::delete(pg_pool.get_ref(), file.id)
        .await
        .map_err(|_err| JsonResponse::<models::ProjectFile>::build().internal_server_error(""))
        .and_then(|deleted| match deleted {
            true => Ok(HttpResponse::NoContent().finish()),
            false => Err(JsonResponse::<models::ProjectFile>::build()
                .not_found(format!("File with ID {} not found", id))),
        })
}
