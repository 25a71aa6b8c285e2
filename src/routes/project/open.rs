use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{patch, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Records that the project was opened; drives the ordering of the list.
#[tracing::instrument(name = "Open project.", skip(pg_pool))]
#[patch("/{id}/open")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    db::project::touch_last_opened(pg_pool.get_ref(), id, &user.id)
        .await
        .map_err(|_err| JsonResponse::<models::Project>::build().internal_server_error(""))?
        .map(|project| HttpResponse::Ok().json(project))
        .ok_or_else(|| {
            JsonResponse::<models::Project>::build()
                .not_found(format!("Project with ID {} not found", id))
        })
}
