use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::message::owned_message;
use actix_web::{delete, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Delete message.", skip(pg_pool))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let message = owned_message(pg_pool.get_ref(), id, &user).await?;

    db::message::delete(pg_pool.get_ref(), message.id)
        .await
        .map_err(|_err| JsonResponse::<models::Message>::build().internal_server_error(""))
        .and_then(|deleted| match deleted {
            true => Ok(HttpResponse::NoContent().finish()),
            false => Err(JsonResponse::<models::Message>::build()
                .not_found(format!("Message with ID {} not found", id))),
        })
}
