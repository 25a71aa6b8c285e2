use crate::db;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::routes::message::owned_message;
use actix_web::{patch, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Update message.", skip(body, pg_pool))]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    body: web::Bytes,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let mut message = owned_message(pg_pool.get_ref(), id, &user).await?;
    let form: forms::UpdateMessage = body_into_form(body)?;
    form.update(&mut message);

    db::message::update(pg_pool.get_ref(), message)
        .await
        .map(|message| HttpResponse::Ok().json(message))
        .map_err(|_err| {
            JsonResponse::<models::Message>::build()
                .not_found(format!("Message with ID {} not found", id))
        })
}
