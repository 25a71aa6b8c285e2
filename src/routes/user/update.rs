use crate::db;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::routes::user::ensure_self;
use actix_web::{patch, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Update user.", skip(body, pg_pool))]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    body: web::Bytes,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    ensure_self(&user, &id)?;

    let mut profile = db::user::fetch(pg_pool.get_ref(), &id)
        .await
        .map_err(|_err| JsonResponse::<models::UserProfile>::build().internal_server_error(""))?
        .ok_or_else(|| {
            JsonResponse::<models::UserProfile>::build()
                .not_found(format!("User with ID {} not found", id))
        })?;

    let form: forms::UpdateUser = body_into_form(body)?;
    form.update(&mut profile);

    db::user::update(pg_pool.get_ref(), profile)
        .await
        .map(|profile| HttpResponse::Ok().json(profile))
        .map_err(|_err| {
            JsonResponse::<models::UserProfile>::build().internal_server_error("Could not update")
        })
}
