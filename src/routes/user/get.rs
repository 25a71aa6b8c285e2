use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Get users.", skip(pg_pool))]
#[get("")]
pub async fn list(
    _user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::user::fetch_all(pg_pool.get_ref())
        .await
        .map(|profiles| HttpResponse::Ok().json(profiles))
        .map_err(|_err| JsonResponse::<models::UserProfile>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Get user.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    _user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    db::user::fetch(pg_pool.get_ref(), &id)
        .await
        .map_err(|_err| JsonResponse::<models::UserProfile>::build().internal_server_error(""))?
        .map(|profile| HttpResponse::Ok().json(profile))
        .ok_or_else(|| {
            JsonResponse::<models::UserProfile>::build()
                .not_found(format!("User with ID {} not found", id))
        })
}
