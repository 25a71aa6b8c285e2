use crate::connectors::{AuthProvider, TokenCache};
use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::user::ensure_self;
use actix_web::{delete, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Removes the caller's account at the auth provider and their profile.
#[tracing::instrument(name = "Delete user.", skip(pg_pool, auth_provider, token_cache))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
    auth_provider: web::Data<Arc<dyn AuthProvider>>,
    token_cache: web::Data<TokenCache>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    ensure_self(&user, &id)?;

    auth_provider.delete_user(&id).await?;
    token_cache.forget_user(&id).await;

    db::user::delete(pg_pool.get_ref(), &id)
        .await
        .map(|_| HttpResponse::NoContent().finish())
        .map_err(|_err| JsonResponse::<models::UserProfile>::build().internal_server_error(""))
}
