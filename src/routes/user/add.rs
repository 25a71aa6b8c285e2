use crate::connectors::{AuthProvider, ConnectorError};
use crate::db;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use actix_web::{post, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Public sign-up: creates a confirmed account at the auth provider and the
/// matching profile row.
#[tracing::instrument(name = "Add user.", skip(body, pg_pool, auth_provider))]
#[post("")]
pub async fn item(
    body: web::Bytes,
    pg_pool: web::Data<PgPool>,
    auth_provider: web::Data<Arc<dyn AuthProvider>>,
) -> Result<impl Responder> {
    let form: forms::CreateUser = body_into_form(body)?;

    let account = auth_provider
        .create_user(&form.email, &form.password)
        .await
        .map_err(|err| match err {
            ConnectorError::Rejected(msg) => {
                JsonResponse::<models::UserProfile>::build().bad_request(format!("Failed to create user: {}", msg))
            }
            err => err.into(),
        })?;

    let email = account.email.clone().unwrap_or(form.email);
    let profile = models::UserProfile::new(account.id.clone(), email, form.name);

    match db::user::insert(pg_pool.get_ref(), profile).await {
        Ok(profile) => Ok(HttpResponse::Created().json(profile)),
        Err(_err) => {
            // no profile means no usable account
            if let Err(err) = auth_provider.delete_user(&account.id).await {
                tracing::error!("Failed to roll back auth user {}: {}", account.id, err);
            }
            Err(JsonResponse::<models::UserProfile>::build()
                .internal_server_error("Failed to create user profile"))
        }
    }
}
