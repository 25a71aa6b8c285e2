use crate::models::{self, Profile};
use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

#[tracing::instrument(name = "Get caller profile.")]
#[get("/profile")]
pub async fn profile(user: web::ReqData<Arc<models::User>>) -> impl Responder {
    let user: &models::User = &user;
    HttpResponse::Ok().json(Profile::from(user))
}
