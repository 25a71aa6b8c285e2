use crate::db;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models::{self, Message, ROLE_ASSISTANT, ROLE_USER};
use crate::routes::project::owned_project;
use crate::services::chat_responder;
use actix_web::{post, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Add message.", skip(body, pg_pool))]
#[post("/projects/{project_id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    body: web::Bytes,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), project_id, &user).await?;
    let form: forms::CreateMessage = body_into_form(body)?;

    let reply = chat_responder::echo(&form.content);
    let user_message = db::message::insert(
        pg_pool.get_ref(),
        Message::new(project.id, user.id.clone(), ROLE_USER, form.content),
    )
    .await
    .map_err(|_err| JsonResponse::<Message>::build().internal_server_error("Failed to create message"))?;

    let assistant_message = db::message::insert(
        pg_pool.get_ref(),
        Message::new(project.id, user.id.clone(), ROLE_ASSISTANT, reply),
    )
    .await
    .map_err(|_err| {
        JsonResponse::<Message>::build().internal_server_error("Failed to create assistant message")
    })?;

    Ok(HttpResponse::Created().json([user_message, assistant_message]))
}
