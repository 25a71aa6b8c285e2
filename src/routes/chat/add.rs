use crate::db;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models::{self, ChatExchange, ChatMessage, ROLE_ASSISTANT, ROLE_USER};
use crate::routes::project::owned_project;
use crate::services::chat_responder;
use actix_web::{post, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Stores the user's message together with the mock assistant's reply.
#[tracing::instrument(name = "Send chat message.", skip(body, pg_pool))]
#[post("/{project_id}/messages")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    body: web::Bytes,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (project_id,) = path.into_inner();
    let project = owned_project(pg_pool.get_ref(), project_id, &user).await?;
    let form: forms::CreateMessage = body_into_form(body)?;

    let reply = chat_responder::respond(&form.content);
    let user_message = db::chat::insert(
        pg_pool.get_ref(),
        ChatMessage::new(project.id, ROLE_USER, form.content),
    )
    .await
    .map_err(|_err| JsonResponse::<ChatMessage>::build().internal_server_error("Failed to save message"))?;

    let assistant_message = db::chat::insert(
        pg_pool.get_ref(),
        ChatMessage::new(project.id, ROLE_ASSISTANT, reply),
    )
    .await
    .map_err(|_err| {
        JsonResponse::<ChatMessage>::build().internal_server_error("Failed to save AI response")
    })?;

    Ok(HttpResponse::Created().json(ChatExchange {
        user_message,
        assistant_message,
    }))
}
