use crate::db::DbError;
use crate::models::ChatMessage;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn insert(pool: &PgPool, message: ChatMessage) -> Result<ChatMessage, DbError> {
    sqlx::query_as::<_, ChatMessage>(
        r#"INSERT INTO chat_messages (id, project_id, role, content, created_at)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING id, project_id, role, content, created_at"#,
    )
    .bind(message.id)
    .bind(message.project_id)
    .bind(&message.role)
    .bind(&message.content)
    .bind(message.created_at)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to save {} message: {:?}", message.role, err);
        DbError::from_write(err)
    })
}

pub async fn fetch_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<ChatMessage>, DbError> {
    sqlx::query_as::<_, ChatMessage>(
        r#"SELECT id, project_id, role, content, created_at
           FROM chat_messages
           WHERE project_id = $1
           ORDER BY created_at ASC"#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch messages: {:?}", err);
        DbError::from(err)
    })
}
