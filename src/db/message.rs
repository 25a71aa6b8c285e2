use crate::db::DbError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert(pool: &PgPool, message: models::Message) -> Result<models::Message, DbError> {
    let query_span = tracing::info_span!("Saving new message", role = %message.role);
    sqlx::query_as::<_, models::Message>(
        r#"
        INSERT INTO messages (id, project_id, user_id, role, content, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(message.id)
    .bind(message.project_id)
    .bind(&message.user_id)
    .bind(&message.role)
    .bind(&message.content)
    .bind(message.created_at)
    .bind(message.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to create message: {:?}", err);
        DbError::from_write(err)
    })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::Message>, DbError> {
    tracing::info!("Fetch message {}", id);
    sqlx::query_as::<_, models::Message>("SELECT * FROM messages WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch message, error: {:?}", err);
            DbError::from(err)
        })
}

pub async fn fetch_by_project(
    pool: &PgPool,
    project_id: Uuid,
) -> Result<Vec<models::Message>, DbError> {
    let query_span = tracing::info_span!("Fetch messages by project", project_id = %project_id);
    sqlx::query_as::<_, models::Message>(
        r#"
        SELECT *
        FROM messages
        WHERE project_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch messages: {:?}", err);
        DbError::from(err)
    })
}

pub async fn update(pool: &PgPool, message: models::Message) -> Result<models::Message, DbError> {
    let query_span = tracing::info_span!("Updating message", message_id = %message.id);
    sqlx::query_as::<_, models::Message>(
        r#"
        UPDATE messages
        SET content = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(message.id)
    .bind(&message.content)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update message: {:?}", err);
        DbError::from(err)
    })
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DbError> {
    sqlx::query("DELETE FROM messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete message: {:?}", err);
            DbError::from(err)
        })
}
