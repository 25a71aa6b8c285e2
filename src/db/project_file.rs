use crate::db::DbError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert(
    pool: &PgPool,
    file: models::ProjectFile,
) -> Result<models::ProjectFile, DbError> {
    let query_span = tracing::info_span!("Saving new project file", file_path = %file.file_path);
    sqlx::query_as::<_, models::ProjectFile>(
        r#"
        INSERT INTO project_files (id, project_id, file_path, file_content, file_type, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(file.id)
    .bind(file.project_id)
    .bind(&file.file_path)
    .bind(&file.file_content)
    .bind(&file.file_type)
    .bind(file.created_at)
    .bind(file.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        let err = DbError::from_write(err);
        if !matches!(err, DbError::UniqueViolation(_)) {
            tracing::error!("Failed to create file: {:?}", err);
        }
        err
    })
}

/// Inserts a batch in one transaction: either every file lands or none does.
pub async fn insert_many(pool: &PgPool, files: Vec<models::ProjectFile>) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;
    for file in files {
        sqlx::query(
            r#"
            INSERT INTO project_files (id, project_id, file_path, file_content, file_type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(file.id)
        .bind(file.project_id)
        .bind(&file.file_path)
        .bind(&file.file_content)
        .bind(&file.file_type)
        .bind(file.created_at)
        .bind(file.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from_write)?;
    }
    tx.commit().await?;

    Ok(())
}

pub async fn fetch_by_project(
    pool: &PgPool,
    project_id: Uuid,
) -> Result<Vec<models::ProjectFile>, DbError> {
    let query_span = tracing::info_span!("Fetch files by project", project_id = %project_id);
    sqlx::query_as::<_, models::ProjectFile>(
        r#"
        SELECT *
        FROM project_files
        WHERE project_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch files: {:?}", err);
        DbError::from(err)
    })
}

/// Fetches a file whose project belongs to `user_id`.
pub async fn fetch_owned(
    pool: &PgPool,
    id: Uuid,
    user_id: &str,
) -> Result<Option<models::ProjectFile>, DbError> {
    let query_span = tracing::info_span!("Fetch owned file", file_id = %id);
    sqlx::query_as::<_, models::ProjectFile>(
        r#"
        SELECT f.*
        FROM project_files f
        INNER JOIN projects p ON p.id = f.project_id
        WHERE f.id = $1 AND p.user_id = $2
        LIMIT 1
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch file: {:?}", err);
        DbError::from(err)
    })
}

pub async fn update_content(
    pool: &PgPool,
    id: Uuid,
    file_content: &str,
) -> Result<Option<models::ProjectFile>, DbError> {
    let query_span = tracing::info_span!("Updating file content", file_id = %id);
    sqlx::query_as::<_, models::ProjectFile>(
        r#"
        UPDATE project_files
        SET file_content = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(file_content)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update file: {:?}", err);
        DbError::from(err)
    })
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DbError> {
    sqlx::query("DELETE FROM project_files WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete file: {:?}", err);
            DbError::from(err)
        })
}
