use crate::db::DbError;
use crate::forms;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

/// Fetches a project only when it belongs to `user_id`.
pub async fn fetch_owned(
    pool: &PgPool,
    id: Uuid,
    user_id: &str,
) -> Result<Option<models::Project>, DbError> {
    let query_span = tracing::info_span!("Fetch owned project", project_id = %id);
    sqlx::query_as::<_, models::Project>(
        r#"
        SELECT *
        FROM projects
        WHERE id = $1 AND user_id = $2
        LIMIT 1
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch project, error: {:?}", err);
        DbError::from(err)
    })
}

pub async fn fetch_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<models::Project>, DbError> {
    let query_span = tracing::info_span!("Fetch projects by user id.");
    sqlx::query_as::<_, models::Project>(
        r#"
        SELECT *
        FROM projects
        WHERE user_id = $1
        ORDER BY last_opened_at DESC NULLS LAST, created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch projects, error: {:?}", err);
        DbError::from(err)
    })
}

pub async fn insert(pool: &PgPool, project: models::Project) -> Result<models::Project, DbError> {
    let query_span = tracing::info_span!("Saving new project into the database");
    sqlx::query_as::<_, models::Project>(
        r#"
        INSERT INTO projects (
            id, user_id, name, description, framework, template, thumbnail_url,
            is_deployed, deployment_url, last_opened_at, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(project.id)
    .bind(&project.user_id)
    .bind(&project.name)
    .bind(&project.description)
    .bind(&project.framework)
    .bind(&project.template)
    .bind(&project.thumbnail_url)
    .bind(project.is_deployed)
    .bind(&project.deployment_url)
    .bind(project.last_opened_at)
    .bind(project.created_at)
    .bind(project.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        DbError::from_write(err)
    })
}

/// Applies only the fields present in `changes`; columns the request did not
/// send keep whatever is currently stored.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    user_id: &str,
    changes: &forms::UpdateProject,
) -> Result<Option<models::Project>, DbError> {
    let query_span = tracing::info_span!("Updating project", project_id = %id);
    sqlx::query_as::<_, models::Project>(
        r#"
        UPDATE projects
        SET
            name = COALESCE($3, name),
            description = COALESCE($4, description),
            template = COALESCE($5, template),
            thumbnail_url = COALESCE($6, thumbnail_url),
            is_deployed = COALESCE($7, is_deployed),
            deployment_url = COALESCE($8, deployment_url),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&changes.name)
    .bind(&changes.description)
    .bind(&changes.template)
    .bind(&changes.thumbnail_url)
    .bind(changes.is_deployed)
    .bind(&changes.deployment_url)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map(|project| {
        if let Some(project) = &project {
            tracing::info!("Project {} has been saved to database", project.id);
        }
        project
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        DbError::from_write(err)
    })
}

pub async fn touch_last_opened(
    pool: &PgPool,
    id: Uuid,
    user_id: &str,
) -> Result<Option<models::Project>, DbError> {
    let query_span = tracing::info_span!("Mark project as opened", project_id = %id);
    sqlx::query_as::<_, models::Project>(
        r#"
        UPDATE projects
        SET last_opened_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update last_opened_at: {:?}", err);
        DbError::from(err)
    })
}

/// Files, messages and deployments go with the project (ON DELETE CASCADE).
#[tracing::instrument(name = "Delete user's project.", skip(pool))]
pub async fn delete(pool: &PgPool, id: Uuid, user_id: &str) -> Result<bool, DbError> {
    sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete project: {:?}", err);
            DbError::from(err)
        })
}
