use crate::db::DbError;
use crate::models::{Deployment, DeploymentStatus};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert(pool: &PgPool, deployment: Deployment) -> Result<Deployment, DbError> {
    let query_span = tracing::info_span!("Saving new deployment into the database");
    sqlx::query_as::<_, Deployment>(
        r#"
        INSERT INTO deployments (id, project_id, status, deployment_url, build_log, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(deployment.id)
    .bind(deployment.project_id)
    .bind(deployment.status)
    .bind(&deployment.deployment_url)
    .bind(&deployment.build_log)
    .bind(deployment.created_at)
    .bind(deployment.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to create deployment: {:?}", err);
        DbError::from_write(err)
    })
}

pub async fn fetch_by_project(
    pool: &PgPool,
    project_id: Uuid,
) -> Result<Vec<Deployment>, DbError> {
    let query_span = tracing::info_span!("Fetch deployments by project", project_id = %project_id);
    sqlx::query_as::<_, Deployment>(
        r#"
        SELECT *
        FROM deployments
        WHERE project_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch deployments: {:?}", err);
        DbError::from(err)
    })
}

/// Fetches a deployment whose project belongs to `user_id`.
pub async fn fetch_owned(
    pool: &PgPool,
    id: Uuid,
    user_id: &str,
) -> Result<Option<Deployment>, DbError> {
    let query_span = tracing::info_span!("Fetch owned deployment", deployment_id = %id);
    sqlx::query_as::<_, Deployment>(
        r#"
        SELECT d.*
        FROM deployments d
        INNER JOIN projects p ON p.id = d.project_id
        WHERE d.id = $1 AND p.user_id = $2
        LIMIT 1
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch deployment: {:?}", err);
        DbError::from(err)
    })
}

/// Moves a deployment forward to `status`. Rows already at or past `status`
/// are left untouched and `false` is returned.
pub async fn advance(
    pool: &PgPool,
    id: Uuid,
    status: DeploymentStatus,
    build_log: &str,
) -> Result<bool, DbError> {
    let query_span = tracing::info_span!("Advancing deployment", deployment_id = %id, status = %status);
    sqlx::query(
        r#"
        UPDATE deployments
        SET status = $2, build_log = $3, updated_at = NOW()
        WHERE id = $1 AND status < $2
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(build_log)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(DbError::from)
}

/// Marks the deployment successful and publishes its URL on the owning
/// project, both in one transaction. Returns the project id, or `None` when
/// the deployment was missing or already finished.
pub async fn complete(
    pool: &PgPool,
    id: Uuid,
    deployment_url: &str,
    build_log: &str,
) -> Result<Option<Uuid>, DbError> {
    let query_span = tracing::info_span!("Completing deployment", deployment_id = %id);
    async move {
        let mut tx = pool.begin().await?;

        let project_id: Option<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE deployments
            SET status = 'success', deployment_url = $2, build_log = $3, updated_at = NOW()
            WHERE id = $1 AND status < 'success'
            RETURNING project_id
            "#,
        )
        .bind(id)
        .bind(deployment_url)
        .bind(build_log)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(project_id) = project_id else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            r#"
            UPDATE projects
            SET is_deployed = TRUE, deployment_url = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(project_id)
        .bind(deployment_url)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok::<_, DbError>(Some(project_id))
    }
    .instrument(query_span)
    .await
}
