use crate::db::{self, DbError};
use crate::models::DeploymentStatus;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Writes performed by the simulator's scheduled jobs.
#[async_trait]
pub trait DeploymentStore: Send + Sync {
    /// Moves the deployment to `status` unless it is already there or further.
    async fn advance(
        &self,
        deployment_id: Uuid,
        status: DeploymentStatus,
        build_log: &str,
    ) -> Result<bool, DbError>;

    /// Final step: `success`, URL and log on the deployment, then
    /// `is_deployed` and the URL on its project. Returns the project id.
    async fn complete(
        &self,
        deployment_id: Uuid,
        deployment_url: &str,
        build_log: &str,
    ) -> Result<Option<Uuid>, DbError>;
}

pub struct PgDeploymentStore {
    pool: PgPool,
}

impl PgDeploymentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeploymentStore for PgDeploymentStore {
    async fn advance(
        &self,
        deployment_id: Uuid,
        status: DeploymentStatus,
        build_log: &str,
    ) -> Result<bool, DbError> {
        db::deployment::advance(&self.pool, deployment_id, status, build_log).await
    }

    async fn complete(
        &self,
        deployment_id: Uuid,
        deployment_url: &str,
        build_log: &str,
    ) -> Result<Option<Uuid>, DbError> {
        db::deployment::complete(&self.pool, deployment_id, deployment_url, build_log).await
    }
}
