use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle of a deployment. Variants are declared in pipeline order, so the
/// derived `Ord` (and the Postgres enum sort order) is the progression order.
/// `Failed` is reserved: no code path produces it.
#[derive(
    sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[sqlx(type_name = "deployment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Pending,
    Building,
    Deploying,
    Success,
    Failed,
}

impl DeploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentStatus::Pending => "pending",
            DeploymentStatus::Building => "building",
            DeploymentStatus::Deploying => "deploying",
            DeploymentStatus::Success => "success",
            DeploymentStatus::Failed => "failed",
        }
    }

    /// Whether a row currently in `self` may be moved to `next`.
    pub fn can_advance_to(&self, next: DeploymentStatus) -> bool {
        *self < next
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Store one attempt to publish a project
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Deployment {
    pub id: Uuid,
    pub project_id: Uuid,
    pub status: DeploymentStatus,
    pub deployment_url: Option<String>,
    pub build_log: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deployment {
    pub fn new(project_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            status: DeploymentStatus::Pending,
            deployment_url: None,
            build_log: None,
            created_at: now,
            updated_at: now,
        }
    }
}

pub const NO_LOGS_PLACEHOLDER: &str = "No logs available yet.";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeploymentLogs {
    pub logs: String,
}

impl From<&Deployment> for DeploymentLogs {
    fn from(deployment: &Deployment) -> Self {
        let logs = deployment
            .build_log
            .as_deref()
            .filter(|log| !log.is_empty())
            .unwrap_or(NO_LOGS_PLACEHOLDER)
            .to_string();

        Self { logs }
    }
}
