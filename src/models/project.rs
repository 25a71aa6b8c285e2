use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_FRAMEWORK: &str = "react";
pub const DEFAULT_TEMPLATE: &str = "blank";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub user_id: String, // auth provider user id
    pub name: String,
    pub description: Option<String>,
    pub framework: String,
    pub template: String,
    pub thumbnail_url: Option<String>,
    pub is_deployed: bool,
    pub deployment_url: Option<String>,
    pub last_opened_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        user_id: String,
        name: String,
        description: Option<String>,
        framework: Option<String>,
        template: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            description,
            framework: framework.unwrap_or_else(|| DEFAULT_FRAMEWORK.to_string()),
            template: template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            thumbnail_url: None,
            is_deployed: false,
            deployment_url: None,
            last_opened_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.template == DEFAULT_TEMPLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_defaults() {
        let project = Project::new("user-1".to_string(), "Demo".to_string(), None, None, None);
        assert_eq!(project.framework, "react");
        assert_eq!(project.template, "blank");
        assert!(project.is_blank());
        assert!(!project.is_deployed);
        assert!(project.deployment_url.is_none());
        assert_eq!(project.created_at, project.updated_at);
    }
}
