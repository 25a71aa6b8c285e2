use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateProject {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    pub description: Option<String>,
    #[validate(pattern = r"^(react|vue|angular)$")]
    pub framework: Option<String>,
    pub template: Option<String>,
}

impl CreateProject {
    pub fn into_model(self, user_id: String) -> models::Project {
        models::Project::new(
            user_id,
            self.name,
            self.description,
            self.framework,
            self.template,
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProject {
    #[validate(max_length = 200)]
    pub name: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    #[validate(pattern = r"^https?://[^\s/$.?#][^\s]*$")]
    pub thumbnail_url: Option<String>,
    pub is_deployed: Option<bool>,
    #[validate(pattern = r"^https?://[^\s/$.?#][^\s]*$")]
    pub deployment_url: Option<String>,
}
