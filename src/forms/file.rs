use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateFile {
    #[validate(min_length = 1)]
    pub file_path: String,
    #[validate(min_length = 1)]
    pub file_content: String,
    #[validate(pattern = r"^(tsx|css|html|json)$")]
    pub file_type: String,
}

impl CreateFile {
    pub fn into_model(self, project_id: Uuid) -> models::ProjectFile {
        models::ProjectFile::new(project_id, self.file_path, self.file_content, self.file_type)
    }
}

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateFile {
    #[validate(min_length = 1)]
    pub file_content: String,
}
