use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateMessage {
    #[validate(min_length = 1)]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateMessage {
    #[validate(min_length = 1)]
    pub content: Option<String>,
}

impl UpdateMessage {
    pub fn update(self, message: &mut models::Message) {
        if let Some(content) = self.content {
            message.content = content;
        }
    }
}
