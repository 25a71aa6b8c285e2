use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUser {
    #[validate(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$")]
    pub email: String,
    #[validate(min_length = 6)]
    pub password: String,
    #[validate(max_length = 200)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUser {
    #[validate(max_length = 200)]
    pub name: Option<String>,
    #[validate(max_length = 1000)]
    pub bio: Option<String>,
}

impl UpdateUser {
    pub fn update(self, profile: &mut models::UserProfile) {
        if let Some(name) = self.name {
            profile.name = Some(name);
        }
        if let Some(bio) = self.bio {
            profile.bio = Some(bio);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_and_password_are_checked() {
        let form: CreateUser =
            serde_json::from_str(r#"{"email":"jane@example.com","password":"secret1"}"#).unwrap();
        assert!(form.validate().is_ok());

        let form: CreateUser =
            serde_json::from_str(r#"{"email":"jane","password":"secret1"}"#).unwrap();
        assert!(form.validate().is_err());

        let form: CreateUser =
            serde_json::from_str(r#"{"email":"jane@example.com","password":"123"}"#).unwrap();
        assert!(form.validate().is_err());
    }
}
