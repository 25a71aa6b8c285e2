use super::AuthProvider;
use crate::connectors::ConnectorError;
use crate::models;
use async_trait::async_trait;

/// Accepts `valid-token` (and `valid-token-<id>`) and nothing else.
pub struct MockAuthProvider;

pub const MOCK_TOKEN: &str = "valid-token";

pub fn mock_user(id: &str) -> models::User {
    models::User {
        id: id.to_string(),
        email: Some(format!("{id}@example.com")),
        role: "authenticated".to_string(),
        created_at: None,
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn verify(&self, token: &str) -> Result<models::User, ConnectorError> {
        match token.strip_prefix(MOCK_TOKEN) {
            Some("") => Ok(mock_user("test_user_id")),
            Some(rest) => match rest.strip_prefix('-') {
                Some(id) if !id.is_empty() => Ok(mock_user(id)),
                _ => Err(ConnectorError::Unauthorized("invalid token".to_string())),
            },
            None => Err(ConnectorError::Unauthorized("invalid token".to_string())),
        }
    }

    async fn create_user(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<models::User, ConnectorError> {
        let mut user = mock_user("created_user_id");
        user.email = Some(email.to_string());
        Ok(user)
    }

    async fn delete_user(&self, _user_id: &str) -> Result<(), ConnectorError> {
        Ok(())
    }
}
