use super::AuthProvider;
use crate::configuration::AuthSettings;
use crate::connectors::ConnectorError;
use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// HTTP client for the GoTrue endpoints under `{url}/auth/v1`.
pub struct AuthProviderClient {
    base_url: String,
    anon_key: String,
    service_key: String,
    http_client: reqwest::Client,
}

/// User object as returned by the provider. Only the fields we keep.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<ProviderUser> for models::User {
    fn from(user: ProviderUser) -> Self {
        let role = user
            .role
            .filter(|role| !role.is_empty())
            .unwrap_or_else(|| "authenticated".to_string());

        models::User {
            id: user.id,
            email: user.email,
            role,
            created_at: user.created_at,
        }
    }
}

impl AuthProviderClient {
    pub fn new(settings: &AuthSettings) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_default();

        Self {
            base_url: settings.url.trim_end_matches('/').to_string(),
            anon_key: settings.anon_key.clone(),
            service_key: settings.service_key.clone(),
            http_client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    async fn error_from(response: reqwest::Response) -> ConnectorError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = provider_message(&body).unwrap_or_else(|| status.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ConnectorError::Unauthorized(message),
            StatusCode::NOT_FOUND => ConnectorError::NotFound(message),
            status if status.is_client_error() => ConnectorError::Rejected(message),
            _ => ConnectorError::HttpError(format!("{}: {}", status, message)),
        }
    }
}

// GoTrue reports errors under different keys depending on the endpoint.
fn provider_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[async_trait]
impl AuthProvider for AuthProviderClient {
    #[tracing::instrument(name = "Verify access token", skip(self, token))]
    async fn verify(&self, token: &str) -> Result<models::User, ConnectorError> {
        let response = self
            .http_client
            .get(self.endpoint("/user"))
            .bearer_auth(token)
            .header("apikey", &self.anon_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<ProviderUser>()
            .await
            .map(models::User::from)
            .map_err(|err| ConnectorError::InvalidResponse(err.to_string()))
    }

    #[tracing::instrument(name = "Create auth user", skip(self, password))]
    async fn create_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<models::User, ConnectorError> {
        let response = self
            .http_client
            .post(self.endpoint("/admin/users"))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({
                "email": email,
                "password": password,
                "email_confirm": true,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::error_from(response).await;
            tracing::error!("Auth provider refused to create user: {}", err);
            return Err(err);
        }

        response
            .json::<ProviderUser>()
            .await
            .map(models::User::from)
            .map_err(|err| ConnectorError::InvalidResponse(err.to_string()))
    }

    #[tracing::instrument(name = "Delete auth user", skip(self))]
    async fn delete_user(&self, user_id: &str) -> Result<(), ConnectorError> {
        let response = self
            .http_client
            .delete(self.endpoint(&format!("/admin/users/{}", user_id)))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }
}
