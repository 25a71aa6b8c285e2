//! Authentication provider connector
//!
//! Talks to a Supabase-compatible GoTrue API: token verification for the
//! bearer middleware and the admin endpoints used by the users resource.

use crate::configuration::AuthSettings;
use crate::connectors::ConnectorError;
use crate::models;
use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

pub mod cache;
pub mod client;
#[cfg(test)]
pub mod mock;

pub use cache::TokenCache;
pub use client::AuthProviderClient;
#[cfg(test)]
pub use mock::MockAuthProvider;

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve the caller behind an access token.
    async fn verify(&self, token: &str) -> Result<models::User, ConnectorError>;

    /// Register a confirmed account through the admin API.
    async fn create_user(&self, email: &str, password: &str)
        -> Result<models::User, ConnectorError>;

    async fn delete_user(&self, user_id: &str) -> Result<(), ConnectorError>;
}

pub fn init(settings: &AuthSettings) -> web::Data<Arc<dyn AuthProvider>> {
    tracing::info!("Auth provider connector initialized ({})", settings.url);
    let connector: Arc<dyn AuthProvider> = Arc::new(AuthProviderClient::new(settings));
    web::Data::new(connector)
}
