use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller identity resolved from a bearer token by the auth provider.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub role: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Public shape of `GET /profile`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: Option<String>,
    pub role: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            created_at: user.created_at,
        }
    }
}

/// Row of `user_profiles`, keyed by the auth provider user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(id: String, email: String, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            name,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }
}
