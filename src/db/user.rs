use crate::db::DbError;
use crate::models::UserProfile;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(pool: &PgPool, profile: UserProfile) -> Result<UserProfile, DbError> {
    let query_span = tracing::info_span!("Saving user profile", user_id = %profile.id);
    sqlx::query_as::<_, UserProfile>(
        r#"
        INSERT INTO user_profiles (id, email, name, bio, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&profile.id)
    .bind(&profile.email)
    .bind(&profile.name)
    .bind(&profile.bio)
    .bind(profile.created_at)
    .bind(profile.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to save user profile: {:?}", err);
        DbError::from_write(err)
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<UserProfile>, DbError> {
    sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user profiles: {:?}", err);
            DbError::from(err)
        })
}

pub async fn fetch(pool: &PgPool, id: &str) -> Result<Option<UserProfile>, DbError> {
    sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user profile: {:?}", err);
            DbError::from(err)
        })
}

pub async fn update(pool: &PgPool, profile: UserProfile) -> Result<UserProfile, DbError> {
    let query_span = tracing::info_span!("Updating user profile", user_id = %profile.id);
    sqlx::query_as::<_, UserProfile>(
        r#"
        UPDATE user_profiles
        SET name = $2, bio = $3, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(&profile.id)
    .bind(&profile.name)
    .bind(&profile.bio)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update user profile: {:?}", err);
        DbError::from(err)
    })
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, DbError> {
    sqlx::query("DELETE FROM user_profiles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete user profile: {:?}", err);
            DbError::from(err)
        })
}
