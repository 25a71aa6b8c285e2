pub mod chat;
pub mod deployment;
pub mod message;
pub mod project;
pub mod project_file;
pub mod user;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

impl DbError {
    /// Separates unique-key conflicts from every other failure of a write.
    pub fn from_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::UniqueViolation(db_err.constraint().unwrap_or_default().to_string())
            }
            _ => DbError::Query(err),
        }
    }
}
