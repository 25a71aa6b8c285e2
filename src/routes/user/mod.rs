pub mod add;
pub mod delete;
pub mod get;
pub mod update;

use crate::helpers::JsonResponse;
use crate::models;

/// Profiles can only be changed by their owner. Other ids look missing.
pub(crate) fn ensure_self(user: &models::User, id: &str) -> Result<(), actix_web::Error> {
    if user.id == id {
        return Ok(());
    }

    Err(JsonResponse::<models::UserProfile>::build()
        .not_found(format!("User with ID {} not found", id)))
}
