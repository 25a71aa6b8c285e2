use crate::helpers::JsonResponse;
use actix_web::{web::Bytes, Error};
use serde::de::DeserializeOwned;
use serde_valid::Validate;
use std::str;

/// Deserializes a request body into a form, reporting the failing JSON path,
/// then runs the form validators.
pub fn body_into_form<T>(body: Bytes) -> Result<T, Error>
where
    T: DeserializeOwned + Validate,
{
    let body_str = str::from_utf8(&body)
        .map_err(|err| JsonResponse::<()>::build().bad_request(err.to_string()))?;
    let deserializer = &mut serde_json::Deserializer::from_str(body_str);

    let form: T = serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let msg = format!("{}: {}", err.path(), err.inner());
        JsonResponse::<()>::build().bad_request(msg)
    })?;

    form.validate()
        .map_err(|errors| JsonResponse::<()>::build().form_error(errors.to_string()))?;

    Ok(form)
}
