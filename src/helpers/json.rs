use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde::Serialize;

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub status: String,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
}

pub struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    message: String,
    item: Option<T>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            message: String::new(),
            item: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_msg<I: Into<String>>(mut self, msg: I) -> Self {
        self.message = msg.into();
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    fn to_json_response(self, code: StatusCode) -> JsonResponse<T> {
        let message = if self.message.trim().is_empty() {
            code.canonical_reason().unwrap_or("Error").to_string()
        } else {
            self.message
        };

        JsonResponse {
            status: "Error".to_string(),
            code: code.as_u16(),
            message,
            item: self.item,
        }
    }

    pub fn to_string(self, code: StatusCode) -> String {
        serde_json::to_string(&self.to_json_response(code)).unwrap_or_default()
    }

    fn error(self, code: StatusCode, msg: String) -> Error {
        let body = self.set_msg(msg).to_json_response(code);
        let cause = body.message.clone();
        InternalError::from_response(cause, HttpResponse::build(code).json(body)).into()
    }

    pub fn bad_request<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::BAD_REQUEST, msg.into())
    }

    /// Validation failure; `errors` is the rendered validator output.
    pub fn form_error<I: Into<String>>(self, errors: I) -> Error {
        let errors = errors.into();
        tracing::debug!("Invalid data received {}", errors);
        self.error(StatusCode::BAD_REQUEST, errors)
    }

    pub fn unauthorized<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::UNAUTHORIZED, msg.into())
    }

    pub fn forbidden<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::FORBIDDEN, msg.into())
    }

    pub fn not_found<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::NOT_FOUND, msg.into())
    }

    pub fn conflict<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::CONFLICT, msg.into())
    }

    pub fn internal_server_error<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, msg.into())
    }
}
