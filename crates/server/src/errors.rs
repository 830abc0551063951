use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// JSON error body shared by every handler: a short title plus an
/// optional human-readable detail.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    title: &'static str,
    detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some(format!("{entity} {id} not found")),
        )
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::Conflict(msg) => {
                Self::new(StatusCode::CONFLICT, "Conflict", Some(msg))
            }
            ServiceError::Store(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                Some(e.to_string()),
            ),
        }
    }
}
