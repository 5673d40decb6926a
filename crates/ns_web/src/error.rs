use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ns_core::Error;
use serde_json::json;

/// Failure envelope returned to clients: `{"status": "error", "message": ...}`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(Error::InvalidQuery(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::InvalidQuery(rejection.body_text()))
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::Source { .. } | Error::Http(_) | Error::Serialization(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            Error::Source { message, .. } => message.clone(),
            Error::InvalidQuery(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self.0);
        }
        (status, Json(json!({ "status": "error", "message": self.message() }))).into_response()
    }
}
