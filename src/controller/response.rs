use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::error;
use crate::error::SuggestionError;
use crate::helpers::validation::ValidationError;

/// `{"success": true, <key>: <payload>}`
pub fn success(key: &str, payload: Value) -> Response {
    let mut envelope = json!({ "success": true });
    envelope[key] = payload;
    (StatusCode::OK, Json(envelope)).into_response()
}

/// `{"success": false, "error": <message>}`
pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({ "success": false, "error": message.into() })),
    ).into_response()
}

/// Turns axum's body rejection into a validation error so malformed
/// bodies still get the JSON envelope.
pub fn read_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, SuggestionError> {
    body.map(|Json(body)| body)
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()).into())
}

impl IntoResponse for SuggestionError {
    fn into_response(self) -> Response {
        match self {
            SuggestionError::Validation(_) | SuggestionError::DuplicateVote { .. } => {
                failure(StatusCode::BAD_REQUEST, self.to_string())
            }
            SuggestionError::NotFound { .. } => {
                failure(StatusCode::NOT_FOUND, self.to_string())
            }
            SuggestionError::IdSpaceExhausted | SuggestionError::VoteCountExhausted { .. } => {
                error!("Rejected write due to: {}", self);
                failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save changes, please try again.",
                )
            }
            SuggestionError::Persistence(e) => {
                error!("Failed to persist suggestion store due to: {}", e);
                failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save changes, please try again.",
                )
            }
        }
    }
}
