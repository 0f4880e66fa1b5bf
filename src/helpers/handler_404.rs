use axum::http::StatusCode;
use axum::response::IntoResponse;
use crate::controller::response::failure;

pub async fn page_not_found_handler() -> impl IntoResponse {
    failure(StatusCode::NOT_FOUND, "Oops looks like you landed at the wrong endpoint")
}

pub async fn method_not_allowed_handler() -> impl IntoResponse {
    failure(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
