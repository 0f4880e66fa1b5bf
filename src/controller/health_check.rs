use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;
use crate::controller::AppState;
use crate::helpers::handler_404::method_not_allowed_handler;
use crate::repositories::suggestion_store::SuggestionStore;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health_check).fallback(method_not_allowed_handler))
        .route_layer(Extension(app_state.suggestion_store))
}

/// Liveness probe, also reports how many suggestions the store holds.
async fn get_health_check(
    Extension(suggestion_store): Extension<Arc<SuggestionStore>>,
) -> impl IntoResponse {
    let suggestion_count = suggestion_store.list_suggestions().await.len();
    (StatusCode::OK, Json(json!({ "status": "ok", "suggestions": suggestion_count })))
}
