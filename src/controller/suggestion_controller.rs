use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::controller::response::{read_body, success};
use crate::error::SuggestionError;
use crate::helpers::handler_404::method_not_allowed_handler;
use crate::helpers::validation::parse_suggestion_id;
use crate::models::suggestion::SuggestionDraft;
use crate::repositories::suggestion_store::SuggestionStore;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/suggestions",
            get(list_suggestions)
                .post(create_suggestion)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/suggestions/:id/vote",
            post(vote_for_suggestion).fallback(method_not_allowed_handler),
        )
        .route_layer(Extension(app_state.suggestion_store))
}

pub async fn list_suggestions(
    Extension(suggestion_store): Extension<Arc<SuggestionStore>>,
) -> impl IntoResponse {
    let suggestions = suggestion_store.list_suggestions().await;
    success("suggestions", json!(suggestions))
}

pub async fn create_suggestion(
    Extension(suggestion_store): Extension<Arc<SuggestionStore>>,
    body: Result<Json<SuggestionDraft>, JsonRejection>,
) -> impl IntoResponse {
    let draft = match read_body(body) {
        Ok(draft) => draft,
        Err(e) => return e.into_response(),
    };

    let create_res = suggestion_store
        .create_suggestion(&draft)
        .await;

    return match create_res {
        Ok(suggestion) => success("suggestion", json!(suggestion)),
        Err(e) => {
            warn!("Something went wrong adding suggestion due to: {}", e);
            e.into_response()
        }
    };
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VoteBody {
    pub user_id: Option<String>,
}

pub async fn vote_for_suggestion(
    Extension(suggestion_store): Extension<Arc<SuggestionStore>>,
    Path(id): Path<String>,
    body: Result<Json<VoteBody>, JsonRejection>,
) -> impl IntoResponse {
    let suggestion_id = match parse_suggestion_id(&id) {
        Ok(suggestion_id) => suggestion_id,
        Err(e) => {
            warn!("Rejected vote for malformed suggestion id {:?}", id);
            return SuggestionError::from(e).into_response();
        }
    };
    let body = match read_body(body) {
        Ok(body) => body,
        Err(e) => return e.into_response(),
    };

    let vote_res = suggestion_store
        .cast_vote(
            suggestion_id,
            body.user_id.as_deref().unwrap_or_default(),
        ).await;

    return match vote_res {
        Ok(suggestion) => success("suggestion", json!(suggestion)),
        Err(e) => {
            warn!("Something went wrong voting for suggestion {} due to: {}", suggestion_id, e);
            e.into_response()
        }
    };
}
