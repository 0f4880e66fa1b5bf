use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::{Path, Query};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use tracing::warn;
use crate::controller::AppState;
use crate::controller::response::{failure, read_body, success};
use crate::error::SuggestionError;
use crate::helpers::handler_404::method_not_allowed_handler;
use crate::helpers::validation::ValidationError;
use crate::repositories::suggestion_store::SuggestionStore;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/vote", post(cast_vote).fallback(method_not_allowed_handler))
        .route(
            "/users/:user_id/votes",
            get(retrieve_user_votes).fallback(method_not_allowed_handler),
        )
        .route(
            "/user/:user_id/votes",
            get(retrieve_user_votes).fallback(method_not_allowed_handler),
        )
        .route(
            "/user-votes",
            get(retrieve_user_votes_by_query).fallback(method_not_allowed_handler),
        )
        .route_layer(Extension(app_state.suggestion_store))
}

/// Vote request that names the suggestion in the body. Older clients send
/// the id as a string.
#[serde_as]
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CastVote {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    suggestion_id: Option<u64>,
    user_id: Option<String>,
}

pub async fn cast_vote(
    Extension(suggestion_store): Extension<Arc<SuggestionStore>>,
    body: Result<Json<CastVote>, JsonRejection>,
) -> impl IntoResponse {
    let body = match read_body(body) {
        Ok(body) => body,
        Err(e) => return e.into_response(),
    };
    let suggestion_id = match body.suggestion_id {
        Some(suggestion_id) => suggestion_id,
        None => {
            return SuggestionError::from(ValidationError::MissingField("suggestionId")).into_response();
        }
    };

    let vote_res = suggestion_store
        .cast_vote(
            suggestion_id,
            body.user_id.as_deref().unwrap_or_default(),
        ).await;

    return match vote_res {
        Ok(suggestion) => success("suggestion", json!(suggestion)),
        Err(e) => {
            warn!("Something went wrong processing vote due to: {}", e);
            e.into_response()
        }
    };
}

pub async fn retrieve_user_votes(
    Extension(suggestion_store): Extension<Arc<SuggestionStore>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let votes = suggestion_store.user_votes(&user_id).await;
    success("votes", json!(votes))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserVotesParam {
    user_id: Option<String>,
}

pub async fn retrieve_user_votes_by_query(
    Extension(suggestion_store): Extension<Arc<SuggestionStore>>,
    Query(query): Query<UserVotesParam>,
) -> impl IntoResponse {
    let user_id = match query.user_id.as_deref().map(str::trim) {
        Some(user_id) if !user_id.is_empty() => user_id.to_string(),
        _ => {
            warn!("User votes requested without a userId");
            return failure(StatusCode::BAD_REQUEST, "Missing required parameter: userId");
        }
    };

    let votes = suggestion_store.user_votes(&user_id).await;
    success("votes", json!(votes))
}
