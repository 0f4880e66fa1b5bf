use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use anyhow::Context;
use axum::handler::HandlerWithoutStateExt;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::suggestion_store::SuggestionStore;

pub mod health_check;
pub mod response;
pub mod suggestion_controller;
pub mod vote_controller;

#[derive(Clone)]
pub struct AppState {
    pub suggestion_store: Arc<SuggestionStore>,
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let application = application(app_state, config);

    let address = SocketAddr::new(config.host, config.port);
    info!("API server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

pub fn application(
    app_state: AppState,
    config: &Config,
) -> Router {
    router_endpoints(app_state, config.static_dir.as_deref())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(&config.origin_urls))
        )
}

pub fn router_endpoints(
    app_state: AppState,
    static_dir: Option<&Path>,
) -> Router {
    let api = suggestion_controller::router(app_state.clone())
        .merge(vote_controller::router(app_state.clone()));

    let router = Router::new()
        .merge(health_check::router(app_state))
        .nest("/api", api);

    match static_dir {
        Some(static_dir) => {
            info!("Serving static files from {}", static_dir.display());
            router.fallback_service(
                ServeDir::new(static_dir)
                    .not_found_service(page_not_found_handler.into_service())
            )
        }
        None => router.fallback(page_not_found_handler),
    }
}

fn cors_layer(origin_urls: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS
        ])
        .allow_headers([CONTENT_TYPE]);

    if origin_urls.trim() == "*" {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origin_urls
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                warn!("Ignoring invalid origin {:?} due to: {}", origin, e);
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Unable to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down API server");
}
