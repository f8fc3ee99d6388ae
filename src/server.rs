//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Query, Request, State},
    http::header::CONNECTION,
    response::Response,
    routing::get,
    Router,
};
use pixel_kernels::Engine;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{load_shadow_mask, ImageLibrary, ImageStore, ProcessorService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub images: Arc<dyn ImageStore>,
    pub processor: Arc<ProcessorService>,
    pub files: ServeDir,
}

/// Create application state from the configuration.
///
/// The shadow mask is loaded here, once; a missing mask is not an error.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    if !config.image_dir.is_dir() {
        anyhow::bail!(
            "Image directory {} does not exist or is not a directory",
            config.image_dir.display()
        );
    }

    let images: Arc<dyn ImageStore> = Arc::new(ImageLibrary::new(&config.image_dir));
    let mask = load_shadow_mask(&config.shadow_mask_path()).map(Arc::new);
    let engine = Engine::new(mask);
    let processor = Arc::new(ProcessorService::new(images.clone(), engine, config.seed));
    let files = ServeDir::new(&config.image_dir).append_index_html_on_directories(false);

    Ok(AppState {
        images,
        processor,
        files,
    })
}

/// Build the router with all endpoints and middleware.
///
/// Every response carries `Connection: close`: each request gets its own
/// connection, as the image UI expects.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Commands
        .route("/process", get(handle_process))
        .route("/static", get(handle_process))
        .route("/getFileList", get(handle_file_list))
        .route("/getCommandList", get(api::handle_command_list))
        // Web page
        .route("/", get(handle_index))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Anything else is a file from the image directory
        .fallback(handle_file)
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CONNECTION,
            axum::http::HeaderValue::from_static("close"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_process(
    State(state): State<AppState>,
    query: Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    api::handle_process(State(state.processor), query).await
}

async fn handle_file_list(State(state): State<AppState>) -> Result<Response, ApiError> {
    api::handle_file_list(State(state.images)).await
}

async fn handle_index(State(state): State<AppState>) -> Response {
    api::handle_index(State(state.images)).await
}

async fn handle_file(State(state): State<AppState>, request: Request) -> Response {
    api::handle_file(State(state.files), request).await
}
