use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::services::RESERVED_PREFIXES;

/// Serve a file from the image directory.
///
/// Paths that start with a command name are refused so a file can never
/// shadow a command.
pub async fn handle_file(State(files): State<ServeDir>, request: Request) -> Response {
    let path = request.uri().path().trim_start_matches('/');
    if RESERVED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        tracing::debug!(path = %path, "Refusing file that shadows a command");
        return ApiError::NotFound.into_response();
    }

    match files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
