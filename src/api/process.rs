use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use pixel_kernels::CommandArgs;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::ProcessorService;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// Run a command on an image
///
/// Every query pair is handed to the command as an argument, so commands
/// that take options (`reduceColor` reads `maxColors`) get them from the
/// same query string. Also served under `/static`.
#[utoipa::path(
    get,
    path = "/process",
    responses(
        (status = 200, description = "Processed image", content_type = "image/png"),
        (status = 400, description = "Missing parameter or invalid argument", body = ErrorResponse),
        (status = 404, description = "Unknown command or image", body = ErrorResponse),
        (status = 422, description = "Image could not be decoded", body = ErrorResponse),
        (status = 500, description = "Processing error", body = ErrorResponse),
    ),
    params(
        ("command" = String, Query, description = "Command name, see /getCommandList"),
        ("image" = String, Query, description = "Image file name, see /getFileList"),
        ("maxColors" = Option<u32>, Query, description = "Palette size for reduceColor (default: 8)"),
    ),
    tag = "Processing"
)]
pub async fn handle_process(
    State(processor): State<Arc<ProcessorService>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let command = params
        .get("command")
        .cloned()
        .ok_or(ApiError::MissingParameter("command"))?;
    let image = params
        .get("image")
        .cloned()
        .ok_or(ApiError::MissingParameter("image"))?;

    let args = CommandArgs::from(params);
    let png_bytes = processor.process(&command, &image, args).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CONTENT_LENGTH, &png_bytes.len().to_string()),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}
