use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pixel_kernels::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found")]
    NotFound,

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match &e {
            EngineError::UnknownCommand(name) => ApiError::UnknownCommand(name.clone()),
            EngineError::InvalidArgument { .. } => ApiError::InvalidArgument(e.to_string()),
            EngineError::EmptyRaster { .. } | EngineError::BufferSize { .. } => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::UnknownCommand(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::ImageNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Render(RenderError::Decode(_))
            | ApiError::Render(RenderError::UnsupportedDimensions { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_missing_parameter() {
        let error = ApiError::MissingParameter("image");
        assert_eq!(error.to_string(), "Missing required parameter: image");
    }

    #[test]
    fn test_api_error_unknown_command() {
        let error = ApiError::UnknownCommand("sepia".to_string());
        assert_eq!(error.to_string(), "Unknown command: sepia");
    }

    #[test]
    fn test_api_error_image_not_found() {
        let error = ApiError::ImageNotFound("cat.png".to_string());
        assert_eq!(error.to_string(), "Image not found: cat.png");
    }

    #[test]
    fn test_render_error_decode() {
        let error = RenderError::Decode("bad magic".to_string());
        assert_eq!(error.to_string(), "Image decode error: bad magic");
    }

    #[test]
    fn test_render_error_unsupported_dimensions() {
        let error = RenderError::UnsupportedDimensions {
            width: 0,
            height: 12,
        };
        assert_eq!(error.to_string(), "Unsupported dimensions: 0x12");
    }

    #[test]
    fn test_api_error_from_engine_error() {
        let api_error: ApiError = EngineError::UnknownCommand("blur".to_string()).into();
        assert!(matches!(api_error, ApiError::UnknownCommand(ref n) if n == "blur"));

        let api_error: ApiError = EngineError::InvalidArgument {
            key: "maxColors",
            value: "x".to_string(),
            reason: "expected an integer",
        }
        .into();
        match api_error {
            ApiError::InvalidArgument(msg) => assert!(msg.contains("maxColors")),
            other => panic!("Expected InvalidArgument variant, got {other:?}"),
        }

        let api_error: ApiError = EngineError::EmptyRaster {
            width: 0,
            height: 0,
        }
        .into();
        assert!(matches!(api_error, ApiError::Internal(_)));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        use axum::response::IntoResponse;

        // MissingParameter -> BAD_REQUEST
        let response = ApiError::MissingParameter("command").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // UnknownCommand -> NOT_FOUND
        let response = ApiError::UnknownCommand("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // ImageNotFound -> NOT_FOUND
        let response = ApiError::ImageNotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // InvalidArgument -> BAD_REQUEST
        let response = ApiError::InvalidArgument("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Decode -> UNPROCESSABLE_ENTITY
        let response = ApiError::Render(RenderError::Decode("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // PngEncode -> INTERNAL_SERVER_ERROR
        let response = ApiError::Render(RenderError::PngEncode("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
