//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use pixel_kernels::Raster;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tower::ServiceExt;

use ichabod::models::AppConfig;
use ichabod::rendering::decode;
use ichabod::server::{build_router, create_app_state, AppState};

use super::fixtures;

/// Test application with router and a populated image directory
pub struct TestApp {
    router: axum::Router,
    dir: TempDir,
}

impl TestApp {
    /// Create a test application with all fixtures and the shadow mask
    pub fn new() -> Self {
        Self::build(true, None)
    }

    /// Create a test application whose image directory has no shadow mask
    pub fn without_mask() -> Self {
        Self::build(false, None)
    }

    /// Create a test application with a fixed RNG seed
    pub fn with_seed(seed: u64) -> Self {
        Self::build(true, Some(seed))
    }

    fn build(with_mask: bool, seed: Option<u64>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fixtures::populate(dir.path());
        if with_mask {
            fixtures::write_png(dir.path(), fixtures::images::MASK, &fixtures::mask());
        }

        let state = Self::create_state(dir.path(), seed);
        let router = build_router(state);

        Self { router, dir }
    }

    /// Create application state rooted at `root`
    pub fn create_state(root: &Path, seed: Option<u64>) -> AppState {
        let config = AppConfig {
            image_dir: root.to_path_buf(),
            seed,
            ..AppConfig::default()
        };
        create_app_state(&config).expect("Failed to create app state")
    }

    /// The image directory
    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }

    /// Decode the body as an image
    pub fn raster(&self) -> Raster {
        decode(&self.body).expect("Failed to decode response image")
    }

    /// Header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
