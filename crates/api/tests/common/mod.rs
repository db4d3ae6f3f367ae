#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use locmap_api::auth::pin::MaintenancePin;
use locmap_api::config::ServerConfig;
use locmap_api::router::build_app_router;
use locmap_api::state::AppState;
use locmap_core::icons::AssetDir;
use locmap_db::JsonStore;
use tempfile::TempDir;
use tower::ServiceExt;

/// PIN configured for every test app.
pub const TEST_PIN: &str = "2468";

/// Cohort year configured for every test app.
pub const TEST_YEAR: i32 = 2026;

/// Build a test `ServerConfig` rooted at the given directories.
pub fn test_config(data_dir: &Path, assets_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
        assets_dir: assets_dir.to_path_buf(),
        maintenance_pin: MaintenancePin::new(TEST_PIN),
        cohort_years: vec![TEST_YEAR],
    }
}

/// A router over temporary data and asset directories.
///
/// The directories live as long as this value.
pub struct TestApp {
    pub router: Router,
    pub data_dir: TempDir,
    pub assets_dir: TempDir,
}

impl TestApp {
    /// A fresh handle to the router for one `oneshot` call.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Write a raw collection file, bypassing the API.
    pub fn seed(&self, file_name: &str, json: serde_json::Value) {
        std::fs::write(
            self.data_dir.path().join(file_name),
            serde_json::to_vec_pretty(&json).unwrap(),
        )
        .unwrap();
    }

    /// Parse a collection file as written by the store.
    pub fn stored(&self, file_name: &str) -> serde_json::Value {
        let bytes = std::fs::read(self.data_dir.path().join(file_name)).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Place an (empty) icon asset in the asset directory.
    pub fn add_asset(&self, name: &str) {
        std::fs::write(self.assets_dir.path().join(name), b"png").unwrap();
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app() -> TestApp {
    build_test_app_with(|_| {})
}

/// Like [`build_test_app`], letting the caller adjust the configuration.
pub fn build_test_app_with(adjust: impl FnOnce(&mut ServerConfig)) -> TestApp {
    let data_dir = tempfile::tempdir().unwrap();
    let assets_dir = tempfile::tempdir().unwrap();

    let mut config = test_config(data_dir.path(), assets_dir.path());
    adjust(&mut config);

    let state = AppState {
        store: Arc::new(JsonStore::new(data_dir.path())),
        config: Arc::new(config.clone()),
        assets: Arc::new(AssetDir::new(assets_dir.path())),
    };

    TestApp {
        router: build_app_router(state, &config),
        data_dir,
        assets_dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    pin: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(pin) = pin {
        builder = builder.header("x-maintenance-pin", pin);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_with_pin(app: Router, uri: &str, pin: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(pin), None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    pin: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, pin, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    pin: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, pin, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, pin: Option<&str>) -> Response<Body> {
    send(app, Method::DELETE, uri, pin, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
