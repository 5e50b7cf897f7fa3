//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use whereami::models::DeploymentInfo;
use whereami::services::{Detect, DetectError, HostProbe, ProbeError};
use whereami::state::AppState;

/// Detector returning a canned result and counting its invocations
pub struct StubDetector {
    info: DeploymentInfo,
    calls: AtomicUsize,
}

impl StubDetector {
    pub fn new(info: DeploymentInfo) -> Arc<Self> {
        Arc::new(Self {
            info,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Detect for StubDetector {
    fn detect(&self) -> Result<DeploymentInfo, DetectError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.info.clone())
    }
}

/// Detector that cannot read the hostname
pub struct FailingDetector;

impl Detect for FailingDetector {
    fn detect(&self) -> Result<DeploymentInfo, DetectError> {
        Err(DetectError::HostIdentifier(ProbeError::Hostname(
            "EFAULT".to_string(),
        )))
    }
}

/// Detector with a bug in it
pub struct PanickingDetector;

impl Detect for PanickingDetector {
    fn detect(&self) -> Result<DeploymentInfo, DetectError> {
        panic!("detector bug")
    }
}

/// In-memory host for driving the real detector
#[derive(Default)]
pub struct FakeHost {
    pub hostname: String,
    pub env: HashMap<String, String>,
    pub files: HashMap<PathBuf, String>,
}

impl FakeHost {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            ..Default::default()
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl HostProbe for FakeHost {
    fn env_var(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, ProbeError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ProbeError::NotFound(path.to_path_buf()))
    }

    fn hostname(&self) -> Result<String, ProbeError> {
        Ok(self.hostname.clone())
    }
}

pub fn state_with(detector: Arc<dyn Detect>) -> AppState {
    AppState::new(detector)
}

/// Send a GET request through the router
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response must be valid JSON")
}
