use std::sync::Arc;

use crate::services::{Detect, EnvironmentDetector};

/// Shared detector; implementations hold no mutable state
pub type SharedDetector = Arc<dyn Detect>;

/// Application state containing all shared resources
#[derive(Clone)]
pub struct AppState {
    pub detector: SharedDetector,
}

impl AppState {
    pub fn new(detector: SharedDetector) -> Self {
        Self { detector }
    }
}

impl Default for AppState {
    /// State backed by the real host
    fn default() -> Self {
        Self::new(Arc::new(EnvironmentDetector::default()))
    }
}
