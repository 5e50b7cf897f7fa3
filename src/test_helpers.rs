//! Test helpers and utilities for unit testing.
//!
//! Provides an in-memory [`HostProbe`] so detection can be tested without
//! touching the real environment or filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::services::probe::{HostProbe, ProbeError};

/// Host with a fixed hostname, environment and set of files
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    hostname: String,
    env: HashMap<String, String>,
    files: HashMap<PathBuf, String>,
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
