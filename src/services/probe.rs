//! Access to the ambient host state the detector inspects.
//!
//! Every environment variable lookup, file check and hostname lookup goes
//! through [`HostProbe`], so detection logic can be exercised against fakes
//! without touching the real process environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Namespace file mounted into every pod with a service account
pub const SERVICE_ACCOUNT_NAMESPACE_PATH: &str =
    "/var/run/secrets/kubernetes.io/serviceaccount/namespace";
/// Created by Docker at the root of every container filesystem
pub const DOCKER_ENV_PATH: &str = "/.dockerenv";
/// Control groups of PID 1
pub const INIT_CGROUP_PATH: &str = "/proc/1/cgroup";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error getting hostname: {0}")]
    Hostname(String),
}

/// Read-only view of the host the service runs on
#[cfg_attr(test, mockall::automock)]
pub trait HostProbe: Send + Sync {
    /// Value of an environment variable, `None` when unset or not unicode
    fn env_var(&self, key: &str) -> Option<String>;

    fn path_exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String, ProbeError>;

    /// Host identifier (the pod name under Kubernetes, the short container
    /// id under Docker)
    fn hostname(&self) -> Result<String, ProbeError>;
}

/// Filesystem locations consulted during detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbePaths {
    pub namespace_file: PathBuf,
    pub docker_env_file: PathBuf,
    pub cgroup_file: PathBuf,
}

impl Default for ProbePaths {
    fn default() -> Self {
        Self {
            namespace_file: PathBuf::from(SERVICE_ACCOUNT_NAMESPACE_PATH),
            docker_env_file: PathBuf::from(DOCKER_ENV_PATH),
            cgroup_file: PathBuf::from(INIT_CGROUP_PATH),
        }
    }
}

/// [`HostProbe`] backed by the real process environment and filesystem
#[derive(Debug, Default, Clone)]
pub struct LocalHost;

impl HostProbe for LocalHost {
    fn env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn path_exists(&self, path: &Path) -> bool {
        // Stat errors (e.g. permission denied on a parent) count as absent
        path.try_exists().unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, ProbeError> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProbeError::NotFound(path.to_path_buf())
            } else {
                ProbeError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })
    }

    fn hostname(&self) -> Result<String, ProbeError> {
        nix::unistd::gethostname()
            .map_err(|e| ProbeError::Hostname(e.to_string()))?
            .into_string()
            .map_err(|raw| ProbeError::Hostname(format!("hostname is not valid UTF-8: {:?}", raw)))
    }
}
