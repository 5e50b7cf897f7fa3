use thiserror::Error;

use crate::models::DeploymentInfo;
use crate::services::probe::{HostProbe, LocalHost, ProbeError, ProbePaths};

/// Injected into every pod by the kubelet
pub const KUBERNETES_SERVICE_HOST_VAR: &str = "KUBERNETES_SERVICE_HOST";
/// Usually set through the downward API (`fieldRef: metadata.namespace`)
pub const POD_NAMESPACE_VAR: &str = "POD_NAMESPACE";
/// Substring of `/proc/1/cgroup` entries when PID 1 runs under Docker
const DOCKER_CGROUP_MARKER: &str = "docker";

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("could not determine host identifier: {0}")]
    HostIdentifier(#[source] ProbeError),
}

/// Something that can classify the current deployment
pub trait Detect: Send + Sync {
    fn detect(&self) -> Result<DeploymentInfo, DetectError>;
}

/// Classifies the host as Kubernetes, Docker or local.
///
/// Checks run in priority order and the first match wins. Failures to read
/// any marker only mean the marker is absent; the sole hard failure is not
/// being able to obtain the hostname.
pub struct EnvironmentDetector<P = LocalHost> {
    probe: P,
    paths: ProbePaths,
}

impl Default for EnvironmentDetector<LocalHost> {
    fn default() -> Self {
        Self::new(LocalHost)
    }
}

impl<P: HostProbe> EnvironmentDetector<P> {
    pub fn new(probe: P) -> Self {
        Self::with_paths(probe, ProbePaths::default())
    }

    pub fn with_paths(probe: P, paths: ProbePaths) -> Self {
        Self { probe, paths }
    }

    fn hostname(&self) -> Result<String, DetectError> {
        self.probe.hostname().map_err(DetectError::HostIdentifier)
    }

    fn is_kubernetes(&self) -> bool {
        self.probe
            .env_var(KUBERNETES_SERVICE_HOST_VAR)
            .is_some_and(|host| !host.is_empty())
    }

    /// `POD_NAMESPACE` wins over the service account file. Empty values from
    /// either source count as missing.
    fn namespace(&self) -> Option<String> {
        if let Some(namespace) = self
            .probe
            .env_var(POD_NAMESPACE_VAR)
            .filter(|ns| !ns.is_empty())
        {
            return Some(namespace);
        }

        match self.probe.read_to_string(&self.paths.namespace_file) {
            Ok(content) => {
                let namespace = content.trim();
                (!namespace.is_empty()).then(|| namespace.to_string())
            }
            Err(e) => {
                tracing::debug!("Namespace not available: {}", e);
                None
            }
        }
    }

    fn is_docker(&self) -> bool {
        if self.probe.path_exists(&self.paths.docker_env_file) {
            tracing::debug!("Found {}", self.paths.docker_env_file.display());
            return true;
        }

        match self.probe.read_to_string(&self.paths.cgroup_file) {
            Ok(content) => content.contains(DOCKER_CGROUP_MARKER),
            Err(e) => {
                tracing::debug!("Could not inspect cgroups: {}", e);
                false
            }
        }
    }
}

impl<P: HostProbe> Detect for EnvironmentDetector<P> {
    fn detect(&self) -> Result<DeploymentInfo, DetectError> {
        let info = if self.is_kubernetes() {
            DeploymentInfo::kubernetes(self.hostname()?, self.namespace())
        } else if self.is_docker() {
            DeploymentInfo::docker(self.hostname()?)
        } else {
            DeploymentInfo::local(self.hostname()?)
        };

        tracing::debug!(
            environment = %info.environment,
            container = %info.container_name,
            "Deployment environment detected"
        );
        Ok(info)
    }
}
