use serde::{Deserialize, Serialize};

/// Logo served for pods running under Kubernetes
pub const KUBERNETES_LOGO: &str = "/img/kubernetes-logo.png";
/// Logo served for Docker containers
pub const DOCKER_LOGO: &str = "/img/docker-logo.png";
/// Logo served for plain hosts
pub const DEFAULT_LOGO: &str = "/img/logo.svg";

/// Where the service is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Kubernetes,
    Docker,
    Local,
    /// Never produced by the detector; kept so an explicit failed detection
    /// can be reported later without changing the wire format.
    #[default]
    Unknown,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Kubernetes => "kubernetes",
            Environment::Docker => "docker",
            Environment::Local => "local",
            Environment::Unknown => "unknown",
        }
    }

    /// Logo asset shown by the frontend for this environment
    pub fn logo_path(&self) -> &'static str {
        match self {
            Environment::Kubernetes => KUBERNETES_LOGO,
            Environment::Docker => DOCKER_LOGO,
            Environment::Local | Environment::Unknown => DEFAULT_LOGO,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment information returned by `/api/deployment-info`
///
/// Built through the per-environment constructors so that fields belonging
/// to one environment are never populated for another. `container_name` is
/// the host identifier and is set for every environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub environment: Environment,
    pub container_name: String,
    pub pod_name: Option<String>,
    pub deployment_name: Option<String>,
    pub namespace: Option<String>,
    pub hostname: Option<String>,
    pub logo_path: String,
}

impl DeploymentInfo {
    pub fn kubernetes(pod_name: String, namespace: Option<String>) -> Self {
        let deployment_name = deployment_name_from_pod(&pod_name);
        Self {
            environment: Environment::Kubernetes,
            container_name: pod_name.clone(),
            pod_name: Some(pod_name),
            deployment_name,
            namespace,
            hostname: None,
            logo_path: KUBERNETES_LOGO.to_string(),
        }
    }

    pub fn docker(container_name: String) -> Self {
        Self {
            environment: Environment::Docker,
            container_name,
            pod_name: None,
            deployment_name: None,
            namespace: None,
            hostname: None,
            logo_path: DOCKER_LOGO.to_string(),
        }
    }

    pub fn local(hostname: String) -> Self {
        Self {
            environment: Environment::Local,
            container_name: hostname.clone(),
            pod_name: None,
            deployment_name: None,
            namespace: None,
            hostname: Some(hostname),
            logo_path: DEFAULT_LOGO.to_string(),
        }
    }
}

/// Guess the owning Deployment from a pod name.
///
/// Pods created through a ReplicaSet are named
/// `<deployment>-<replicaset hash>-<pod suffix>`, so the last two
/// dash-separated tokens are dropped. This is lossy: bare pods, StatefulSet
/// pods (`web-0`) and names that happen to contain dashes all produce wrong
/// or missing answers. Treat the result as a display hint only.
pub fn deployment_name_from_pod(pod_name: &str) -> Option<String> {
    let parts: Vec<&str> = pod_name.split('-').collect();
    if parts.len() > 2 {
        Some(parts[..parts.len() - 2].join("-"))
    } else {
        None
    }
}
