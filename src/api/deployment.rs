use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::DeploymentInfo;
use crate::state::AppState;

/// Create deployment detection routes
pub fn deployment_routes(state: AppState) -> Router {
    Router::new()
        .route("/deployment-info", get(get_deployment_info))
        .route("/detect-environment", get(detect_environment))
        .with_state(state)
}

/// Run detection on the blocking pool, it reads files synchronously
async fn run_detection(state: &AppState) -> Result<DeploymentInfo> {
    let detector = state.detector.clone();
    let info = tokio::task::spawn_blocking(move || detector.detect()).await??;
    Ok(info)
}

/// Get information about the environment this service runs in
async fn get_deployment_info(State(state): State<AppState>) -> Result<Json<DeploymentInfo>> {
    let info = run_detection(&state).await?;
    Ok(Json(info))
}

/// Alias of `/deployment-info` that also logs the result
async fn detect_environment(State(state): State<AppState>) -> Result<Json<DeploymentInfo>> {
    tracing::info!("Detecting deployment environment (alias route)");
    let info = run_detection(&state).await?;
    tracing::info!(
        environment = %info.environment,
        container = %info.container_name,
        pod = ?info.pod_name,
        namespace = ?info.namespace,
        "Deployment info"
    );
    Ok(Json(info))
}
