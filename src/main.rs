use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whereami::api::create_app;
use whereami::config::CONFIG;
use whereami::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before CONFIG is first touched
    dotenvy::dotenv().ok();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.default_log_filter().into());
    let registry = tracing_subscriber::registry().with(filter);
    if CONFIG.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting whereami v{}", CONFIG.version);

    let state = AppState::default();
    let app = create_app(state, &CONFIG.static_files_dir);

    if !CONFIG.static_files_dir.is_dir() {
        tracing::warn!(
            "Static files directory {} not found. Only the API will be served.",
            CONFIG.static_files_dir.display()
        );
    }

    let addr = CONFIG.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
