use std::sync::Arc;

use blogsmith::server::{AppState, app};
use blogsmith::services::llm::{GeminiClient, TextGenerator};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::from_env()?);
    let app_state = AppState { generator };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
