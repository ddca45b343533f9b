use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use reading_inference::{api, config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::Config::dotenv_load();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reading_inference=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = config::Config::new();
    config.log_summary();

    let state = Arc::new(api::AppState::from_config(&config));
    let app = api::app(state);

    let socket_address = config.socket_addr();
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
