mod app_state;
mod config;
mod domain;
mod router;
mod routes;

pub use app_state::AppState;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::read_config().expect("Failed to read configuration");
    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );

    let app = router::create(config);

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await.expect("Server failed");
}
