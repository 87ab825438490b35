mod config;
mod routes;

use config::HostConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(dist = %config.dist_dir.display(), "index.html not found; build the client first");
    }
    match &config.api_upstream {
        Some(upstream) => tracing::info!(%upstream, "proxying /api"),
        None => tracing::info!("no API upstream configured; /api is disabled"),
    }

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "processmart listening");
    axum::serve(listener, app).await?;
    Ok(())
}
