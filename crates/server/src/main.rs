use tracing::info;
use tracing_subscriber::EnvFilter;
use tripmap_server::{Config, MapServer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tripmap_server=info,tripmap_core=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load()?;
    let server = MapServer::start(&config)?;
    server.run_until(tokio::signal::ctrl_c())?;

    info!("shutting down");
    Ok(())
}
