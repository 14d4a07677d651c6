use anyhow::Context;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};

use mergington::config::AppConfig;
use mergington::database::ActivityStore;
use mergington::services::RegistrationService;
use mergington::shutdown::shutdown_signal;
use mergington::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    mergington::init_tracing();

    // 2. Store
    let config = AppConfig::from_env();
    info!("connecting to {}", config.store.database_url);
    let store = ActivityStore::open(&config.store)
        .await
        .context("could not open activity store")?;

    // 3. Router
    let app = web::router(RegistrationService::new(store.clone()), &config.static_dir);

    // 4. Listener, with one fallback port
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("could not parse HOST/PORT")?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback: SocketAddr = format!("{}:{}", config.host, config.port.saturating_add(1))
                .parse()
                .context("could not parse fallback address")?;
            warn!("could not bind {}: {}. trying {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .context("could not bind fallback port")?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    Ok(())
}
