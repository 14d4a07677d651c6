use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use mergington::config::StoreConfig;
use mergington::database::{seed, ActivityStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    mergington::init_tracing();

    let config = StoreConfig::from_env();
    let store = ActivityStore::open(&config)
        .await
        .context("could not open activity store")?;

    store
        .reset(seed::default_activities())
        .await
        .context("seeding failed")?;
    info!("database initialized");

    for activity in store.list_all().await? {
        info!("added: {}", activity.name);
    }

    store.close().await;
    Ok(())
}
