//! Menu service entry point

use carte::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();

    let config = ServiceConfig::from_env();

    tracing::info!(port = config.port, "starting menu service");

    ServerBuilder::new()
        .with_store(MenuStore::seeded())
        .serve(&config.bind_addr())
        .await
}
