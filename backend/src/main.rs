use anyhow::Result;
use backend::axum_http::http_serve;
use backend::config::config_loader;
use crates::infra::node_api::client::NodeApiClient;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Portal exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("portal")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let node_api = NodeApiClient::new(
        dotenvy_env.node_api.base_url.clone(),
        dotenvy_env.node_api.api_key.clone(),
    );
    info!("Billing API client has been prepared");

    http_serve::start(Arc::new(dotenvy_env), Arc::new(node_api)).await?;

    Ok(())
}
