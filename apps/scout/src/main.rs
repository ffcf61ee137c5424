mod config;
mod llm_client;
mod models;
mod nuworks;
mod pipeline;
mod scoring;
mod storage;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::nuworks::NuworksClient;
use crate::scoring::JobScorer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting scout v{}", env!("CARGO_PKG_VERSION"));

    let source = NuworksClient::new(config.nuworks_cookie.clone());
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let scorer = JobScorer::new(llm);

    pipeline::run(&config, &source, &scorer).await?;

    info!("Job scan completed successfully");
    Ok(())
}
