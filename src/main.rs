use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file when present; a missing
    // file is fine in containerized deployments.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(Box::new(e) as Box<dyn Error>);
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,summarize_pipeline=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("starting summarizer backend");
    api::start().await?;

    Ok(())
}
