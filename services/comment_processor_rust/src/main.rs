//! Comment Processor Service
//!
//! Reads a batch of fan comments (a Reddit thread or a local file), replies
//! to each one from the points predictions, and appends the results to the
//! query log.

use anyhow::Result;
use comment_processor_rust::config::Config;
use comment_processor_rust::runner;
use dotenv::dotenv;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Starting Comment Processor...");

    let config = Config::from_env()?;
    let records = runner::run(&config).await?;

    info!(
        "Done: {} comments processed, log at {}",
        records.len(),
        config.output_log.display()
    );
    Ok(())
}
