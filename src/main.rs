use crate::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod agent;
mod analysis;
mod cli;
mod config;
mod error;
mod llm;
mod report;
mod search;
mod types;
mod workflow;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut args = cli::Args::parse();
    let topic = args.topic.take();
    let config = args.into_config()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if config.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let topic = match topic {
        Some(topic) => topic,
        None => cli::prompt_topic(
            &mut std::io::stdin().lock(),
            &mut std::io::stdout(),
            &config.default_topic,
        )?,
    };

    launch(&config, &topic).await
}
