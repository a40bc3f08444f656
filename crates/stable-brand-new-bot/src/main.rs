//! Keeps the "STABLE - brand new" informational comment on pull requests in
//! sync with the label of the same name.
//!
//! Intended to run once per CI trigger against the ioBroker repositories
//! repo: resolve the PR from the Actions environment, compare label and
//! comment state, and post or delete the comment as needed.

use gh_issue_client::OctocrabClient;
use gh_issue_client::octocrab::Octocrab;
use log::{debug, error, info};
use std::sync::Arc;

mod comment;
mod config;
mod error;
mod event;
mod resolver;
mod sync;

use config::BotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("Starting stable-brand-new-bot");

    // Local runs keep the token in a .env file; CI sets real variables
    if config::should_load_dotenv() {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded .env from {}", path.display()),
            Err(_) => debug!("No .env file found"),
        }
    }

    let config = BotConfig::from_env()?;

    info!(
        "GITHUB_REF        = {}",
        config.github_ref.as_deref().unwrap_or("<unset>")
    );
    info!(
        "GITHUB_EVENT_PATH = {}",
        config.event_path.as_deref().unwrap_or("<unset>")
    );
    info!("GITHUB_REPOSITORY = {}", config.repository);
    info!("token             = {} chars", config.token.len());

    let octocrab = Octocrab::builder()
        .personal_token(config.token.clone())
        .build()?;
    let client = OctocrabClient::new(
        Arc::new(octocrab),
        config.repository.owner.clone(),
        config.repository.name.clone(),
    );

    match sync::run(&config, &client).await {
        Ok(()) => info!("done"),
        Err(err) => error!("{}", err),
    }

    Ok(())
}

fn init_logging() {
    let mut log_builder = env_logger::builder();
    if std::env::var("RUST_LOG").is_err() {
        log_builder.filter(None, log::LevelFilter::Info);
    }
    log_builder.format_timestamp(None);
    log_builder.init();
}
