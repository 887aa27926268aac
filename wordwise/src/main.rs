use clap::Parser;
use lexicon::Gateway;

use catalog::Catalog;
use config::{Cli, Config};
use controller::Controller;
use daily::DailyContent;
use load::LoadGuard;
use progress::ProgressStore;
use screens::AppContext;
use storage::Storage;

mod catalog;
mod config;
mod controller;
mod daily;
mod load;
mod logging;
mod navigation;
mod progress;
mod screens;
mod storage;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().with_cli(Cli::parse());
    logging::init_tracing(&config.log_level);

    let storage = match Storage::initialize(&config.db_url).await {
        Ok(storage) => storage,
        Err(error) => {
            tracing::warn!(
                db_url = %config.db_url,
                "cache database unavailable, caching in memory: {error}"
            );
            Storage::in_memory().await?
        }
    };
    let gateway = Gateway::from_settings(&config.gateway_settings())?;

    let progress = if config.seed_progress {
        ProgressStore::seeded(Catalog::default())
    } else {
        ProgressStore::new(Catalog::default())
    };

    let loads = LoadGuard::default();
    let interrupts = loads.clone();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if interrupts.cancel() {
                tracing::debug!("cancelled the load in flight");
            } else {
                std::process::exit(130);
            }
        }
    });

    let ctx = AppContext {
        gateway,
        progress,
        daily: DailyContent::new(storage, config.cache_ttl),
        loads,
        swipe_feedback: config.swipe_feedback,
    };
    Controller::new(ctx).run().await
}
