// Main entry point - Dependency injection and batch run
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::plate_service::PlateService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::file_store::FileStore;
use crate::infrastructure::skyserver_repository::SkyServerRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_app_config()?;

    if config.plates.is_empty() {
        tracing::warn!(
            "no plate numbers configured; add one or more plate numbers to config/platemaker.toml"
        );
        return Ok(());
    }

    // Create adapters (infrastructure layer)
    let repository = Arc::new(SkyServerRepository::new(config.skyserver_url));
    let store = Arc::new(FileStore::new(&config.output_dir));

    // Create service (application layer)
    let service = PlateService::new(repository, store, config.render);

    let summary = service.run(&config.plates).await;
    tracing::info!(
        "batch finished: {} rendered, {} skipped, {} failed",
        summary.rendered,
        summary.skipped,
        summary.failed
    );

    Ok(())
}
