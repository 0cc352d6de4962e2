use std::sync::Arc;

use clap::Parser;

use stocklist::catalog::{CatalogController, CatalogShelf, DemoCatalog};
use stocklist::cli::Cli;
use stocklist::config::Config;
use stocklist::store::{JsonFileStore, MemoryStore, StateStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stocklist::logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(ms) = cli.latency_ms {
        config.fetch_latency_ms = ms;
    }
    if let Some(path) = cli.state_file {
        config.state_path = Some(path);
    }

    // The UI loop stays on the main thread; controller tasks (fetch
    // completions, state flushes) run on the runtime's workers.
    let runtime = tokio::runtime::Runtime::new()?;
    let _runtime_ctx = runtime.enter();

    let store: Arc<dyn StateStore<CatalogShelf>> = if cli.ephemeral {
        Arc::new(MemoryStore::<CatalogShelf>::new())
    } else {
        tracing::info!(path = %config.state_path().display(), "using state file");
        Arc::new(JsonFileStore::<CatalogShelf>::new(config.state_path()))
    };
    let source = Arc::new(DemoCatalog::new(config.fetch_latency()));
    let controller = CatalogController::new(store, source);

    stocklist::ui::run(controller.clone(), config.tick_rate())?;

    // Background flushes may still be in flight; write once more so the
    // last shelf state is durable before the runtime goes away.
    if let Err(err) = controller.flush() {
        tracing::warn!(error = %err, "final state flush failed");
    }

    Ok(())
}
