use anyhow::Result;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prompt_assistant::{
    config::AssistantConfig,
    routes::{Console, Session, SessionEnd},
    services::stats_store::StatsStore,
    state::AppState,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let end = runtime.block_on(run(AssistantConfig::default()));
    // The stdin reader may still be parked in a blocking read after ctrl-c.
    runtime.shutdown_background();

    info!(?end, "assistant stopped");
    Ok(())
}

async fn run(config: AssistantConfig) -> SessionEnd {
    let store = StatsStore::new(config.stats_path.clone());
    let stats = store.load_or_report(&mut std::io::stdout()).await;

    let console = Console::new(
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        interrupted(),
    );
    let mut session = Session::new(AppState::new(stats, store), config, console);
    session.run().await
}

async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}
