use anyhow::Context;
use huecycle::config::DemoConfig;
use huecycle::{logging, tui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let path = DemoConfig::locate();
    let config = DemoConfig::load_or_default(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    if logging::init(&config.log)? {
        tracing::info!(config = %path.display(), "huecycle starting");
    }

    tui::run(&config).await
}
