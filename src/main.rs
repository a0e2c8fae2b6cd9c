use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use taskdeck::config::Config;
use taskdeck::logging::init_tracing;
use taskdeck::ui::runtime;

/// A terminal to-do list backed by a remote data service.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about)]
struct Args {
    /// Load configuration from an explicit file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the to-do service base URL from the config file.
    #[arg(long, value_name = "URL")]
    server_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    if let Some(url) = args.server_url {
        config.service.base_url = url;
        config.validate().context("invalid --server-url")?;
    }

    tracing::info!(base_url = %config.service.base_url, "starting");
    runtime::run(config)
}
