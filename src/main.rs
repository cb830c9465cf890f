use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use scrapbook::app::App;
use scrapbook::config::Config;
use scrapbook::content::ContentLibrary;
use scrapbook::error::{AppError, AppResult};
use scrapbook::logging::init_logging;

/// A page-turning memory scrapbook for the terminal.
#[derive(Debug, Parser)]
#[command(name = "scrapbook", version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Pages to show instead of the built-in ones (.toml or .json).
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,
    /// Open the book right away.
    #[arg(long)]
    skip_loading: bool,
    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = load_config(&cli)?;
    let log_path = cli.log.clone().or_else(|| config.log.path.clone());
    init_logging(log_path.as_deref(), &config.log.filter)?;

    let library = load_library(&cli, &config).inspect_err(|err| {
        tracing::error!(%err, "failed to load content");
    })?;
    let mut app = App::new(config, library)?;
    if cli.skip_loading {
        app.skip_loading(Instant::now());
    }

    app.run().await
}

fn load_config(cli: &Cli) -> AppResult<Config> {
    match &cli.config {
        Some(path) if !path.is_file() => Err(AppError::invalid_argument(format!(
            "config file not found: {}",
            path.display()
        ))),
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn load_library(cli: &Cli, config: &Config) -> AppResult<ContentLibrary> {
    match cli.content.as_ref().or(config.content.path.as_ref()) {
        Some(path) => ContentLibrary::load_from_path(path),
        None => ContentLibrary::builtin(),
    }
}
