use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wallboard::app::{App, Exit};
use wallboard::config::Config;
use wallboard::logging;

#[derive(Parser, Debug)]
#[command(name = "wallboard")]
#[command(about = "Terminal wall board for a listening-service branch", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server to poll, overriding the config file
    #[arg(short, long)]
    base_url: Option<String>,

    /// Where to write logs
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init_logging(&log_path)?;

    // Fail before the terminal is taken over, while errors can still be read.
    load_config(&cli)?;

    let mut terminal = ratatui::init();
    let result = run(&cli, &mut terminal).await;
    ratatui::restore();

    if let Err(ref e) = result {
        tracing::error!(error = %e, "board stopped");
    }
    result
}

async fn run(cli: &Cli, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
    loop {
        let config = load_config(cli)?;
        tracing::info!(base_url = %config.server.base_url, "starting board");

        let mut app = App::new(config)?;
        match app.run(terminal).await? {
            Exit::Quit => return Ok(()),
            Exit::Reload => {
                tracing::info!("reloading board");
                terminal.clear()?;
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load(cli.config.as_deref())
        .with_context(|| "failed to load configuration")?
        .with_base_url(cli.base_url.clone());
    config.validate()?;
    Ok(config)
}
