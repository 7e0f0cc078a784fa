//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use studydesk_core::config;
use studydesk_types::DocumentId;

mod commands;

#[derive(Parser)]
#[command(name = "studydesk")]
#[command(version)]
#[command(about = "Study documents with chat, a tutor and essay grading")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true, env = "STUDYDESK_BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Bearer token (overrides STUDYDESK_TOKEN and api.token)
    #[arg(long, global = true, value_name = "TOKEN")]
    token: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive study shell (default)
    Shell {
        /// Select this document on start
        #[arg(long, value_name = "ID")]
        document: Option<i64>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        base_url,
        token,
    } = cli;

    let document = match command {
        Some(Commands::Config { command }) => {
            return match command {
                ConfigCommands::Path => {
                    commands::config::path();
                    Ok(())
                }
                ConfigCommands::Init => commands::config::init(),
            };
        }
        Some(Commands::Shell { document }) => document.map(DocumentId),
        None => None,
    };

    let mut config = config::Config::load().context("load config")?;
    if let Some(base_url) = base_url {
        config.api.base_url = base_url;
    }

    let _log_guard = studydesk_core::logging::init(&config.log).context("init logging")?;
    tracing::info!(base_url = %config.api.base_url, "starting study shell");

    commands::shell::run(commands::shell::ShellOptions {
        config: &config,
        token_override: token,
        document,
    })
    .await
}
