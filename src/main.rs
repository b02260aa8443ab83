use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use log::info;

use artgrid::commands::{cmd_config_init, cmd_config_path, cmd_config_show, cmd_page};
use artgrid::logging::{self, LOG_FILE, LogTarget};
use artgrid::{ArticClient, ArtgridConfig};

#[derive(Parser)]
#[command(name = "artgrid")]
#[command(version, about = "Browse and select artworks from a paginated collection")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Collection endpoint (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Rows per page (overrides the config file)
    #[arg(long, global = true, value_name = "N")]
    rows: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive table (default)
    Tui {
        /// Page to open on startup
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Fetch one page and print it
    Page {
        /// 1-based page number
        page: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => ArtgridConfig::config_path()?,
    };
    let config = ArtgridConfig::load_from(&config_path)?.with_overrides(cli.endpoint, cli.rows);

    let command = cli.command.unwrap_or(Commands::Tui { page: None });

    // The TUI owns the terminal, so its logs go to a file
    let log_target = match command {
        Commands::Tui { .. } => LogTarget::File(ArtgridConfig::data_dir()?.join(LOG_FILE)),
        _ => LogTarget::Stderr,
    };
    let default_filter = match log_target {
        LogTarget::File(_) => config.log.level.as_str(),
        LogTarget::Stderr => "warn",
    };
    logging::init(default_filter, log_target)?;
    info!("Loaded config from {}", config_path.display());

    let client = ArticClient::new(config.api.endpoint.clone(), config.timeout());

    match command {
        Commands::Tui { page } => {
            let mut config = config;
            if let Some(page) = page {
                config.tui.start_page = page;
            }
            artgrid::tui::run(&config, Arc::new(client))
        }
        Commands::Page { page, json } => cmd_page(&client, page, config.rows_per_page(), json),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cmd_config_show(&config),
            ConfigCommands::Path => cmd_config_path(&config_path),
            ConfigCommands::Init { force } => cmd_config_init(&config_path, force),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "artgrid", &mut io::stdout());
            Ok(())
        }
    }
}
