mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::handlers;
use std::path::{Path, PathBuf};
use webmode_core::models::{Configuration, LogLevel};

#[derive(Parser)]
#[command(name = "webmode")]
#[command(version)]
#[command(about = "Deduce whether an application runs as a servlet, reactive or non-web application")]
#[command(
    help_template = "{name} - {version}\n{about}\n\n{usage-heading}\n  {usage}\n\n{all-args}{options}\n"
)]
struct Cli {
    /// Path to configuration file (default: ~/.config/webmode/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deduce the application mode from the modules that are present
    ///
    /// Presence comes from a module manifest (TOML or YAML) and any names
    /// given with --present.
    ///
    /// Examples:
    ///   webmode detect --manifest modules.toml
    ///   webmode detect --present jakarta.servlet.Servlet --json
    Detect {
        /// Module manifest file (.toml, .yaml or .yml)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Module name to treat as present (repeatable)
        #[arg(short, long)]
        present: Vec<String>,

        /// Output a JSON detection report
        #[arg(long)]
        json: bool,
    },

    /// Emit reflection hints for the indicator modules present in a context
    Hints {
        /// Module manifest file (.toml, .yaml or .yml)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Module name to treat as present (repeatable)
        #[arg(short, long)]
        present: Vec<String>,

        /// Module context to evaluate presence under (default scope if omitted)
        #[arg(long)]
        context: Option<String>,

        /// Write hints to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the indicator modules and what their presence means
    Indicators {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Config {
        /// Create the configuration file
        #[arg(long)]
        init: bool,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Detect { .. } => "detect",
            Commands::Hints { .. } => "hints",
            Commands::Indicators { .. } => "indicators",
            Commands::Config { .. } => "config",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = handlers::resolve_config_path(cli.config)?;
    let config = handlers::load_config(&config_path)?;
    let log_level = cli.log_level.unwrap_or(config.log_level);
    webmode_core::services::logging::init_logging(log_level)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let command_name = cli.command.name();
    if let Err(e) = run(cli.command, &config, &config_path).await {
        webmode_core::services::logging::log_error(&format!("{:#}", e), Some(command_name));
        return Err(e);
    }

    Ok(())
}

async fn run(command: Commands, config: &Configuration, config_path: &Path) -> Result<()> {
    match command {
        Commands::Detect {
            manifest,
            present,
            json,
        } => {
            handlers::handle_detect(config, manifest, present, json).await?;
        }
        Commands::Hints {
            manifest,
            present,
            context,
            output,
        } => {
            handlers::handle_hints(config, manifest, present, context, output).await?;
        }
        Commands::Indicators { json } => {
            handlers::handle_indicators(json)?;
        }
        Commands::Config { init } => {
            if init {
                handlers::handle_config_init(config_path).await?;
            } else {
                println!("Config command requires --init flag");
                println!("Usage: webmode config --init [--config PATH]");
            }
        }
    }

    Ok(())
}
