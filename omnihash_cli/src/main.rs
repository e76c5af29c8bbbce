//! omnihash command line interface
//!
//! Front-end for the digest engine: hashes a text argument or a file with
//! every registered algorithm and prints the results. The display-case
//! choice is persisted, so a run with `--uppercase` or `--lowercase`
//! changes the default for later runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use omnihash_core::{DigestEngine, DigestEvent, DigestResult, EngineConfig};
use std::path::{Path, PathBuf};

mod config;
mod output;

use config::ConfigManager;

#[derive(Parser)]
#[command(name = "omnihash")]
#[command(author, version, about = "Multi-algorithm hash and checksum calculator", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Render hex and checksum outputs uppercase (persisted)
    #[arg(short, long, global = true, conflicts_with = "lowercase")]
    uppercase: bool,

    /// Render hex and checksum outputs lowercase (persisted)
    #[arg(short, long, global = true)]
    lowercase: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a text argument
    Text {
        /// Input text (hashed as UTF-8 bytes)
        input: String,
    },

    /// Hash a file, streaming it in chunks
    File {
        /// File to hash
        path: PathBuf,

        /// Read chunk size in bytes (overrides the configured value)
        #[arg(long)]
        chunk_size: Option<usize>,
    },

    /// List the supported algorithms in registry order
    Algorithms,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Show the configuration file path
    Path,
    /// Set the persisted uppercase display flag
    SetUppercase {
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Set the persisted streaming chunk size in bytes
    SetChunkSize { bytes: usize },
}

#[derive(Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("omnihash_core", log::LevelFilter::Debug)
            .filter_module("omnihash_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let manager = ConfigManager::new();
    let mut app_config = manager.load().context("Failed to load configuration")?;

    let uppercase = if cli.uppercase {
        true
    } else if cli.lowercase {
        false
    } else {
        app_config.display.show_uppercase
    };

    match cli.command {
        Commands::Text { input } => {
            let engine = DigestEngine::new();
            let results = engine.compute_all(input.as_bytes(), uppercase)?;
            output::print_results(&results, cli.format)?;
        }

        Commands::File { path, chunk_size } => {
            let chunk_size = chunk_size.unwrap_or(app_config.engine.chunk_size);
            let mut engine = DigestEngine::with_config(EngineConfig { chunk_size })?;
            let results = hash_file(&mut engine, &path, uppercase).await?;
            output::print_results(&results, cli.format)?;
        }

        Commands::Algorithms => {
            output::print_algorithms();
        }

        Commands::Config { command } => {
            handle_config(&manager, command)?;
            return Ok(());
        }
    }

    // An explicit case flag becomes the new default, like a settings
    // checkbox that survives restarts.
    if cli.uppercase || cli.lowercase {
        app_config.display.show_uppercase = uppercase;
        manager
            .save(&app_config)
            .context("Failed to save configuration")?;
    }

    Ok(())
}

/// Drive one streaming file job to completion, showing progress on stderr
async fn hash_file(
    engine: &mut DigestEngine,
    path: &Path,
    uppercase: bool,
) -> Result<Vec<DigestResult>> {
    engine.start_file(path, uppercase).await?;

    let mut results = Vec::new();
    let mut last_percent = None;
    while let Some(event) = engine.next_event().await {
        match event {
            DigestEvent::Progress {
                bytes_processed,
                total_bytes,
            } => {
                if let Some(total) = total_bytes
                    && total > 0
                {
                    let percent = bytes_processed * 100 / total;
                    if last_percent != Some(percent) {
                        eprint!("\rhashing {percent:>3}%");
                        last_percent = Some(percent);
                    }
                }
            }
            DigestEvent::Result(result) => results.push(result),
            DigestEvent::Completed => {
                if last_percent.is_some() {
                    eprint!("\r            \r");
                }
                return Ok(results);
            }
            DigestEvent::Cancelled => anyhow::bail!("file computation was cancelled"),
            DigestEvent::Failed(error) => return Err(error.into()),
        }
    }
    anyhow::bail!("file computation ended without a terminal event")
}

fn handle_config(manager: &ConfigManager, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = manager.load()?;
            println!("display.show_uppercase = {}", config.display.show_uppercase);
            println!("engine.chunk_size = {}", config.engine.chunk_size);
        }
        ConfigCommand::Path => {
            println!("{}", manager.config_path().display());
        }
        ConfigCommand::SetUppercase { value } => {
            let mut config = manager.load()?;
            config.display.show_uppercase = value;
            manager.save(&config)?;
            eprintln!("{}", format!("Set display.show_uppercase = {value}").green());
        }
        ConfigCommand::SetChunkSize { bytes } => {
            if bytes == 0 {
                anyhow::bail!("chunk size must be non-zero");
            }
            let mut config = manager.load()?;
            config.engine.chunk_size = bytes;
            manager.save(&config)?;
            eprintln!("{}", format!("Set engine.chunk_size = {bytes}").green());
        }
    }
    Ok(())
}
