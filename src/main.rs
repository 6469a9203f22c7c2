use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cfgtop::commands;
use cfgtop::config;
use cfgtop::store::{HttpStore, SettingsStore};
use cfgtop::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "cfgtop")]
#[command(
    about = "Terminal console for dispatch server settings",
    long_about = "Terminal console for dispatch server settings\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Base URL of the dispatch server (overrides the config file)
    #[arg(short = 's', long, global = true)]
    server_url: Option<String>,

    /// Serve fixture data instead of talking to a server
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the settings tree and print it
    Show {
        /// Print raw JSON instead of formatted text
        #[arg(short, long)]
        json: bool,
    },
    /// Display current configuration
    Config,
}

fn create_store(cli: &Cli, config: &config::Config) -> Arc<dyn SettingsStore> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Arc::new(cfgtop::dev::MockStore::new());
    }

    let url = cli
        .server_url
        .clone()
        .unwrap_or_else(|| config.server_url.clone());
    match HttpStore::new(url) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            let error_msg = format!("Failed to create settings store: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("server_url: {}", cfg.server_url);
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("error_fg: {:?}", cfg.theme.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run the TUI
    if cli.command.is_none() {
        let store = create_store(&cli, &config);
        if let Err(e) = tui::run(store, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = cli.command.as_ref().unwrap();

    // Handle Config command separately (doesn't need a store)
    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    let store = create_store(&cli, &config);
    let result = match command {
        Commands::Config => unreachable!("Config command is handled above"),
        Commands::Show { json } => commands::show::run(store.as_ref(), *json).await,
    };
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
