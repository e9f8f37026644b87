use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Output format for `storefront config`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "storefront - catalog REST API for categories, products and tags")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to serve)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses RUST_LOG, then the config file value
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/storefront/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Level requested on the command line, if any
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level
            .map(LevelFilter::from)
            .or(self.verbose.then_some(LevelFilter::DEBUG))
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite database path (overrides config)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Fill the database with a demo catalog
    Seed {
        /// SQLite database path (overrides config)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Replace an existing catalog
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: ConfigFormat,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Serve {
            host: None,
            port: None,
            db: None,
        }
    }
}
