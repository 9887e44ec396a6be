use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Interactive editor for the admin settings of an LLM proxy.
#[derive(Parser, Debug, Clone)]
#[command(name = "anysettings", version)]
pub struct Cli {
    /// Path to the config file (default: `<config dir>/anysettings/config.toml`).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Admin API base URL, e.g. `http://127.0.0.1:4000`.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Admin key. Takes precedence over the config file and environment.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Where to write logs (default: `<cache dir>/anysettings/anysettings.log`).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current settings and exit.
    Show,
}

impl Cli {
    /// Config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Log file to write.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }

    /// Apply flag values on top of the loaded file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
    }
}

pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("anysettings").join("anysettings.log")
}
