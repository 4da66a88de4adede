//! Application configuration loaded from command-line flags and environment.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Flags
//!
//! ```bash
//! shurs -a :8080 -b http://localhost:8080 --id-length 8 --max-attempts 10
//! ```
//!
//! ## Environment Overrides
//!
//! Environment variables take priority over flags:
//!
//! - `SERVER_ADDRESS` - Bind address (flag `-a`, default: `:8080`)
//! - `BASE_URL` - Public prefix of short URLs (flag `-b`, default: `http://localhost:8080`)
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! A `:PORT` address binds on all interfaces. A trailing `/` on the base URL
//! is stripped. Non-positive id length or attempt counts are replaced by
//! their defaults with a warning instead of failing startup.

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use url::Url;

pub const DEFAULT_SERVER_ADDRESS: &str = ":8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_ID_LENGTH: usize = 8;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "shurs")]
#[command(author, version, about = "In-memory URL shortener", long_about = None)]
pub struct CliArgs {
    /// HTTP server start address
    #[arg(short = 'a', long = "address", default_value = DEFAULT_SERVER_ADDRESS)]
    pub server_address: String,

    /// Base address for resulting short URLs
    #[arg(short = 'b', long = "base-url", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Length of generated short ids
    #[arg(long, default_value_t = DEFAULT_ID_LENGTH as i64, allow_negative_numbers = true)]
    pub id_length: i64,

    /// Id generation attempts before giving up on a request
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS as i64, allow_negative_numbers = true)]
    pub max_attempts: i64,
}

/// Effective service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    /// Public prefix of short URLs, without trailing slash.
    pub base_url: String,
    pub id_length: usize,
    pub max_attempts: usize,
    pub log_level: String,
    pub log_format: String,
    /// Settings that were replaced by defaults while loading.
    pub fallbacks: Vec<String>,
}

impl Config {
    /// Builds the configuration from parsed flags, applying environment overrides.
    pub fn from_args(args: CliArgs) -> Self {
        let server_address = non_empty_env("SERVER_ADDRESS").unwrap_or(args.server_address);
        let base_url = non_empty_env("BASE_URL").unwrap_or(args.base_url);
        let base_url = base_url.trim_end_matches('/').to_string();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let mut fallbacks = Vec::new();
        let id_length = positive_or_default(
            "id length",
            args.id_length,
            DEFAULT_ID_LENGTH,
            &mut fallbacks,
        );
        let max_attempts = positive_or_default(
            "max attempts",
            args.max_attempts,
            DEFAULT_MAX_ATTEMPTS,
            &mut fallbacks,
        );

        Self {
            server_address,
            base_url,
            id_length,
            max_attempts,
            log_level,
            log_format,
            fallbacks,
        }
    }

    /// Returns the address to bind, expanding `:PORT` to all interfaces.
    pub fn bind_address(&self) -> String {
        if self.server_address.starts_with(':') {
            format!("0.0.0.0{}", self.server_address)
        } else {
            self.server_address.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - the server address has no valid port
    /// - the base URL does not parse as an absolute URL with a host
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let (_, port) = self
            .server_address
            .rsplit_once(':')
            .with_context(|| {
                format!(
                    "server address must be in format 'host:port' or ':port', got '{}'",
                    self.server_address
                )
            })?;
        port.parse::<u16>().with_context(|| {
            format!(
                "server address has an invalid port, got '{}'",
                self.server_address
            )
        })?;

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("base URL is not a valid URL: '{}'", self.base_url))?;
        if base.host_str().is_none_or(str::is_empty) {
            anyhow::bail!("base URL must include a host, got '{}'", self.base_url);
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Server address: {}", self.server_address);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Id length: {}", self.id_length);
        tracing::info!("  Max attempts: {}", self.max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        for fallback in &self.fallbacks {
            tracing::warn!("{}", fallback);
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn positive_or_default(
    name: &str,
    value: i64,
    default: usize,
    fallbacks: &mut Vec<String>,
) -> usize {
    match usize::try_from(value) {
        Ok(v) if v > 0 => v,
        _ => {
            fallbacks.push(format!("Invalid {name} ({value}), using default {default}"));
            default
        }
    }
}

/// Parses flags from the process arguments, then loads and validates configuration.
///
/// # Errors
///
/// Returns an error if validation fails. Invalid flags exit the process
/// through clap's usual error output.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load() -> Result<Config> {
    let config = Config::from_args(CliArgs::parse());
    config.validate()?;
    Ok(config)
}
