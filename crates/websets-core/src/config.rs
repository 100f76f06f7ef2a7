//! Configuration types for websets.
//!
//! [`Config::load`] layers an optional TOML/YAML/JSON file and the process
//! environment on top of the embedded defaults. [`Config::defaults`] returns
//! the same defaults without touching the filesystem or environment (useful
//! in tests).
//!
//! Environment overrides use the `WEBSETS__` prefix with `__` between the
//! section and the key, e.g. `WEBSETS__SEARCH__DEFAULT_LIMIT=10`. The bare
//! `PORT` variable is also honoured and overrides `server.port`.

use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host            = "0.0.0.0"
port            = 5000
permissive_cors = true

[search]
default_limit           = 50
empty_query_matches_all = true

[logging]
filter = "info"
"#;

const ENV_PREFIX: &str = "WEBSETS";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow cross-origin requests from any origin.
    #[serde(default = "default_permissive_cors")]
    pub permissive_cors: bool,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }
fn default_permissive_cors() -> bool { true }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            permissive_cors: default_permissive_cors(),
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Page size used when a request does not name one.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Whether an empty query matches every record (`true`) or none.
    #[serde(default = "default_empty_query_matches_all")]
    pub empty_query_matches_all: bool,
}

fn default_limit() -> usize { 50 }
fn default_empty_query_matches_all() -> bool { true }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            empty_query_matches_all: default_empty_query_matches_all(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, then `path` (if given), then the
    /// environment. A named file that does not exist is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
