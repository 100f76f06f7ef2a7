use std::path::PathBuf;

use clap::Parser;
use websets::api::{server, AppState};
use websets::config::Config;

#[derive(Parser)]
#[command(name = "websets", about = "Websets search and enrichment API")]
struct Cli {
    /// TOML/YAML/JSON file layered over the built-in defaults.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Address to bind (overrides `server.host`).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides `server.port` and `PORT`).
    #[arg(long, short)]
    port: Option<u16>,

    /// Force debug-level logging regardless of `RUST_LOG`.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Flags win over every config layer.
    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    let filter = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::debug!(?config, "configuration loaded");

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        default_limit = config.search.default_limit,
        empty_query_matches_all = config.search.empty_query_matches_all,
        "starting websets"
    );

    server::run(&config, AppState::sample(config.search)).await
}
