// server/src/cli/cli.rs

use anyhow::{Context, Result};
use clap::Parser;
use lib::InMemoryRecordStore;
use rest_api::{load_rest_api_config_with_env, start_server, EnvVars, RestApiConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

// CLI entry point for the health records server
#[derive(Parser, Debug)]
#[command(name = "health-records-server")]
#[command(version)]
#[command(about = "In-memory health records REST service")]
pub struct CliArgs {
    /// Configuration file (YAML, TOML or JSON)
    #[arg(short = 'c', long = "config", value_name = "PATH", env = "HEALTH_RECORDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides the configuration file
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on, overrides the configuration file
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,
}

impl CliArgs {
    /// Resolves the effective REST API configuration. Command-line flags win
    /// over every other source.
    pub fn resolve_config(&self) -> Result<RestApiConfig> {
        self.resolve_config_with_env(None)
    }

    /// Like [`CliArgs::resolve_config`], with `env_vars` standing in for the
    /// process environment when given.
    pub fn resolve_config_with_env(&self, env_vars: Option<EnvVars>) -> Result<RestApiConfig> {
        let mut config = load_rest_api_config_with_env(self.config.as_deref(), env_vars)?;
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        Ok(config)
    }
}

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    init_logging();

    let config = args.resolve_config()?;
    let store = Arc::new(InMemoryRecordStore::new());
    let server = start_server(&config, store).await?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    info!("Received Ctrl-C, shutting down.");

    server.shutdown().await
}
