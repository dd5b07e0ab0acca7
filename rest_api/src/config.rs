// rest_api/src/config.rs

use anyhow::{Context, Result};
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_REST_API_HOST: &str = "127.0.0.1";
pub const DEFAULT_REST_API_PORT: u16 = 8082;

/// Environment variables with this prefix override file settings,
/// e.g. `HEALTH_RECORDS_PORT=9000`.
pub const REST_API_ENV_PREFIX: &str = "HEALTH_RECORDS";

/// Environment variables keyed by their full name.
pub type EnvVars = Map<String, String>;

/// Represents the configuration for the REST API server itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RestApiConfig {
    pub host: String,
    /// `0` binds an ephemeral port.
    pub port: u16,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        RestApiConfig {
            host: DEFAULT_REST_API_HOST.to_string(),
            port: DEFAULT_REST_API_PORT,
        }
    }
}

/// Loads the REST API configuration.
///
/// Sources are layered: built-in defaults, then `config_file` when given
/// (format picked from its extension), then `HEALTH_RECORDS_*` environment
/// variables.
pub fn load_rest_api_config(config_file: Option<&Path>) -> Result<RestApiConfig> {
    load_rest_api_config_with_env(config_file, None)
}

/// Same as [`load_rest_api_config`], but reads the `HEALTH_RECORDS_*`
/// variables from `env_vars` instead of the process environment when given.
/// Keys are full variable names, e.g. `HEALTH_RECORDS_PORT`.
pub fn load_rest_api_config_with_env(
    config_file: Option<&Path>,
    env_vars: Option<EnvVars>,
) -> Result<RestApiConfig> {
    let mut builder = Config::builder()
        .set_default("host", DEFAULT_REST_API_HOST)?
        .set_default("port", i64::from(DEFAULT_REST_API_PORT))?;

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(REST_API_ENV_PREFIX)
                .try_parsing(true)
                .source(env_vars),
        )
        .build()
        .with_context(|| match config_file {
            Some(path) => format!("Failed to read REST API config file {}", path.display()),
            None => "Failed to build REST API configuration".to_string(),
        })?;

    config
        .try_deserialize()
        .context("Failed to parse REST API configuration")
}
