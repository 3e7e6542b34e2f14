use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment, FileFormat};
use log::{debug, info};

use super::ClientConfig;

const ENV_PREFIX: &str = "SIMPLE_HTTP";

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Loads the client configuration.
///
/// Sources, lowest precedence first: the embedded defaults, the TOML file at
/// `path` (created from the defaults if it does not exist yet) and
/// `SIMPLE_HTTP__CLIENT__*` environment variables.
pub fn load_configuration(path: Option<&Path>) -> Result<ClientConfig> {
    let mut builder = Config::builder().add_source(config::File::from_str(get_default_config(), FileFormat::Toml));

    if let Some(path) = path {
        if !path.exists() {
            write_config_to(path, get_default_config()).context("Could not create default config")?;
            info!(path:% = path.display(); "Created new configuration file");
        }
        let filename = path.to_str().context("Invalid config file path")?;
        builder = builder.add_source(config::File::with_name(filename));
    }

    let cfg = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Could not build client config")?;

    let client: ClientConfig = cfg.get("client").context("Invalid client configuration")?;
    debug!(
        timeout_secs = client.timeout_secs,
        connect_timeout_secs = client.connect_timeout_secs;
        "Client configuration loaded"
    );
    Ok(client)
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
