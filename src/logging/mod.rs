use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};

const EXTERNAL_CONFIG_PATH: &str = "log4rs.yml";

/// Initializes logging.
///
/// A `log4rs.yml` in the working directory takes precedence; otherwise the
/// embedded default configuration is used. Fails if a logger is already set.
pub fn init_logging() -> Result<()> {
    let path = Path::new(EXTERNAL_CONFIG_PATH);

    if path.exists() {
        log4rs::init_file(path, Deserializers::default()).context("Failed to load external log4rs.yml")?;
        info!(
            path = EXTERNAL_CONFIG_PATH;
            "Logging initialized from external configuration"
        );
        return Ok(());
    }

    let config = embedded_config()?;
    log4rs::init_config(config).context("Failed to initialize logging from embedded config")?;

    debug!("Logging initialized from embedded defaults (no external log4rs.yml found)");
    Ok(())
}

fn embedded_config() -> Result<Config> {
    let yaml_content = include_str!("../../resources/default_log4rs.yml");
    let raw_config: RawConfig =
        serde_yaml::from_str(yaml_content).context("Embedded logging configuration is invalid YAML")?;

    let (appenders, errors) = raw_config.appenders_lossy(&Deserializers::default());
    if !errors.is_empty() {
        return Err(anyhow!("Errors parsing embedded appenders: {:?}", errors));
    }

    Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())
        .context("Failed to build logging config")
}

fn reveal_secrets() -> bool {
    static REVEAL_SECRETS_CACHE: OnceLock<bool> = OnceLock::new();

    *REVEAL_SECRETS_CACHE.get_or_init(|| {
        std::env::var("REVEAL_SECRETS")
            .map(|v| {
                let val = v.to_lowercase();
                val == "true" || val == "1"
            })
            .unwrap_or(false)
    })
}

/// Masks a secret (like an authorization header) for logging, keeping only
/// the first few characters. If REVEAL_SECRETS is true, returns the original
/// string.
pub fn mask_secret(s: &str) -> String {
    if reveal_secrets() {
        return s.to_string();
    }
    mask(s)
}

fn mask(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let prefix: String = s.chars().take(6).collect();
    if prefix.len() == s.len() {
        return "***".to_string();
    }

    format!("{prefix}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_short_prefix() {
        assert_eq!(mask(r#"OAuth oauth_token="secret""#), "OAuth ***");
        assert_eq!(mask("short"), "***");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_mask_respects_char_boundaries() {
        assert_eq!(mask("ääääääää"), "ääääää***");
    }

    #[test]
    fn test_embedded_config_is_valid() {
        assert!(embedded_config().is_ok());
    }
}
