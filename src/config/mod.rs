pub mod merge;
pub mod schema;

pub use schema::*;

use std::path::Path;

use crate::cli::Cli;
use crate::error::ConfigError;

/// Load configuration by merging config-file and CLI sources.
/// Precedence: CLI > config file > defaults.
///
/// A missing global config file is handled gracefully (defaults apply); an
/// explicitly passed `--config` path must exist and parse.
pub fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => load_toml_file(path)?,
        None => load_global_config(),
    };

    let cli_partial = cli_to_partial(cli);

    Ok(cli_partial.with_fallback(file).finalize())
}

/// Load global config from the platform-specific config directory.
/// Returns empty PartialConfig if file not found or unparseable.
fn load_global_config() -> PartialConfig {
    let Some(path) = global_config_path() else {
        tracing::debug!("Could not determine global config directory");
        return PartialConfig::default();
    };

    match load_toml_file(&path) {
        Ok(partial) => partial,
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            PartialConfig::default()
        }
        Err(e) => {
            tracing::warn!("Ignoring global config: {e}");
            PartialConfig::default()
        }
    }
}

/// Load and parse a TOML config file into a PartialConfig.
fn load_toml_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config_file: ConfigFile =
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config_file.to_partial())
}

/// Resolve the platform-specific global config path.
/// Linux: ~/.config/teamsim/teamsim.toml
/// macOS: ~/Library/Application Support/teamsim/teamsim.toml
fn global_config_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "teamsim")
        .map(|dirs| dirs.config_dir().join("teamsim.toml"))
}

/// Convert CLI arguments to a PartialConfig for merging.
fn cli_to_partial(cli: &Cli) -> PartialConfig {
    PartialConfig {
        model: cli.model.clone(),
        ..Default::default()
    }
}
