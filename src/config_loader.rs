use crate::config::Config;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open config file '{}'", config_path.display()))?;

    // An empty file deserializes to null; treat it as all defaults
    let value: serde_yaml::Value = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse config file '{}'", config_path.display()))?;
    let config: Config = if value.is_null() {
        Config::default()
    } else {
        serde_yaml::from_value(value)
            .wrap_err_with(|| format!("Invalid config file '{}'", config_path.display()))?
    };

    config.validate()?;

    Ok(config)
}

/// Load the config file when one was given, otherwise use defaults
pub fn load_or_default(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => load_config(path),
        None => {
            info!("No configuration file given, using built-in styling");
            Ok(Config::default())
        }
    }
}

/// CLI arguments that override YAML settings
#[derive(Debug, Clone, Default)]
pub struct RenderCliOverrides {
    pub assets_dir: Option<PathBuf>,
    pub no_physics: bool,
    pub no_controls: bool,
}

/// Apply CLI overrides to a loaded configuration
pub fn apply_cli_overrides(config: &mut Config, overrides: &RenderCliOverrides) -> Result<()> {
    if let Some(assets_dir) = &overrides.assets_dir {
        if let Some(previous) = &config.assets_dir {
            warn!("--assets {:?} overrides assets_dir {:?} from config", assets_dir, previous);
        }
        config.assets_dir = Some(assets_dir.clone());
    }

    if overrides.no_physics {
        config.canvas.physics = false;
    }

    if overrides.no_controls {
        config.controls.enabled = false;
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}
