use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Render configuration; every section is optional in the YAML file
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
    /// Icon key -> asset file name, merged over the built-in icon map
    pub icons: BTreeMap<String, String>,
    /// Priority -> link color, merged over the built-in palette
    pub priority_colors: BTreeMap<String, String>,
    /// Device type -> node border color, merged over the built-in palette
    pub device_colors: BTreeMap<String, String>,
    pub controls: ControlsConfig,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.canvas.validate()?;

        for (key, file) in &self.icons {
            if file.trim().is_empty() {
                return Err(ValidationError::InvalidIcon(format!(
                    "icon '{}' has an empty file name",
                    key
                )));
            }
        }

        Self::validate_palette("priority_colors", &self.priority_colors)?;
        Self::validate_palette("device_colors", &self.device_colors)?;

        Ok(())
    }

    fn validate_palette(section: &str, palette: &BTreeMap<String, String>) -> Result<(), ValidationError> {
        for (key, color) in palette {
            if !is_hex_color(color) {
                return Err(ValidationError::InvalidColor(format!(
                    "{}.{} = '{}' is not a #rgb or #rrggbb color",
                    section, key, color
                )));
            }
        }
        Ok(())
    }
}

/// Canvas settings for the generated page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub height: String,
    pub width: String,
    pub bgcolor: String,
    pub font_color: String,
    pub directed: bool,
    pub physics: bool,
}

impl CanvasConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.height.trim().is_empty() {
            return Err(ValidationError::InvalidCanvas("height cannot be empty".to_string()));
        }
        if self.width.trim().is_empty() {
            return Err(ValidationError::InvalidCanvas("width cannot be empty".to_string()));
        }
        for (name, color) in [("bgcolor", &self.bgcolor), ("font_color", &self.font_color)] {
            if !is_hex_color(color) {
                return Err(ValidationError::InvalidColor(format!(
                    "canvas.{} = '{}' is not a #rgb or #rrggbb color",
                    name, color
                )));
            }
        }
        Ok(())
    }
}

/// Floating control panel settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    pub enabled: bool,
}

/// Errors that can occur during configuration validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid canvas configuration: {0}")]
    InvalidCanvas(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid icon configuration: {0}")]
    InvalidIcon(String),
}

/// Check for `#rgb` or `#rrggbb`
pub fn is_hex_color(value: &str) -> bool {
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR
        .get_or_init(|| Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("valid color regex"))
        .is_match(value)
}

/// Default implementations
impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            height: "900px".to_string(),
            width: "100%".to_string(),
            bgcolor: "#ffffff".to_string(),
            font_color: "#000000".to_string(),
            directed: false,
            physics: true,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
