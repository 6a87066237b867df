//! Attribute-to-style mapping.
//!
//! A [`StyleSheet`] holds every lookup table used to turn topology
//! attributes into vis-network styling. The built-in tables can be
//! extended or overridden from the YAML config.

pub mod edge;
pub mod node;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::Config;

pub use edge::{EdgeStyle, LinkType};

/// Fallback link color for priorities missing from the palette
pub const DEFAULT_PRIORITY_COLOR: &str = "#808080";
/// Fallback border for unknown device types
pub const DEFAULT_BORDER_COLOR: &str = "#666666";
/// Icon used when neither `device_icon` nor a known `device_type` is given
pub const FALLBACK_ICON_KEY: &str = "router";

const ICONS: [(&str, &str); 4] = [
    ("router", "wifi-router.png"),
    ("pc", "monitor.png"),
    ("laptop", "laptop.png"),
    ("switch", "hub.png"),
];

const PRIORITY_COLORS: [(&str, &str); 5] = [
    ("critical", "#8B0000"),
    ("high", "#FF6347"),
    ("medium", "#4682B4"),
    ("low", "#32CD32"),
    ("unknown", "#808080"),
];

const DEVICE_COLORS: [(&str, &str); 4] = [
    ("router", "#c92a2a"),
    ("switch", "#1971c2"),
    ("pc", "#37b24d"),
    ("laptop", "#fab005"),
];

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub assets_dir: PathBuf,
    pub icon_map: BTreeMap<String, String>,
    pub priority_colors: BTreeMap<String, String>,
    pub device_colors: BTreeMap<String, String>,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            icon_map: table(&ICONS),
            priority_colors: table(&PRIORITY_COLORS),
            device_colors: table(&DEVICE_COLORS),
        }
    }
}

impl StyleSheet {
    /// Built-in tables with the config's entries merged on top
    pub fn from_config(config: &Config) -> Self {
        let mut sheet = Self::default();
        if let Some(dir) = &config.assets_dir {
            sheet.assets_dir = dir.clone();
        }
        sheet.icon_map.extend(config.icons.clone());
        sheet.priority_colors.extend(config.priority_colors.clone());
        sheet.device_colors.extend(config.device_colors.clone());
        sheet
    }

    pub fn priority_color(&self, priority: &str) -> &str {
        self.priority_colors
            .get(priority)
            .map(String::as_str)
            .unwrap_or(DEFAULT_PRIORITY_COLOR)
    }

    pub fn device_border_color(&self, device_type: &str) -> &str {
        self.device_colors
            .get(device_type)
            .map(String::as_str)
            .unwrap_or(DEFAULT_BORDER_COLOR)
    }
}
