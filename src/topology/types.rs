//! Topology type definitions.
//!
//! A topology is a plain attributed graph: devices are nodes, links are
//! edges. Every attribute is kept as a string exactly as the input file
//! carried it; typed views are provided by the accessor methods.

use std::collections::BTreeMap;

/// A device in the topology (router, switch, pc, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceNode {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

impl DeviceNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter, handy for tests and programmatic graphs
    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Display label; falls back to the node id
    pub fn label(&self) -> &str {
        self.attributes.get("label").map(String::as_str).unwrap_or(&self.id)
    }

    /// Hover text; falls back to the label
    pub fn title(&self) -> &str {
        self.attributes.get("title").map(String::as_str).unwrap_or_else(|| self.label())
    }

    /// Lower-cased device type, empty when not set
    pub fn device_type(&self) -> String {
        self.attributes
            .get("device_type")
            .map(|t| t.to_lowercase())
            .unwrap_or_default()
    }

    /// Explicit icon key, taken verbatim
    pub fn device_icon(&self) -> Option<&str> {
        self.attributes.get("device_icon").map(String::as_str)
    }
}

/// A link between two devices
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub attributes: BTreeMap<String, String>,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Hover title; defaults to "source ↔ target"
    pub fn title(&self) -> String {
        match self.attributes.get("title") {
            Some(title) => title.clone(),
            None => format!("{} ↔ {}", self.source, self.target),
        }
    }

    /// Link type as written, defaulting to "subnet"
    pub fn link_type(&self) -> &str {
        self.attributes.get("link_type").map(String::as_str).unwrap_or("subnet")
    }

    pub fn bandwidth_mbps(&self) -> Option<f64> {
        self.numeric_attr("bandwidth_mbps")
    }

    pub fn utilization_percent(&self) -> Option<f64> {
        self.numeric_attr("utilization_percent")
    }

    pub fn priority(&self) -> Option<&str> {
        self.attributes.get("priority").map(String::as_str)
    }

    fn numeric_attr(&self, key: &str) -> Option<f64> {
        let raw = self.attributes.get(key)?;
        match raw.trim().parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!(
                    "Ignoring non-numeric '{}' value '{}' on link {} -> {}",
                    key, raw, self.source, self.target
                );
                None
            }
        }
    }
}

/// A complete topology graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopologyGraph {
    pub directed: bool,
    pub nodes: Vec<DeviceNode>,
    pub links: Vec<Link>,
    pub attributes: BTreeMap<String, String>,
}

/// Supported topology file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Graph Modelling Language
    Gml,
    /// networkx node-link JSON
    NodeLink,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_extension(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "gml" => Some(Self::Gml),
            "json" => Some(Self::NodeLink),
            _ => None,
        }
    }
}
