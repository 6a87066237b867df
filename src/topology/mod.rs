//! Network topology module.
//!
//! This module contains the attributed graph model and the loaders that
//! turn topology files (GML or node-link JSON) into it.

pub mod types;
pub mod node_link;

use std::path::Path;

use color_eyre::eyre::{eyre, Result};
use log::info;

// Re-export key types and functions for easier access
pub use types::{DeviceNode, InputFormat, Link, TopologyGraph};
pub use node_link::{parse_node_link_file, parse_node_link_str};

/// Load a topology file, detecting the format from the extension when
/// `format` is not given.
pub fn load_topology(path: &Path, format: Option<InputFormat>) -> Result<TopologyGraph> {
    let format = match format.or_else(|| InputFormat::from_extension(path)) {
        Some(format) => format,
        None => {
            return Err(eyre!(
                "Cannot detect topology format of '{}'; pass --format gml or --format node-link",
                path.display()
            ))
        }
    };

    info!("Loading {:?} topology from {}", format, path.display());

    let graph = match format {
        InputFormat::Gml => crate::gml_parser::parse_gml_file(path)?,
        InputFormat::NodeLink => parse_node_link_file(path)?,
    };

    info!("Loaded {} nodes and {} links", graph.nodes.len(), graph.links.len());
    Ok(graph)
}
