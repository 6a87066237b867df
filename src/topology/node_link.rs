//! networkx node-link JSON loader.
//!
//! Accepts the layout written by `networkx.node_link_data`:
//!
//! ```json
//! {
//!   "directed": false,
//!   "graph": {"name": "lab"},
//!   "nodes": [{"id": "r1", "device_type": "router"}],
//!   "links": [{"source": "r1", "target": "pc1", "link_type": "subnet"}]
//! }
//! ```
//!
//! Newer networkx versions write `edges` instead of `links`; both are read.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::types::{DeviceNode, Link, TopologyGraph};

#[derive(Debug, Deserialize)]
struct NodeLinkDocument {
    #[serde(default)]
    directed: bool,
    #[serde(default)]
    graph: Map<String, Value>,
    #[serde(default)]
    nodes: Vec<Map<String, Value>>,
    #[serde(default, alias = "edges")]
    links: Vec<Map<String, Value>>,
}

/// Render a JSON value as an attribute string.
///
/// Strings lose their quotes, other scalars use their JSON text and
/// arrays/objects are kept as compact JSON.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn take_required(map: &mut Map<String, Value>, key: &str, context: &str) -> Result<String> {
    match map.remove(key) {
        Some(Value::Null) | None => Err(eyre!("{} missing required '{}' field", context, key)),
        Some(value) => Ok(value_to_string(&value)),
    }
}

fn into_attributes(map: Map<String, Value>) -> BTreeMap<String, String> {
    map.into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k, value_to_string(&v)))
        .collect()
}

/// Parse node-link JSON text into a topology graph
pub fn parse_node_link_str(content: &str) -> Result<TopologyGraph> {
    let doc: NodeLinkDocument = serde_json::from_str(content)
        .wrap_err("Failed to parse node-link JSON")?;

    let mut nodes = Vec::with_capacity(doc.nodes.len());
    for (index, mut raw) in doc.nodes.into_iter().enumerate() {
        let id = take_required(&mut raw, "id", &format!("Node #{}", index))?;
        nodes.push(DeviceNode { id, attributes: into_attributes(raw) });
    }

    let mut links = Vec::with_capacity(doc.links.len());
    for (index, mut raw) in doc.links.into_iter().enumerate() {
        let context = format!("Link #{}", index);
        let source = take_required(&mut raw, "source", &context)?;
        let target = take_required(&mut raw, "target", &context)?;
        // networkx multigraph edge keys carry no styling information
        raw.remove("key");
        links.push(Link { source, target, attributes: into_attributes(raw) });
    }

    Ok(TopologyGraph {
        directed: doc.directed,
        nodes,
        links,
        attributes: into_attributes(doc.graph),
    })
}

/// Parse a node-link JSON file into a topology graph
pub fn parse_node_link_file(path: &Path) -> Result<TopologyGraph> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read node-link file '{}'", path.display()))?;
    parse_node_link_str(&content)
        .wrap_err_with(|| format!("Invalid topology in '{}'", path.display()))
}
