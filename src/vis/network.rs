//! Standalone vis-network page builder.
//!
//! [`Network`] collects styled nodes and edges and renders them into a
//! self-contained HTML document. The page loads vis-network from the CDN and
//! exposes the created instance as the global `network`, which the injected
//! control panel drives.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::CanvasConfig;

use super::types::{Arrows, Font, VisEdge, VisNode};

const VIS_NETWORK_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/dist/vis-network.min.css";
const VIS_NETWORK_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/vis-network.min.js";

/// Errors raised while assembling a network
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NetworkError {
    #[error("Edge {from} -> {to} references unknown node '{missing}'")]
    UnknownNode { from: String, to: String, missing: String },
    #[error("Failed to serialize network data: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Stabilization {
    enabled: bool,
    fit: bool,
    iterations: u32,
    update_interval: u32,
}

#[derive(Debug, Clone, Serialize)]
struct PhysicsOptions {
    enabled: bool,
    stabilization: Stabilization,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct InteractionOptions {
    hover: bool,
    tooltip_delay: u32,
    navigation_buttons: bool,
}

/// Top-level vis-network options object
#[derive(Debug, Clone, Serialize)]
struct NetworkOptions {
    physics: PhysicsOptions,
    interaction: InteractionOptions,
}

impl NetworkOptions {
    fn new(physics: bool) -> Self {
        Self {
            physics: PhysicsOptions {
                enabled: physics,
                stabilization: Stabilization {
                    enabled: true,
                    fit: true,
                    iterations: 1000,
                    update_interval: 50,
                },
            },
            interaction: InteractionOptions {
                hover: true,
                tooltip_delay: 200,
                navigation_buttons: false,
            },
        }
    }
}

/// An interactive network page under construction
#[derive(Debug, Clone)]
pub struct Network {
    canvas: CanvasConfig,
    heading: String,
    nodes: Vec<VisNode>,
    edges: Vec<VisEdge>,
    node_ids: HashSet<String>,
}

impl Network {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self {
            canvas,
            heading: "Network Topology".to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
            node_ids: HashSet::new(),
        }
    }

    /// Page title shown by the browser
    pub fn set_heading(&mut self, heading: impl Into<String>) {
        self.heading = heading.into();
    }

    pub fn toggle_physics(&mut self, enabled: bool) {
        self.canvas.physics = enabled;
    }

    pub fn physics_enabled(&self) -> bool {
        self.canvas.physics
    }

    pub fn nodes(&self) -> &[VisNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[VisEdge] {
        &self.edges
    }

    /// Add a node; a second node with the same id is ignored
    pub fn add_node(&mut self, mut node: VisNode) {
        if !self.node_ids.insert(node.id.clone()) {
            log::debug!("Node '{}' already added, ignoring duplicate", node.id);
            return;
        }
        if node.font.is_none() {
            node.font = Some(Font { color: self.canvas.font_color.clone() });
        }
        self.nodes.push(node);
    }

    /// Add an edge between two already-added nodes
    pub fn add_edge(&mut self, mut edge: VisEdge) -> Result<(), NetworkError> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.node_ids.contains(endpoint) {
                return Err(NetworkError::UnknownNode {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
        if self.canvas.directed && edge.arrows.is_none() {
            edge.arrows = Some(Arrows::Named("to".to_string()));
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Render the complete HTML document
    pub fn generate_html(&self) -> Result<String, NetworkError> {
        let nodes = to_script_json(&self.nodes)?;
        let edges = to_script_json(&self.edges)?;
        let options = to_script_json(&NetworkOptions::new(self.canvas.physics))?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{heading}</title>
<link rel="stylesheet" href="{css}" />
<script type="text/javascript" src="{js}"></script>
<style type="text/css">
  #mynetwork {{
    width: {width};
    height: {height};
    background-color: {bgcolor};
    border: 1px solid lightgray;
    position: relative;
    float: left;
  }}
</style>
</head>
<body>
<div id="mynetwork"></div>
<script type="text/javascript">
  var nodes;
  var edges;
  var network;
  var container;
  var options, data;

  function drawGraph() {{
    container = document.getElementById("mynetwork");
    nodes = new vis.DataSet({nodes});
    edges = new vis.DataSet({edges});
    data = {{ nodes: nodes, edges: edges }};
    options = {options};
    network = new vis.Network(container, data, options);
    return network;
  }}

  drawGraph();
</script>
</body>
</html>
"#,
            heading = escape_html(&self.heading),
            css = VIS_NETWORK_CSS,
            js = VIS_NETWORK_JS,
            width = self.canvas.width,
            height = self.canvas.height,
            bgcolor = self.canvas.bgcolor,
            nodes = nodes,
            edges = edges,
            options = options,
        ))
    }
}

/// Serialize for embedding inside a `<script>` element
fn to_script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, NetworkError> {
    let json = serde_json::to_string(value).map_err(|e| NetworkError::Serialization(e.to_string()))?;
    Ok(json.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vis::{Dashes, NodeShape};

    fn dot(id: &str) -> VisNode {
        VisNode {
            id: id.to_string(),
            label: id.to_string(),
            title: id.to_string(),
            shape: NodeShape::Dot,
            image: None,
            border_width: None,
            color: None,
            size: Some(18),
            font: None,
        }
    }

    fn edge(from: &str, to: &str) -> VisEdge {
        VisEdge {
            from: from.to_string(),
            to: to.to_string(),
            title: None,
            width: 3,
            dashes: Dashes::Solid,
            color: "#808080".to_string(),
            arrows: None,
        }
    }

    #[test]
    fn test_add_node_applies_font_and_skips_duplicates() {
        let mut net = Network::new(CanvasConfig::default());
        net.add_node(dot("a"));
        net.add_node(dot("a"));
        assert_eq!(net.nodes().len(), 1);
        assert_eq!(net.nodes()[0].font, Some(Font { color: "#000000".to_string() }));
    }

    #[test]
    fn test_add_edge_requires_known_nodes() {
        let mut net = Network::new(CanvasConfig::default());
        net.add_node(dot("a"));
        let err = net.add_edge(edge("a", "ghost")).unwrap_err();
        assert_eq!(
            err,
            NetworkError::UnknownNode { from: "a".into(), to: "ghost".into(), missing: "ghost".into() }
        );
        assert!(net.edges().is_empty());
    }

    #[test]
    fn test_directed_network_adds_arrows() {
        let canvas = CanvasConfig { directed: true, ..CanvasConfig::default() };
        let mut net = Network::new(canvas);
        net.add_node(dot("a"));
        net.add_node(dot("b"));
        net.add_edge(edge("a", "b")).unwrap();
        assert_eq!(net.edges()[0].arrows, Some(Arrows::Named("to".to_string())));
    }

    #[test]
    fn test_generate_html_structure() {
        let mut net = Network::new(CanvasConfig::default());
        net.add_node(dot("a"));
        net.add_node(dot("b"));
        net.add_edge(edge("a", "b")).unwrap();

        let html = net.generate_html().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("vis-network.min.js"));
        assert!(html.contains("height: 900px;"));
        assert!(html.contains("width: 100%;"));
        assert!(html.contains("background-color: #ffffff;"));
        assert!(html.contains("var network;"));
        assert!(html.contains("network = new vis.Network(container, data, options);"));
        assert!(html.contains(r#""from":"a","to":"b""#));
        assert!(html.contains(r#""physics":{"enabled":true"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_physics_toggle_reflected_in_options() {
        let mut net = Network::new(CanvasConfig::default());
        net.toggle_physics(false);
        assert!(!net.physics_enabled());
        assert!(net.generate_html().unwrap().contains(r#""physics":{"enabled":false"#));
    }

    #[test]
    fn test_script_data_is_escaped() {
        let mut net = Network::new(CanvasConfig::default());
        let mut node = dot("a");
        node.title = "</script><b>x</b>".to_string();
        net.add_node(node);
        net.set_heading("R&D <lab>");

        let html = net.generate_html().unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r"<\/script>"));
        assert!(html.contains("<title>R&amp;D &lt;lab&gt;</title>"));
    }
}
