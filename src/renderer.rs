//! Topology renderer.
//!
//! This module coordinates the rendering process: validating the graph,
//! styling every device and link, generating the vis-network page and
//! injecting the control panel before the page is written.

use crate::config::{CanvasConfig, Config};
use crate::overlay::{controls_and_legend_html, inject_before_body_end};
use crate::style::StyleSheet;
use crate::topology::TopologyGraph;
use crate::utils::validation::validate_topology;
use crate::vis::{Network, NodeShape};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// What ended up on the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub nodes: usize,
    pub icon_nodes: usize,
    pub dot_nodes: usize,
    pub edges: usize,
}

pub struct TopologyRenderer {
    stylesheet: StyleSheet,
    canvas: CanvasConfig,
    controls: bool,
}

impl TopologyRenderer {
    pub fn new(stylesheet: StyleSheet, canvas: CanvasConfig) -> Self {
        if !stylesheet.assets_dir.exists() {
            warn!("Assets folder not found: {}", stylesheet.assets_dir.display());
        }
        Self {
            stylesheet,
            canvas,
            controls: true,
        }
    }

    /// Renderer with styling, canvas and panel settings taken from a config
    pub fn from_config(config: &Config) -> Self {
        let mut renderer = Self::new(StyleSheet::from_config(config), config.canvas.clone());
        renderer.controls = config.controls.enabled;
        renderer
    }

    pub fn with_controls(mut self, enabled: bool) -> Self {
        self.controls = enabled;
        self
    }

    /// Build the styled network for `graph`; icon paths are made relative
    /// to `out_dir`.
    pub fn build_network(&self, graph: &TopologyGraph, out_dir: &Path) -> Result<Network> {
        validate_topology(graph).wrap_err("Invalid topology")?;

        let mut canvas = self.canvas.clone();
        canvas.directed = canvas.directed || graph.directed;
        let mut net = Network::new(canvas);
        if let Some(name) = graph.attributes.get("name").or_else(|| graph.attributes.get("label")) {
            net.set_heading(name.clone());
        }

        for node in &graph.nodes {
            net.add_node(self.stylesheet.style_node(node, out_dir));
        }

        for link in &graph.links {
            net.add_edge(self.stylesheet.style_link(link))?;
        }

        Ok(net)
    }

    /// Generate the page for an already built network, with the control
    /// panel injected when enabled
    fn page_for(&self, net: &Network) -> Result<String> {
        let page = net.generate_html()?;

        if !self.controls {
            return Ok(page);
        }

        let injection = controls_and_legend_html(net.physics_enabled());
        Ok(inject_before_body_end(&page, &injection))
    }

    /// Render the complete page as a string
    pub fn render_html(&self, graph: &TopologyGraph, out_dir: &Path) -> Result<String> {
        let net = self.build_network(graph, out_dir)?;
        self.page_for(&net)
    }

    /// Render `graph` into an interactive HTML file at `output_file`
    pub fn render_interactive_topology(&self, graph: &TopologyGraph, output_file: &Path) -> Result<RenderSummary> {
        let out_dir = match output_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };
        fs::create_dir_all(&out_dir)
            .wrap_err_with(|| format!("Failed to create output directory '{}'", out_dir.display()))?;

        if output_file.is_dir() {
            return Err(eyre!("Output path '{}' is a directory", output_file.display()));
        }

        let net = self.build_network(graph, &out_dir)?;
        let final_html = self.page_for(&net)?;

        fs::write(output_file, final_html)
            .wrap_err_with(|| format!("Failed to write '{}'", output_file.display()))?;

        let icon_nodes = net.nodes().iter().filter(|n| n.shape == NodeShape::Image).count();
        let summary = RenderSummary {
            nodes: net.nodes().len(),
            icon_nodes,
            dot_nodes: net.nodes().len() - icon_nodes,
            edges: net.edges().len(),
        };

        info!("Enhanced interactive topology saved to {}", output_file.display());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{DeviceNode, Link};
    use tempfile::TempDir;

    fn sample_graph() -> TopologyGraph {
        TopologyGraph {
            nodes: vec![
                DeviceNode::new("r1").with_attr("device_type", "router"),
                DeviceNode::new("pc1").with_attr("device_type", "pc"),
            ],
            links: vec![Link::new("r1", "pc1").with_attr("link_type", "bgp")],
            ..TopologyGraph::default()
        }
    }

    fn renderer_without_assets(dir: &Path) -> TopologyRenderer {
        let sheet = StyleSheet { assets_dir: dir.join("missing-assets"), ..StyleSheet::default() };
        TopologyRenderer::new(sheet, CanvasConfig::default())
    }

    #[test]
    fn test_render_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("nested/deeper/topology.html");

        let summary = renderer_without_assets(dir.path())
            .render_interactive_topology(&sample_graph(), &output)
            .unwrap();

        assert!(output.is_file());
        assert_eq!(summary, RenderSummary { nodes: 2, icon_nodes: 0, dot_nodes: 2, edges: 1 });
    }

    #[test]
    fn test_render_html_injects_controls() {
        let dir = TempDir::new().unwrap();
        let html = renderer_without_assets(dir.path()).render_html(&sample_graph(), dir.path()).unwrap();

        let panel = html.find("floating-panel").unwrap();
        let body_end = html.rfind("</body>").unwrap();
        let network = html.find("new vis.Network").unwrap();
        assert!(network < panel && panel < body_end);
        assert!(html.contains(r#""scaleFactor":0.5"#));
    }

    #[test]
    fn test_render_without_controls() {
        let dir = TempDir::new().unwrap();
        let html = renderer_without_assets(dir.path())
            .with_controls(false)
            .render_html(&sample_graph(), dir.path())
            .unwrap();
        assert!(!html.contains("floating-panel"));
    }

    #[test]
    fn test_render_rejects_dangling_links() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        graph.links.push(Link::new("pc1", "ghost"));

        let result = renderer_without_assets(dir.path())
            .render_interactive_topology(&graph, &dir.path().join("out.html"));
        assert!(result.is_err());
        assert!(!dir.path().join("out.html").exists());
    }

    #[test]
    fn test_graph_name_becomes_heading() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        graph.attributes.insert("name".to_string(), "Campus".to_string());

        let html = renderer_without_assets(dir.path()).render_html(&graph, dir.path()).unwrap();
        assert!(html.contains("<title>Campus</title>"));
    }
}
