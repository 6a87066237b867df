//! Device styling: icon resolution and border colors.

use std::fs;
use std::path::Path;

use crate::topology::DeviceNode;
use crate::utils::paths::{relative_path, to_url_path};
use crate::vis::{NodeColor, NodeShape, VisNode};

use super::{StyleSheet, FALLBACK_ICON_KEY};

/// Border width drawn around image nodes
const IMAGE_BORDER_WIDTH: u32 = 2;
/// Diameter of the plain dot used when no icon is available
const DOT_SIZE: u32 = 18;

impl StyleSheet {
    /// Pick the icon key for a node: explicit `device_icon`, then a mapped
    /// `device_type`, then the router icon.
    pub fn icon_key(&self, node: &DeviceNode) -> String {
        if let Some(icon) = node.device_icon() {
            return icon.to_string();
        }
        let device_type = node.device_type();
        if self.icon_map.contains_key(&device_type) {
            device_type
        } else {
            FALLBACK_ICON_KEY.to_string()
        }
    }

    /// Locate the asset for `icon_key` and express it relative to `out_dir`.
    ///
    /// `None` when the key is unmapped or the asset file is missing.
    pub fn resolve_icon(&self, icon_key: &str, out_dir: &Path) -> Option<String> {
        let filename = self.icon_map.get(icon_key)?;
        let icon_path = self.assets_dir.join(filename);
        if !icon_path.is_file() {
            log::debug!("Icon '{}' not found at {}", icon_key, icon_path.display());
            return None;
        }

        let absolute = fs::canonicalize(&icon_path).unwrap_or(icon_path);
        let relative = fs::canonicalize(out_dir)
            .ok()
            .and_then(|dir| relative_path(&absolute, &dir));

        Some(to_url_path(relative.as_deref().unwrap_or(&absolute)))
    }

    /// Full vis-network node for a device
    pub fn style_node(&self, node: &DeviceNode, out_dir: &Path) -> VisNode {
        let device_type = node.device_type();
        let image = self.resolve_icon(&self.icon_key(node), out_dir);

        let mut vis = VisNode {
            id: node.id.clone(),
            label: node.label().to_string(),
            title: node.title().to_string(),
            shape: NodeShape::Dot,
            image: None,
            border_width: None,
            color: None,
            size: None,
            font: None,
        };

        match image {
            Some(image) => {
                vis.shape = NodeShape::Image;
                vis.image = Some(image);
                vis.border_width = Some(IMAGE_BORDER_WIDTH);
                vis.color = Some(NodeColor {
                    border: self.device_border_color(&device_type).to_string(),
                });
            }
            None => vis.size = Some(DOT_SIZE),
        }

        vis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// assets/ with every default icon present, plus an out/ directory
    fn workspace() -> (TempDir, StyleSheet) {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::create_dir_all(dir.path().join("out")).unwrap();
        for file in ["wifi-router.png", "monitor.png", "laptop.png", "hub.png"] {
            fs::write(assets.join(file), b"png").unwrap();
        }
        let sheet = StyleSheet { assets_dir: assets, ..StyleSheet::default() };
        (dir, sheet)
    }

    #[test]
    fn test_icon_key_selection() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.icon_key(&DeviceNode::new("a").with_attr("device_type", "Laptop")), "laptop");
        assert_eq!(sheet.icon_key(&DeviceNode::new("a").with_attr("device_type", "firewall")), "router");
        assert_eq!(sheet.icon_key(&DeviceNode::new("a")), "router");
        assert_eq!(
            sheet.icon_key(&DeviceNode::new("a").with_attr("device_type", "pc").with_attr("device_icon", "Switch")),
            "Switch"
        );
    }

    #[test]
    fn test_resolve_icon_relative_to_output() {
        let (dir, sheet) = workspace();
        let out = dir.path().join("out");
        assert_eq!(sheet.resolve_icon("switch", &out), Some("../assets/hub.png".to_string()));
        assert_eq!(sheet.resolve_icon("firewall", &out), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_icon_encodes_file_name() {
        let (dir, mut sheet) = workspace();
        fs::write(sheet.assets_dir.join("edge#2?.png"), b"png").unwrap();
        sheet.icon_map.insert("edge".to_string(), "edge#2?.png".to_string());
        assert_eq!(
            sheet.resolve_icon("edge", &dir.path().join("out")),
            Some("../assets/edge%232%3F.png".to_string())
        );
    }

    #[test]
    fn test_resolve_icon_missing_asset() {
        let dir = TempDir::new().unwrap();
        let sheet = StyleSheet { assets_dir: dir.path().join("nowhere"), ..StyleSheet::default() };
        assert_eq!(sheet.resolve_icon("router", dir.path()), None);
    }

    #[test]
    fn test_resolve_icon_directory_is_not_an_icon() {
        let (dir, mut sheet) = workspace();
        fs::create_dir_all(sheet.assets_dir.join("folder.png")).unwrap();
        sheet.icon_map.insert("odd".to_string(), "folder.png".to_string());
        assert_eq!(sheet.resolve_icon("odd", &dir.path().join("out")), None);
    }

    #[test]
    fn test_style_node_with_icon() {
        let (dir, sheet) = workspace();
        let node = DeviceNode::new("sw1").with_attr("device_type", "SWITCH").with_attr("label", "Access");

        let vis = sheet.style_node(&node, &dir.path().join("out"));
        assert_eq!(vis.shape, NodeShape::Image);
        assert_eq!(vis.image.as_deref(), Some("../assets/hub.png"));
        assert_eq!(vis.border_width, Some(2));
        assert_eq!(vis.color, Some(NodeColor { border: "#1971c2".to_string() }));
        assert_eq!(vis.label, "Access");
        assert_eq!(vis.title, "Access");
        assert_eq!(vis.size, None);
    }

    #[test]
    fn test_unknown_device_gets_router_icon_with_grey_border() {
        let (dir, sheet) = workspace();
        let node = DeviceNode::new("fw").with_attr("device_type", "firewall");

        let vis = sheet.style_node(&node, &dir.path().join("out"));
        assert_eq!(vis.image.as_deref(), Some("../assets/wifi-router.png"));
        assert_eq!(vis.color, Some(NodeColor { border: "#666666".to_string() }));
    }

    #[test]
    fn test_style_node_falls_back_to_dot() {
        let (dir, sheet) = workspace();
        let node = DeviceNode::new("x").with_attr("device_icon", "satellite").with_attr("title", "uplink");

        let vis = sheet.style_node(&node, &dir.path().join("out"));
        assert_eq!(vis.shape, NodeShape::Dot);
        assert_eq!(vis.size, Some(18));
        assert_eq!(vis.image, None);
        assert_eq!(vis.color, None);
        assert_eq!(vis.label, "x");
        assert_eq!(vis.title, "uplink");
    }
}
