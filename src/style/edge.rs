//! Link styling: line width, dash pattern, color and arrows.

use crate::topology::Link;
use crate::vis::{ArrowEnd, Arrows, Dashes, VisEdge};

use super::StyleSheet;

/// Routing relationship a link represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkType {
    Subnet,
    Ospf,
    Bgp,
    Description,
    Other(String),
}

impl LinkType {
    pub fn parse(value: &str) -> Self {
        match value {
            "subnet" => Self::Subnet,
            "ospf" => Self::Ospf,
            "bgp" => Self::Bgp,
            "description" => Self::Description,
            other => Self::Other(other.to_string()),
        }
    }

    /// Width and dash pattern before bandwidth adjustment
    fn base(&self) -> (u32, Dashes) {
        match self {
            Self::Subnet | Self::Other(_) => (3, Dashes::Solid),
            Self::Ospf => (3, Dashes::Pattern(8, 4)),
            Self::Bgp => (3, Dashes::Pattern(12, 6)),
            Self::Description => (2, Dashes::Pattern(4, 4)),
        }
    }
}

/// Visual properties of a link, independent of its endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub width: u32,
    pub dashes: Dashes,
    pub color: String,
    pub arrows: Option<Arrows>,
}

/// Scale a base width by link capacity
fn width_for_bandwidth(base: u32, bandwidth_mbps: f64) -> u32 {
    if bandwidth_mbps >= 10_000.0 {
        base.max(6)
    } else if bandwidth_mbps >= 1_000.0 {
        base.max(5)
    } else if bandwidth_mbps < 100.0 {
        base.saturating_sub(1).max(1)
    } else {
        base
    }
}

impl StyleSheet {
    pub fn edge_style(&self, link_type: &str, bandwidth_mbps: f64, priority: &str) -> EdgeStyle {
        let link_type = LinkType::parse(link_type);
        let (base_width, dashes) = link_type.base();

        let arrows = (link_type == LinkType::Bgp).then(|| Arrows::Detailed {
            to: ArrowEnd { enabled: true, scale_factor: 0.5 },
        });

        EdgeStyle {
            width: width_for_bandwidth(base_width, bandwidth_mbps),
            dashes,
            color: self.priority_color(priority).to_string(),
            arrows,
        }
    }

    /// Hover text: the title followed by whichever metrics the link carries
    pub fn edge_title(&self, title: &str, link: &Link) -> String {
        let mut parts = vec![title.to_string()];
        if let Some(bw) = link.bandwidth_mbps() {
            parts.push(format!("Bandwidth: {:.0}Mbps", bw));
        }
        if let Some(util) = link.utilization_percent() {
            parts.push(format!("Utilization: {:.1}%", util));
        }
        if let Some(prio) = link.priority().filter(|p| !p.is_empty()) {
            parts.push(format!("Priority: {}", prio));
        }
        parts.join(" | ")
    }

    /// Full vis-network edge for a link
    pub fn style_link(&self, link: &Link) -> VisEdge {
        let style = self.edge_style(
            link.link_type(),
            link.bandwidth_mbps().unwrap_or(0.0),
            link.priority().unwrap_or("unknown"),
        );

        VisEdge {
            from: link.source.clone(),
            to: link.target.clone(),
            title: Some(self.edge_title(&link.title(), link)),
            width: style.width,
            dashes: style.dashes,
            color: style.color,
            arrows: style.arrows,
        }
    }
}
