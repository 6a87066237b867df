//! Topology validation utilities.
//!
//! Checks that a loaded graph can be drawn: every node id is unique and
//! every link connects two known nodes.

use crate::topology::TopologyGraph;
use std::collections::HashSet;

/// Reasons a topology cannot be rendered
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TopologyError {
    #[error("Duplicate node ID: {0}")]
    DuplicateNode(String),
    #[error("Link {from} -> {to} references non-existent node '{missing}'")]
    DanglingLink {
        from: String,
        to: String,
        missing: String,
    },
}

/// Validate the network topology
///
/// # Examples
/// ```
/// use topoviz::topology::{DeviceNode, Link, TopologyGraph};
/// use topoviz::utils::validation::validate_topology;
///
/// let graph = TopologyGraph {
///     nodes: vec![DeviceNode::new("r1"), DeviceNode::new("pc1")],
///     links: vec![Link::new("r1", "pc1")],
///     ..TopologyGraph::default()
/// };
/// assert!(validate_topology(&graph).is_ok());
/// ```
pub fn validate_topology(graph: &TopologyGraph) -> Result<(), TopologyError> {
    let mut node_ids = HashSet::new();
    for node in &graph.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(TopologyError::DuplicateNode(node.id.clone()));
        }
    }

    for link in &graph.links {
        for endpoint in [&link.source, &link.target] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(TopologyError::DanglingLink {
                    from: link.source.clone(),
                    to: link.target.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
    }

    let isolated = graph
        .nodes
        .iter()
        .filter(|n| !graph.links.iter().any(|l| l.source == n.id || l.target == n.id))
        .count();
    if isolated > 0 && !graph.links.is_empty() {
        log::info!("{} of {} nodes have no links", isolated, graph.nodes.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{DeviceNode, Link};

    fn graph(nodes: &[&str], links: &[(&str, &str)]) -> TopologyGraph {
        TopologyGraph {
            nodes: nodes.iter().map(|id| DeviceNode::new(*id)).collect(),
            links: links.iter().map(|(s, t)| Link::new(*s, *t)).collect(),
            ..TopologyGraph::default()
        }
    }

    #[test]
    fn test_validate_topology() {
        assert!(validate_topology(&graph(&["a", "b"], &[("a", "b")])).is_ok());
        assert!(validate_topology(&graph(&[], &[])).is_ok());
        assert!(validate_topology(&graph(&["a", "b"], &[])).is_ok());
    }

    #[test]
    fn test_duplicate_node_id() {
        assert_eq!(
            validate_topology(&graph(&["a", "a"], &[])),
            Err(TopologyError::DuplicateNode("a".to_string()))
        );
    }

    #[test]
    fn test_dangling_link() {
        assert_eq!(
            validate_topology(&graph(&["a"], &[("a", "z")])),
            Err(TopologyError::DanglingLink {
                from: "a".to_string(),
                to: "z".to_string(),
                missing: "z".to_string(),
            })
        );
    }
}
