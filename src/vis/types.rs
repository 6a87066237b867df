//! vis-network data types.
//!
//! These serialize to exactly the JSON shapes vis-network expects in its
//! node and edge `DataSet`s, so field names follow its camelCase options.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Image,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeColor {
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
}

/// A node entry of the vis-network nodes DataSet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisNode {
    pub id: String,
    pub label: String,
    pub title: String,
    pub shape: NodeShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NodeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

/// Line dash pattern: `false` for a solid line, `[dash, gap]` otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashes {
    Solid,
    Pattern(u32, u32),
}

impl Serialize for Dashes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dashes::Solid => serializer.serialize_bool(false),
            Dashes::Pattern(dash, gap) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(dash)?;
                seq.serialize_element(gap)?;
                seq.end()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowEnd {
    pub enabled: bool,
    pub scale_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arrows {
    /// Shorthand such as `"to"`
    Named(String),
    Detailed { to: ArrowEnd },
}

/// An edge entry of the vis-network edges DataSet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisEdge {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub width: u32,
    pub dashes: Dashes,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<Arrows>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashes_serialization() {
        assert_eq!(serde_json::to_value(Dashes::Solid).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(Dashes::Pattern(8, 4)).unwrap(), json!([8, 4]));
    }

    #[test]
    fn test_arrows_serialization() {
        let detailed = Arrows::Detailed {
            to: ArrowEnd { enabled: true, scale_factor: 0.5 },
        };
        assert_eq!(
            serde_json::to_value(detailed).unwrap(),
            json!({"to": {"enabled": true, "scaleFactor": 0.5}})
        );
        assert_eq!(serde_json::to_value(Arrows::Named("to".into())).unwrap(), json!("to"));
    }

    #[test]
    fn test_dot_node_omits_image_fields() {
        let node = VisNode {
            id: "n".into(),
            label: "n".into(),
            title: "n".into(),
            shape: NodeShape::Dot,
            image: None,
            border_width: None,
            color: None,
            size: Some(18),
            font: None,
        };
        assert_eq!(
            serde_json::to_value(node).unwrap(),
            json!({"id": "n", "label": "n", "title": "n", "shape": "dot", "size": 18})
        );
    }
}
