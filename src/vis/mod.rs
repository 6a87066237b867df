//! vis-network page generation.

pub mod network;
pub mod types;

pub use network::{Network, NetworkError};
pub use types::{ArrowEnd, Arrows, Dashes, Font, NodeColor, NodeShape, VisEdge, VisNode};
