//! Shared utilities: path helpers, topology validation, browser launch.

pub mod browser;
pub mod paths;
pub mod validation;

pub use browser::open_in_browser;
pub use paths::{relative_path, to_url_path};
pub use validation::{validate_topology, TopologyError};
