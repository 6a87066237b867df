//! # Topoviz - Interactive network topology pages
//!
//! This library turns an attributed network topology (devices and links)
//! into a standalone HTML page driven by vis-network.
//!
//! ## Overview
//!
//! Topoviz does no layout of its own. It maps topology attributes to visual
//! styling and leaves layout, physics and rendering to vis-network in the
//! browser:
//!
//! - **Devices**: `device_type` / `device_icon` pick an icon and border color
//! - **Links**: `link_type` picks the dash pattern, `bandwidth_mbps` the line
//!   width, `priority` the color; BGP links get an arrow
//! - **Tooltips**: link titles list bandwidth, utilization and priority
//! - **Controls**: a floating panel with fit-to-screen, a physics toggle and
//!   a link-type legend
//!
//! ## Architecture
//!
//! - `topology`: graph model and node-link JSON loader
//! - `gml_parser`: GML loader
//! - `config` / `config_loader`: YAML render configuration
//! - `style`: attribute-to-style lookup tables
//! - `vis`: vis-network data types and page generation
//! - `overlay`: control panel and legend injection
//! - `renderer`: end-to-end rendering of a topology file
//! - `utils`: validation, path and browser helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use topoviz::{config_loader, renderer::TopologyRenderer, topology};
//!
//! let config = config_loader::load_or_default(Some(Path::new("topoviz.yaml")))?;
//! let graph = topology::load_topology(Path::new("campus.gml"), None)?;
//!
//! let renderer = TopologyRenderer::from_config(&config);
//! renderer.render_interactive_topology(&graph, Path::new("out/campus.html"))?;
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```yaml
//! canvas:
//!   height: "900px"
//!   width: "100%"
//!   bgcolor: "#ffffff"
//!   font_color: "#000000"
//!   physics: true
//! assets_dir: "assets"
//! icons:
//!   firewall: "shield.png"
//! priority_colors:
//!   critical: "#8B0000"
//! device_colors:
//!   firewall: "#e8590c"
//! controls:
//!   enabled: true
//! ```
//!
//! ## Error Handling
//!
//! The library uses `color_eyre` for error reporting with context. Domain
//! failures (`ValidationError`, `TopologyError`, `NetworkError`) are typed
//! with `thiserror` and converted at the call site.

pub mod config;
pub mod config_loader;
pub mod gml_parser;
pub mod overlay;
pub mod renderer;
pub mod style;
pub mod topology;
pub mod utils;
pub mod vis;
