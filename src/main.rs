use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use topoviz::config_loader::{self, RenderCliOverrides};
use topoviz::renderer::TopologyRenderer;
use topoviz::topology::{self, InputFormat};
use topoviz::utils::open_in_browser;

/// Render a network topology as an interactive HTML page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Topology file (GML or node-link JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "topology.html")]
    output: PathBuf,

    /// Optional YAML render configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing device icons
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Input format; detected from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Start with physics simulation disabled
    #[arg(long)]
    no_physics: bool,

    /// Leave out the floating control panel and legend
    #[arg(long)]
    no_controls: bool,

    /// Open the generated page in the default browser
    #[arg(long)]
    open: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting topoviz");
    info!("Topology file: {:?}", args.input);
    info!("Output file: {:?}", args.output);

    let mut config = config_loader::load_or_default(args.config.as_deref())?;
    let overrides = RenderCliOverrides {
        assets_dir: args.assets.clone(),
        no_physics: args.no_physics,
        no_controls: args.no_controls,
    };
    config_loader::apply_cli_overrides(&mut config, &overrides)?;

    let graph = topology::load_topology(&args.input, args.format)?;

    let renderer = TopologyRenderer::from_config(&config);
    let summary = renderer.render_interactive_topology(&graph, &args.output)?;

    info!(
        "Rendered {} devices ({} with icons, {} as dots) and {} links",
        summary.nodes, summary.icon_nodes, summary.dot_nodes, summary.edges
    );

    if args.open {
        open_in_browser(&args.output)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["topoviz", "--input", "net.gml"]);

        assert_eq!(args.input, PathBuf::from("net.gml"));
        assert_eq!(args.output, PathBuf::from("topology.html"));
        assert!(args.config.is_none());
        assert!(args.format.is_none());
        assert!(!args.no_physics);
        assert!(!args.open);
    }

    #[test]
    fn test_cli_all_flags() {
        let args = Args::parse_from([
            "topoviz",
            "-i", "net.topo",
            "-o", "out/page.html",
            "-c", "style.yaml",
            "--assets", "icons",
            "--format", "node-link",
            "--no-physics",
            "--no-controls",
            "--open",
        ]);

        assert_eq!(args.output, PathBuf::from("out/page.html"));
        assert_eq!(args.config, Some(PathBuf::from("style.yaml")));
        assert_eq!(args.assets, Some(PathBuf::from("icons")));
        assert_eq!(args.format, Some(InputFormat::NodeLink));
        assert!(args.no_physics && args.no_controls && args.open);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Args::try_parse_from(["topoviz"]).is_err());
        assert!(Args::try_parse_from(["topoviz", "-i", "x", "--format", "dot"]).is_err());
    }
}
