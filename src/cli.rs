// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ocean-explorer")]
#[command(about = "Scroll-driven deep ocean scene", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for seaweed and bubble placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scrollable page height in pixels
    #[arg(long = "scroll-extent")]
    pub scroll_extent: Option<f32>,

    /// Disable the overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
