use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Runtime configuration. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OceanConfig {
    /// Placement seed; `None` draws from entropy
    pub seed: Option<u64>,
    pub seaweed_count: usize,
    pub seaweed_segments: usize,
    pub bubble_count: usize,
    /// Scrollable page height in pixels
    pub scroll_extent: f32,
    /// Pixels scrolled per mouse-wheel line
    pub line_height_px: f32,
    pub window_width: u32,
    pub window_height: u32,
    pub show_ui: bool,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            seed: None,
            seaweed_count: 15,
            seaweed_segments: 8,
            bubble_count: 50,
            scroll_extent: 6000.0,
            line_height_px: 40.0,
            window_width: 1280,
            window_height: 720,
            show_ui: true,
        }
    }
}

impl OceanConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid ocean config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Config file (if any) with command-line flags layered on top.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make scrolling or the window meaningless.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.line_height_px.is_finite() && self.line_height_px > 0.0,
            "line_height_px must be a positive number, got {}",
            self.line_height_px
        );
        ensure!(
            self.scroll_extent.is_finite() && self.scroll_extent >= 0.0,
            "scroll_extent must be a non-negative number, got {}",
            self.scroll_extent
        );
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window size must be non-zero, got {}x{}",
            self.window_width,
            self.window_height
        );
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(extent) = cli.scroll_extent {
            self.scroll_extent = extent;
        }
        if cli.no_ui {
            self.show_ui = false;
        }
    }
}
