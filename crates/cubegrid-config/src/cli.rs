//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Cube grid demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cubegrid", about = "Cube grid face snapping and bounds drawing")]
pub struct CliArgs {
    /// Distance from the cube center to each face.
    #[arg(long)]
    pub half_extent: Option<f32>,

    /// Enable or disable bounding box drawing.
    #[arg(long)]
    pub draw_bounds: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 3)]
    pub frames: u32,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(h) = args.half_extent {
            self.grid.half_extent = h;
        }
        if let Some(draw) = args.draw_bounds {
            self.debug.draw_bounds = draw;
        }
        if let Some(ref level) = args.log_level {
            self.log.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            half_extent: Some(4.0),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.grid.half_extent, 4.0);
        assert_eq!(config.log.level, "trace");
        // Non-overridden fields retain defaults
        assert!(config.debug.draw_bounds);
        assert_eq!(config.grid.cells_per_face, 16);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "cubegrid",
            "--half-extent",
            "12.5",
            "--draw-bounds",
            "false",
            "--frames",
            "10",
        ]);
        assert_eq!(args.half_extent, Some(12.5));
        assert_eq!(args.draw_bounds, Some(false));
        assert_eq!(args.frames, 10);
        assert!(args.config.is_none());
    }
}
