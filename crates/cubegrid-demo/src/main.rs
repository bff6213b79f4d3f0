//! Demo binary that snaps grid entities onto a cube's faces and draws mesh
//! bounding boxes for a few frames.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubegrid-demo -- --frames 5 --log-level debug`.

mod scene;

use std::path::PathBuf;

use clap::Parser;
use cubegrid_bounds::{
    BoundsDrawSettings, DebugLineBuffer, ParallelLineBuilder, register_bounds_drawing,
};
use cubegrid_config::{CliArgs, Config};
use cubegrid_ecs::{EngineSchedules, FrameCounter, create_world};
use cubegrid_face::{CubeGridFaces, register_face_snapping};
use tracing::{error, info};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cubegrid")
    });

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    cubegrid_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(config_dir = %config_dir.display(), "cube grid demo starting");

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let grid = match CubeGridFaces::cube(config.grid.half_extent, config.grid.cells_per_face) {
        Ok(grid) => grid,
        Err(e) => {
            error!("Failed to build cube grid: {e}");
            std::process::exit(1);
        }
    };

    let builder = ParallelLineBuilder::with_threshold(config.debug.parallel_threshold);
    info!(
        workers = builder.workers(),
        threshold = config.debug.parallel_threshold,
        enabled = config.debug.draw_bounds,
        "bounds drawing configured"
    );

    let mut world = create_world();
    world.insert_resource(grid);
    world.insert_resource(BoundsDrawSettings {
        enabled: config.debug.draw_bounds,
        color: config.debug.bounds_color,
        builder,
    });

    let mut schedules = EngineSchedules::new();
    register_face_snapping(&mut world, &mut schedules);
    register_bounds_drawing(&mut world, &mut schedules);
    schedules.initialize_all(&mut world);

    let walkers = scene::spawn_grid_entities(&mut world);
    let meshes = match scene::spawn_meshes(&mut world) {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to bake mesh bounds: {e}");
            std::process::exit(1);
        }
    };
    info!(walkers, meshes, "scene spawned");

    for _ in 0..args.frames {
        schedules.run(&mut world, FRAME_DT);
        let frame = world.resource::<FrameCounter>().frame;
        let lines = world.resource::<DebugLineBuffer>().len();
        info!(frame, lines, "frame complete");
    }

    scene::report_grid(&mut world);
    let drawn = scene::loaded_mesh_count(&mut world);
    let lines = world.resource::<DebugLineBuffer>().len();
    info!(drawn, lines, "cube grid demo finished");
}
