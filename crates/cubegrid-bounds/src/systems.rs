//! Per-frame bounding-box drawing systems.

use bevy_ecs::prelude::*;
use cubegrid_ecs::{EngineSchedule, EngineSchedules, PreRenderSet, Translation};
use glam::Vec3;

use crate::{
    BoundsCache, DebugLineBuffer, MeshBounds, ParallelLineBuilder, clear_debug_lines, draw_bounds,
};

/// Settings for [`draw_mesh_bounds`].
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct BoundsDrawSettings {
    /// Master toggle.
    pub enabled: bool,
    /// RGBA line color.
    pub color: [f32; 4],
    /// How the per-entity work is split across threads.
    pub builder: ParallelLineBuilder,
}

impl Default for BoundsDrawSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            color: [1.0, 1.0, 1.0, 1.0],
            builder: ParallelLineBuilder::default(),
        }
    }
}

/// Draws the bounding box of every entity with loaded [`MeshBounds`] at its
/// [`Translation`]. Entities whose bounds are absent contribute nothing.
///
/// Inputs are read-only; per-entity line lists are built in parallel and
/// appended to [`DebugLineBuffer`] in query order.
///
/// **Stage:** PreRender, [`PreRenderSet::DebugDraw`].
pub fn draw_mesh_bounds(
    settings: Res<BoundsDrawSettings>,
    query: Query<(&MeshBounds, &Translation)>,
    mut buffer: ResMut<DebugLineBuffer>,
) {
    let snapshot: Vec<(&MeshBounds, Vec3)> = query
        .iter()
        .map(|(bounds, translation)| (bounds, translation.0))
        .collect();

    let color = settings.color;
    let lines = settings
        .builder
        .build(&snapshot, |(bounds, offset), out| {
            draw_bounds(out, bounds, *offset, color)
        });

    tracing::trace!(entities = snapshot.len(), lines = lines.len(), "drew mesh bounds");
    buffer.extend(lines);
}

/// Registers bounds drawing: the line buffer is cleared in `PreUpdate` and
/// refilled in `PreRender`.
///
/// Drawing runs only while [`BoundsDrawSettings::enabled`] is set and at
/// least one entity carries [`MeshBounds`]. Resources already present in
/// `world` are kept.
pub fn register_bounds_drawing(world: &mut World, schedules: &mut EngineSchedules) {
    world.init_resource::<DebugLineBuffer>();
    world.init_resource::<BoundsDrawSettings>();
    world.init_resource::<BoundsCache>();

    schedules.add_system(EngineSchedule::PreUpdate, clear_debug_lines);
    schedules.add_system(
        EngineSchedule::PreRender,
        draw_mesh_bounds
            .in_set(PreRenderSet::DebugDraw)
            .run_if(any_with_component::<MeshBounds>)
            .run_if(|settings: Res<BoundsDrawSettings>| settings.enabled),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::BoundsBlob;
    use cubegrid_ecs::create_world;

    fn setup() -> (World, EngineSchedules) {
        let mut world = create_world();
        let mut schedules = EngineSchedules::new();
        register_bounds_drawing(&mut world, &mut schedules);
        (world, schedules)
    }

    fn unit_blob() -> Arc<BoundsBlob> {
        Arc::new(BoundsBlob {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        })
    }

    #[test]
    fn test_each_loaded_entity_draws_twelve_lines() {
        let (mut world, mut schedules) = setup();
        let blob = unit_blob();
        world.spawn((MeshBounds::loaded(Arc::clone(&blob)), Translation::default()));
        world.spawn((MeshBounds::loaded(blob), Translation::new(5.0, 0.0, 0.0)));

        schedules.run(&mut world, 0.0);

        assert_eq!(world.resource::<DebugLineBuffer>().len(), 24);
    }

    #[test]
    fn test_unloaded_bounds_draw_nothing() {
        let (mut world, mut schedules) = setup();
        world.spawn((MeshBounds::unloaded(), Translation::default()));

        schedules.run(&mut world, 0.0);

        assert!(world.resource::<DebugLineBuffer>().is_empty());
    }

    #[test]
    fn test_buffer_is_rebuilt_each_frame() {
        let (mut world, mut schedules) = setup();
        world.spawn((MeshBounds::loaded(unit_blob()), Translation::default()));

        for _ in 0..3 {
            schedules.run(&mut world, 0.0);
        }
        assert_eq!(world.resource::<DebugLineBuffer>().len(), 12);
    }

    #[test]
    fn test_disabled_settings_skip_drawing() {
        let (mut world, mut schedules) = setup();
        world.resource_mut::<BoundsDrawSettings>().enabled = false;
        world.spawn((MeshBounds::loaded(unit_blob()), Translation::default()));

        schedules.run(&mut world, 0.0);

        assert!(world.resource::<DebugLineBuffer>().is_empty());
    }

    #[test]
    fn test_lines_are_offset_by_translation() {
        let (mut world, mut schedules) = setup();
        world.spawn((MeshBounds::loaded(unit_blob()), Translation::new(0.0, 10.0, 0.0)));

        schedules.run(&mut world, 0.0);

        let buffer = world.resource::<DebugLineBuffer>();
        assert!(buffer.lines.iter().all(|l| l.start.y >= 10.0 && l.end.y <= 11.0));
    }

    #[test]
    fn test_entity_without_translation_is_not_drawn() {
        let (mut world, mut schedules) = setup();
        world.spawn(MeshBounds::loaded(unit_blob()));

        schedules.run(&mut world, 0.0);

        assert!(world.resource::<DebugLineBuffer>().is_empty());
    }
}
