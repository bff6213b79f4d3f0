//! Frame counting for the ECS world.

use bevy_ecs::prelude::*;

/// Frame counter and last frame delta, advanced once per
/// [`EngineSchedules::run`](crate::EngineSchedules::run).
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameCounter {
    /// Number of frames started so far.
    pub frame: u64,
    /// Seconds elapsed during the previous frame.
    pub delta: f32,
}

/// Advances [`FrameCounter`]. Runs first in `PreUpdate`.
pub fn advance_frame(world: &mut World, frame_dt: f32) {
    let mut counter = world.get_resource_or_insert_with(FrameCounter::default);
    counter.frame += 1;
    counter.delta = frame_dt;
}
