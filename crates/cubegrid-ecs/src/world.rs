//! World factory function and core resource registration.

use bevy_ecs::prelude::*;

use crate::FrameCounter;

/// Registers the core resources into the given world with default values.
///
/// Grid and debug-draw resources are inserted by their own crates.
pub fn register_core_resources(world: &mut World) {
    world.insert_resource(FrameCounter::default());
}

/// Creates an ECS world with all core resources pre-inserted.
pub fn create_world() -> World {
    let mut world = World::new();
    register_core_resources(&mut world);
    world
}
