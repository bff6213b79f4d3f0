//! Components shared by the grid and debug-draw crates.

use bevy_ecs::prelude::*;
use glam::Vec3;

/// Entity position. World space until a system reprojects it into some
/// local frame (e.g. a cube face).
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Translation(pub Vec3);

impl Translation {
    /// Creates a new [`Translation`] from f32 coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}

/// Human-readable debug name, used in log messages only.
#[derive(Component, Clone, Debug, PartialEq, Eq, Default)]
pub struct Name(pub String);

impl Name {
    /// Creates a new [`Name`] from anything that converts to `String`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
