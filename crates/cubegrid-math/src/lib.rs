//! Box, plane, and rigid-frame math shared by the cube grid and debug-draw crates.

mod aabb;
mod frame;
mod plane;

pub use aabb::Aabb3;
pub use frame::RigidFrame;
pub use plane::Plane;
