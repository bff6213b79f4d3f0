//! ECS world setup, schedule definitions, shared components, and deferred
//! structural changes for the cube grid samples.
//!
//! Provides the [`World`](bevy_ecs::world::World) factory and the
//! [`EngineSchedules`] runner that drives one frame.

mod components;
mod schedule;
mod system_ordering;
mod tag_queue;
mod time;
mod world;

pub use components::{Name, Translation};
pub use schedule::{EngineSchedule, EngineSchedules};
pub use system_ordering::{PreRenderSet, UpdateSet, configure_ordering};
pub use tag_queue::{TagQueue, apply_tag_queue};
pub use time::{FrameCounter, advance_frame};
pub use world::{create_world, register_core_resources};
