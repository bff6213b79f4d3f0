//! System set definitions and ordering constraints for each stage.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::Schedule;

use crate::EngineSchedule;

/// Sets for systems in the Update stage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum UpdateSet {
    /// Resolve cube faces for newly placed grid entities.
    SnapToFace,
    /// Move grid entities along their direction.
    Movement,
}

/// Sets for systems in the PreRender stage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreRenderSet {
    /// Fill the debug line buffer.
    DebugDraw,
    /// Hand the buffers to the renderer.
    Submit,
}

/// Configure the ordering constraints for one stage's schedule.
pub fn configure_ordering(stage: EngineSchedule, schedule: &mut Schedule) {
    match stage {
        EngineSchedule::Update => {
            schedule.configure_sets(UpdateSet::SnapToFace.before(UpdateSet::Movement));
        }
        EngineSchedule::PreRender => {
            schedule.configure_sets(PreRenderSet::DebugDraw.before(PreRenderSet::Submit));
        }
        EngineSchedule::PreUpdate | EngineSchedule::PostUpdate => {}
    }
}
