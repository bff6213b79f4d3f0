//! Engine schedule labels and the ordered schedule runner.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{IntoSystemConfigs, ScheduleLabel};

use crate::time::advance_frame;

/// Labels for each execution stage.
///
/// Stages run in the order listed, top to bottom, every frame.
#[derive(ScheduleLabel, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineSchedule {
    /// Frame setup: clear per-frame buffers.
    PreUpdate,
    /// Gameplay logic, including one-shot structural changes.
    Update,
    /// Follow-up work that depends on this frame's structural changes.
    PostUpdate,
    /// Debug drawing and other render preparation.
    PreRender,
}

impl EngineSchedule {
    /// All stages in execution order.
    pub const ALL: [EngineSchedule; 4] = [
        EngineSchedule::PreUpdate,
        EngineSchedule::Update,
        EngineSchedule::PostUpdate,
        EngineSchedule::PreRender,
    ];
}

/// Ordered collection of [`Schedule`]s that drives one frame.
pub struct EngineSchedules {
    schedules: Vec<(EngineSchedule, Schedule)>,
}

impl EngineSchedules {
    /// Create one empty schedule per stage, with set ordering configured.
    pub fn new() -> Self {
        let mut schedules: Vec<(EngineSchedule, Schedule)> = EngineSchedule::ALL
            .into_iter()
            .map(|label| (label, Schedule::new(label)))
            .collect();
        for (label, schedule) in &mut schedules {
            crate::configure_ordering(*label, schedule);
        }
        Self { schedules }
    }

    /// Register a system (or system tuple) into a specific stage.
    pub fn add_system<M>(&mut self, stage: EngineSchedule, system: impl IntoSystemConfigs<M>) {
        self.schedule_mut(stage).add_systems(system);
    }

    /// Run all stages in order for one frame.
    pub fn run(&mut self, world: &mut World, frame_dt: f32) {
        advance_frame(world, frame_dt);
        for (_label, schedule) in &mut self.schedules {
            schedule.run(world);
        }
    }

    /// Returns a mutable reference to the schedule for a given stage.
    pub fn schedule_mut(&mut self, stage: EngineSchedule) -> &mut Schedule {
        let index = EngineSchedule::ALL
            .iter()
            .position(|label| *label == stage)
            .unwrap_or_default();
        &mut self.schedules[index].1
    }

    /// Force-initialize all schedules, validating the dependency graph.
    pub fn initialize_all(&mut self, world: &mut World) {
        for (label, schedule) in &mut self.schedules {
            if let Err(err) = schedule.initialize(world) {
                tracing::error!(stage = ?label, %err, "schedule failed to initialize");
            }
        }
    }
}

impl Default for EngineSchedules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FrameCounter, create_world};

    #[derive(Resource, Default)]
    struct ExecutionLog {
        stages: Vec<&'static str>,
    }

    fn log_system(stage_name: &'static str) -> impl Fn(ResMut<'_, ExecutionLog>) {
        move |mut log: ResMut<'_, ExecutionLog>| {
            log.stages.push(stage_name);
        }
    }

    #[test]
    fn test_schedule_runs_all_stages_in_order() {
        let mut world = create_world();
        world.insert_resource(ExecutionLog::default());

        let mut schedules = EngineSchedules::new();
        // Registered out of order on purpose.
        schedules.add_system(EngineSchedule::PreRender, log_system("PreRender"));
        schedules.add_system(EngineSchedule::Update, log_system("Update"));
        schedules.add_system(EngineSchedule::PreUpdate, log_system("PreUpdate"));
        schedules.add_system(EngineSchedule::PostUpdate, log_system("PostUpdate"));

        schedules.run(&mut world, 1.0 / 60.0);

        let log = world.resource::<ExecutionLog>();
        assert_eq!(log.stages, vec!["PreUpdate", "Update", "PostUpdate", "PreRender"]);
    }

    #[test]
    fn test_run_advances_frame_counter() {
        let mut world = create_world();
        let mut schedules = EngineSchedules::new();

        for _ in 0..3 {
            schedules.run(&mut world, 0.5);
        }

        let counter = world.resource::<FrameCounter>();
        assert_eq!(counter.frame, 3);
        assert_eq!(counter.delta, 0.5);
    }

    #[test]
    fn test_systems_run_every_frame() {
        let mut world = create_world();

        #[derive(Resource, Default)]
        struct Count(u32);
        world.insert_resource(Count::default());

        let mut schedules = EngineSchedules::new();
        schedules.add_system(EngineSchedule::Update, |mut count: ResMut<'_, Count>| {
            count.0 += 1;
        });

        for _ in 0..4 {
            schedules.run(&mut world, 1.0 / 60.0);
        }
        assert_eq!(world.resource::<Count>().0, 4);
    }

    #[test]
    fn test_initialize_all_accepts_empty_schedules() {
        let mut world = create_world();
        let mut schedules = EngineSchedules::new();
        schedules.initialize_all(&mut world);
        schedules.run(&mut world, 0.0);
        assert_eq!(world.resource::<FrameCounter>().frame, 1);
    }
}
