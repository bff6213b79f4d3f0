//! One-shot snap-to-face systems.

use bevy_ecs::prelude::*;
use cubegrid_ecs::{
    EngineSchedule, EngineSchedules, TagQueue, Translation, UpdateSet, apply_tag_queue,
};

use crate::{CubeGridFaces, GridCoordinates, GridDirection, OnCubeFace, nearest_face};

/// Read pass: every grid entity without a face gets its nearest face
/// resolved and its translation rewritten into that face's local frame.
/// The [`OnCubeFace`] tag is queued, not inserted; [`apply_tag_queue`]
/// performs the structural change.
///
/// **Stage:** Update, [`UpdateSet::SnapToFace`].
pub fn snap_grid_entities_to_faces(
    grid: Res<CubeGridFaces>,
    mut pending: ResMut<TagQueue<OnCubeFace>>,
    mut query: Query<
        (Entity, &mut Translation),
        (
            With<GridDirection>,
            With<GridCoordinates>,
            Without<OnCubeFace>,
        ),
    >,
) {
    for (entity, mut translation) in &mut query {
        let hit = nearest_face(translation.0, &grid.frames);
        translation.0 = grid.frames.to_face_local(hit.face, translation.0);
        pending.enqueue(entity, OnCubeFace::from(hit.face));
        tracing::debug!(?entity, face = ?hit.face, distance = hit.distance, "snapped to cube face");
    }
}

/// Registers face snapping into the `Update` stage.
///
/// The read pass and the tag flush run back to back, so an entity is never
/// seen twice. Both are skipped until a [`CubeGridFaces`] resource exists.
pub fn register_face_snapping(world: &mut World, schedules: &mut EngineSchedules) {
    world.init_resource::<TagQueue<OnCubeFace>>();
    schedules.add_system(
        EngineSchedule::Update,
        (snap_grid_entities_to_faces, apply_tag_queue::<OnCubeFace>)
            .chain()
            .in_set(UpdateSet::SnapToFace)
            .run_if(resource_exists::<CubeGridFaces>),
    );
}
