//! Sample scene: grid entities scattered around the cube and a few meshes
//! with baked bounds.

use bevy_ecs::prelude::*;
use cubegrid_bounds::{BoundsCache, BoundsError, MeshBounds, MeshId};
use cubegrid_ecs::{Name, Translation};
use cubegrid_face::{CubeFace, CubeGridFaces, GridCoordinates, GridDirection, OnCubeFace};
use cubegrid_math::Aabb3;
use glam::Vec3;
use tracing::{debug, info, warn};

const DIRECTIONS: [GridDirection; 4] = [
    GridDirection::North,
    GridDirection::East,
    GridDirection::South,
    GridDirection::West,
];

/// Spawns one grid entity per face at the face's middle cell, lifted off the
/// surface so the snap has something to do. Returns the number spawned.
pub fn spawn_grid_entities(world: &mut World) -> usize {
    let grid = world.resource::<CubeGridFaces>().clone();
    let middle = (grid.layout.cells_per_face / 2) as i32;
    let coords = GridCoordinates::new(middle, middle);

    for (i, face) in CubeFace::ALL.into_iter().enumerate() {
        let position = grid.cell_to_world(face, coords) + face.normal() * 0.25;
        world.spawn((
            Name::new(format!("walker-{face:?}")),
            Translation(position),
            coords,
            DIRECTIONS[i % DIRECTIONS.len()],
        ));
    }
    CubeFace::ALL.len()
}

/// Bakes two meshes, spawns instances of both, and one instance of a mesh
/// that was never baked.
pub fn spawn_meshes(world: &mut World) -> Result<usize, BoundsError> {
    let crate_mesh = MeshId(1);
    let pillar_mesh = MeshId(2);
    let missing_mesh = MeshId(99);

    let mut cache = world.resource_mut::<BoundsCache>();
    cache.bake(crate_mesh, &box_vertices(Vec3::splat(-0.5), Vec3::splat(0.5)))?;
    cache.bake(
        pillar_mesh,
        &box_vertices(Vec3::new(-0.25, 0.0, -0.25), Vec3::new(0.25, 3.0, 0.25)),
    )?;

    let placements = [
        (crate_mesh, Vec3::new(0.0, 0.0, 12.0)),
        (crate_mesh, Vec3::new(2.0, 0.0, 12.0)),
        (pillar_mesh, Vec3::new(-3.0, 0.0, 12.0)),
        (missing_mesh, Vec3::new(5.0, 0.0, 12.0)),
    ];

    for (mesh, offset) in placements {
        let bounds = world.resource::<BoundsCache>().mesh_bounds(mesh);
        if !bounds.is_loaded() {
            debug!(?mesh, "mesh bounds not baked yet");
        }
        world.spawn((Name::new(format!("mesh-{}", mesh.0)), bounds, Translation(offset)));
    }
    Ok(placements.len())
}

/// Logs where every grid entity ended up, and which cell its face-local
/// position falls in.
pub fn report_grid(world: &mut World) {
    let layout = world.resource::<CubeGridFaces>().layout;
    let mut query = world.query::<(&Name, &Translation, &GridCoordinates, Option<&OnCubeFace>)>();
    for (name, translation, coords, tag) in query.iter(world) {
        match tag.and_then(|tag| tag.face()) {
            Some(face) => info!(
                name = %name.0,
                ?face,
                x = coords.x,
                y = coords.y,
                cell = ?layout.cell_at(translation.0),
                local = ?translation.0,
                "grid entity on face"
            ),
            None => warn!(name = %name.0, "grid entity has no face"),
        }
    }
}

/// Counts entities whose bounds are drawn.
pub fn loaded_mesh_count(world: &mut World) -> usize {
    let mut query = world.query::<&MeshBounds>();
    query.iter(world).filter(|b| b.is_loaded()).count()
}

fn box_vertices(min: Vec3, max: Vec3) -> [Vec3; 8] {
    Aabb3 { min, max }.corners()
}
