//! Grid entity components and the shared cube grid resource.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::{CubeFace, FaceFrameError, FaceFrames};

/// Integer cell coordinates on a face grid.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridCoordinates {
    pub x: i32,
    pub y: i32,
}

impl GridCoordinates {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Heading of a grid entity within its face, stored as one byte.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum GridDirection {
    /// Towards +y.
    #[default]
    North = 0,
    /// Towards -y.
    South = 1,
    /// Towards -x.
    West = 2,
    /// Towards +x.
    East = 3,
}

/// Face assignment tag. Present exactly once on every grid entity that has
/// been snapped; absent on entities still waiting for a face.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OnCubeFace(pub u8);

impl OnCubeFace {
    /// The tagged face. `None` if the stored index is out of range.
    pub fn face(self) -> Option<CubeFace> {
        CubeFace::from_index(self.0 as usize)
    }
}

impl From<CubeFace> for OnCubeFace {
    fn from(face: CubeFace) -> Self {
        Self(face as u8)
    }
}

/// Cell layout of every face: `cells_per_face` square cells per edge,
/// spanning `[-half_extent, half_extent]` on local X and Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub half_extent: f32,
    pub cells_per_face: u32,
}

impl GridLayout {
    /// Edge length of one cell.
    pub fn cell_size(&self) -> f32 {
        2.0 * self.half_extent / self.cells_per_face as f32
    }

    /// Face-local center of a cell (local Y is 0, on the face plane).
    pub fn cell_center(&self, coords: GridCoordinates) -> Vec3 {
        let cell = self.cell_size();
        Vec3::new(
            (coords.x as f32 + 0.5) * cell - self.half_extent,
            0.0,
            (coords.y as f32 + 0.5) * cell - self.half_extent,
        )
    }

    /// The cell containing a face-local point, or `None` outside the face.
    pub fn cell_at(&self, local: Vec3) -> Option<GridCoordinates> {
        let cell = self.cell_size();
        let x = ((local.x + self.half_extent) / cell).floor();
        let y = ((local.z + self.half_extent) / cell).floor();
        let range = 0.0..self.cells_per_face as f32;
        (range.contains(&x) && range.contains(&y)).then(|| GridCoordinates::new(x as i32, y as i32))
    }
}

/// The shared cube grid: face frames plus cell layout.
///
/// Systems that snap entities onto faces only run while this resource exists.
#[derive(Resource, Clone, Debug)]
pub struct CubeGridFaces {
    pub frames: FaceFrames,
    pub layout: GridLayout,
}

impl CubeGridFaces {
    /// An origin-centred cube grid.
    pub fn cube(half_extent: f32, cells_per_face: u32) -> Result<Self, FaceFrameError> {
        if cells_per_face == 0 {
            return Err(FaceFrameError::InvalidCellCount);
        }
        Ok(Self {
            frames: FaceFrames::cube(half_extent)?,
            layout: GridLayout {
                half_extent,
                cells_per_face,
            },
        })
    }

    /// World-space center of a cell on the given face.
    pub fn cell_to_world(&self, face: CubeFace, coords: GridCoordinates) -> Vec3 {
        self.frames.to_world(face, self.layout.cell_center(coords))
    }
}
