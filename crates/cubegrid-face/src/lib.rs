//! Cube grid faces: the six face frames of a cube, nearest-face selection,
//! and the one-shot system that snaps grid entities onto a face.

mod components;
mod cube_face;
mod frames;
mod select;
mod systems;

pub use components::{CubeGridFaces, GridCoordinates, GridDirection, GridLayout, OnCubeFace};
pub use cube_face::CubeFace;
pub use frames::{FaceFrameError, FaceFrames};
pub use select::{FaceHit, nearest_face, snap_to_face};
pub use systems::{register_face_snapping, snap_grid_entities_to_faces};
