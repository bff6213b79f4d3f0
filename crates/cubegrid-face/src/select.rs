//! Nearest-face selection and reprojection into face-local coordinates.

use glam::Vec3;

use crate::{CubeFace, FaceFrames};

/// Result of a nearest-face scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceHit {
    /// The face whose plane is closest.
    pub face: CubeFace,
    /// Absolute distance from the point to that face's plane.
    /// `f32::INFINITY` if no plane distance was finite.
    pub distance: f32,
}

/// Finds the face whose plane is closest to `position`.
///
/// Planes are scanned in face-index order and compared with a strict `<`
/// against a running minimum that starts at `f32::INFINITY`, so the first
/// face wins ties. A non-finite position never beats the sentinel and
/// resolves to [`CubeFace::PosX`].
pub fn nearest_face(position: Vec3, frames: &FaceFrames) -> FaceHit {
    let mut best = FaceHit {
        face: CubeFace::PosX,
        distance: f32::INFINITY,
    };
    for (face, plane) in CubeFace::ALL.iter().zip(frames.planes()) {
        let dist = plane.signed_distance(position).abs();
        if dist < best.distance {
            best = FaceHit {
                face: *face,
                distance: dist,
            };
        }
    }
    best
}

/// Selects the nearest face and returns `position` in that face's local frame.
pub fn snap_to_face(position: Vec3, frames: &FaceFrames) -> (CubeFace, Vec3) {
    let hit = nearest_face(position, frames);
    (hit.face, frames.to_face_local(hit.face, position))
}
