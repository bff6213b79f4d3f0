//! The fixed set of six face frames describing a cube.

use cubegrid_math::{Plane, RigidFrame};
use glam::{Mat4, Vec3};

use crate::CubeFace;

/// Errors raised while building a [`FaceFrames`] set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FaceFrameError {
    /// A face's local-to-world matrix has no inverse.
    #[error("face {face:?} has a singular local-to-world transform")]
    Singular { face: CubeFace },

    /// The cube half extent must be finite and positive.
    #[error("invalid cube half extent {0}")]
    InvalidHalfExtent(f32),

    /// A face needs at least one grid cell per edge.
    #[error("cells per face must be non-zero")]
    InvalidCellCount,
}

/// Six rigid transforms, one per [`CubeFace`], indexed by face index.
///
/// Each frame's local **Y** axis is the face's outward normal and its
/// origin lies on the face plane, so the face plane is `local y = 0`.
/// Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceFrames {
    frames: [RigidFrame; 6],
    planes: [Plane; 6],
}

impl FaceFrames {
    /// Frames for an axis-aligned cube centred on the origin whose faces
    /// lie `half_extent` away from the centre.
    ///
    /// Face `f` maps local X, Y and Z to `f.tangent()`, `f.normal()` and
    /// `f.bitangent()`, with its origin at the face centre.
    pub fn cube(half_extent: f32) -> Result<Self, FaceFrameError> {
        if !half_extent.is_finite() || half_extent <= 0.0 {
            return Err(FaceFrameError::InvalidHalfExtent(half_extent));
        }
        Self::build(|face| {
            RigidFrame::from_axes(
                face.tangent(),
                face.normal(),
                face.bitangent(),
                face.normal() * half_extent,
            )
        })
    }

    /// Wraps six arbitrary local-to-world matrices, deriving the inverses.
    pub fn from_local_to_world(matrices: [Mat4; 6]) -> Result<Self, FaceFrameError> {
        Self::build(|face| RigidFrame::from_local_to_world(matrices[face.index()]))
    }

    fn build(
        mut frame_for: impl FnMut(CubeFace) -> Option<RigidFrame>,
    ) -> Result<Self, FaceFrameError> {
        let mut frames = [RigidFrame::IDENTITY; 6];
        for face in CubeFace::ALL {
            frames[face.index()] = frame_for(face).ok_or(FaceFrameError::Singular { face })?;
        }
        let planes = frames.map(|frame| frame.plane());
        Ok(Self { frames, planes })
    }

    /// The frame of one face.
    #[inline]
    pub fn frame(&self, face: CubeFace) -> &RigidFrame {
        &self.frames[face.index()]
    }

    /// All planes in face-index order.
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Transforms a world-space point into the given face's local frame.
    #[inline]
    pub fn to_face_local(&self, face: CubeFace, world: Vec3) -> Vec3 {
        self.frame(face).to_local(world)
    }

    /// Transforms a face-local point back into world space.
    #[inline]
    pub fn to_world(&self, face: CubeFace, local: Vec3) -> Vec3 {
        self.frame(face).to_world(local)
    }
}
