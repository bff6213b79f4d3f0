//! Face identifiers and the canonical per-face basis.

use glam::Vec3;

/// One face of the cube grid, named after the axis its outward normal
/// points along.
///
/// The discriminant is the byte stored in [`OnCubeFace`](crate::OnCubeFace)
/// and the index into [`FaceFrames`](crate::FaceFrames).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl CubeFace {
    /// Faces in index order, the order nearest-face scans them.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face with the given index, or `None` past 5.
    pub fn from_index(index: usize) -> Option<CubeFace> {
        Self::ALL.get(index).copied()
    }

    /// Local X axis of the face frame: the direction of increasing grid `x`.
    #[inline]
    pub fn tangent(self) -> Vec3 {
        self.basis()[0]
    }

    /// Local Y axis of the face frame: the outward normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        self.basis()[1]
    }

    /// Local Z axis of the face frame, `tangent × normal`: the direction of
    /// increasing grid `y`.
    #[inline]
    pub fn bitangent(self) -> Vec3 {
        self.basis()[2]
    }

    fn basis(self) -> [Vec3; 3] {
        match self {
            CubeFace::PosX => [Vec3::NEG_Z, Vec3::X, Vec3::NEG_Y],
            CubeFace::NegX => [Vec3::Z, Vec3::NEG_X, Vec3::NEG_Y],
            CubeFace::PosY => [Vec3::X, Vec3::Y, Vec3::Z],
            CubeFace::NegY => [Vec3::X, Vec3::NEG_Y, Vec3::NEG_Z],
            CubeFace::PosZ => [Vec3::X, Vec3::Z, Vec3::NEG_Y],
            CubeFace::NegZ => [Vec3::NEG_X, Vec3::NEG_Z, Vec3::NEG_Y],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_stored_byte() {
        for (i, face) in CubeFace::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(*face as u8 as usize, i);
            assert_eq!(CubeFace::from_index(i), Some(*face));
        }
        assert_eq!(CubeFace::from_index(6), None);
    }

    #[test]
    fn test_bitangent_completes_right_handed_frame() {
        for face in CubeFace::ALL {
            let expected = face.tangent().cross(face.normal());
            assert_eq!(face.bitangent(), expected, "{face:?}");
            let det = glam::Mat3::from_cols(face.tangent(), face.normal(), face.bitangent())
                .determinant();
            assert_eq!(det, 1.0, "{face:?}");
        }
    }

    #[test]
    fn test_normals_cover_every_axis_direction() {
        let sum: Vec3 = CubeFace::ALL.iter().map(|f| f.normal().abs()).sum();
        assert_eq!(sum, Vec3::splat(2.0));
        for face in CubeFace::ALL {
            assert_eq!(face.tangent().dot(face.normal()), 0.0);
        }
    }
}
