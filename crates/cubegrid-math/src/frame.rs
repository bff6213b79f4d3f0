use glam::{Mat4, Vec3};

use crate::Plane;

/// A rigid local frame: the local-to-world matrix and its cached inverse.
///
/// The local **Y** axis is the frame's "up"; [`RigidFrame::plane`] is the
/// plane through the origin with that axis as normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidFrame {
    pub local_to_world: Mat4,
    pub world_to_local: Mat4,
}

impl RigidFrame {
    /// Frame coincident with world space.
    pub const IDENTITY: RigidFrame = RigidFrame {
        local_to_world: Mat4::IDENTITY,
        world_to_local: Mat4::IDENTITY,
    };

    /// Builds a frame from its basis axes (in world space) and origin.
    ///
    /// Returns `None` when the basis is singular.
    pub fn from_axes(x: Vec3, y: Vec3, z: Vec3, origin: Vec3) -> Option<Self> {
        Self::from_local_to_world(Mat4::from_cols(
            x.extend(0.0),
            y.extend(0.0),
            z.extend(0.0),
            origin.extend(1.0),
        ))
    }

    /// Wraps an arbitrary local-to-world matrix, deriving the inverse.
    ///
    /// Returns `None` when the matrix is not invertible.
    pub fn from_local_to_world(local_to_world: Mat4) -> Option<Self> {
        let det = local_to_world.determinant();
        if !det.is_finite() || det.abs() <= f32::EPSILON {
            return None;
        }
        Some(Self {
            local_to_world,
            world_to_local: local_to_world.inverse(),
        })
    }

    /// Local Y axis in world space (column 1).
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.local_to_world.y_axis.truncate()
    }

    /// Frame origin in world space (column 3).
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.local_to_world.w_axis.truncate()
    }

    /// Plane through the origin, normal to the local Y axis.
    pub fn plane(&self) -> Plane {
        Plane::from_normal_point(self.up(), self.origin())
    }

    /// Transforms a world-space point into this frame.
    #[inline]
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.world_to_local.transform_point3(world)
    }

    /// Transforms a local point back into world space.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(local)
    }
}
