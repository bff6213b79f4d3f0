use glam::Vec3;

/// A plane in Hessian normal form: `dot(n, p) + d = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Plane normal. Distances are in units of its length.
    pub normal: Vec3,
    /// Offset term, `-dot(normal, point_on_plane)`.
    pub d: f32,
}

impl Plane {
    /// Plane through `point` with the given normal.
    pub fn from_normal_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    /// Signed distance from `p` to the plane; positive on the side the
    /// normal points to.
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        p.dot(self.normal) + self.d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_on_plane_has_zero_distance() {
        let plane = Plane::from_normal_point(Vec3::Y, Vec3::new(3.0, 2.0, -7.0));
        assert_eq!(plane.signed_distance(Vec3::new(-100.0, 2.0, 50.0)), 0.0);
    }

    #[test]
    fn test_distance_sign_follows_normal() {
        let plane = Plane::from_normal_point(Vec3::X, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(plane.signed_distance(Vec3::new(4.0, 9.0, 9.0)), 3.0);
        assert_eq!(plane.signed_distance(Vec3::new(-1.0, 0.0, 0.0)), -2.0);
    }

    #[test]
    fn test_d_term() {
        let plane = Plane::from_normal_point(Vec3::NEG_Z, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(plane.d, -2.0);
    }
}
