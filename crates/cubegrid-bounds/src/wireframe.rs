//! Box wireframes from a min/max corner pair.

use cubegrid_math::Aabb3;
use glam::Vec3;

use crate::{LineSink, MeshBounds};

/// A line segment as a pair of endpoints.
pub type LineSegment = (Vec3, Vec3);

/// Corner-index pairs of the 12 box edges, indexing [`Aabb3::corners`].
///
/// Order: the min-z face (two X edges, two Y edges), the max-z face in the
/// same pattern, then the four Z edges.
pub const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (0, 2),
    (1, 3),
    (4, 5),
    (6, 7),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// The 12 edges of the box spanned by `min` and `max`, translated by `offset`.
///
/// The corners are used as given; an inverted pair still yields 12 edges.
pub fn bounding_box_segments(min: Vec3, max: Vec3, offset: Vec3) -> [LineSegment; 12] {
    let corners = Aabb3 { min, max }.corners().map(|corner| corner + offset);
    BOX_EDGES.map(|(a, b)| (corners[a], corners[b]))
}

/// Draws the wireframe of `bounds` at `offset`. Does nothing when the
/// bounds are not loaded.
pub fn draw_bounds(sink: &mut impl LineSink, bounds: &MeshBounds, offset: Vec3, color: [f32; 4]) {
    let Some(blob) = bounds.blob.as_deref() else {
        return;
    };
    for (start, end) in bounding_box_segments(blob.min, blob.max, offset) {
        sink.line(start, end, color);
    }
}
