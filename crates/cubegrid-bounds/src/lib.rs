//! Mesh bounding-box debug drawing.
//!
//! Bounding boxes are baked once per mesh into shared, read-only blobs
//! ([`BoundsCache`]). Every frame, each entity referencing a loaded blob
//! emits a 12-segment wireframe into the [`DebugLineBuffer`]; entities
//! whose blob is absent are skipped silently.

mod blob;
mod lines;
mod parallel;
mod systems;
mod wireframe;

pub use blob::{BoundsBlob, BoundsCache, BoundsError, MeshBounds, MeshId};
pub use lines::{DebugLine, DebugLineBuffer, LineSink, clear_debug_lines};
pub use parallel::ParallelLineBuilder;
pub use systems::{BoundsDrawSettings, draw_mesh_bounds, register_bounds_drawing};
pub use wireframe::{BOX_EDGES, LineSegment, bounding_box_segments, draw_bounds};
