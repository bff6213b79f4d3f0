//! Debug line storage handed to the renderer each frame.

use bevy_ecs::prelude::*;
use glam::Vec3;

/// A single debug line segment with color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugLine {
    /// Start point in world space.
    pub start: Vec3,
    /// End point in world space.
    pub end: Vec3,
    /// RGBA color.
    pub color: [f32; 4],
}

/// Destination for debug line draw calls.
pub trait LineSink {
    /// Draw one line segment.
    fn line(&mut self, start: Vec3, end: Vec3, color: [f32; 4]);
}

impl LineSink for Vec<DebugLine> {
    fn line(&mut self, start: Vec3, end: Vec3, color: [f32; 4]) {
        self.push(DebugLine { start, end, color });
    }
}

/// Buffer of debug line segments to be drawn this frame.
#[derive(Resource, Clone, Debug, Default)]
pub struct DebugLineBuffer {
    /// Line segments accumulated during the current frame.
    pub lines: Vec<DebugLine>,
}

impl DebugLineBuffer {
    /// Append lines built elsewhere, preserving their order.
    pub fn extend(&mut self, lines: impl IntoIterator<Item = DebugLine>) {
        self.lines.extend(lines);
    }

    /// Clear all lines (call at start of each frame).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSink for DebugLineBuffer {
    fn line(&mut self, start: Vec3, end: Vec3, color: [f32; 4]) {
        self.lines.line(start, end, color);
    }
}

/// Empties [`DebugLineBuffer`].
///
/// **Stage:** PreUpdate.
pub fn clear_debug_lines(mut buffer: ResMut<DebugLineBuffer>) {
    buffer.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_collects_and_clears() {
        let mut buffer = DebugLineBuffer::default();
        buffer.line(Vec3::ZERO, Vec3::X, [1.0; 4]);
        buffer.line(Vec3::X, Vec3::Y, [0.5; 4]);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.lines[1].end, Vec3::Y);

        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut buffer = DebugLineBuffer::default();
        let mut built = Vec::new();
        for i in 0..4 {
            built.line(Vec3::splat(i as f32), Vec3::ZERO, [1.0; 4]);
        }
        buffer.extend(built);
        let starts: Vec<f32> = buffer.lines.iter().map(|l| l.start.x).collect();
        assert_eq!(starts, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
