//! Data-parallel line building over a read-only snapshot.
//!
//! The snapshot is split into contiguous chunks, one per worker. Each
//! worker fills its own line list; the lists travel back over a channel
//! tagged with their chunk index and are concatenated in chunk order, so
//! the output matches a serial pass item for item.

use crossbeam_channel::unbounded;

use crate::DebugLine;

/// Splits line building across scoped worker threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelLineBuilder {
    workers: usize,
    threshold: usize,
}

impl ParallelLineBuilder {
    /// A builder using at most `workers` threads. Snapshots with fewer than
    /// `threshold` items are drawn on the calling thread.
    pub fn new(workers: usize, threshold: usize) -> Self {
        Self {
            workers: workers.max(1),
            threshold,
        }
    }

    /// One worker per CPU core.
    pub fn with_threshold(threshold: usize) -> Self {
        Self::new(num_cpus::get(), threshold)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `draw` for every item and returns all lines in item order.
    pub fn build<T, F>(&self, items: &[T], draw: F) -> Vec<DebugLine>
    where
        T: Sync,
        F: Fn(&T, &mut Vec<DebugLine>) + Sync,
    {
        if items.is_empty() {
            return Vec::new();
        }
        if self.workers == 1 || items.len() < self.threshold {
            return draw_chunk(items, &draw);
        }

        let chunk_len = items.len().div_ceil(self.workers);
        let (sender, receiver) = unbounded::<(usize, Vec<DebugLine>)>();
        let draw = &draw;

        std::thread::scope(|scope| {
            for (index, chunk) in items.chunks(chunk_len).enumerate() {
                let worker_sender = sender.clone();
                let spawned = std::thread::Builder::new()
                    .name("bounds-draw-worker".into())
                    .spawn_scoped(scope, move || {
                        let _ = worker_sender.send((index, draw_chunk(chunk, draw)));
                    });
                if let Err(err) = spawned {
                    tracing::warn!(%err, "failed to spawn draw worker, drawing inline");
                    let _ = sender.send((index, draw_chunk(chunk, draw)));
                }
            }
        });
        drop(sender);

        let mut parts: Vec<(usize, Vec<DebugLine>)> = receiver.try_iter().collect();
        parts.sort_unstable_by_key(|(index, _)| *index);
        parts.into_iter().flat_map(|(_, lines)| lines).collect()
    }
}

impl Default for ParallelLineBuilder {
    fn default() -> Self {
        Self::with_threshold(256)
    }
}

fn draw_chunk<T, F>(items: &[T], draw: &F) -> Vec<DebugLine>
where
    F: Fn(&T, &mut Vec<DebugLine>),
{
    let mut lines = Vec::with_capacity(items.len() * 12);
    for item in items {
        draw(item, &mut lines);
    }
    lines
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::LineSink;

    fn marker_lines(item: &u32, out: &mut Vec<DebugLine>) {
        for k in 0..(*item % 3) {
            out.line(Vec3::splat(*item as f32), Vec3::splat(k as f32), [1.0; 4]);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let items: Vec<u32> = (0..1000).collect();
        let serial = ParallelLineBuilder::new(1, 0).build(&items, marker_lines);
        let parallel = ParallelLineBuilder::new(4, 0).build(&items, marker_lines);
        assert_eq!(serial, parallel);
        assert_eq!(serial.len(), items.iter().map(|i| (i % 3) as usize).sum::<usize>());
    }

    #[test]
    fn test_more_workers_than_items() {
        let items = [2u32, 5];
        let lines = ParallelLineBuilder::new(16, 0).build(&items, marker_lines);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].start, Vec3::splat(2.0));
        assert_eq!(lines[3].start, Vec3::splat(5.0));
    }

    #[test]
    fn test_below_threshold_runs_inline() {
        let items: Vec<u32> = (0..10).collect();
        let builder = ParallelLineBuilder::new(8, 100);
        let caller = std::thread::current().id();
        let lines = builder.build(&items, |item, out| {
            assert_eq!(std::thread::current().id(), caller);
            marker_lines(item, out);
        });
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_empty_snapshot() {
        let items: Vec<u32> = Vec::new();
        assert!(ParallelLineBuilder::new(4, 0).build(&items, marker_lines).is_empty());
    }

    #[test]
    fn test_zero_workers_clamped() {
        assert_eq!(ParallelLineBuilder::new(0, 0).workers(), 1);
    }
}
