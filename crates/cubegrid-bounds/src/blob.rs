//! Shared, read-only bounding-box blobs and the per-mesh cache.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use cubegrid_math::Aabb3;
use glam::Vec3;
use rustc_hash::FxHashMap;

/// Identifies a mesh asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u64);

/// Errors raised while baking bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// The mesh has no vertices to enclose.
    #[error("mesh {0:?} has no vertices")]
    EmptyMesh(MeshId),
}

/// Precomputed axis-aligned bounds of one mesh, in mesh-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsBlob {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundsBlob {
    /// Bounds enclosing every vertex, or `None` for an empty vertex set.
    pub fn from_points(vertices: &[Vec3]) -> Option<Self> {
        Aabb3::from_points(vertices).map(Self::from)
    }
}

impl From<Aabb3> for BoundsBlob {
    fn from(aabb: Aabb3) -> Self {
        Self {
            min: aabb.min,
            max: aabb.max,
        }
    }
}

/// Reference from an entity to its mesh's bounds.
///
/// `blob` is `None` until the mesh's bounds have been baked; such entities
/// draw nothing.
#[derive(Component, Clone, Debug, Default)]
pub struct MeshBounds {
    pub blob: Option<Arc<BoundsBlob>>,
}

impl MeshBounds {
    /// A reference to loaded bounds.
    pub fn loaded(blob: Arc<BoundsBlob>) -> Self {
        Self { blob: Some(blob) }
    }

    /// A reference whose bounds are not available yet.
    pub fn unloaded() -> Self {
        Self { blob: None }
    }

    /// Returns `true` when the bounds are available.
    pub fn is_loaded(&self) -> bool {
        self.blob.is_some()
    }
}

/// Baked bounds, one shared blob per mesh.
#[derive(Resource, Debug, Default)]
pub struct BoundsCache {
    blobs: FxHashMap<MeshId, Arc<BoundsBlob>>,
}

impl BoundsCache {
    /// Returns the cached blob for `mesh`, baking it from `vertices` on
    /// first use. Later calls ignore `vertices`.
    pub fn bake(
        &mut self,
        mesh: MeshId,
        vertices: &[Vec3],
    ) -> Result<Arc<BoundsBlob>, BoundsError> {
        if let Some(blob) = self.blobs.get(&mesh) {
            return Ok(Arc::clone(blob));
        }
        let blob = BoundsBlob::from_points(vertices).ok_or(BoundsError::EmptyMesh(mesh))?;
        let blob = Arc::new(blob);
        tracing::debug!(?mesh, min = ?blob.min, max = ?blob.max, "baked mesh bounds");
        self.blobs.insert(mesh, Arc::clone(&blob));
        Ok(blob)
    }

    /// The cached blob for `mesh`, if baked.
    pub fn get(&self, mesh: MeshId) -> Option<Arc<BoundsBlob>> {
        self.blobs.get(&mesh).cloned()
    }

    /// A [`MeshBounds`] component for `mesh`: loaded if baked, unloaded otherwise.
    pub fn mesh_bounds(&self, mesh: MeshId) -> MeshBounds {
        MeshBounds { blob: self.get(mesh) }
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
