use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use meshforge_core::errors::{IndexOwner, MeshError, Result};
use meshforge_core::version_tracker::{ChangeTracker, MutGuard};

/// A typed column of vertex (or index) data.
///
/// The data lives in a plain `Vec<T>`; every mutation goes through the
/// attribute so the [`ChangeTracker`] stays in sync with the contents.
#[derive(Debug, Clone)]
pub struct Attribute<T> {
    data: Vec<T>,
    tracker: ChangeTracker,
}

impl<T> Default for Attribute<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            tracker: ChangeTracker::new(),
        }
    }
}

impl<T> From<Vec<T>> for Attribute<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> Attribute<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            tracker: ChangeTracker::new(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Mutable access; the version is bumped when the guard is dropped.
    pub fn write(&mut self) -> MutGuard<'_, Vec<T>> {
        MutGuard::new(&mut self.data, &mut self.tracker)
    }

    /// Mutable access that leaves the version alone. Callers batching
    /// several edits follow up with [`mark_dirty`](Self::mark_dirty).
    pub fn write_untracked(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Replaces the whole column.
    pub fn set(&mut self, data: Vec<T>) {
        self.data = data;
        self.tracker.changed();
    }

    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            self.data.clear();
            self.tracker.changed();
        }
    }

    /// Forces a re-upload without touching the data.
    pub fn mark_dirty(&mut self) {
        self.tracker.changed();
    }

    pub fn version(&self) -> u64 {
        self.tracker.version()
    }
}

impl<T: bytemuck::Pod> Attribute<T> {
    /// Raw bytes for the upload side.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Smallest box containing every point, `None` for an empty slice.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }
}

/// A secondary triangle list over the parent mesh's vertex arrays.
#[derive(Debug, Clone, Default)]
pub struct SubMesh {
    pub name: String,
    pub indices: Attribute<u32>,
}

impl SubMesh {
    pub fn new(name: &str, indices: Vec<u32>) -> Self {
        Self {
            name: name.to_string(),
            indices: Attribute::new(indices),
        }
    }
}

/// CPU-side mesh data: columnar vertex attributes, a triangle list and
/// optional submeshes that share the same vertices.
///
/// Optional attributes are either empty or hold exactly one element per
/// position. Skin IDs and skin weights come in pairs.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    pub name: String,

    pub positions: Attribute<Vec3>,
    pub normals: Attribute<Vec3>,
    pub tangents: Attribute<Vec3>,
    pub uvs: Attribute<Vec2>,

    /// Four bone indices per vertex.
    pub skin_ids: Attribute<[u32; 4]>,
    /// Three bone weights per vertex; the fourth is implied.
    pub skin_weights: Attribute<[f32; 3]>,

    pub indices: Attribute<u32>,
    pub submeshes: Vec<SubMesh>,

    bounding_box: Option<BoundingBox>,
}

impl MeshBuffer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_tangents(&self) -> bool {
        !self.tangents.is_empty()
    }

    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    pub fn has_skin(&self) -> bool {
        !self.skin_ids.is_empty() && !self.skin_weights.is_empty()
    }

    pub fn add_submesh(&mut self, submesh: SubMesh) -> usize {
        self.submeshes.push(submesh);
        self.submeshes.len() - 1
    }

    /// Skin IDs and weights must be present together.
    pub fn check_skin(&self) -> Result<()> {
        let has_ids = !self.skin_ids.is_empty();
        let has_weights = !self.skin_weights.is_empty();
        if has_ids != has_weights {
            return Err(MeshError::InconsistentSkin { has_ids, has_weights });
        }
        Ok(())
    }

    /// Checks every buffer invariant: attribute lengths, skin pairing and
    /// index ranges (mesh and submeshes).
    pub fn validate(&self) -> Result<()> {
        let expected = self.vertex_count();

        let lengths = [
            ("normal", self.normals.len()),
            ("tangent", self.tangents.len()),
            ("uv", self.uvs.len()),
            ("skin_ids", self.skin_ids.len()),
            ("skin_weights", self.skin_weights.len()),
        ];
        for (attribute, actual) in lengths {
            if actual != 0 && actual != expected {
                return Err(MeshError::AttributeLength { attribute, expected, actual });
            }
        }

        self.check_skin()?;

        let owners = std::iter::once((IndexOwner::Mesh, &self.indices)).chain(
            self.submeshes
                .iter()
                .enumerate()
                .map(|(i, sub)| (IndexOwner::SubMesh(i), &sub.indices)),
        );
        for (owner, indices) in owners {
            if let Some(&index) = indices.as_slice().iter().find(|&&i| i as usize >= expected) {
                return Err(MeshError::IndexOutOfRange {
                    owner,
                    index,
                    vertex_count: expected,
                });
            }
        }

        Ok(())
    }

    /// Recomputes the AABB from the current positions.
    pub fn compute_bounding_box(&mut self) -> Option<BoundingBox> {
        self.bounding_box = BoundingBox::from_points(self.positions.as_slice());
        self.bounding_box
    }

    /// Last computed AABB; `None` until [`compute_bounding_box`](Self::compute_bounding_box) runs.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box
    }

    /// Marks every present attribute and index buffer as needing a re-upload.
    pub fn mark_dirty(&mut self) {
        self.positions.mark_dirty();
        if self.has_normals() {
            self.normals.mark_dirty();
        }
        if self.has_tangents() {
            self.tangents.mark_dirty();
        }
        if self.has_uvs() {
            self.uvs.mark_dirty();
        }
        if self.has_skin() {
            self.skin_ids.mark_dirty();
            self.skin_weights.mark_dirty();
        }
        self.indices.mark_dirty();
        for sub in &mut self.submeshes {
            sub.indices.mark_dirty();
        }
    }

    /// One-line summary used by the debug logs.
    pub fn stats(&self) -> String {
        format!(
            "{} [vtx: {} tris: {}]",
            self.name,
            self.vertex_count(),
            self.triangle_count()
        )
    }
}
