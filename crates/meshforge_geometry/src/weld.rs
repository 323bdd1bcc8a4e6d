//! Tolerant vertex welding.
//!
//! Procedural generators emit vertices per face or per ring, so the same
//! corner shows up several times. Welding merges vertices whose position and
//! every present attribute agree within `epsilon`, then rewrites the index
//! buffer and every submesh index buffer to point at the survivors.
//!
//! Tolerance matching rules out an exact hash. Instead every vertex is keyed
//! by its signed distance to a fixed reference plane and the keys are sorted;
//! a neighbour query is a binary search plus a short linear scan over the
//! `[key - ε, key + ε]` window, with the true Euclidean distance as the final
//! test. The window is widened by the rounding error of the key itself, so
//! coordinates far from the origin still find their duplicates.
//!
//! The pass is greedy: vertices are visited in their original order and each
//! one joins the first already-unique candidate that matches. The result is
//! deterministic for a given input order but is not a minimum vertex count.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use meshforge_core::errors::Result;
use meshforge_resources::{Attribute, MeshBuffer, SubMesh};

use crate::settings::WeldSettings;

/// Outcome of a welding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeldReport {
    pub vertices_before: usize,
    pub vertices_after: usize,
}

impl WeldReport {
    pub fn removed(&self) -> usize {
        self.vertices_before - self.vertices_after
    }
}

/// Where an original vertex ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// The vertex was kept and is unique vertex `n`.
    Unique(u32),
    /// The vertex was merged into unique vertex `n`.
    Replaced(u32),
}

impl Replacement {
    /// Index of the unique vertex, whichever way it was reached.
    #[inline]
    pub fn target(self) -> u32 {
        match self {
            Replacement::Unique(u) | Replacement::Replaced(u) => u,
        }
    }
}

/// Which optional channels take part in the comparison.
#[derive(Debug, Clone, Copy)]
struct Channels {
    normal: bool,
    tangent: bool,
    uv: bool,
    skin: bool,
}

impl Channels {
    fn of(mesh: &MeshBuffer) -> Self {
        Self {
            normal: mesh.has_normals(),
            tangent: mesh.has_tangents(),
            uv: mesh.has_uvs(),
            skin: mesh.has_skin(),
        }
    }
}

/// All data of one vertex, gathered from the columnar arrays.
/// Absent channels stay zero.
#[derive(Debug, Clone, Copy, Default)]
struct WeldVertex {
    position: Vec3,
    normal: Vec3,
    tangent: Vec3,
    uv: Vec2,
    ids: [u32; 4],
    weights: [f32; 3],
}

impl WeldVertex {
    fn same_weights(&self, other: &WeldVertex, epsilon: f32) -> bool {
        self.weights
            .iter()
            .zip(other.weights.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    fn same_ids(&self, other: &WeldVertex) -> bool {
        self.ids == other.ids
    }
}

/// Neighbour indices returned by a spatial query.
pub type Candidates = SmallVec<[u32; 16]>;

#[derive(Debug, Clone, Copy)]
struct SpatialEntry {
    index: u32,
    position: Vec3,
    key: f32,
}

/// Vertices sorted by their distance to the reference plane.
pub struct SpatialIndex {
    plane: Vec3,
    entries: Vec<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new(positions: &[Vec3], plane_normal: Vec3) -> Self {
        let mut entries: Vec<SpatialEntry> = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| SpatialEntry {
                index: i as u32,
                position,
                key: plane_normal.dot(position),
            })
            .collect();
        entries.sort_by(|a, b| a.key.total_cmp(&b.key));

        Self {
            plane: plane_normal,
            entries,
        }
    }

    /// Collects, in key order, the indices of every vertex within `radius`
    /// of `position`. `out` is cleared first.
    pub fn find_neighbors(&self, position: Vec3, radius: f32, out: &mut Candidates) {
        out.clear();

        let key = self.plane.dot(position);
        // Keys carry the rounding error of the dot product, which grows with
        // the coordinates; a bare `radius` window collapses to `key` once
        // the key's ulp exceeds it.
        let slack = position.abs().element_sum() * 8.0 * f32::EPSILON;
        let pad = radius.max(0.0) + slack;
        let (min_key, max_key) = (key - pad, key + pad);

        let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) else {
            return;
        };
        if max_key < first.key || min_key > last.key {
            return;
        }

        let start = self.entries.partition_point(|e| e.key < min_key);
        let radius_sq = radius * radius;

        for entry in &self.entries[start..] {
            if entry.key > max_key {
                break;
            }
            if entry.position.distance_squared(position) <= radius_sq {
                out.push(entry.index);
            }
        }
    }
}

/// One welding pass over a borrowed mesh.
///
/// [`resolve`](Self::resolve) decides the replacement of every vertex without
/// touching the mesh; the returned [`WeldPlan`] then rewrites it.
pub struct VertexWelder<'a> {
    mesh: &'a MeshBuffer,
    epsilon: f32,
    channels: Channels,
    spatial: SpatialIndex,
    replacements: Vec<Option<Replacement>>,
    uniques: Vec<WeldVertex>,
}

impl<'a> VertexWelder<'a> {
    /// Fails when the buffer does not pass [`MeshBuffer::validate`]: short
    /// attributes, unpaired skin data or indices past the vertex count.
    pub fn new(mesh: &'a MeshBuffer, settings: &WeldSettings) -> Result<Self> {
        mesh.validate()?;

        let vertex_count = mesh.vertex_count();
        Ok(Self {
            mesh,
            epsilon: settings.epsilon,
            channels: Channels::of(mesh),
            spatial: SpatialIndex::new(mesh.positions.as_slice(), settings.plane_normal()),
            replacements: vec![None; vertex_count],
            uniques: Vec::with_capacity(vertex_count),
        })
    }

    fn vertex(&self, i: usize) -> WeldVertex {
        let mesh = self.mesh;
        let read3 = |attr: &Attribute<Vec3>| attr.get(i).copied().unwrap_or_default();

        let mut vtx = WeldVertex {
            position: read3(&mesh.positions),
            ..Default::default()
        };
        if self.channels.normal {
            vtx.normal = read3(&mesh.normals);
        }
        if self.channels.tangent {
            vtx.tangent = read3(&mesh.tangents);
        }
        if self.channels.uv {
            vtx.uv = mesh.uvs.get(i).copied().unwrap_or_default();
        }
        if self.channels.skin {
            vtx.ids = mesh.skin_ids.get(i).copied().unwrap_or_default();
            vtx.weights = mesh.skin_weights.get(i).copied().unwrap_or_default();
        }
        vtx
    }

    /// Attribute test between a unique vertex and a positional candidate.
    fn matches(&self, unique: &WeldVertex, vtx: &WeldVertex) -> bool {
        let eps = self.epsilon;
        let eps_sq = eps * eps;

        if self.channels.normal && unique.normal.distance_squared(vtx.normal) > eps_sq {
            return false;
        }
        if self.channels.tangent && unique.tangent.distance_squared(vtx.tangent) > eps_sq {
            return false;
        }
        if self.channels.uv && unique.uv.distance_squared(vtx.uv) > eps_sq {
            return false;
        }
        // Either matching weights or matching bone IDs is enough.
        if self.channels.skin && !unique.same_weights(vtx, eps) && !unique.same_ids(vtx) {
            return false;
        }
        true
    }

    pub fn resolve(mut self) -> WeldPlan {
        let mut found = Candidates::new();

        for i in 0..self.replacements.len() {
            let vtx = self.vertex(i);
            self.spatial.find_neighbors(vtx.position, self.epsilon, &mut found);

            // Unresolved candidates and already-merged ones are skipped.
            let matched = found.iter().find_map(|&c| match self.replacements[c as usize] {
                Some(Replacement::Unique(u)) if self.matches(&self.uniques[u as usize], &vtx) => {
                    Some(u)
                }
                _ => None,
            });

            self.replacements[i] = Some(match matched {
                Some(u) => Replacement::Replaced(u),
                None => {
                    let u = self.uniques.len() as u32;
                    self.uniques.push(vtx);
                    Replacement::Unique(u)
                }
            });
        }

        WeldPlan {
            channels: self.channels,
            replacements: self.replacements.into_iter().flatten().collect(),
            uniques: self.uniques,
        }
    }
}

/// Replacement table and surviving vertices of a resolved pass.
pub struct WeldPlan {
    channels: Channels,
    replacements: Vec<Replacement>,
    uniques: Vec<WeldVertex>,
}

impl WeldPlan {
    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn unique_count(&self) -> usize {
        self.uniques.len()
    }

    /// Compacts the attributes to the unique vertices and remaps every index
    /// buffer of `mesh`.
    pub fn apply(self, mesh: &mut MeshBuffer) -> WeldReport {
        let before = mesh.vertex_count();
        let uniques = &self.uniques;

        mesh.positions.set(uniques.iter().map(|v| v.position).collect());
        if self.channels.normal {
            mesh.normals.set(uniques.iter().map(|v| v.normal).collect());
        }
        if self.channels.tangent {
            mesh.tangents.set(uniques.iter().map(|v| v.tangent).collect());
        }
        if self.channels.uv {
            mesh.uvs.set(uniques.iter().map(|v| v.uv).collect());
        }
        if self.channels.skin {
            mesh.skin_ids.set(uniques.iter().map(|v| v.ids).collect());
            mesh.skin_weights.set(uniques.iter().map(|v| v.weights).collect());
        }

        remap_indices(&mut mesh.indices, &self.replacements);
        for sub in &mut mesh.submeshes {
            remap_indices(&mut sub.indices, &self.replacements);
        }

        mesh.compute_bounding_box();

        WeldReport {
            vertices_before: before,
            vertices_after: uniques.len(),
        }
    }
}

/// Indices were range-checked by [`VertexWelder::new`].
fn remap_indices(indices: &mut Attribute<u32>, table: &[Replacement]) {
    let mut data = indices.write();
    for index in data.iter_mut() {
        *index = table[*index as usize].target();
    }
}

/// Welds `mesh` in place.
///
/// # Panics
///
/// Panics when the buffer is malformed (skin IDs without skin weights or the
/// other way around, short attributes, out-of-range indices): that is an
/// upstream bug and welding would produce a corrupt mesh. Use
/// [`try_weld_vertices`] to get the error instead.
pub fn weld_vertices(mesh: &mut MeshBuffer, settings: &WeldSettings) -> WeldReport {
    match try_weld_vertices(mesh, settings) {
        Ok(report) => report,
        Err(err) => panic!("{}: {err}", mesh.name),
    }
}

/// Welds `mesh` in place, reporting a malformed buffer as an error. The mesh
/// is left untouched on error.
pub fn try_weld_vertices(mesh: &mut MeshBuffer, settings: &WeldSettings) -> Result<WeldReport> {
    let plan = VertexWelder::new(mesh, settings)?.resolve();
    let report = plan.apply(mesh);

    log::debug!(
        "{} (welded {} -> {})",
        mesh.stats(),
        report.vertices_before,
        report.vertices_after
    );

    Ok(report)
}

/// The inverse of welding: every index gets its own copy of the vertex, so
/// no corner is shared. Submesh triangles get their own copies after the
/// main triangle list. Indices past the vertex count read as zeroed vertices.
pub fn split_vertices(mesh: &MeshBuffer) -> MeshBuffer {
    let mut order = mesh.indices.as_slice().to_vec();
    let mut submeshes = Vec::with_capacity(mesh.submeshes.len());
    for sub in &mesh.submeshes {
        let start = order.len() as u32;
        order.extend_from_slice(sub.indices.as_slice());
        submeshes.push(SubMesh::new(&sub.name, (start..order.len() as u32).collect()));
    }

    let mut split = MeshBuffer::new(&format!("{}_split", mesh.name));
    split.positions.set(gather(&mesh.positions, &order));
    if mesh.has_normals() {
        split.normals.set(gather(&mesh.normals, &order));
    }
    if mesh.has_tangents() {
        split.tangents.set(gather(&mesh.tangents, &order));
    }
    if mesh.has_uvs() {
        split.uvs.set(gather(&mesh.uvs, &order));
    }
    if !mesh.skin_ids.is_empty() {
        split.skin_ids.set(gather(&mesh.skin_ids, &order));
    }
    if !mesh.skin_weights.is_empty() {
        split.skin_weights.set(gather(&mesh.skin_weights, &order));
    }
    split.indices.set((0..mesh.indices.len() as u32).collect());
    split.submeshes = submeshes;

    split.compute_bounding_box();
    split
}

fn gather<T: Copy + Default>(attr: &Attribute<T>, order: &[u32]) -> Vec<T> {
    order
        .iter()
        .map(|&i| attr.get(i as usize).copied().unwrap_or_default())
        .collect()
}
