//! Per-vertex normal and tangent generation.

use glam::{Vec2, Vec3};

use crate::geometry::MeshBuffer;

impl MeshBuffer {
    /// Recomputes area-weighted vertex normals from positions and indices.
    ///
    /// Each triangle `(a, b, c)` adds `(b - a) × (c - b)` to its three
    /// vertices; the cross product's length is twice the triangle area, so
    /// larger faces pull harder. A vertex referenced by no triangle (or whose
    /// contributions cancel) ends up with a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        let positions = self.positions.as_slice();
        let vertex_count = positions.len();
        let mut normals = vec![Vec3::ZERO; vertex_count];

        for tri in self.indices.as_slice().chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if ia >= vertex_count || ib >= vertex_count || ic >= vertex_count {
                continue;
            }

            let (a, b, c) = (positions[ia], positions[ib], positions[ic]);
            let face_normal = (b - a).cross(c - b);

            normals[ia] += face_normal;
            normals[ib] += face_normal;
            normals[ic] += face_normal;
        }

        for n in &mut normals {
            *n = n.normalize_or_zero();
        }

        self.normals.set(normals);
    }

    /// Recomputes vertex tangents (direction of increasing U).
    ///
    /// Needs normals and UVs; without them this logs a warning and leaves the
    /// mesh untouched. Triangles with a degenerate UV mapping contribute
    /// nothing.
    pub fn compute_vertex_tangents(&mut self) {
        if !self.has_normals() || !self.has_uvs() {
            log::warn!("{}: normal and UV data is required to compute tangents", self.name);
            return;
        }

        let positions = self.positions.as_slice();
        let uvs = self.uvs.as_slice();
        let vertex_count = positions.len().min(uvs.len());
        let mut tangents = vec![Vec3::ZERO; positions.len()];

        for tri in self.indices.as_slice().chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let tangent = triangle_tangent(
                [positions[i0], positions[i1], positions[i2]],
                [uvs[i0], uvs[i1], uvs[i2]],
            );

            tangents[i0] += tangent;
            tangents[i1] += tangent;
            tangents[i2] += tangent;
        }

        for t in &mut tangents {
            *t = t.normalize_or_zero();
        }

        self.tangents.set(tangents);
    }
}

/// Unnormalised tangent of one triangle; zero when the UV determinant is 0.
fn triangle_tangent(p: [Vec3; 3], uv: [Vec2; 3]) -> Vec3 {
    let dp0 = p[1] - p[0];
    let dp1 = p[2] - p[1];
    let duv0 = uv[1] - uv[0];
    let duv1 = uv[2] - uv[1];

    let cross = duv0.perp_dot(duv1);
    if cross == 0.0 {
        return Vec3::ZERO;
    }

    (dp0 * duv1.y - dp1 * duv0.y) / cross
}
