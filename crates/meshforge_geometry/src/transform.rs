use glam::{Mat4, Vec3};

use meshforge_resources::{Attribute, MeshBuffer};

/// Applies `matrix` to the mesh in place.
///
/// Positions go through the full matrix with `w = 1` and no perspective
/// divide. Normals and tangents only see the upper 3×3 part and are
/// renormalised afterwards; the inverse transpose is not used, so under
/// non-uniform scale they are only approximately perpendicular to the
/// surface.
///
/// The bounding box is recomputed. Attribute versions only move when
/// `update_buffer` is set, so several transforms can be batched before a
/// single re-upload.
pub fn transform_mesh(mesh: &mut MeshBuffer, matrix: &Mat4, update_buffer: bool) {
    for p in mesh.positions.write_untracked().iter_mut() {
        *p = (*matrix * p.extend(1.0)).truncate();
    }

    let has_normals = mesh.has_normals();
    let has_tangents = mesh.has_tangents();

    if has_normals {
        transform_directions(&mut mesh.normals, matrix);
    }
    if has_tangents {
        transform_directions(&mut mesh.tangents, matrix);
    }

    mesh.compute_bounding_box();

    if update_buffer {
        mesh.positions.mark_dirty();
        if has_normals {
            mesh.normals.mark_dirty();
        }
        if has_tangents {
            mesh.tangents.mark_dirty();
        }
    }
}

fn transform_directions(directions: &mut Attribute<Vec3>, matrix: &Mat4) {
    for d in directions.write_untracked().iter_mut() {
        *d = matrix.transform_vector3(*d).normalize_or_zero();
    }
}
