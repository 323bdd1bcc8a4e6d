//! Shared unit-sized primitives.
//!
//! Each mesh is generated on first use, gets its normals computed (and
//! tangents for the UV-mapped quad), then stays alive for the rest of the
//! program behind an [`Arc`].

use std::sync::{Arc, OnceLock};

use meshforge_resources::MeshBuffer;

use super::{
    CubeOptions, CylinderOptions, IcoSphereOptions, QuadOptions, SphereOptions, create_cube,
    create_cylinder, create_ico_sphere, create_quad, create_sphere,
};

fn with_normals(mut mesh: MeshBuffer) -> Arc<MeshBuffer> {
    mesh.compute_vertex_normals();
    Arc::new(mesh)
}

/// Ring primitives only fail on bad segment counts; an empty mesh keeps
/// the accessor total.
fn ring_mesh(name: &str, mesh: Option<MeshBuffer>) -> Arc<MeshBuffer> {
    with_normals(mesh.unwrap_or_else(|| MeshBuffer::new(name)))
}

/// 2×2 quad in the XY plane, facing +Z, with normals and tangents.
pub fn unit_quad() -> Arc<MeshBuffer> {
    static MESH: OnceLock<Arc<MeshBuffer>> = OnceLock::new();
    MESH.get_or_init(|| {
        let QuadOptions { min, max } = QuadOptions::default();
        let mut mesh = create_quad("unit_quad", min, max);
        mesh.compute_vertex_normals();
        mesh.compute_vertex_tangents();
        Arc::new(mesh)
    })
    .clone()
}

/// Cube from `-1` to `1`.
pub fn unit_cube() -> Arc<MeshBuffer> {
    static MESH: OnceLock<Arc<MeshBuffer>> = OnceLock::new();
    MESH.get_or_init(|| {
        let CubeOptions { min, max } = CubeOptions::default();
        with_normals(create_cube("unit_cube", min, max))
    })
    .clone()
}

/// Radius 1, three subdivision levels.
pub fn unit_ico_sphere() -> Arc<MeshBuffer> {
    static MESH: OnceLock<Arc<MeshBuffer>> = OnceLock::new();
    MESH.get_or_init(|| {
        with_normals(create_ico_sphere(
            "unit_ico_sphere",
            &IcoSphereOptions::default(),
        ))
    })
    .clone()
}

/// Radius 1, 16 rings of 32 vertices.
pub fn unit_sphere() -> Arc<MeshBuffer> {
    static MESH: OnceLock<Arc<MeshBuffer>> = OnceLock::new();
    MESH.get_or_init(|| {
        ring_mesh(
            "unit_sphere",
            create_sphere("unit_sphere", &SphereOptions::default()),
        )
    })
    .clone()
}

/// Radius 1, height 2, 32 segments.
pub fn unit_cylinder() -> Arc<MeshBuffer> {
    static MESH: OnceLock<Arc<MeshBuffer>> = OnceLock::new();
    MESH.get_or_init(|| {
        ring_mesh(
            "unit_cylinder",
            create_cylinder("unit_cylinder", &CylinderOptions::default()),
        )
    })
    .clone()
}

/// Apex at `y = 1`, base radius 1 at `y = -1`.
pub fn unit_cone() -> Arc<MeshBuffer> {
    static MESH: OnceLock<Arc<MeshBuffer>> = OnceLock::new();
    MESH.get_or_init(|| {
        let options = CylinderOptions {
            top_radius: 0.0,
            ..Default::default()
        };
        ring_mesh("unit_cone", create_cylinder("unit_cone", &options))
    })
    .clone()
}
