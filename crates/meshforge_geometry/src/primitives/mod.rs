//! Procedural primitives.
//!
//! Every generator returns a [`MeshBuffer`] with positions and a triangle
//! list (plus UVs for the quad), its bounding box already computed. Normals
//! and tangents are left to the caller.

pub mod cube;
pub mod cylinder;
pub mod ico_sphere;
pub mod quad;
mod ring;
pub mod sphere;
pub mod unit;

pub use cube::{CubeOptions, create_cube};
pub use cylinder::{CylinderOptions, create_cylinder};
pub use ico_sphere::{IcoSphereOptions, create_ico_sphere};
pub use quad::{QuadOptions, create_quad};
pub use sphere::{SphereOptions, create_sphere};
pub use unit::{unit_cone, unit_cube, unit_cylinder, unit_ico_sphere, unit_quad, unit_sphere};

use meshforge_resources::MeshBuffer;

/// Shared tail of every generator.
fn finish(mut mesh: MeshBuffer) -> MeshBuffer {
    mesh.compute_bounding_box();
    log::debug!("{}", mesh.stats());
    mesh
}

/// Ring-based primitives need two rings and a triangle per ring edge.
fn check_ring_segments(name: &str, segments_h: u32, segments_v: u32) -> bool {
    if segments_h < 2 || segments_v < 3 {
        log::warn!(
            "{name}: at least 2 horizontal and 3 vertical segments are required (got {segments_h}x{segments_v})"
        );
        return false;
    }
    true
}
