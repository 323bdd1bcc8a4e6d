//! Mesh generation and processing on top of [`meshforge_resources::MeshBuffer`]:
//! - [`primitives`]: quad, cube, icosphere, UV sphere, cylinder/cone and the
//!   shared unit meshes
//! - [`weld`]: tolerance-based vertex deduplication
//! - [`transform`]: in-place affine transforms
//! - [`settings`]: welding configuration

pub mod primitives;
pub mod settings;
pub mod transform;
pub mod weld;

pub use primitives::{
    CubeOptions, CylinderOptions, IcoSphereOptions, QuadOptions, SphereOptions, create_cube,
    create_cylinder, create_ico_sphere, create_quad, create_sphere, unit_cone, unit_cube,
    unit_cylinder, unit_ico_sphere, unit_quad, unit_sphere,
};
pub use settings::{DEFAULT_WELD_EPSILON, REFERENCE_PLANE, WeldSettings};
pub use transform::transform_mesh;
pub use weld::{
    Candidates, Replacement, SpatialIndex, VertexWelder, WeldPlan, WeldReport, split_vertices,
    try_weld_vertices, weld_vertices,
};
