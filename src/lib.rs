//! # meshforge
//!
//! Procedural mesh generation and vertex welding.
//!
//! - [`MeshBuffer`]: columnar CPU-side mesh data with versioned attributes
//! - primitives: [`create_quad`], [`create_cube`], [`create_ico_sphere`],
//!   [`create_sphere`], [`create_cylinder`] and the shared `unit_*` meshes
//! - [`weld_vertices`]: merges vertices that agree within a tolerance
//! - [`transform_mesh`]: applies a matrix to positions, normals and tangents
//!
//! ```rust,ignore
//! use meshforge::prelude::*;
//!
//! let mut sphere = create_sphere("ball", &SphereOptions::default()).unwrap();
//! sphere.compute_vertex_normals();
//! transform_mesh(&mut sphere, &Mat4::from_scale(Vec3::splat(2.0)), true);
//! ```

pub use meshforge_core as core;
pub use meshforge_geometry as geometry;
pub use meshforge_resources as resources;

pub use meshforge_core::{MeshError, Result};
pub use meshforge_geometry::primitives::{
    CubeOptions, CylinderOptions, IcoSphereOptions, QuadOptions, SphereOptions, create_cube,
    create_cylinder, create_ico_sphere, create_quad, create_sphere, unit_cone, unit_cube,
    unit_cylinder, unit_ico_sphere, unit_quad, unit_sphere,
};
pub use meshforge_geometry::{
    DEFAULT_WELD_EPSILON, REFERENCE_PLANE, WeldReport, WeldSettings, split_vertices,
    transform_mesh, try_weld_vertices, weld_vertices,
};
pub use meshforge_resources::{Attribute, BoundingBox, MeshBuffer, SubMesh};

pub mod prelude {
    pub use crate::{
        BoundingBox, CubeOptions, CylinderOptions, IcoSphereOptions, MeshBuffer, MeshError,
        QuadOptions, SphereOptions, SubMesh, WeldReport, WeldSettings, create_cube,
        create_cylinder, create_ico_sphere, create_quad, create_sphere, split_vertices,
        transform_mesh, try_weld_vertices, weld_vertices,
    };
    pub use glam::{Mat4, Quat, Vec2, Vec3};
}
