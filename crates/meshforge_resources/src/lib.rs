//! CPU-side mesh data definitions, independent of any GPU implementation:
//! - [`MeshBuffer`]: columnar vertex attributes, triangle list, submeshes
//! - [`Attribute`]: one versioned data column
//! - [`BoundingBox`]: axis-aligned bounds
//!
//! Normal and tangent generation live next to the buffer (`shading`).

pub mod geometry;
mod shading;

pub use geometry::{Attribute, BoundingBox, MeshBuffer, SubMesh};
