//! Error Types
//!
//! This module defines the error types shared by every meshforge crate.
//!
//! # Overview
//!
//! The main error type [`MeshError`] covers the ways a hand-built mesh buffer
//! can violate its invariants:
//! - attribute columns whose length disagrees with the position count
//! - skin IDs without skin weights (or the other way around)
//! - indices that point past the end of the vertex arrays
//!
//! Primitive generation and the geometry passes are total over well-formed
//! input, so these errors only surface from validation entry points.
//!
//! # Usage
//!
//! ```rust,ignore
//! use meshforge_core::errors::{MeshError, Result};
//!
//! fn check(mesh: &MeshBuffer) -> Result<()> {
//!     mesh.validate()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for meshforge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    // ========================================================================
    // Attribute Layout Errors
    // ========================================================================
    /// A per-vertex attribute is present but does not have one element per vertex.
    #[error("Attribute '{attribute}' has {actual} elements, expected {expected}")]
    AttributeLength {
        /// Attribute name (`"normal"`, `"uv"`, ...)
        attribute: &'static str,
        /// Position count of the mesh
        expected: usize,
        /// Element count found in the attribute
        actual: usize,
    },

    /// Skin IDs and skin weights must be present together.
    #[error("Invalid skin info: ids present = {has_ids}, weights present = {has_weights}")]
    InconsistentSkin {
        /// Whether the mesh carries bone indices
        has_ids: bool,
        /// Whether the mesh carries bone weights
        has_weights: bool,
    },

    // ========================================================================
    // Topology Errors
    // ========================================================================
    /// An index references a vertex that does not exist.
    #[error("Index {index} out of range in {owner} (vertex count: {vertex_count})")]
    IndexOutOfRange {
        /// Which index buffer holds the bad value
        owner: IndexOwner,
        /// The offending index value
        index: u32,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },
}

/// Identifies the index buffer an [`MeshError::IndexOutOfRange`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOwner {
    /// The mesh's own index buffer.
    Mesh,
    /// The index buffer of the submesh at this position.
    SubMesh(usize),
}

impl std::fmt::Display for IndexOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexOwner::Mesh => write!(f, "mesh indices"),
            IndexOwner::SubMesh(i) => write!(f, "submesh {i} indices"),
        }
    }
}

/// Alias for `Result<T, MeshError>`.
pub type Result<T> = std::result::Result<T, MeshError>;
