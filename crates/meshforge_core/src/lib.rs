//! Foundational types shared by the meshforge crates.

pub mod errors;
pub mod version_tracker;

pub use errors::{IndexOwner, MeshError, Result};
pub use version_tracker::{ChangeTracker, MutGuard};
