//! Welding configuration.
//!
//! ```rust,ignore
//! use meshforge_geometry::WeldSettings;
//!
//! // Library default: 1e-5 tolerance, skewed reference plane.
//! let settings = WeldSettings::default();
//!
//! // Looser tolerance for coarse imported data
//! let settings = WeldSettings {
//!     epsilon: 1e-3,
//!     ..Default::default()
//! };
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Default welding tolerance, applied to positions, normals, tangents, UVs
/// and skin weights alike.
pub const DEFAULT_WELD_EPSILON: f32 = 1e-5;

/// Normal (before normalisation) of the plane used to sort vertices for the
/// neighbour search.
///
/// The direction is deliberately skewed against every axis: generated meshes
/// are full of axis-aligned rings and faces, and an axis-aligned plane would
/// give whole rows of vertices the same key.
pub const REFERENCE_PLANE: Vec3 = Vec3::new(0.6, 0.7, -0.4);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeldSettings {
    /// Two values closer than this are treated as equal. Zero merges
    /// exact duplicates only.
    pub epsilon: f32,
    /// Sort-plane normal; normalised before use.
    pub reference_plane: Vec3,
}

impl Default for WeldSettings {
    #[inline]
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_WELD_EPSILON,
            reference_plane: REFERENCE_PLANE,
        }
    }
}

impl WeldSettings {
    #[must_use]
    pub fn with_epsilon(epsilon: f32) -> Self {
        Self {
            epsilon,
            ..Default::default()
        }
    }

    /// Unit sort-plane normal. Falls back to [`REFERENCE_PLANE`] when the
    /// configured vector cannot be normalised.
    #[must_use]
    pub fn plane_normal(&self) -> Vec3 {
        self.reference_plane
            .try_normalize()
            .unwrap_or_else(|| REFERENCE_PLANE.normalize())
    }
}
