use std::f32::consts::PI;

use meshforge_resources::MeshBuffer;

use super::ring::RingBuilder;
use super::{check_ring_segments, finish};
use crate::settings::WeldSettings;
use crate::weld::weld_vertices;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOptions {
    pub radius: f32,
    /// Latitude rings, poles included. At least 2.
    pub segments_h: u32,
    /// Vertices per ring. At least 3.
    pub segments_v: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments_h: 16,
            segments_v: 32,
        }
    }
}

/// Creates a UV sphere (latitude/longitude grid) around the origin, Y up.
///
/// The first and last rings sit exactly on the poles and collapse into
/// single vertices once the mesh is welded, leaving
/// `segments_v * (segments_h - 2) + 2` vertices at any radius. The pole fans
/// become degenerate triangles; they are kept.
///
/// Returns `None` (and logs a warning) when `segments_h < 2` or
/// `segments_v < 3`.
pub fn create_sphere(name: &str, options: &SphereOptions) -> Option<MeshBuffer> {
    let SphereOptions {
        radius,
        segments_h,
        segments_v,
    } = *options;

    if !check_ring_segments(name, segments_h, segments_v) {
        return None;
    }

    let last = segments_h - 1;
    let mut rings = RingBuilder::new(segments_h, segments_v);

    for h in 0..segments_h {
        let (sin, cos) = latitude(h, last);
        rings.push_ring(sin * radius, cos * radius);
        if h == 0 {
            rings.cap_top(cos * radius);
        }
    }
    rings.cap_bottom(-radius);

    let mut mesh = rings.into_mesh(name);
    weld_vertices(&mut mesh, &WeldSettings::default());

    Some(finish(mesh))
}

/// `sin`/`cos` of ring `h`'s polar angle `h * π / last`.
///
/// The southern half is mirrored from the northern one, so the last ring
/// gets `sin = 0, cos = -1` exactly instead of `sin(π) ≈ -8.7e-8`, which
/// would leave the bottom ring wider than the weld tolerance on large
/// spheres.
fn latitude(h: u32, last: u32) -> (f32, f32) {
    let step = PI / last as f32;
    if 2 * h <= last {
        (h as f32 * step).sin_cos()
    } else {
        let (sin, cos) = ((last - h) as f32 * step).sin_cos();
        (sin, -cos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pole_rings_are_exact() {
        for last in [1, 2, 7, 15] {
            assert_eq!(latitude(0, last), (0.0, 1.0));
            assert_eq!(latitude(last, last), (0.0, -1.0));
        }
    }

    #[test]
    fn latitude_is_symmetric() {
        let (sin_n, cos_n) = latitude(3, 15);
        let (sin_s, cos_s) = latitude(12, 15);
        assert_eq!(sin_n, sin_s);
        assert_eq!(cos_n, -cos_s);
    }
}
