use meshforge_resources::MeshBuffer;

use super::ring::RingBuilder;
use super::{check_ring_segments, finish};
use crate::settings::WeldSettings;
use crate::weld::weld_vertices;

/// Capped cylinder or truncated cone along the Y axis, centred on the
/// origin. A zero `top_radius` or `bottom_radius` gives a cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderOptions {
    pub top_radius: f32,
    pub bottom_radius: f32,
    pub height: f32,
    /// Rings from top to bottom. At least 2.
    pub segments_h: u32,
    /// Vertices per ring. At least 3.
    pub segments_v: u32,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            top_radius: 1.0,
            bottom_radius: 1.0,
            height: 2.0,
            segments_h: 2,
            segments_v: 32,
        }
    }
}

/// Creates a cylinder whose radius and height are interpolated linearly
/// from the top ring to the bottom ring. Both ends are closed by a fan to a
/// centre vertex.
///
/// The mesh is welded only when one radius is zero, collapsing the apex
/// ring into one vertex. Otherwise the ring vertices stay separate from the
/// cap centres and no vertex is duplicated.
///
/// Returns `None` (and logs a warning) when `segments_h < 2` or
/// `segments_v < 3`.
pub fn create_cylinder(name: &str, options: &CylinderOptions) -> Option<MeshBuffer> {
    let CylinderOptions {
        top_radius,
        bottom_radius,
        height,
        segments_h,
        segments_v,
    } = *options;

    if !check_ring_segments(name, segments_h, segments_v) {
        return None;
    }

    let half = height * 0.5;
    let rings_span = (segments_h - 1) as f32;
    let height_step = height / rings_span;
    let radius_step = (top_radius - bottom_radius) / rings_span;

    let mut rings = RingBuilder::new(segments_h, segments_v);

    for h in 0..segments_h {
        let t = h as f32;
        rings.push_ring(top_radius - t * radius_step, half - t * height_step);
        if h == 0 {
            rings.cap_top(half);
        }
    }
    rings.cap_bottom(-half);

    let mut mesh = rings.into_mesh(name);
    #[allow(clippy::float_cmp)]
    let has_apex = top_radius == 0.0 || bottom_radius == 0.0;
    if has_apex {
        weld_vertices(&mut mesh, &WeldSettings::default());
    }

    Some(finish(mesh))
}
