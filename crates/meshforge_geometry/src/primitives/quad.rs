use glam::{Vec2, Vec3};

use meshforge_resources::MeshBuffer;

use super::finish;

/// Extents of a quad. The default is the 2×2 square in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadOptions {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            min: Vec3::new(-1.0, -1.0, 0.0),
            max: Vec3::new(1.0, 1.0, 0.0),
        }
    }
}

/// Creates a UV-mapped quad spanning `min` to `max`.
///
/// ```text
/// 1----0
/// |    |
/// 2----3
/// ```
///
/// The top edge sits at `max.z`, the bottom edge at `min.z`, so a quad with
/// different `z` extents is tilted.
pub fn create_quad(name: &str, min: Vec3, max: Vec3) -> MeshBuffer {
    let mut mesh = MeshBuffer::new(name);

    mesh.positions.set(vec![
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
    ]);
    mesh.uvs.set(vec![
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
    ]);
    mesh.indices.set(vec![0, 1, 2, 2, 3, 0]);

    finish(mesh)
}
