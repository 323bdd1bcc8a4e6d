use glam::Vec3;

use meshforge_resources::MeshBuffer;

use super::finish;

/// Extents of an axis-aligned box. The default is the cube from `-1` to `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeOptions {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for CubeOptions {
    fn default() -> Self {
        Self {
            min: Vec3::NEG_ONE,
            max: Vec3::ONE,
        }
    }
}

// Corner order: front (+Z) face first, then back (-Z), each as
// top-right, top-left, bottom-left, bottom-right.
const FRONT: [u32; 6] = [0, 1, 2, 2, 3, 0];
const BACK: [u32; 6] = [4, 7, 6, 6, 5, 4];
const LEFT: [u32; 6] = [2, 1, 5, 5, 6, 2];
const RIGHT: [u32; 6] = [4, 0, 3, 3, 7, 4];
const TOP: [u32; 6] = [4, 5, 1, 1, 0, 4];
const BOTTOM: [u32; 6] = [2, 6, 7, 7, 3, 2];

/// Creates an 8-vertex box with outward-facing triangles.
///
/// Corners are shared between faces, so normals computed on this mesh are
/// smoothed across the edges. No UVs are generated.
pub fn create_cube(name: &str, min: Vec3, max: Vec3) -> MeshBuffer {
    let mut mesh = MeshBuffer::new(name);

    mesh.positions.set(vec![
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
    ]);

    let indices: Vec<u32> = [FRONT, BACK, LEFT, RIGHT, TOP, BOTTOM].concat();
    mesh.indices.set(indices);

    finish(mesh)
}
