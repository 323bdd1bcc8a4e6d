use glam::Vec3;
use rustc_hash::FxHashMap;

use meshforge_resources::MeshBuffer;

use super::finish;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcoSphereOptions {
    pub radius: f32,
    /// Number of subdivision rounds; each one quadruples the triangle count.
    pub level: u32,
}

impl Default for IcoSphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            level: 3,
        }
    }
}

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Vertex storage for the subdivision: every vertex lands on the sphere and
/// each edge is split at most once.
struct MidpointCache {
    radius: f32,
    positions: Vec<Vec3>,
    midpoints: FxHashMap<u64, u32>,
}

impl MidpointCache {
    fn new(radius: f32, level: u32) -> Self {
        let triangles = 20usize << (2 * level);
        Self {
            radius,
            positions: Vec::with_capacity(triangles / 2 + 2),
            midpoints: FxHashMap::default(),
        }
    }

    fn add_vertex(&mut self, p: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(p * (self.radius / p.length()));
        index
    }

    /// Index of the (projected) midpoint of edge `a`-`b`, created on first use.
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = edge_key(a, b);
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }

        let mid = (self.positions[a as usize] + self.positions[b as usize]) * 0.5;
        let index = self.add_vertex(mid);
        self.midpoints.insert(key, index);
        index
    }
}

/// Order-independent edge key: smaller index in the upper 32 bits.
fn edge_key(a: u32, b: u32) -> u64 {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    (u64::from(lo) << 32) | u64::from(hi)
}

/// Creates a geodesic sphere by subdividing an icosahedron `level` times.
///
/// The result has `20 * 4^level` triangles and `10 * 4^level + 2` vertices,
/// all at distance `radius` from the origin. Shared edges share their
/// midpoint, so the mesh needs no welding.
pub fn create_ico_sphere(name: &str, options: &IcoSphereOptions) -> MeshBuffer {
    let mut cache = MidpointCache::new(options.radius, options.level);
    for p in icosahedron_vertices() {
        cache.add_vertex(p);
    }

    let mut faces = ICOSAHEDRON_FACES.to_vec();

    for _ in 0..options.level {
        let mut subdivided = Vec::with_capacity(faces.len() * 4);
        for &[i1, i2, i3] in &faces {
            let a = cache.midpoint(i1, i2);
            let b = cache.midpoint(i2, i3);
            let c = cache.midpoint(i3, i1);

            subdivided.push([i1, a, c]);
            subdivided.push([i2, b, a]);
            subdivided.push([i3, c, b]);
            subdivided.push([a, b, c]);
        }
        faces = subdivided;
    }

    let mut mesh = MeshBuffer::new(name);
    mesh.positions.set(cache.positions);
    mesh.indices.set(faces.into_iter().flatten().collect());

    finish(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_is_symmetric() {
        assert_eq!(edge_key(3, 9), edge_key(9, 3));
        assert_eq!(edge_key(1, 2), (1u64 << 32) | 2);
        assert_ne!(edge_key(1, 2), edge_key(2, 3));
    }

    #[test]
    fn midpoint_is_shared_and_projected() {
        let mut cache = MidpointCache::new(2.0, 0);
        let a = cache.add_vertex(Vec3::X);
        let b = cache.add_vertex(Vec3::Y);

        let m = cache.midpoint(a, b);
        assert_eq!(cache.midpoint(b, a), m);
        assert_eq!(cache.positions.len(), 3);
        assert!((cache.positions[m as usize].length() - 2.0).abs() < 1e-6);
    }
}
