use std::f32::consts::TAU;

use glam::Vec3;

use meshforge_resources::MeshBuffer;

/// Accumulates horizontal vertex rings around the Y axis and stitches each
/// new ring to the previous one.
///
/// Ring vertices are stored contiguously, so a ring is identified by the
/// index of its first vertex.
pub(super) struct RingBuilder {
    segments: u32,
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    prev: Option<u32>,
}

impl RingBuilder {
    pub(super) fn new(segments_h: u32, segments_v: u32) -> Self {
        let vertex_count = (segments_h * segments_v + 2) as usize;
        let triangle_count = (2 * segments_h * segments_v) as usize;
        Self {
            segments: segments_v,
            positions: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
            prev: None,
        }
    }

    fn next_index(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Index of the `i`-th vertex of the ring starting at `start`, wrapping.
    fn at(&self, start: u32, i: u32) -> u32 {
        start + i % self.segments
    }

    /// Emits a ring and joins it to the previous one with two triangles per
    /// quad. Returns the ring's first index.
    pub(super) fn push_ring(&mut self, radius: f32, height: f32) -> u32 {
        let start = self.next_index();
        let step = TAU / self.segments as f32;

        for v in 0..self.segments {
            let (sin, cos) = (v as f32 * step).sin_cos();
            self.positions.push(Vec3::new(cos * radius, height, sin * radius));
        }

        if let Some(prev) = self.prev {
            for i in 0..self.segments {
                let (p0, p1) = (self.at(prev, i), self.at(prev, i + 1));
                let (c0, c1) = (self.at(start, i), self.at(start, i + 1));
                self.indices.extend_from_slice(&[p0, p1, c1, c1, c0, p0]);
            }
        }

        self.prev = Some(start);
        start
    }

    /// Adds a pole above the most recent ring and fans it in.
    pub(super) fn cap_top(&mut self, height: f32) {
        let Some(ring) = self.prev else { return };
        let pole = self.next_index();
        self.positions.push(Vec3::new(0.0, height, 0.0));

        for i in 0..self.segments {
            let tri = [pole, self.at(ring, i + 1), self.at(ring, i)];
            self.indices.extend_from_slice(&tri);
        }
    }

    /// Adds a pole below the most recent ring and fans it in.
    pub(super) fn cap_bottom(&mut self, height: f32) {
        let Some(ring) = self.prev else { return };
        let pole = self.next_index();
        self.positions.push(Vec3::new(0.0, height, 0.0));

        for i in 0..self.segments {
            let tri = [pole, self.at(ring, i), self.at(ring, i + 1)];
            self.indices.extend_from_slice(&tri);
        }
    }

    pub(super) fn into_mesh(self, name: &str) -> MeshBuffer {
        let mut mesh = MeshBuffer::new(name);
        mesh.positions.set(self.positions);
        mesh.indices.set(self.indices);
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_ring_is_stitched_with_wrap() {
        let mut rings = RingBuilder::new(2, 3);
        let first = rings.push_ring(1.0, 1.0);
        let second = rings.push_ring(1.0, 0.0);
        assert_eq!((first, second), (0, 3));

        let mesh = rings.into_mesh("rings");
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 6);
        // Last quad wraps back to the first vertex of each ring.
        assert_eq!(&mesh.indices.as_slice()[12..], &[2, 0, 3, 3, 5, 2]);
    }

    #[test]
    fn caps_fan_around_pole() {
        let mut rings = RingBuilder::new(2, 4);
        rings.push_ring(1.0, 0.0);
        rings.cap_top(1.0);

        let mesh = rings.into_mesh("cap");
        assert_eq!(mesh.positions.as_slice()[4], Vec3::Y);
        assert_eq!(&mesh.indices.as_slice()[..3], &[4, 1, 0]);
        assert_eq!(&mesh.indices.as_slice()[9..], &[4, 0, 3]);
    }
}
