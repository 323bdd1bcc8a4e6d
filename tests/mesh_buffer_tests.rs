//! MeshBuffer Tests
//!
//! Tests for:
//! - Bounding box computation from points and on MeshBuffer
//! - Attribute versioning (set, write guard, mark_dirty)
//! - Buffer validation (attribute lengths, skin pairing, index ranges)

use glam::{Vec2, Vec3};

use meshforge::core::{IndexOwner, MeshError};
use meshforge::resources::{Attribute, BoundingBox, MeshBuffer, SubMesh};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn triangle(name: &str) -> MeshBuffer {
    let mut mesh = MeshBuffer::new(name);
    mesh.positions.set(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
    mesh.indices.set(vec![0, 1, 2]);
    mesh
}

// ============================================================================
// BoundingBox Tests
// ============================================================================

#[test]
fn bbox_from_points() {
    let bb = BoundingBox::from_points(&[
        Vec3::new(1.0, -5.0, 0.0),
        Vec3::new(-2.0, 3.0, 4.0),
        Vec3::new(0.5, 0.0, -1.0),
    ])
    .unwrap();
    assert!(vec3_approx(bb.min, Vec3::new(-2.0, -5.0, -1.0)));
    assert!(vec3_approx(bb.max, Vec3::new(1.0, 3.0, 4.0)));

    assert!(BoundingBox::from_points(&[]).is_none());
}

#[test]
fn mesh_bounding_box_is_cached() {
    let mut mesh = triangle("tri");
    assert!(mesh.bounding_box().is_none());

    let bb = mesh.compute_bounding_box().unwrap();
    assert!(vec3_approx(bb.min, Vec3::ZERO));
    assert!(vec3_approx(bb.max, Vec3::new(1.0, 1.0, 0.0)));
    assert_eq!(mesh.bounding_box(), Some(bb));
}

// ============================================================================
// Versioning Tests
// ============================================================================

#[test]
fn attribute_set_bumps_version() {
    let mut attr: Attribute<Vec2> = Attribute::default();
    assert_eq!(attr.version(), 0);

    attr.set(vec![Vec2::ONE]);
    assert_eq!(attr.version(), 1);
    assert_eq!(attr.len(), 1);
}

#[test]
fn attribute_mark_dirty_keeps_data() {
    let mut attr = Attribute::new(vec![1.0_f32, 2.0]);
    attr.mark_dirty();
    assert_eq!(attr.version(), 1);
    assert_eq!(attr.as_slice(), &[1.0, 2.0]);
}

#[test]
fn attribute_untracked_write_keeps_version() {
    let mut attr = Attribute::new(vec![1u32, 2]);
    attr.write_untracked()[1] = 5;
    assert_eq!(attr.version(), 0);
    assert_eq!(attr.as_slice(), &[1, 5]);
}

#[test]
fn mesh_mark_dirty_touches_present_attributes_only() {
    let mut mesh = triangle("tri");
    mesh.add_submesh(SubMesh::new("part", vec![0, 1, 2]));
    let before = (mesh.positions.version(), mesh.indices.version());

    mesh.mark_dirty();

    assert_eq!(mesh.positions.version(), before.0 + 1);
    assert_eq!(mesh.indices.version(), before.1 + 1);
    assert_eq!(mesh.submeshes[0].indices.version(), 1);
    assert_eq!(mesh.normals.version(), 0);
    assert_eq!(mesh.uvs.version(), 0);
}

#[test]
fn mesh_stats_line() {
    let mesh = triangle("tri");
    assert_eq!(mesh.stats(), "tri [vtx: 3 tris: 1]");
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn validate_accepts_well_formed_mesh() {
    let mut mesh = triangle("ok");
    mesh.normals.set(vec![Vec3::Z; 3]);
    mesh.add_submesh(SubMesh::new("part", vec![2, 1, 0]));
    assert_eq!(mesh.validate(), Ok(()));
}

#[test]
fn validate_rejects_short_attribute() {
    let mut mesh = triangle("short");
    mesh.uvs.set(vec![Vec2::ZERO; 2]);
    assert_eq!(
        mesh.validate(),
        Err(MeshError::AttributeLength {
            attribute: "uv",
            expected: 3,
            actual: 2,
        })
    );
}

#[test]
fn validate_rejects_unpaired_skin() {
    let mut mesh = triangle("skin");
    mesh.skin_ids.set(vec![[0, 1, 2, 3]; 3]);
    assert_eq!(
        mesh.validate(),
        Err(MeshError::InconsistentSkin {
            has_ids: true,
            has_weights: false,
        })
    );
    assert!(!mesh.has_skin());
}

#[test]
fn validate_reports_submesh_index_out_of_range() {
    let mut mesh = triangle("range");
    mesh.add_submesh(SubMesh::new("a", vec![0, 1, 2]));
    mesh.add_submesh(SubMesh::new("b", vec![0, 1, 7]));

    let err = mesh.validate().unwrap_err();
    assert_eq!(
        err,
        MeshError::IndexOutOfRange {
            owner: IndexOwner::SubMesh(1),
            index: 7,
            vertex_count: 3,
        }
    );
    assert!(err.to_string().contains("submesh 1"));
}
