//! Builds each primitive, shades it and logs what came out.
//!
//! ```text
//! cargo run -p primitive_report -- [weld_settings.json]
//! ```

use std::path::Path;

use anyhow::Context;
use meshforge::prelude::*;

fn load_settings(path: Option<&Path>) -> anyhow::Result<WeldSettings> {
    let Some(path) = path else {
        return Ok(WeldSettings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn report(mesh: &MeshBuffer) {
    match mesh.bounding_box() {
        Some(bb) => log::info!("{} bounds {} .. {}", mesh.stats(), bb.min, bb.max),
        None => log::info!("{} (empty)", mesh.stats()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = std::env::args().nth(1);
    let settings = load_settings(settings_path.as_deref().map(Path::new))?;
    log::info!("weld epsilon {}", settings.epsilon);

    let mut quad = create_quad("quad", Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
    quad.compute_vertex_normals();
    quad.compute_vertex_tangents();
    report(&quad);

    let mut cube = create_cube("cube", Vec3::NEG_ONE, Vec3::ONE);
    cube.compute_vertex_normals();
    report(&cube);

    let mut ico = create_ico_sphere("ico_sphere", &IcoSphereOptions::default());
    ico.compute_vertex_normals();
    report(&ico);

    let ring_meshes = [
        create_sphere("sphere", &SphereOptions::default()),
        create_cylinder("cylinder", &CylinderOptions::default()),
        create_cylinder(
            "cone",
            &CylinderOptions {
                top_radius: 0.0,
                ..Default::default()
            },
        ),
    ];
    for mesh in ring_meshes {
        let mut mesh = mesh.context("ring primitive rejected its default options")?;
        mesh.compute_vertex_normals();
        report(&mesh);
    }

    let mut soup = split_vertices(&cube);
    report(&soup);
    let welded = try_weld_vertices(&mut soup, &settings)?;
    log::info!(
        "{}: welded {} -> {} vertices",
        soup.name,
        welded.vertices_before,
        welded.vertices_after
    );

    let matrix = Mat4::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_4),
        Vec3::new(0.0, 3.0, 0.0),
    );
    transform_mesh(&mut ico, &matrix, true);
    report(&ico);

    Ok(())
}
