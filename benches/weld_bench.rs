use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use meshforge::{
    IcoSphereOptions, SphereOptions, WeldSettings, create_ico_sphere, create_sphere,
    split_vertices, weld_vertices,
};

// ---------------------------------------------------------------------------
// Welding
// ---------------------------------------------------------------------------

fn bench_weld_ico_soup(c: &mut Criterion) {
    let mut group = c.benchmark_group("weld_ico_soup");
    for level in [2, 4] {
        let soup = split_vertices(&create_ico_sphere(
            "ico",
            &IcoSphereOptions { radius: 1.0, level },
        ));
        group.bench_function(format!("level_{level}"), |b| {
            b.iter_batched(
                || soup.clone(),
                |mut mesh| black_box(weld_vertices(&mut mesh, &WeldSettings::default())),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_weld_shaded_soup(c: &mut Criterion) {
    let ico = create_ico_sphere("ico", &IcoSphereOptions::default());
    let mut soup = split_vertices(&ico);
    // Per-face normals make most candidates fail the attribute test.
    soup.compute_vertex_normals();

    c.bench_function("weld_ico_soup_faceted", |b| {
        b.iter_batched(
            || soup.clone(),
            |mut mesh| black_box(weld_vertices(&mut mesh, &WeldSettings::default())),
            BatchSize::LargeInput,
        );
    });
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

fn bench_create_sphere(c: &mut Criterion) {
    let options = SphereOptions {
        radius: 1.0,
        segments_h: 64,
        segments_v: 128,
    };
    c.bench_function("create_sphere_64x128", |b| {
        b.iter(|| create_sphere("sphere", black_box(&options)));
    });
}

fn bench_create_ico_sphere(c: &mut Criterion) {
    let options = IcoSphereOptions {
        radius: 1.0,
        level: 5,
    };
    c.bench_function("create_ico_sphere_level_5", |b| {
        b.iter(|| create_ico_sphere("ico", black_box(&options)));
    });
}

criterion_group!(
    benches,
    bench_weld_ico_soup,
    bench_weld_shaded_soup,
    bench_create_sphere,
    bench_create_ico_sphere,
);
criterion_main!(benches);
