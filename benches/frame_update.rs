use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ocean_explorer::batch::InstanceBatches;
use ocean_explorer::geometry::MeshLibrary;
use ocean_explorer::scene::{FrameContext, OceanScene};
use ocean_explorer::OceanConfig;

fn scene_with(bubbles: usize) -> OceanScene {
    OceanScene::new(&OceanConfig {
        seed: Some(42),
        bubble_count: bubbles,
        ..OceanConfig::default()
    })
}

fn bench_scene_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_update");

    for bubbles in [50, 500, 5000] {
        let mut scene = scene_with(bubbles);
        let mut frame = 0u32;
        group.bench_with_input(BenchmarkId::from_parameter(bubbles), &bubbles, |b, _| {
            b.iter(|| {
                frame = frame.wrapping_add(1);
                let time = frame as f32 / 60.0;
                scene.update(black_box(&FrameContext::at(time, (frame % 6000) as f32)));
            });
        });
    }

    group.finish();
}

fn bench_instance_batching(c: &mut Criterion) {
    let scene = scene_with(50);
    let mut batches = InstanceBatches::new();

    c.bench_function("instance_batching", |b| {
        b.iter(|| {
            batches.fill(black_box(&scene));
            black_box(batches.instances().len())
        });
    });
}

fn bench_mesh_library(c: &mut Criterion) {
    c.bench_function("mesh_library_build", |b| {
        b.iter(|| black_box(MeshLibrary::build()));
    });
}

criterion_group!(
    benches,
    bench_scene_update,
    bench_instance_batching,
    bench_mesh_library
);
criterion_main!(benches);
