use cgmath::Vector3;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use hyperspace::{IntegrationMethod, SimParams, World, constants::PARALLEL_STAGING_CUTOFF};

const PLANET_WHIRL: usize = 3;

fn whirl() -> World<Vector3<f64>> {
    let mut world = World::new(3, SimParams::default()).unwrap();
    assert!(world.load_preset(PLANET_WHIRL));
    world
}

/// A world just below the size at which staging goes parallel.
fn whirl_sequential() -> World<Vector3<f64>> {
    let mut world = whirl();
    let keep: Vec<f64> = world
        .bodies()
        .iter()
        .take(PARALLEL_STAGING_CUTOFF - 1)
        .flat_map(|b| {
            let p = b.position();
            let v = b.velocity();
            [p.x, p.y, p.z, b.mass(), v.x, v.y, v.z]
        })
        .collect();
    world.remove_all_bodies();
    for stats in keep.chunks(7) {
        world.add_body(stats).unwrap();
    }
    world
}

fn bench_step(c: &mut Criterion) {
    for method in IntegrationMethod::ALL {
        c.bench_function(&format!("whirl_parallel_{}", method.name()), |b| {
            b.iter_batched(
                || {
                    let mut world = whirl();
                    world.set_integration_method(method);
                    world
                },
                |mut world| world.step(),
                BatchSize::LargeInput,
            )
        });
    }

    c.bench_function("whirl_sequential_euler", |b| {
        b.iter_batched(whirl_sequential, |mut world| world.step(), BatchSize::LargeInput)
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
