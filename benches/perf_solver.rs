use airlift_dp::{Instance, Planner, Point};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_instance(rng: &mut StdRng, bags: usize, drones: usize) -> Instance {
    let contents: Vec<i64> = (0..bags).map(|_| rng.gen_range(1..=40)).collect();
    let locations: Vec<Point> = (0..bags)
        .map(|_| Point::new(rng.gen_range(0.0..5.0), rng.gen_range(0.0..5.0)))
        .collect();
    let usage: Vec<Vec<i64>> = (0..bags)
        .map(|_| (0..drones).map(|_| rng.gen_range(0..=10)).collect())
        .collect();
    Instance::new(
        Point::new(0.0, 0.0),
        contents,
        locations,
        1.0,
        150,
        Some(usage),
    )
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("airlift_solve");
    for &bags in &[50usize, 100, 200] {
        group.bench_function(format!("bags_{bags}_drones_3"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_instance(&mut rng, bags, 3)
                },
                |instance| Planner::new(instance).solve().lowest_cost(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let solution = Planner::new(random_instance(&mut rng, 200, 3)).solve();
    c.bench_function("airlift_reconstruct_200", |b| {
        b.iter(|| solution.reconstruct().unwrap())
    });
}

criterion_group!(benches, bench_solve, bench_reconstruct);
criterion_main!(benches);
