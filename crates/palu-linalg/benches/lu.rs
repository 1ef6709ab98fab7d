use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use palu_linalg::{factorize, solve, Matrix, Vector};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_system(rng: &mut StdRng, n: usize) -> (Matrix, Vector) {
    let mut a = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            a[(i, j)] = rng.gen_range(-1.0..1.0);
        }
        a[(i, i)] += n as f64;
    }
    let b = Vector::from_vec((0..n).map(|_| rng.gen_range(-1.0..1.0)).collect());
    (a, b)
}

fn bench_lu(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("pivoted_lu");
    for n in [8, 32, 128] {
        let (a, b) = random_system(rng, n);
        group.bench_with_input(BenchmarkId::new("factorize", n), &a, |bench, a| {
            bench.iter(|| factorize(black_box(a)))
        });
        group.bench_with_input(BenchmarkId::new("solve", n), &(a, b), |bench, (a, b)| {
            bench.iter(|| solve(black_box(a), black_box(b)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lu);
criterion_main!(benches);
