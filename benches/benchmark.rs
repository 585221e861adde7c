use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vec3::Double3;

fn benchmark_dot(c: &mut Criterion)
{
    let a = Double3::new(0.5, 1.5, 2.5);
    let b = Double3::new(3.0, 4.0, 5.0);

    c.bench_function("dot", |bench| bench.iter(|| black_box(a).dot(&black_box(b))));
}

fn benchmark_magnitude(c: &mut Criterion)
{
    let a = Double3::new(3.0, 4.0, 12.0);

    c.bench_function("magnitude", |bench| bench.iter(|| black_box(a).magnitude()));
}

criterion_group!(benches, benchmark_dot, benchmark_magnitude);
criterion_main!(benches);
