use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stacker_partition::{partition, LockMap};

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for segments in [4usize, 16, 64, 256] {
        let locks: LockMap = (0..segments).step_by(4).map(|i| (i, 0.001)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(segments), &segments, |b, &n| {
            b.iter(|| partition(black_box(1.0), n, &locks, Some(12345)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
