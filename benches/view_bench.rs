use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strided1d::{SharedBuffer, StridedView1D};

fn random_buffer(slots: usize) -> SharedBuffer<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    SharedBuffer::from((0..slots).map(|_| rng.gen::<f64>()).collect::<Vec<f64>>())
}

fn bench_to_contiguous(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_contiguous");
    for len in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(len as u64));

        let contiguous = StridedView1D::new(random_buffer(len), len, 1)
            .expect("contiguous view fits its buffer");
        group.bench_with_input(BenchmarkId::new("stride1", len), &len, |b, _| {
            b.iter(|| contiguous.to_contiguous())
        });

        let strided = StridedView1D::new(random_buffer(2 * len), len, 2)
            .expect("stride-2 view fits its buffer");
        group.bench_with_input(BenchmarkId::new("stride2", len), &len, |b, _| {
            b.iter(|| strided.to_contiguous())
        });
    }
    group.finish();
}

fn bench_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign");
    for len in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(len as u64));

        let src = StridedView1D::new(random_buffer(2 * len), len, 2)
            .expect("stride-2 view fits its buffer");
        let mut dst = StridedView1D::from_vec(vec![0.0f64; len]);
        group.bench_with_input(BenchmarkId::new("strided_to_dense", len), &len, |b, _| {
            b.iter(|| {
                dst.assign(&src);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_to_contiguous, bench_assign);
criterion_main!(benches);
