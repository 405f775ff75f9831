use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use math::dft::DFT;
use math::dft::ntt::Table;
use math::modulus::prime::{NttFriendlyPrimes, Prime};

fn forward_inplace(c: &mut Criterion) {
    fn runner(log_n: usize) -> Box<dyn FnMut()> {
        let n: usize = 1 << log_n;
        let q: u64 = NttFriendlyPrimes::new(55, (n << 1) as u64)
            .next()
            .expect("no NTT-friendly prime");
        let table: Table<u64> = Table::new(Prime::new(q), n);
        let mut a: Vec<u64> = (0..n as u64).collect();
        Box::new(move || table.forward_inplace(&mut a))
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("forward_inplace");
    for log_n in 11..16 {
        let mut runner = runner(log_n);
        b.bench_with_input(BenchmarkId::from_parameter(1 << log_n), &log_n, |b, _| {
            b.iter(&mut runner)
        });
    }
}

fn backward_inplace(c: &mut Criterion) {
    fn runner(log_n: usize) -> Box<dyn FnMut()> {
        let n: usize = 1 << log_n;
        let q: u64 = NttFriendlyPrimes::new(55, (n << 1) as u64)
            .next()
            .expect("no NTT-friendly prime");
        let table: Table<u64> = Table::new(Prime::new(q), n);
        let mut a: Vec<u64> = (0..n as u64).collect();
        Box::new(move || table.backward_inplace(&mut a))
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> =
        c.benchmark_group("backward_inplace");
    for log_n in 11..16 {
        let mut runner = runner(log_n);
        b.bench_with_input(BenchmarkId::from_parameter(1 << log_n), &log_n, |b, _| {
            b.iter(&mut runner)
        });
    }
}

criterion_group!(benches, forward_inplace, backward_inplace);
criterion_main!(benches);
