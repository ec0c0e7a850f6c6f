//! Criterion benchmarks for warpath-dtw: full alignment vs. rolling distance, banded and not.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use warpath_dtw::{Dtw, Sequence};

fn make_sine_sequence(n: usize, dims: usize, offset: f64) -> Sequence {
    let data: Vec<f64> = (0..n * dims)
        .map(|k| ((k / dims) as f64 * 0.1 + (k % dims) as f64).sin() + offset)
        .collect();
    Sequence::from_flat(data, dims).unwrap()
}

fn dtw_for(band: Option<usize>) -> Dtw {
    match band {
        None => Dtw::new(),
        Some(r) => Dtw::with_sakoe_chiba(r),
    }
}

fn bench_align(c: &mut Criterion) {
    let lengths = [64usize, 256, 1024];
    let bands: &[(Option<usize>, &str)] = &[
        (None, "unconstrained"),
        (Some(2), "band_r2"),
        (Some(10), "band_r10"),
    ];

    let mut group = c.benchmark_group("dtw_align");

    for &len in &lengths {
        for &(band, band_label) in bands {
            let id = BenchmarkId::new(format!("len{len}"), band_label);
            let a = make_sine_sequence(len, 1, 0.0);
            let b = make_sine_sequence(len, 1, 1.0);
            let dtw = dtw_for(band);

            group.bench_with_input(id, &(a, b, dtw), |bencher, (a, b, dtw)| {
                bencher.iter(|| dtw.align(a.as_view(), b.as_view()).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtw_distance");

    for &dims in &[1usize, 3] {
        for &(band, band_label) in &[(None, "unconstrained"), (Some(10), "band_r10")] {
            let id = BenchmarkId::new(format!("len512_dims{dims}"), band_label);
            let a = make_sine_sequence(512, dims, 0.0);
            let b = make_sine_sequence(512, dims, 0.5);
            let dtw = dtw_for(band);

            group.bench_with_input(id, &(a, b, dtw), |bencher, (a, b, dtw)| {
                bencher.iter(|| dtw.distance(a.as_view(), b.as_view()).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_align, bench_distance);
criterion_main!(benches);
