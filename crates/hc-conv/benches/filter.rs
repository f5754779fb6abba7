use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hc_conv::{filter, kernels};
use hc_matrix::Matrix;

fn build_checker(rows: usize, cols: usize, square: usize) -> Matrix {
    Matrix::from_fn(rows, cols, |i, j| {
        if (i / square + j / square) % 2 == 0 {
            255.0
        } else {
            0.0
        }
    })
}

fn bench_filter(c: &mut Criterion) {
    let img = build_checker(1024, 1280, 64);
    let gaussian = kernels::gaussian5x5();
    let gradient = kernels::gradient_x();

    c.bench_function("filter_gaussian5x5_1024x1280", |b| {
        b.iter(|| {
            let out = filter(black_box(&img), black_box(&gaussian)).expect("valid kernel");
            black_box(out.sum());
        });
    });

    c.bench_function("filter_gradient3x3_1024x1280", |b| {
        b.iter(|| {
            let out = filter(black_box(&img), black_box(&gradient)).expect("valid kernel");
            black_box(out.sum());
        });
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
