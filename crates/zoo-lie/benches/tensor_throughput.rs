use criterion::{criterion_group, criterion_main, Criterion};
use zoo_lie::{tensor_decompose, Algebra, Series};

fn bench_tensor(c: &mut Criterion) {
    let a2 = Algebra::new(Series::A, 2).expect("algebra");
    let factors = vec![vec![1, 0], vec![1, 1], vec![0, 1]];
    c.bench_function("su3_triple_product", |b| {
        b.iter(|| {
            let components = tensor_decompose(&a2, &factors).expect("decompose");
            assert!(!components.is_empty());
        });
    });

    let d4 = Algebra::new(Series::D, 4).expect("algebra");
    let spinors = vec![vec![0, 0, 0, 1], vec![0, 0, 1, 0]];
    c.bench_function("so8_spinor_pair", |b| {
        b.iter(|| {
            let components = tensor_decompose(&d4, &spinors).expect("decompose");
            assert!(!components.is_empty());
        });
    });
}

criterion_group!(benches, bench_tensor);
criterion_main!(benches);
