use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curvecore::curves;
use curvecore::field::FieldElement;

fn bench_field(c: &mut Criterion) {
    let p = curves::e521_field();
    let a = FieldElement::from_u64(123_456_789, p);
    let b = FieldElement::from_u64(987_654_321, p);

    c.bench_function("field_mul_e521", |bencher| {
        bencher.iter(|| black_box(a).mul(&black_box(b)));
    });

    c.bench_function("field_square_e521", |bencher| {
        bencher.iter(|| black_box(a).square());
    });

    c.bench_function("field_invert_e521", |bencher| {
        bencher.iter(|| black_box(a).invert());
    });
}

criterion_group!(benches, bench_field);
criterion_main!(benches);
