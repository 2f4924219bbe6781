use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curvecore::field::FieldElement;
use curvecore::group::Group;
use curvecore::scalar::Scalar;

fn bench_ladder(c: &mut Criterion) {
    let g = Group::m383();
    let x = FieldElement::from_u64(12, g.curve().field);
    let k = Scalar::from_u64(0xdead_beef_cafe_1234, g.curve().field.bits);

    c.bench_function("ladder_mul_x_m383", |bencher| {
        bencher.iter(|| g.mul_x(&black_box(k), &black_box(x)));
    });
}

criterion_group!(benches, bench_ladder);
criterion_main!(benches);
