use curvecore::curve::ElligatorDomain;
use curvecore::field::FieldElement;
use curvecore::group::Group;
use curvecore::scalar::Scalar;
use curvecore::{decaf, elligator1, elligator2, point};

#[test]
fn closure_addition_and_doubling_stay_on_curve() {
    let g = Group::curve1174();
    let p = g.base_point();
    let q = p.double(g.curve());
    for candidate in [p.add(&q, g.curve()), q.double(g.curve())] {
        let (x, y) = candidate.to_affine();
        let lhs = g.curve().edwards_a.mul(&x.square()).add(&y.square());
        let rhs = g
            .curve()
            .one()
            .add(&g.curve().edwards_d.mul(&x.square()).mul(&y.square()));
        assert!(lhs.equals(&rhs), "sum/double must satisfy the curve equation");
    }
}

#[test]
fn scalar_homomorphism_k_times_m_times_p() {
    let g = Group::curve1174();
    let p = g.base_point();
    let bits = g.curve().field.bits;
    let k = Scalar::from_u64(3, bits);
    let m = Scalar::from_u64(5, bits);
    let km = Scalar::from_u64(15, bits);

    let left = p.scalar_mul(&m, g.curve()).scalar_mul(&k, g.curve());
    let right = p.scalar_mul(&km, g.curve());
    let (lx, ly) = left.to_affine();
    let (rx, ry) = right.to_affine();
    assert!(lx.equals(&rx) && ly.equals(&ry), "k*(m*P) must equal (k*m)*P");
}

#[test]
fn birational_round_trip_on_m383() {
    let g = Group::m383();
    let p = g.base_point();
    let (u, v) = point::edwards_to_montgomery(g.curve(), &p).expect("base point is not 2-torsion");
    let back = point::montgomery_to_edwards(g.curve(), &u, &v).expect("round trip stays valid");
    let (px, py) = p.to_affine();
    let (bx, by) = back.to_affine();
    assert!(px.equals(&bx) && py.equals(&by), "Montgomery -> Edwards -> Montgomery must be identity");
}

#[test]
fn decaf_round_trip_on_e521_base_point() {
    let g = Group::e521();
    let p = g.base_point();
    let s = g.compress(&p);
    let back = g.from_compressed(&s).expect("base point compresses to a valid encoding");
    assert!(g.compress(&back).equals(&s), "decompress(compress(P)) must re-encode to the same s");
}

#[test]
fn decaf_zero_point_boundary_scenario() {
    // E-521, decompose the zero point (0,1): compress must be the zero
    // byte-string, decompress(0) must return the identity.
    let g = Group::e521();
    let zero = g.zero_point();
    assert!(decaf::compress(g.curve(), &zero).is_zero() != 0);
    let decoded = g.from_compressed(&g.curve().zero()).unwrap();
    assert!(decoded.is_identity());
}

#[test]
fn m383_ladder_boundary_scenario() {
    // M-383 ladder: base point x = 12; mulX(2, G) must match the x-only
    // doubling formula evaluated independently of the ladder's code path.
    let g = Group::m383();
    let x = FieldElement::from_u64(12, g.curve().field);
    let two = Scalar::from_u64(2, g.curve().field.bits);
    let via_ladder = g.mul_x(&two, &x);

    let one = g.curve().one();
    let x2 = x.square();
    let numerator = x2.sub(&one).square();
    let denom = x
        .mul_small(4)
        .mul(&x2.add(&g.curve().montgomery_a.mul(&x)).add(&one));
    let expected = numerator.mul(&denom.invert());
    assert!(via_ladder.equals(&expected));
}

#[test]
fn elligator1_decode_zero_is_identity_boundary_scenario() {
    let g = Group::curve1174();
    assert_eq!(g.curve().elligator, ElligatorDomain::Elligator1);
    let (x, y) = elligator1::decode(g.curve(), &g.curve().zero()).unwrap();
    assert!(x.is_zero() != 0 && y.equals(&g.curve().one()));
}

#[test]
fn elligator2_encode_decode_round_trip_up_to_sign() {
    let g = Group::m383();
    assert_eq!(g.curve().elligator, ElligatorDomain::Elligator2);
    let r = FieldElement::from_u64(9, g.curve().field);
    let (x, y) = elligator2::decode(g.curve(), &r).unwrap();
    let back = elligator2::encode(g.curve(), &x, &y).expect("decoded point must be encodable");
    assert!(back.equals(&r) || back.equals(&r.neg()), "encode must be r or -r");
}

#[test]
fn invalid_compressed_input_is_rejected() {
    // A field element larger than (p-1)/2 must raise InvalidPoint.
    let g = Group::curve1174();
    let p_minus_1 = g.curve().zero().sub(&g.curve().one());
    assert!(g.from_compressed(&p_minus_1).is_err());
}
