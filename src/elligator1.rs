//! Elligator-1 (§4.5): the hash-to-point map for Edwards curves over
//! `p ≡ 3 (mod 4)`.
//!
//! `decode` is defined for every field element except `t = -1`, and its
//! construction guarantees the intermediate square root always sees a
//! quadratic residue — no `legendre` check is needed before taking it,
//! only afterward when deciding `canEncode`.

use crate::curve::CurveParams;
use crate::error::{CoreError, CoreResult};
use crate::field::FieldElement;

/// Maps a field element to a curve point. `t = 0` is the map's removable
/// singularity and is special-cased to the identity, matching the
/// published pre-image of the neutral element.
///
/// # Errors
///
/// Returns [`CoreError::InvalidHashInput`] at `t = -1`, where `1 + t`
/// would need to be inverted.
pub fn decode(curve: &CurveParams, t: &FieldElement) -> CoreResult<(FieldElement, FieldElement)> {
    if t.is_zero() != 0 {
        return Ok((curve.zero(), curve.one()));
    }
    let one = curve.one();
    let one_plus_t = one.add(t);
    if one_plus_t.is_zero() != 0 {
        return Err(CoreError::InvalidHashInput);
    }

    let (c, s, r) = curve.elligator1_csr();
    let two = FieldElement::from_u64(2, curve.field);

    let u = one.sub(t).mul(&one_plus_t.invert());
    let u2 = u.square();
    let u4 = u2.square();
    let r2_minus_2 = r.square().sub(&two);
    let v = u4.add(&r2_minus_2.mul(&u2)).add(&one).mul(&u);

    let l1 = v.legendre_as_field();
    let c_inv = c.invert();
    let l2 = u2.add(&c_inv.square()).legendre_as_field();

    let y_root = l1.mul(&v).sqrt_3mod4();
    let y = y_root.mul(&l1).mul(&l2);
    let x_proj = l1.mul(&u);

    let one_plus_x = one.add(&x_proj);
    let numerator = c.sub(&one).mul(&s).mul(&x_proj).mul(&one_plus_x);
    let x = numerator.mul(&y.invert());

    let one_plus_x_sq = one_plus_x.square();
    let r_x = r.mul(&x_proj);
    let out_y = r_x
        .sub(&one_plus_x_sq)
        .mul(&r_x.add(&one_plus_x_sq).invert());

    Ok((x, out_y))
}

/// `canEncode` (§4.5): whether `(x, y)` has an Elligator-1 pre-image.
pub fn can_encode(curve: &CurveParams, x: &FieldElement, y: &FieldElement) -> bool {
    let one = curve.one();
    let y_plus_1 = y.add(&one);
    if y_plus_1.is_zero() != 0 {
        return false;
    }
    let (c, s, r) = curve.elligator1_csr();
    let two = FieldElement::from_u64(2, curve.field);

    let e = y.sub(&one).mul(&two.mul(&y_plus_1).invert());
    let er = e.mul(&r);
    let one_plus_er = one.add(&er);
    let disc = one_plus_er.square().sub(&one);
    if disc.legendre() == -1 {
        return false;
    }
    let neg_two = FieldElement::from_i64(-2, curve.field);
    if er.equals(&neg_two) {
        let rhs = two
            .mul(&s)
            .mul(&c.sub(&one))
            .mul(&c.legendre_as_field())
            .mul(&r.invert());
        if !x.equals(&rhs) {
            return false;
        }
    }
    true
}

/// Maps a curve point back to a field element.
///
/// # Errors
///
/// Returns [`CoreError::EncodeRefused`] when [`can_encode`] is false.
pub fn encode(curve: &CurveParams, x: &FieldElement, y: &FieldElement) -> CoreResult<FieldElement> {
    if !can_encode(curve, x, y) {
        return Err(CoreError::EncodeRefused);
    }
    let one = curve.one();
    let (c, s, r) = curve.elligator1_csr();
    let two = FieldElement::from_u64(2, curve.field);

    let y_plus_1 = y.add(&one);
    let e = y.sub(&one).mul(&two.mul(&y_plus_1).invert());
    let er = e.mul(&r);
    let one_plus_er = one.add(&er);
    let disc = one_plus_er.square().sub(&one);
    let root = disc.sqrt_3mod4();
    let x_proj = root.sub(&one_plus_er);

    let c_inv = c.invert();
    let inner = c
        .sub(&one)
        .mul(&s)
        .mul(&x_proj)
        .mul(&one.add(&x_proj))
        .mul(x)
        .mul(&x_proj.square().add(&c_inv.square()));
    let z = inner.legendre_as_field();
    let u = z.mul(&x_proj);

    let one_minus_u = one.sub(&u);
    let one_plus_u = one.add(&u);
    let t = one_minus_u.mul(&one_plus_u.invert()).abs();
    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;

    #[test]
    fn decode_zero_is_identity() {
        let curve = curves::curve1174();
        let (x, y) = decode(&curve, &curve.zero()).unwrap();
        assert!(x.is_zero() != 0);
        assert!(y.equals(&curve.one()));
    }

    #[test]
    fn decode_rejects_negative_one() {
        let curve = curves::curve1174();
        let minus_one = curve.one().neg();
        assert_eq!(decode(&curve, &minus_one), Err(CoreError::InvalidHashInput));
    }

    #[test]
    fn decoded_points_satisfy_curve_equation() {
        let curve = curves::curve1174();
        for v in [2u64, 5, 11, 100] {
            let t = FieldElement::from_u64(v, curve.field);
            let (x, y) = decode(&curve, &t).unwrap();
            let lhs = curve.edwards_a.mul(&x.square()).add(&y.square());
            let rhs = curve.one().add(&curve.edwards_d.mul(&x.square()).mul(&y.square()));
            assert!(lhs.equals(&rhs));
        }
    }
}
