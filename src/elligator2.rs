//! Elligator-2 (§4.6): the hash-to-point map for Montgomery curves over
//! `p ≡ 5 (mod 8)`.

use crate::curve::CurveParams;
use crate::error::{CoreError, CoreResult};
use crate::field::FieldElement;

/// Maps a field element to a Montgomery curve point `(x, y)`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidHashInput`] when `1 + 2r² = 0`, the map's
/// only exceptional input.
pub fn decode(curve: &CurveParams, r: &FieldElement) -> CoreResult<(FieldElement, FieldElement)> {
    let one = curve.one();
    let a = curve.montgomery_a;
    let sqrt_m1 = curve
        .sqrt_minus_one
        .expect("Elligator-2 curves carry a precomputed sqrt(-1)");

    let denom = one.add(&r.square().mul_small(2));
    if denom.is_zero() != 0 {
        return Err(CoreError::InvalidHashInput);
    }
    let v = a.neg().mul(&denom.invert());

    let e = v.square().add(&a.mul(&v)).add(&one).mul(&v).legendre_as_field();
    let x = e.mul(&v).add(&e.sub(&one).mul(&a.div_small(2)));
    let radicand = x.square().add(&a.mul(&x)).add(&one).mul(&x);
    let y = e.neg().mul(&radicand.sqrt_5mod8(&sqrt_m1));
    Ok((x, y))
}

/// `canEncode` (§4.6): whether `(x, y)` has an Elligator-2 pre-image.
pub fn can_encode(curve: &CurveParams, x: &FieldElement, y: &FieldElement) -> bool {
    let a = curve.montgomery_a;
    let sqrt_m1 = curve
        .sqrt_minus_one
        .expect("Elligator-2 curves carry a precomputed sqrt(-1)");

    if x.equals(&a.neg()) {
        return false;
    }
    if y.is_zero() != 0 && x.is_zero() == 0 {
        return false;
    }
    let two = FieldElement::from_u64(2, curve.field);
    let test = two.neg().mul(x).mul(&x.add(&a));
    if test.legendre() == -1 {
        return false;
    }
    let cubic = x.square().mul(x).add(&a.mul(&x.square())).add(x);
    let rhs = y.legendre_as_field().mul(&cubic.sqrt_5mod8(&sqrt_m1));
    y.equals(&rhs)
}

/// Maps a Montgomery curve point back to a field element.
///
/// # Errors
///
/// Returns [`CoreError::EncodeRefused`] when [`can_encode`] is false.
pub fn encode(curve: &CurveParams, x: &FieldElement, y: &FieldElement) -> CoreResult<FieldElement> {
    if !can_encode(curve, x, y) {
        return Err(CoreError::EncodeRefused);
    }
    let a = curve.montgomery_a;
    let two = FieldElement::from_u64(2, curve.field);
    let sqrt_m1 = curve
        .sqrt_minus_one
        .expect("Elligator-2 curves carry a precomputed sqrt(-1)");

    let y_is_qr = (y.legendre() == 1) as u8;
    let candidate_qr = x.mul(&two.neg().mul(&x.add(&a)).invert()).sqrt_5mod8(&sqrt_m1);
    let candidate_nonqr = x
        .add(&a)
        .neg()
        .mul(&two.mul(x).invert())
        .sqrt_5mod8(&sqrt_m1);
    Ok(FieldElement::ct_select(y_is_qr, &candidate_nonqr, &candidate_qr))
}
