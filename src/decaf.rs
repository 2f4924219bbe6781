//! Decaf compression (§4.3): a single field element per prime-order group
//! element, quotienting out the 4-torsion subgroup.
//!
//! Grounded on the standard cofactor-4 Decaf encoding (curves with
//! cofactor 8, like Curve25519's Ristretto variant, need an extra E[8]
//! pre-rotation step this crate's catalogue never requires — both
//! Decaf-capable curves here, Curve1174 and E-521, have cofactor 4).

use crate::curve::CurveParams;
use crate::error::{CoreError, CoreResult};
use crate::field::FieldElement;
use crate::point::EdwardsPoint;

/// `1/√x`, `0` by convention at `x = 0`. Callers must already know `x` is
/// either zero or a quadratic residue.
fn invsqrt(curve: &CurveParams, x: &FieldElement) -> FieldElement {
    if x.is_zero() != 0 {
        return curve.zero();
    }
    curve.sqrt(x).invert()
}

/// Compresses a point to its canonical Decaf encoding.
pub fn compress(curve: &CurveParams, p: &EdwardsPoint) -> FieldElement {
    let a = curve.edwards_a;
    let d = curve.edwards_d;
    let t = p.t_coordinate();

    let z_plus_y = p.z.add(&p.y);
    let z_minus_y = p.z.sub(&p.y);
    let a_minus_d = a.sub(&d);
    let inner = a_minus_d.mul(&z_plus_y).mul(&z_minus_y);

    let mut r = invsqrt(curve, &inner);
    let u = a_minus_d.mul(&r);

    let neg_two_u_z = FieldElement::from_i64(-2, curve.field).mul(&u).mul(&p.z);
    r = FieldElement::ct_select(neg_two_u_z.is_negative(), &r, &r.neg());

    let a_zx = a.mul(&p.z).mul(&p.x);
    let d_yt = d.mul(&p.y).mul(&t);
    let inner_s = p.y.sub(&r.mul(&a_zx.add(&d_yt)));
    u.mul(&inner_s).abs()
}

/// Decompresses a canonical Decaf encoding back to a point.
///
/// # Errors
///
/// Returns [`CoreError::InvalidPoint`] when `s` is out of canonical
/// range, or the decompression's intermediate is a non-residue.
pub fn decompress(curve: &CurveParams, s: &FieldElement) -> CoreResult<EdwardsPoint> {
    if s.is_negative() != 0 {
        return Err(CoreError::InvalidPoint);
    }
    let a = curve.edwards_a;
    let d = curve.edwards_d;
    let one = curve.one();

    let ss = s.square();
    let x = s.mul_small(2);
    let z = one.add(&a.mul(&ss));
    let u = z.square().sub(&d.mul(&ss).mul_small(4));
    let uss = u.mul(&ss);

    if uss.is_zero() == 0 && uss.legendre() == -1 {
        return Err(CoreError::InvalidPoint);
    }

    let mut v = invsqrt(curve, &uss);
    let uv = v.mul(&u);
    v = FieldElement::ct_select(uv.is_negative(), &v, &v.neg());

    let two_minus_z = FieldElement::from_u64(2, curve.field).sub(&z);
    let mut w = v.mul(&s.mul(&two_minus_z));
    w = FieldElement::ct_select(s.is_zero(), &w, &one);

    let y = w.mul(&z);
    EdwardsPoint::from_affine(curve, x.mul(&z.invert()), y.mul(&z.invert()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;

    #[test]
    fn identity_compresses_to_zero() {
        let curve = curves::e521();
        let id = EdwardsPoint::identity(&curve);
        let s = compress(&curve, &id);
        assert!(s.is_zero() != 0);
    }

    #[test]
    fn decompressing_zero_yields_identity() {
        let curve = curves::e521();
        let p = decompress(&curve, &curve.zero()).unwrap();
        assert!(p.is_identity());
    }

    #[test]
    fn compress_decompress_round_trips_base_point() {
        let curve = curves::curve1174();
        let g = EdwardsPoint::base_point(&curve);
        let s = compress(&curve, &g);
        let back = decompress(&curve, &s).expect("base point compresses to a valid encoding");
        let back_s = compress(&curve, &back);
        assert!(s.equals(&back_s));
    }

    #[test]
    fn oversized_scalar_is_rejected() {
        let curve = curves::curve1174();
        // p-1 is definitely above the canonical range [0, (p-1)/2].
        let p_minus_1 = curve.zero().sub(&curve.one());
        assert!(matches!(
            decompress(&curve, &p_minus_1),
            Err(CoreError::InvalidPoint)
        ));
    }
}
