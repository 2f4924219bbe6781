//! The Montgomery ladder (§4.4): constant-time `x(k·P)`.
//!
//! Bit-for-bit uniform: every iteration performs exactly one conditional
//! swap and one ladder step regardless of the scalar's bits, and the loop
//! always runs for the curve's fixed bit length, never for `k`'s own
//! bit-length.

use crate::curve::CurveParams;
use crate::field::FieldElement;
use crate::point::MontgomeryPoint;
use crate::scalar::Scalar;
use crate::scratch::Scratchpad;

/// One ladder step: from `(P, Q, P-Q)` produce `(P+Q, 2P)`.
///
/// `pad` holds every intermediate across the step's five live values —
/// `A, B, C, D` feeding into the differential add, then `E, AA, BB` feeding
/// the doubling reuse the same slots once their inputs have been consumed.
fn ladder_step(
    p: &MontgomeryPoint,
    q: &MontgomeryPoint,
    p_minus_q: &MontgomeryPoint,
    a24: &FieldElement,
    pad: &mut Scratchpad,
) -> (MontgomeryPoint, MontgomeryPoint) {
    *pad.reg(0) = p.x.add(&p.z); // r0 = A
    *pad.reg(1) = p.x.sub(&p.z); // r1 = B
    *pad.reg(2) = q.x.add(&q.z); // r2 = C
    *pad.reg(3) = q.x.sub(&q.z); // r3 = D
    let (a, b, c, d) = (*pad.reg(0), *pad.reg(1), *pad.reg(2), *pad.reg(3));
    *pad.reg(4) = d.mul(&a); // r4 = DA

    let da = *pad.reg(4);
    let cb = c.mul(&b); // C is retired after this
    *pad.reg(3) = cb; // r3 = CB, D's slot reused

    let sum = da.add(&cb);
    let diff = da.sub(&cb);
    *pad.reg(4) = sum; // r4 = sum, DA retired
    *pad.reg(2) = diff; // r2 = diff, C's slot reused

    let x_sum = p_minus_q.z.mul(&sum.square());
    let z_sum = p_minus_q.x.mul(&diff.square());
    *pad.reg(2) = x_sum; // r2 = x_sum, sum/diff both retired
    *pad.reg(4) = z_sum; // r4 = z_sum

    *pad.reg(3) = a.square(); // r3 = AA, A retired
    *pad.reg(1) = b.square(); // r1 = BB, B retired (in place)
    let (aa, bb) = (*pad.reg(3), *pad.reg(1));
    let e = aa.sub(&bb);
    *pad.reg(0) = e; // r0 = E, A's old slot reused
    *pad.reg(3) = aa.mul(&bb); // r3 = x_double, AA retired

    let z_double = e.mul(&bb.add(&a24.mul(&e)));
    *pad.reg(1) = z_double; // r1 = z_double, BB retired

    let (x_sum, z_sum, x_double, z_double) =
        (*pad.reg(2), *pad.reg(4), *pad.reg(3), *pad.reg(1));
    (
        MontgomeryPoint { x: x_sum, z: z_sum },
        MontgomeryPoint {
            x: x_double,
            z: z_double,
        },
    )
}

/// `mul_x(k, P) → x(k·P)`. The bit length walked is the curve's fixed
/// scalar width (`k.bits`), never a function of `k`'s magnitude.
///
/// One scratchpad is acquired for the whole walk and reused by every step,
/// rather than drawn from the pool bit by bit.
pub fn mul_x(curve: &CurveParams, k: &Scalar, p_x: &FieldElement) -> FieldElement {
    let base = MontgomeryPoint {
        x: *p_x,
        z: curve.one(),
    };
    let mut r0 = MontgomeryPoint {
        x: curve.one(),
        z: curve.zero(),
    };
    let mut r1 = base;

    let mut pad = crate::scratch::ScratchpadGuard::acquire(p_x.params());
    let mut prev_bit = 0u8;
    for i in (0..k.bits).rev() {
        let bit = k.bit(i);
        MontgomeryPoint::ct_swap(bit ^ prev_bit, &mut r0, &mut r1);
        let (sum, doubled) = ladder_step(
            &r0,
            &r1,
            &base,
            &curve.montgomery_a_plus_2_over_4,
            &mut pad,
        );
        r0 = doubled;
        r1 = sum;
        prev_bit = bit;
    }
    MontgomeryPoint::ct_swap(prev_bit, &mut r0, &mut r1);

    r0.to_affine_u()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;

    #[test]
    fn mul_x_by_zero_is_the_point_at_infinity() {
        let curve = curves::m383();
        let p_x = FieldElement::from_u64(12, curve.field);
        let k = Scalar::from_u64(0, curve.field.bits);
        let result = mul_x(&curve, &k, &p_x);
        assert!(result.is_zero() != 0);
    }

    #[test]
    fn mul_x_by_one_is_identity_on_x() {
        let curve = curves::m383();
        let p_x = FieldElement::from_u64(12, curve.field);
        let k = Scalar::from_u64(1, curve.field.bits);
        let result = mul_x(&curve, &k, &p_x);
        assert!(result.equals(&p_x));
    }

    #[test]
    fn mul_x_by_two_matches_manual_doubling() {
        let curve = curves::m383();
        let p_x = FieldElement::from_u64(12, curve.field);
        let k = Scalar::from_u64(2, curve.field.bits);
        let via_ladder = mul_x(&curve, &k, &p_x);

        // Manual x-only doubling formula, independent of the ladder path:
        // x(2P) = (x^2-1)^2 / (4x(x^2+Ax+1)).
        let one = curve.one();
        let x2 = p_x.square();
        let numerator = x2.sub(&one).square();
        let denom = p_x
            .mul_small(4)
            .mul(&x2.add(&curve.montgomery_a.mul(&p_x)).add(&one));
        let expected = numerator.mul(&denom.invert());
        assert!(via_ladder.equals(&expected));
    }
}
