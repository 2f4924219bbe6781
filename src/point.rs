//! Group element representation and operations (§4.3): projective
//! twisted-Edwards points and the x-only Montgomery representation the
//! ladder runs on, plus the birational map between the two curve forms.
//!
//! `EdwardsPoint` keeps only `(X:Y:Z)` rather than the full extended
//! `(X:Y:Z:T)` quadruple: every operation here (the unified addition law,
//! doubling via `2P = P + P`, scaling to affine) is expressed correctly
//! without `T`. The `T = X·Y/Z` coordinate is recovered on demand, at the
//! cost of one inversion, only where it is actually needed — Decaf
//! compression (`decaf.rs`) — matching the "used once per extracted
//! coordinate" scaling discipline this module follows throughout.

use crate::curve::CurveParams;
use crate::error::{CoreError, CoreResult};
use crate::field::FieldElement;
use crate::scratch::ScratchpadGuard;

/// A twisted-Edwards curve point in projective coordinates `(X:Y:Z)`,
/// `Z ≠ 0`, with affine `(x,y) = (X/Z, Y/Z)`.
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
}

impl EdwardsPoint {
    pub fn identity(curve: &CurveParams) -> Self {
        Self {
            x: curve.zero(),
            y: curve.one(),
            z: curve.one(),
        }
    }

    pub fn base_point(curve: &CurveParams) -> Self {
        Self {
            x: curve.base_x,
            y: curve.base_y,
            z: curve.one(),
        }
    }

    pub(crate) fn from_affine_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Self {
            x,
            y,
            z: FieldElement::one(x.params()),
        }
    }

    /// Builds an Edwards point from affine coordinates, checking them
    /// against `a·x² + y² = 1 + d·x²·y²`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPoint`] if the coordinates do not
    /// satisfy the curve equation.
    pub fn from_affine(curve: &CurveParams, x: FieldElement, y: FieldElement) -> CoreResult<Self> {
        if Self::satisfies_curve_equation(curve, &x, &y) {
            Ok(Self::from_affine_unchecked(x, y))
        } else {
            Err(CoreError::InvalidPoint)
        }
    }

    fn satisfies_curve_equation(curve: &CurveParams, x: &FieldElement, y: &FieldElement) -> bool {
        let x2 = x.square();
        let y2 = y.square();
        let lhs = curve.edwards_a.mul(&x2).add(&y2);
        let rhs = curve.one().add(&curve.edwards_d.mul(&x2).mul(&y2));
        lhs.equals(&rhs)
    }

    /// Scales to affine `(x, y)`, spending one field inversion.
    pub fn to_affine(&self) -> (FieldElement, FieldElement) {
        let zinv = self.z.invert();
        (self.x.mul(&zinv), self.y.mul(&zinv))
    }

    /// Recovers `T = X·Y/Z`, spending one field inversion. Used only by
    /// Decaf compression, which needs the extended coordinate.
    pub fn t_coordinate(&self) -> FieldElement {
        self.x.mul(&self.y).mul(&self.z.invert())
    }

    pub fn negate(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
        }
    }

    pub fn is_identity(&self) -> bool {
        let (x, y) = self.to_affine();
        x.is_zero() != 0 && y.equals(&FieldElement::one(y.params()))
    }

    /// Unified twisted-Edwards addition (§4.3), valid for any `(a, d)` with
    /// `d` a non-square — and, being a unified/complete law, valid for
    /// doubling too (`double` below is just `add(self, self)`).
    ///
    /// Every intermediate lives in one of the five scratchpad registers the
    /// curve's field is sized for; the writeback to `(x3, y3, z3)` at the
    /// end reads straight out of those registers rather than a pile of
    /// freestanding locals.
    pub fn add(&self, other: &Self, curve: &CurveParams) -> Self {
        let mut pad = ScratchpadGuard::acquire(self.x.params());

        *pad.reg(0) = self.z.mul(&other.z); // r0 = A = Z1*Z2
        let a = *pad.reg(0);
        *pad.reg(1) = a.square(); // r1 = B = A^2
        *pad.reg(2) = self.x.mul(&other.x); // r2 = C = X1*X2
        *pad.reg(3) = self.y.mul(&other.y); // r3 = D = Y1*Y2
        let (b, c, d) = (*pad.reg(1), *pad.reg(2), *pad.reg(3));
        *pad.reg(4) = curve.edwards_d.mul(&c).mul(&d); // r4 = E = d*C*D
        let e = *pad.reg(4);

        *pad.reg(1) = b.sub(&e); // r1 = F = B - E
        *pad.reg(4) = b.add(&e); // r4 = G = B + E
        let (f, g) = (*pad.reg(1), *pad.reg(4));

        let x1_plus_y1 = self.x.add(&self.y);
        let x2_plus_y2 = other.x.add(&other.y);
        let cross = x1_plus_y1.mul(&x2_plus_y2).sub(&c).sub(&d);
        let y3_inner = d.sub(&curve.edwards_a.mul(&c)); // D - a*C
        *pad.reg(2) = cross; // r2 = cross, C retired
        *pad.reg(3) = y3_inner; // r3 = y3_inner, D retired
        let (cross, y3_inner) = (*pad.reg(2), *pad.reg(3));

        let x3 = a.mul(&f).mul(&cross); // A*F*cross
        let y3 = a.mul(&g).mul(&y3_inner); // A*G*(D-a*C)
        let z3 = f.mul(&g); // F*G
        Self { x: x3, y: y3, z: z3 }
    }

    pub fn double(&self, curve: &CurveParams) -> Self {
        self.add(self, curve)
    }

    pub fn scalar_mul(&self, scalar: &crate::scalar::Scalar, curve: &CurveParams) -> Self {
        // Constant-time double-and-always-add: every bit costs one double
        // and one constant-time select between "keep" and "add", so the
        // instruction sequence does not depend on the scalar's bits.
        let mut acc = Self::identity(curve);
        for i in (0..scalar.bits).rev() {
            acc = acc.double(curve);
            let with_add = acc.add(self, curve);
            let bit = scalar.bit(i);
            acc = Self::ct_select(bit, &acc, &with_add);
        }
        acc
    }

    fn ct_select(bit: u8, a: &Self, b: &Self) -> Self {
        Self {
            x: FieldElement::ct_select(bit, &a.x, &b.x),
            y: FieldElement::ct_select(bit, &a.y, &b.y),
            z: FieldElement::ct_select(bit, &a.z, &b.z),
        }
    }
}

/// An x-only Montgomery point `(X:Z)`, used solely by the ladder.
#[derive(Clone, Copy, Debug)]
pub struct MontgomeryPoint {
    pub x: FieldElement,
    pub z: FieldElement,
}

impl MontgomeryPoint {
    pub fn from_affine_u(u: FieldElement) -> Self {
        Self {
            x: u,
            z: FieldElement::one(u.params()),
        }
    }

    pub fn to_affine_u(&self) -> FieldElement {
        self.x.mul(&self.z.invert())
    }

    pub fn ct_swap(bit: u8, a: &mut Self, b: &mut Self) {
        FieldElement::ct_swap(bit, &mut a.x, &mut b.x);
        FieldElement::ct_swap(bit, &mut a.z, &mut b.z);
    }
}

/// Birational Edwards → Montgomery: `u = (1+y)/(1-y)`, `v = u/x`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidPoint`] at the 2-torsion singularities
/// `1 - y = 0` or `x = 0`.
pub fn edwards_to_montgomery(
    curve: &CurveParams,
    p: &EdwardsPoint,
) -> CoreResult<(FieldElement, FieldElement)> {
    let (x, y) = p.to_affine();
    let one = curve.one();
    let one_minus_y = one.sub(&y);
    if one_minus_y.is_zero() != 0 {
        return Err(CoreError::InvalidPoint);
    }
    if x.is_zero() != 0 {
        return Err(CoreError::InvalidPoint);
    }
    let u = one.add(&y).mul(&one_minus_y.invert());
    let v = u.mul(&x.invert());
    Ok((u, v))
}

/// Birational Montgomery → Edwards: `x = u/v`, `y = (u-1)/(u+1)`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidPoint`] at the 2-torsion singularities
/// `u + 1 = 0` or `v = 0`, or if the resulting affine point does not
/// satisfy the Edwards curve equation.
pub fn montgomery_to_edwards(
    curve: &CurveParams,
    u: &FieldElement,
    v: &FieldElement,
) -> CoreResult<EdwardsPoint> {
    let one = curve.one();
    let u_plus_1 = u.add(&one);
    if u_plus_1.is_zero() != 0 {
        return Err(CoreError::InvalidPoint);
    }
    if v.is_zero() != 0 {
        return Err(CoreError::InvalidPoint);
    }
    let x = u.mul(&v.invert());
    let y = u.sub(&one).mul(&u_plus_1.invert());
    EdwardsPoint::from_affine(curve, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;

    #[test]
    fn identity_is_additive_identity() {
        let curve = curves::curve1174();
        let g = EdwardsPoint::base_point(&curve);
        let id = EdwardsPoint::identity(&curve);
        let (gx, gy) = g.add(&id, &curve).to_affine();
        let (expected_x, expected_y) = g.to_affine();
        assert!(gx.equals(&expected_x) && gy.equals(&expected_y));
    }

    #[test]
    fn point_plus_negation_is_identity() {
        let curve = curves::curve1174();
        let g = EdwardsPoint::base_point(&curve);
        let sum = g.add(&g.negate(), &curve);
        assert!(sum.is_identity());
    }

    #[test]
    fn doubling_matches_self_addition() {
        let curve = curves::curve1174();
        let g = EdwardsPoint::base_point(&curve);
        let doubled = g.double(&curve);
        let added = g.add(&g, &curve);
        let (dx, dy) = doubled.to_affine();
        let (ax, ay) = added.to_affine();
        assert!(dx.equals(&ax) && dy.equals(&ay));
    }

    #[test]
    fn addition_result_stays_on_curve() {
        let curve = curves::curve1174();
        let g = EdwardsPoint::base_point(&curve);
        let sum = g.add(&g.double(&curve), &curve);
        let (x, y) = sum.to_affine();
        assert!(EdwardsPoint::satisfies_curve_equation(&curve, &x, &y));
    }

    #[test]
    fn birational_round_trip_is_identity_on_base_point() {
        let curve = curves::m383();
        let g = EdwardsPoint::base_point(&curve);
        let (u, v) = edwards_to_montgomery(&curve, &g).expect("base point is not 2-torsion");
        let back = montgomery_to_edwards(&curve, &u, &v).expect("round trip stays valid");
        let (gx, gy) = g.to_affine();
        let (bx, by) = back.to_affine();
        assert!(gx.equals(&bx) && gy.equals(&by));
    }
}
