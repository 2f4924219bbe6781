//! Group facade (§4.7): binds one curve to a point representation and
//! hands out fresh, exclusively-owned points.

use crate::curve::{CurveParams, ElligatorDomain};
use crate::error::CoreResult;
use crate::field::FieldElement;
use crate::point::EdwardsPoint;
use crate::scalar::Scalar;
use crate::scratch::ScratchpadGuard;
use crate::{curves, decaf, elligator1, elligator2, ladder, point};

/// A curve bound and ready to produce points. Every method returns a
/// fresh, owned value; callers never share mutable state with the facade.
pub struct Group {
    curve: CurveParams,
}

impl Group {
    pub fn new(curve: CurveParams) -> Self {
        Self { curve }
    }

    pub fn curve1174() -> Self {
        Self::new(curves::curve1174())
    }

    pub fn m383() -> Self {
        Self::new(curves::m383())
    }

    pub fn e521() -> Self {
        Self::new(curves::e521())
    }

    pub fn curve(&self) -> &CurveParams {
        &self.curve
    }

    pub fn base_point(&self) -> EdwardsPoint {
        EdwardsPoint::base_point(&self.curve)
    }

    pub fn zero_point(&self) -> EdwardsPoint {
        EdwardsPoint::identity(&self.curve)
    }

    pub fn scratchpad(&self) -> ScratchpadGuard {
        ScratchpadGuard::acquire(self.curve.field)
    }

    /// # Errors
    ///
    /// Returns [`crate::error::CoreError::InvalidPoint`] if the
    /// coordinates do not satisfy the curve equation.
    pub fn from_edwards(&self, x: FieldElement, y: FieldElement) -> CoreResult<EdwardsPoint> {
        EdwardsPoint::from_affine(&self.curve, x, y)
    }

    /// # Errors
    ///
    /// Returns [`crate::error::CoreError::InvalidPoint`] at a 2-torsion
    /// singularity or if the birational image is off-curve.
    pub fn from_montgomery(&self, u: FieldElement, v: FieldElement) -> CoreResult<EdwardsPoint> {
        point::montgomery_to_edwards(&self.curve, &u, &v)
    }

    /// Hashes a field element to a point via this curve's Elligator
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CoreError::InvalidHashInput`] at the map's
    /// exceptional input.
    pub fn from_hash(&self, r: &FieldElement) -> CoreResult<EdwardsPoint> {
        match self.curve.elligator {
            ElligatorDomain::Elligator1 => {
                let (x, y) = elligator1::decode(&self.curve, r)?;
                EdwardsPoint::from_affine(&self.curve, x, y)
            }
            ElligatorDomain::Elligator2 => {
                let (u, v) = elligator2::decode(&self.curve, r)?;
                point::montgomery_to_edwards(&self.curve, &u, &v)
            }
        }
    }

    /// Decompresses a Decaf-encoded field element.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CoreError::InvalidPoint`] for an
    /// out-of-range or non-residue encoding.
    pub fn from_compressed(&self, s: &FieldElement) -> CoreResult<EdwardsPoint> {
        decaf::decompress(&self.curve, s)
    }

    pub fn compress(&self, p: &EdwardsPoint) -> FieldElement {
        decaf::compress(&self.curve, p)
    }

    pub fn cofactor(&self) -> u64 {
        self.curve.cofactor
    }

    pub fn prime_order(&self) -> Scalar {
        self.curve.prime_order
    }

    pub fn mul_x(&self, k: &Scalar, p_x: &FieldElement) -> FieldElement {
        ladder::mul_x(&self.curve, k, p_x)
    }
}
