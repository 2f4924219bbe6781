//! Immutable per-curve constant records.
//!
//! A [`CurveParams`] binds one field to one twisted-Edwards curve (and its
//! birationally-equivalent Montgomery form) together with the constants the
//! point engine, the ladder, and the Elligator maps need. Instances are
//! plain data built by the functions in [`crate::curves`]; nothing here
//! mutates after construction, matching the single-writer-at-construction
//! model the rest of this crate assumes for curve constants.

use crate::field::{FieldElement, FieldParams};
use crate::scalar::Scalar;

/// Which Elligator variant applies to a curve: Elligator-1 needs
/// `p ≡ 3 (mod 4)` and operates on the Edwards form; Elligator-2 needs
/// `p ≡ 5 (mod 8)` and operates on the Montgomery form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElligatorDomain {
    Elligator1,
    Elligator2,
}

/// Immutable per-curve constants: `(p, A, d, cofactor, baseX, baseY,
/// primeOrder, elligatorS, elligatorR, elligatorC)`, plus the Montgomery
/// form derived from the Edwards one.
#[derive(Clone, Copy, Debug)]
pub struct CurveParams {
    pub name: &'static str,
    pub field: &'static FieldParams,
    pub cofactor: u64,

    pub edwards_a: FieldElement,
    pub edwards_d: FieldElement,

    /// Montgomery `A`, derived from the Edwards form via
    /// `A = 2(a+d)/(a-d)` (the birational map with Montgomery `B`
    /// normalized away; the ladder's differential addition only ever needs
    /// `A`, never `B`).
    pub montgomery_a: FieldElement,
    /// Precomputed `(A+2)/4`, the ladder step's per-curve constant.
    pub montgomery_a_plus_2_over_4: FieldElement,

    pub base_x: FieldElement,
    pub base_y: FieldElement,

    pub prime_order: Scalar,

    pub elligator: ElligatorDomain,
    /// A fixed square root of `-1`, present only for `p ≡ 5 (mod 8)`
    /// fields (Elligator-2's domain), where `sqrt_5mod8` needs it.
    pub sqrt_minus_one: Option<FieldElement>,
}

impl CurveParams {
    pub fn one(&self) -> FieldElement {
        FieldElement::one(self.field)
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement::zero(self.field)
    }

    /// A square root of `x`, dispatched to whichever exponentiation chain
    /// this curve's field supports. Meaningful only when `x` is a quadratic
    /// residue; callers must check [`FieldElement::legendre`] first.
    pub fn sqrt(&self, x: &FieldElement) -> FieldElement {
        match self.elligator {
            ElligatorDomain::Elligator1 => x.sqrt_3mod4(),
            ElligatorDomain::Elligator2 => x.sqrt_5mod8(
                self.sqrt_minus_one
                    .as_ref()
                    .expect("Elligator-2 curves carry a precomputed sqrt(-1)"),
            ),
        }
    }

    /// Derived Elligator-1 constants from `d`:
    /// `c = ((-d)^½ - 1)/((-d)^½ + 1)`, `s = (2/c)^½`, `r = c + 1/c`.
    ///
    /// Meaningful only when [`ElligatorDomain::Elligator1`] applies
    /// (`p ≡ 3 mod 4`, so `-d`'s square root is taken via `sqrt_3mod4`).
    pub fn elligator1_csr(&self) -> (FieldElement, FieldElement, FieldElement) {
        let one = self.one();
        let neg_d_sqrt = self.edwards_d.neg().sqrt_3mod4();
        let c = neg_d_sqrt
            .sub(&one)
            .mul(&neg_d_sqrt.add(&one).invert());
        let s = FieldElement::from_u64(2, self.field)
            .mul(&c.invert())
            .sqrt_3mod4();
        let r = c.add(&c.invert());
        (c, s, r)
    }
}

/// `A = 2(a+d)/(a-d)`, the Montgomery coefficient birationally equivalent to
/// an Edwards curve with coefficients `(a, d)`.
pub fn montgomery_a_from_edwards(a: &FieldElement, d: &FieldElement) -> FieldElement {
    let sum = a.add(d);
    let diff = a.sub(d);
    sum.mul(&diff.invert()).mul_small(2)
}
