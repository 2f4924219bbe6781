//! Finite field arithmetic for primes of the form `p = 2^k - c`.
//!
//! This module implements arithmetic in `𝔽ₚ` for every prime this crate's
//! curve catalogue uses — Curve1174's 251-bit field, M-383's 383-bit field,
//! E-521's 521-bit field, and any other `2^k - c` prime an implementer wires
//! up a [`FieldParams`] for.
//!
//! ## Representation
//!
//! A field element is a fixed-capacity array of `u64` limbs
//! ([`limbs::MAX_LIMBS`] of them, little-endian) plus a reference to the
//! static [`FieldParams`] describing its actual bit-length `k` and
//! subtrahend `c`. Every public value is kept in canonical range `[0, p)`;
//! there is no deferred-reduction slack visible outside this module.
//!
//! ## Design goals
//!
//! - **Constant-time execution**: no secret-dependent branches or memory
//!   access. Conditional behavior goes through [`consttime`](crate::consttime)
//!   or the `ct_select`/`mask`/`or` methods below.
//! - **One engine, many widths**: a single schoolbook-multiply-then-fold
//!   reduction and a single square-and-multiply exponentiation loop serve
//!   every supported prime; there is no hand-unrolled chain per curve.
//! - **Value semantics**: `FieldElement` is `Copy`; cloning is just copying
//!   twelve `u64`s.
//!
//! ## Implemented operations
//!
//! Field addition, subtraction, negation, multiplication, squaring,
//! small-scalar multiply/divide, Fermat inversion, square roots for both
//! `p ≡ 3 (mod 4)` and `p ≡ 5 (mod 8)` fields, the Legendre symbol, and
//! canonical big-endian byte encoding/decoding.

pub(crate) mod limbs;

use limbs::Limbs;

pub use limbs::{Limbs as RawLimbs, MAX_LIMBS};

/// Static description of a prime `p = 2^k - c`.
///
/// `FieldParams` instances are plain data — small enough to declare as
/// `'static` literals for every curve in the catalogue. The actual value of
/// `p` and its derived exponents (`p-2`, `(p+1)/4`, `(p+3)/8`, `(p-1)/2`)
/// are computed on demand from `bits` and `c` rather than stored, since they
/// are cheap (a handful of limb operations) and this avoids hand-transcribing
/// a second copy of each prime.
#[derive(Debug)]
pub struct FieldParams {
    pub name: &'static str,
    /// `k` in `p = 2^k - c`.
    pub bits: u32,
    /// `c` in `p = 2^k - c`. Every prime in this crate's catalogue has a
    /// `c` that fits comfortably in a `u64`.
    pub c: u64,
}

impl FieldParams {
    pub fn p(&self) -> Limbs {
        let mut pow2k = limbs::zero();
        let word = (self.bits / 64) as usize;
        let bit = self.bits % 64;
        pow2k[word] = 1u64 << bit;
        limbs::sub(&pow2k, &limbs::from_u64(self.c)).0
    }

    pub fn p_minus_2(&self) -> Limbs {
        limbs::sub(&self.p(), &limbs::from_u64(2)).0
    }

    pub fn p_minus_1_div_2(&self) -> Limbs {
        limbs::shr(&limbs::sub(&self.p(), &limbs::from_u64(1)).0, 1)
    }

    /// Square-root exponent for `p ≡ 3 (mod 4)` fields.
    pub fn p_plus_1_div_4(&self) -> Limbs {
        limbs::shr(&limbs::add(&self.p(), &limbs::from_u64(1)).0, 2)
    }

    /// Square-root exponent for `p ≡ 5 (mod 8)` fields.
    pub fn p_plus_3_div_8(&self) -> Limbs {
        limbs::shr(&limbs::add(&self.p(), &limbs::from_u64(3)).0, 3)
    }

    /// Canonical encoded width in bytes, `⌈k/8⌉`.
    pub fn byte_len(&self) -> usize {
        ((self.bits as usize) + 7) / 8
    }
}

/// An element of `𝔽ₚ`, always held in canonical range `[0, p)`.
#[derive(Clone, Copy)]
pub struct FieldElement {
    limbs: Limbs,
    params: &'static FieldParams,
}

impl core::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement<{}>(0x", self.params.name)?;
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
impl Eq for FieldElement {}

fn fold_round(cur: &Limbs, k: u32, c: u64) -> Limbs {
    let hi = limbs::shr(cur, k);
    let lo = limbs::low_bits(cur, k);
    let (prod, _overflow) = limbs::mul_small(&hi, c);
    limbs::add(&lo, &prod).0
}

fn normalize_limbs(mut cur: Limbs, p: &FieldParams) -> Limbs {
    let p_limbs = p.p();
    // A handful of conditional subtractions is enough: every curve in this
    // crate's catalogue has a subtrahend `c` small enough that the folding
    // loop above converges to within a couple of bits of `p` in one or two
    // rounds, so `cur` never exceeds a small multiple of `p` here.
    for _ in 0..6 {
        let (diff, borrow) = limbs::sub(&cur, &p_limbs);
        cur = limbs::ct_select((1 - borrow) as u8, &cur, &diff);
    }
    cur
}

/// Reduce a double-width product modulo `p = 2^k - c`.
fn reduce_wide(wide: &limbs::WideLimbs, p: &FieldParams) -> Limbs {
    let hi0 = limbs::shr_wide(wide, p.bits);
    let lo0 = limbs::low_bits_wide(wide, p.bits);
    let (prod0, _overflow0) = limbs::mul_small(&hi0, p.c);
    let mut cur = limbs::add(&lo0, &prod0).0;
    for _ in 0..5 {
        cur = fold_round(&cur, p.bits, p.c);
    }
    normalize_limbs(cur, p)
}

/// Reduce a single-width product (from [`limbs::mul_small`]) modulo `p`.
fn reduce_narrow(prod: &Limbs, overflow: u64, p: &FieldParams) -> Limbs {
    // Every `mul_small` caller in this crate multiplies by a small named
    // curve constant (curve coefficients, the ladder's `(A+2)/4`, cofactors);
    // none of those come close to the ~2^(MAX_LIMBS*64 - bits) bits needed to
    // produce a nonzero overflow limb here.
    debug_assert_eq!(overflow, 0);
    let mut cur = *prod;
    for _ in 0..5 {
        cur = fold_round(&cur, p.bits, p.c);
    }
    normalize_limbs(cur, p)
}

impl FieldElement {
    pub fn zero(params: &'static FieldParams) -> Self {
        Self {
            limbs: limbs::zero(),
            params,
        }
    }

    pub fn one(params: &'static FieldParams) -> Self {
        Self {
            limbs: limbs::from_u64(1),
            params,
        }
    }

    pub fn from_u64(v: u64, params: &'static FieldParams) -> Self {
        Self {
            limbs: normalize_limbs(limbs::from_u64(v), params),
            params,
        }
    }

    /// Builds a field element from a signed small constant such as a curve
    /// coefficient (`d = -1174`, say).
    pub fn from_i64(v: i64, params: &'static FieldParams) -> Self {
        let magnitude = Self::from_u64(v.unsigned_abs(), params);
        if v < 0 {
            magnitude.neg()
        } else {
            magnitude
        }
    }

    /// Builds a field element from an arbitrary-precision big-endian hex
    /// literal (an optional `0x` prefix is accepted). Used only to build
    /// curve constant tables at construction time, never on a secret path.
    pub fn from_hex(hex: &str, params: &'static FieldParams) -> Self {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        let mut raw = limbs::zero();
        for (i, ch) in digits.chars().rev().enumerate() {
            let nibble = ch.to_digit(16).expect("curve table literal must be hex") as u64;
            let limb = i / 16;
            let shift = (i % 16) * 4;
            raw[limb] |= nibble << shift;
        }
        Self {
            limbs: normalize_limbs(raw, params),
            params,
        }
    }

    pub fn params(&self) -> &'static FieldParams {
        self.params
    }

    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        let (sum, _carry) = limbs::add(&self.limbs, &other.limbs);
        Self {
            limbs: normalize_limbs(sum, self.params),
            params: self.params,
        }
    }

    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = limbs::sub(&self.limbs, &other.limbs);
        let p_if_negative = limbs::ct_select(borrow as u8, &limbs::zero(), &self.params.p());
        let (corrected, _carry) = limbs::add(&diff, &p_if_negative);
        Self {
            limbs: corrected,
            params: self.params,
        }
    }

    #[inline(always)]
    pub fn neg(&self) -> Self {
        Self::zero(self.params).sub(self)
    }

    #[inline(always)]
    pub fn mul(&self, other: &Self) -> Self {
        let wide = limbs::mul_wide(&self.limbs, &other.limbs);
        Self {
            limbs: reduce_wide(&wide, self.params),
            params: self.params,
        }
    }

    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// `self^n`, done with `n - 1` sequential squarings.
    pub fn n_square(&self, n: u32) -> Self {
        let mut r = *self;
        for _ in 0..n {
            r = r.square();
        }
        r
    }

    /// Multiplies by a small signed constant known at the call site (curve
    /// coefficients, the ladder's `(A+2)/4`, cofactors).
    pub fn mul_small(&self, s: i64) -> Self {
        let magnitude = s.unsigned_abs();
        let (prod, overflow) = limbs::mul_small(&self.limbs, magnitude);
        let reduced = Self {
            limbs: reduce_narrow(&prod, overflow, self.params),
            params: self.params,
        };
        if s < 0 {
            reduced.neg()
        } else {
            reduced
        }
    }

    /// Divides by a small signed constant, i.e. multiplies by its inverse.
    pub fn div_small(&self, s: i64) -> Self {
        self.mul(&Self::from_i64(s, self.params).invert())
    }

    /// Generic square-and-multiply exponentiation. The loop always runs for
    /// exactly `self.params.bits` iterations regardless of the exponent's
    /// magnitude — control flow depends only on the public exponent bits,
    /// never on `self`, so every exponentiation (`invert`, both square-root
    /// variants, `legendre`) costs the same regardless of field width within
    /// a curve and regardless of the field element's own value.
    pub fn pow(&self, exponent: &Limbs) -> Self {
        let mut result = Self::one(self.params);
        for i in (0..self.params.bits).rev() {
            result = result.square();
            let bit = limbs::bit(exponent, i);
            let with_multiply = result.mul(self);
            result = Self::ct_select(bit, &result, &with_multiply);
        }
        result
    }

    /// Fermat inversion via `a^(p-2)`. Yields `0` for `a = 0`, by convention.
    pub fn invert(&self) -> Self {
        self.pow(&self.params.p_minus_2())
    }

    /// Square root via `a^((p+1)/4)`, for fields with `p ≡ 3 (mod 4)`.
    /// Meaningful only when `self` is a quadratic residue; callers must
    /// check [`FieldElement::legendre`] first.
    pub fn sqrt_3mod4(&self) -> Self {
        self.pow(&self.params.p_plus_1_div_4())
    }

    /// Square root via `a^((p+3)/8)` with a conditional multiplier by a
    /// fixed square root of `-1`, for fields with `p ≡ 5 (mod 8)`.
    /// Meaningful only when `self` is a quadratic residue.
    pub fn sqrt_5mod8(&self, sqrt_minus_one: &Self) -> Self {
        let candidate = self.pow(&self.params.p_plus_3_div_8());
        let matches = candidate.square().equals(self);
        let alternative = candidate.mul(sqrt_minus_one);
        Self::ct_select(matches as u8, &alternative, &candidate)
    }

    /// A fixed square root of `-1` in this field, valid whenever
    /// `p ≡ 5 (mod 8)`: the classical identity `2^((p-1)/4)` is one such
    /// root for any such prime.
    pub fn sqrt_minus_one_5mod8(params: &'static FieldParams) -> Self {
        let quarter = limbs::shr(&params.p_minus_1_div_2(), 1);
        Self::from_u64(2, params).pow(&quarter)
    }

    /// The Legendre symbol `(self | p)`, one of `{-1, 0, 1}`.
    pub fn legendre(&self) -> i32 {
        let ls = self.pow(&self.params.p_minus_1_div_2());
        if ls.is_zero() != 0 {
            0
        } else if ls.equals(&Self::one(self.params)) {
            1
        } else {
            -1
        }
    }

    /// The Legendre symbol as a field element of `{-1, 0, 1}`, for formulas
    /// (Elligator-1/2) that use it as a multiplier rather than a branch.
    pub fn legendre_as_field(&self) -> Self {
        Self::from_i64(self.legendre() as i64, self.params)
    }

    #[inline(always)]
    pub fn is_zero(&self) -> u8 {
        limbs::is_zero(&self.limbs) as u8
    }

    #[inline(always)]
    pub fn equals(&self, other: &Self) -> bool {
        limbs::eq(&self.limbs, &other.limbs)
    }

    /// `1` iff `self`, read as a canonical integer, is in the upper half of
    /// `[0, p)` — i.e. `self > (p-1)/2`. Used by Decaf and Elligator sign
    /// conventions.
    pub fn is_negative(&self) -> u8 {
        let half = self.params.p_minus_1_div_2();
        let (_diff, borrow) = limbs::sub(&half, &self.limbs);
        borrow as u8
    }

    /// Conditionally negates so the canonical result always has
    /// `self <= (p-1)/2`.
    pub fn abs(&self) -> Self {
        let negated = self.neg();
        Self::ct_select(self.is_negative(), self, &negated)
    }

    /// Zero if `bit == 0`, unchanged if `bit == 1`.
    pub fn mask(&self, bit: u8) -> Self {
        Self {
            limbs: limbs::ct_select(bit, &limbs::zero(), &self.limbs),
            params: self.params,
        }
    }

    /// Bitwise combination of two field elements, used together with
    /// [`FieldElement::mask`] to build constant-time selects out of
    /// complementary masks.
    pub fn or(&self, other: &Self) -> Self {
        let mut out = limbs::zero();
        for i in 0..MAX_LIMBS {
            out[i] = self.limbs[i] | other.limbs[i];
        }
        Self {
            limbs: out,
            params: self.params,
        }
    }

    /// Constant-time select: `a` if `bit == 0`, `b` if `bit == 1`.
    pub fn ct_select(bit: u8, a: &Self, b: &Self) -> Self {
        Self {
            limbs: limbs::ct_select(bit, &a.limbs, &b.limbs),
            params: a.params,
        }
    }

    /// Constant-time conditional swap.
    pub fn ct_swap(bit: u8, a: &mut Self, b: &mut Self) {
        let new_a = Self::ct_select(bit, a, b);
        let new_b = Self::ct_select(bit, b, a);
        *a = new_a;
        *b = new_b;
    }

    pub fn to_bytes(&self) -> alloc_free_bytes::Bytes {
        let len = self.params.byte_len();
        let mut out = alloc_free_bytes::Bytes::new(len);
        for i in 0..len {
            out.data[len - 1 - i] = ((self.limbs[i / 8] >> ((i % 8) * 8)) & 0xff) as u8;
        }
        out
    }

    /// Decodes a canonical big-endian encoding. Rejects non-canonical
    /// encodings (byte length mismatch, or value `>= p`) as
    /// [`consttime`] cannot rescue a parse error: the failure itself is a
    /// public event, per the external-interfaces contract.
    pub fn from_canonical_bytes(bytes: &[u8], params: &'static FieldParams) -> Option<Self> {
        if bytes.len() != params.byte_len() {
            return None;
        }
        let mut raw = limbs::zero();
        for (i, &byte) in bytes.iter().rev().enumerate() {
            raw[i / 8] |= (byte as u64) << ((i % 8) * 8);
        }
        let p = params.p();
        let (_diff, borrow) = limbs::sub(&raw, &p);
        if borrow == 0 {
            // raw >= p: non-canonical.
            return None;
        }
        Some(Self { limbs: raw, params })
    }
}

/// A tiny fixed-capacity byte buffer so [`FieldElement::to_bytes`] can
/// return an owned, stack-resident value without pulling in `alloc` just
/// for a 28-to-66 byte array whose length varies per curve.
pub mod alloc_free_bytes {
    use super::limbs::MAX_LIMBS;

    /// Maximum encoded width across this crate's catalogue: `MAX_LIMBS * 8`
    /// bytes comfortably exceeds `⌈521/8⌉ = 66`.
    pub const MAX_BYTES: usize = MAX_LIMBS * 8;

    #[derive(Clone, Copy)]
    pub struct Bytes {
        pub data: [u8; MAX_BYTES],
        pub len: usize,
    }

    impl Bytes {
        pub(super) fn new(len: usize) -> Self {
            Self {
                data: [0u8; MAX_BYTES],
                len,
            }
        }

        pub fn as_slice(&self) -> &[u8] {
            &self.data[..self.len]
        }
    }

    impl core::ops::Index<usize> for Bytes {
        type Output = u8;
        fn index(&self, i: usize) -> &u8 {
            &self.data[..self.len][i]
        }
    }

    impl IntoIterator for Bytes {
        type Item = u8;
        type IntoIter = core::iter::Take<core::array::IntoIter<u8, MAX_BYTES>>;
        fn into_iter(self) -> Self::IntoIter {
            self.data.into_iter().take(self.len)
        }
    }

    impl PartialEq<[u8]> for Bytes {
        fn eq(&self, other: &[u8]) -> bool {
            crate::consttime::ct_eq_bytes(self.as_slice(), other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;

    #[test]
    fn add_sub_are_inverse() {
        let p = curves::curve1174_field();
        let a = FieldElement::from_u64(12345, p);
        let b = FieldElement::from_u64(999_999_999, p);
        assert!(a.add(&b).sub(&b).equals(&a));
    }

    #[test]
    fn neg_zero_is_zero() {
        let p = curves::curve1174_field();
        let zero = FieldElement::zero(p);
        assert!(zero.neg().equals(&zero));
    }

    #[test]
    fn mul_by_inverse_is_one() {
        let p = curves::curve1174_field();
        let a = FieldElement::from_u64(424242, p);
        let inv = a.invert();
        assert!(a.mul(&inv).equals(&FieldElement::one(p)));
    }

    #[test]
    fn sqrt_3mod4_of_square_matches_up_to_sign() {
        let p = curves::curve1174_field();
        let a = FieldElement::from_u64(7, p);
        let square = a.square();
        assert_eq!(square.legendre(), 1);
        let root = square.sqrt_3mod4();
        let matches_direct = root.equals(&a);
        let matches_negated = root.equals(&a.neg());
        assert!(matches_direct || matches_negated);
    }

    #[test]
    fn legendre_of_zero_is_zero() {
        let p = curves::curve1174_field();
        assert_eq!(FieldElement::zero(p).legendre(), 0);
    }

    #[test]
    fn canonical_round_trip_through_bytes() {
        let p = curves::curve1174_field();
        let a = FieldElement::from_u64(0xdead_beef_cafe, p);
        let bytes = a.to_bytes();
        let decoded = FieldElement::from_canonical_bytes(bytes.as_slice(), p).unwrap();
        assert!(decoded.equals(&a));
    }

    #[test]
    fn non_canonical_bytes_are_rejected() {
        let p = curves::curve1174_field();
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0x0f; // still forces value >= p for a 251-bit field in 32 bytes
        assert!(FieldElement::from_canonical_bytes(&bytes, p).is_none());
    }

    #[test]
    fn mul_small_matches_repeated_addition() {
        let p = curves::curve1174_field();
        let a = FieldElement::from_u64(17, p);
        let by_mul = a.mul_small(5);
        let by_add = a.add(&a).add(&a).add(&a).add(&a);
        assert!(by_mul.equals(&by_add));
    }
}
