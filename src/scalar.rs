//! Fixed-capacity big integers for scalars and curve orders.
//!
//! A [`Scalar`] lives in a different ring than [`crate::field::FieldElement`]
//! — it is reduced mod the group order `n`, not mod the field prime `p` — so
//! it gets its own small type rather than reusing `FieldElement`. It shares
//! the same limb capacity and bit-extraction helpers, since the Montgomery
//! ladder and the Elligator maps both need to walk a scalar bit by bit.

use crate::field::limbs;
use crate::field::RawLimbs as Limbs;

pub use crate::field::MAX_LIMBS;

/// A non-negative integer, little-endian limbs, processed out to a fixed,
/// publicly-known bit count.
#[derive(Clone, Copy, Debug)]
pub struct Scalar {
    limbs: Limbs,
    /// Number of bits the ladder/encoders walk — a curve's prime-order bit
    /// length, not a function of this particular value.
    pub bits: u32,
}

impl Scalar {
    pub fn from_u64(v: u64, bits: u32) -> Self {
        Self {
            limbs: limbs::from_u64(v),
            bits,
        }
    }

    pub fn from_limbs(limbs: Limbs, bits: u32) -> Self {
        Self { limbs, bits }
    }

    /// Decodes a fixed-width little-endian byte string, as used for scalar
    /// key material.
    pub fn from_le_bytes(bytes: &[u8], bits: u32) -> Self {
        let mut out = limbs::zero();
        for (i, &byte) in bytes.iter().enumerate() {
            out[i / 8] |= (byte as u64) << ((i % 8) * 8);
        }
        Self { limbs: out, bits }
    }

    #[inline(always)]
    pub fn bit(&self, i: u32) -> u8 {
        if i >= self.bits {
            0
        } else {
            limbs::bit(&self.limbs, i)
        }
    }

    pub fn raw(&self) -> Limbs {
        self.limbs
    }

    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.limbs)
    }
}
