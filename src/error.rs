//! Error type shared by every fallible operation in this crate.

/// Errors raised by point construction, decompression, and the Elligator maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A candidate point does not lie on the curve, a decompression input
    /// failed validation, or a birational conversion hit a 2-torsion
    /// singularity.
    InvalidPoint,

    /// An Elligator `decode` input landed in the map's exceptional set
    /// (`t = -1` for Elligator-1, `1 + 2r² = 0` for Elligator-2).
    InvalidHashInput,

    /// An Elligator `encode` was attempted on a point for which
    /// `canEncode` is false.
    EncodeRefused,
}

pub type CoreResult<T> = Result<T, CoreError>;
