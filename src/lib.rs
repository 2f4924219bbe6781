//! Elliptic-curve cryptography core primitives.
//!
//! This crate provides the mathematical substrate for elliptic-curve
//! cryptography over curves expressible in both Montgomery form
//! `y² = x³ + A·x² + x` and birationally-equivalent twisted-Edwards form
//! `a·x² + y² = 1 + d·x²·y²`: prime-field arithmetic modulo primes of the
//! form `2ᵏ − c`, projective point arithmetic with optional Decaf
//! cofactor-killing compression, a constant-time Montgomery ladder, and the
//! Elligator-1/Elligator-2 hash-to-curve maps.
//!
//! The focus is on **clarity, predictability, and constant-time execution**
//! rather than on a large or high-level API. No key-agreement or signature
//! protocol is specified here — that belongs one layer up, built on these
//! primitives.
//!
//! # Module overview
//!
//! - [`error`] — the three error kinds every fallible operation returns.
//! - [`consttime`] — branchless select/swap/compare primitives.
//! - [`field`] — the generic `𝔽ₚ` engine, one implementation serving every
//!   supported prime width.
//! - [`scalar`] — fixed-capacity big integers for scalars and curve orders.
//! - [`curve`] — immutable per-curve constant records.
//! - [`curves`] — concrete curve instances (illustrative wiring only; see
//!   that module's docs).
//! - [`point`] — projective Edwards and x-only Montgomery point types, and
//!   the birational map between them.
//! - [`decaf`] — cofactor-4 Decaf compression/decompression.
//! - [`ladder`] — the constant-time Montgomery ladder.
//! - [`elligator1`] / [`elligator2`] — hash-to-curve maps.
//! - [`scratch`] — thread-local scratch registers.
//! - [`group`] — the facade binding a curve to a point representation.
//!
//! # Design goals
//!
//! - No heap allocation on any hot (secret-dependent) path.
//! - Constant-time execution: no branch, memory access, or instruction
//!   sequence may depend on secret data.
//! - One generic engine per subsystem — no per-curve hand-unrolled code.

pub mod consttime;
pub mod curve;
pub mod curves;
pub mod decaf;
pub mod elligator1;
pub mod elligator2;
pub mod error;
pub mod field;
pub mod group;
pub mod ladder;
pub mod point;
pub mod scalar;
pub mod scratch;
