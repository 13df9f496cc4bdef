//! Fixed-width unsigned integer kernel
//!
//! This crate provides `Uint<LIMBS>`, an unsigned integer whose width is a
//! compile-time power of two of at least 64 bits, stored as an array of
//! 64-bit limbs. It supplies the primitive arithmetic needed to build
//! higher-level big-number or cryptographic code without relying on a
//! platform bignum:
//!
//! - addition and subtraction with carry/borrow propagation
//! - truncating, widening and explicitly sized multiplication
//! - division and remainder, with a single-digit fast path
//! - ordering comparisons and logical shifts
//!
//! Every binary operation accepts an operand of any other width. Limbs past
//! the end of the shorter operand read as zero.
//!
//! ```
//! use fixuint::{U128, U256};
//!
//! let a = U128::from(u64::MAX);
//! let sum = a.wrapping_add(&U256::ONE);
//! assert_eq!(sum.as_limbs(), &[0, 1]);
//!
//! let (q, r) = U128::from(100u64).div_rem(&U128::from(12u64));
//! assert_eq!((q, r), (U128::from(8u64), U128::from(4u64)));
//! ```
//!
//! # Failure model
//!
//! - Invalid widths do not build; [`check_width`] and [`Uint::try_new`]
//!   validate at runtime instead.
//! - Out-of-range limb indices and zero divisors panic. The `try_*` and
//!   `checked_*` methods report the same conditions as [`UintError`].
//! - Overflow in addition, subtraction and truncating multiplication wraps
//!   modulo 2^W and is not an error.
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Pure functions over `Copy` values
//! - Stable, well-defined semantics at every limb boundary

pub mod primitives;

pub use primitives::{
    LIMB_BITS, U64, U128, U256, U512, U1024, U2048, U4096, U8192, U16384, Uint, UintError,
    check_width,
};
