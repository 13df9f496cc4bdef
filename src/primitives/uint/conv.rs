//! Conversions for `Uint`
//!
//! This module groups the explicit conversions between `Uint` values of
//! different widths and between `Uint` and native integer types:
//! - widening is always exact
//! - narrowing through [`Uint::resize`] silently drops high-order limbs
//! - the fallible forms refuse to drop any nonzero bits

use crate::primitives::{Uint, UintError};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Builds a value from another width.
    ///
    /// Copies `min(LIMBS, M)` limbs positionally. When `LIMBS > M` the extra
    /// high limbs are zero; when `LIMBS < M` the operand's high limbs are
    /// dropped without error.
    pub fn from_uint<const M: usize>(other: &Uint<M>) -> Self {
        let mut limbs = [0u64; LIMBS];
        let shared = LIMBS.min(M);

        limbs[..shared].copy_from_slice(&other.0[..shared]);

        Self::from_limbs(limbs)
    }

    /// Converts to width `M`, truncating when narrowing.
    pub fn resize<const M: usize>(&self) -> Uint<M> {
        Uint::<M>::from_uint(self)
    }

    /// Converts to width `M`, failing if a nonzero limb would be dropped.
    pub fn checked_resize<const M: usize>(&self) -> Result<Uint<M>, UintError> {
        if self.0.iter().skip(M).any(|&limb| limb != 0) {
            return Err(UintError::Truncation);
        }

        Ok(self.resize())
    }

    /// Builds a value from a limb slice of any length, least significant first.
    ///
    /// Missing high limbs read as zero. Extra limbs are accepted only if they
    /// are zero.
    pub fn try_from_limbs(limbs: &[u64]) -> Result<Self, UintError> {
        if limbs.iter().skip(LIMBS).any(|&limb| limb != 0) {
            return Err(UintError::Truncation);
        }

        let mut out = [0u64; LIMBS];
        let shared = LIMBS.min(limbs.len());
        out[..shared].copy_from_slice(&limbs[..shared]);

        Ok(Self::from_limbs(out))
    }
}

/// Converts limbs (least significant first) into a `Uint`.
impl<const LIMBS: usize> From<[u64; LIMBS]> for Uint<LIMBS> {
    fn from(limbs: [u64; LIMBS]) -> Self {
        Self::from_limbs(limbs)
    }
}

/// Converts a `Uint` into its limbs, least significant first.
impl<const LIMBS: usize> From<Uint<LIMBS>> for [u64; LIMBS] {
    fn from(value: Uint<LIMBS>) -> Self {
        value.0
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {
        $(
            /// Places the value in limb 0, with every other limb zero.
            impl<const LIMBS: usize> From<$t> for Uint<LIMBS> {
                fn from(value: $t) -> Self {
                    Self::from_u64(value as u64)
                }
            }
        )*
    };
}

impl_from_scalar!(u8, u16, u32, u64);

/// Converts a `u128`, failing only on a single-limb `Uint` whose high half
/// would be lost.
impl<const LIMBS: usize> TryFrom<u128> for Uint<LIMBS> {
    type Error = UintError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        Self::try_from_limbs(&[value as u64, (value >> 64) as u64])
    }
}

/// Attempts to convert a `Uint` into a `u64`.
///
/// Succeeds only if every limb above limb 0 is zero.
impl<const LIMBS: usize> TryFrom<Uint<LIMBS>> for u64 {
    type Error = UintError;

    fn try_from(value: Uint<LIMBS>) -> Result<Self, Self::Error> {
        if value.0[1..].iter().any(|&limb| limb != 0) {
            return Err(UintError::Truncation);
        }

        Ok(value.0[0])
    }
}

/// Attempts to convert a `Uint` into a `u128`.
///
/// Succeeds only if every limb above limb 1 is zero.
impl<const LIMBS: usize> TryFrom<Uint<LIMBS>> for u128 {
    type Error = UintError;

    fn try_from(value: Uint<LIMBS>) -> Result<Self, Self::Error> {
        if value.0.iter().skip(2).any(|&limb| limb != 0) {
            return Err(UintError::Truncation);
        }

        let low = value.0[0] as u128;
        let high = value.0.get(1).copied().unwrap_or(0) as u128;

        Ok(high << 64 | low)
    }
}
