//! Fixed-width unsigned integer primitive
//!
//! This module defines `Uint<LIMBS>`, an unsigned integer whose width is
//! fixed at compile time to `LIMBS * 64` bits.
//!
//! It is designed as a **simple, explicit value type**: every operation
//! reads its operands and returns a new value, nothing is heap allocated and
//! nothing is shared. The width must be a power of two of at least 64 bits;
//! this is checked when the type is instantiated through any infallible
//! constructor, and can be checked at runtime through [`check_width`] and
//! [`Uint::try_new`].
//!
//! The internal representation is **little-endian by limb**: limb 0 holds
//! the least significant 64 bits.

use crate::primitives::UintError;

/// Number of bits in one limb.
pub const LIMB_BITS: u32 = u64::BITS;

/// Half-limb digit width used by multiplication and short division.
pub(crate) const DIGIT_BITS: u32 = 32;
pub(crate) const DIGIT_MASK: u64 = 0xFFFF_FFFF;

/// Fixed-size unsigned integer of `LIMBS * 64` bits.
///
/// The value is stored as `LIMBS` 64-bit words, least significant first.
/// Values of different widths can be compared and combined; limbs past the
/// end of the shorter operand read as zero.
#[derive(Copy, Clone, Debug)]
pub struct Uint<const LIMBS: usize>(pub(crate) [u64; LIMBS]);

/// Validates a width in bits and returns the matching limb count.
///
/// A width is valid when it is a power of two and at least one limb wide.
pub fn check_width(bits: usize) -> Result<usize, UintError> {
    if bits < LIMB_BITS as usize || !bits.is_power_of_two() {
        return Err(UintError::InvalidWidth { bits });
    }

    Ok(bits / LIMB_BITS as usize)
}

impl<const LIMBS: usize> Uint<LIMBS> {
    const VALID_WIDTH: () = assert!(
        LIMBS.is_power_of_two(),
        "Uint width must be a power of two of at least 64 bits"
    );

    /// Number of limbs.
    pub const LIMBS: usize = LIMBS;

    /// Width in bits.
    pub const BITS: u32 = LIMBS as u32 * LIMB_BITS;

    /// The value zero.
    pub const ZERO: Self = Self::from_limbs([0; LIMBS]);

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// The maximum representable value (2^W − 1).
    pub const MAX: Self = Self::from_limbs([u64::MAX; LIMBS]);

    /// Returns zero.
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Returns zero after validating the width at runtime.
    ///
    /// Unlike [`Uint::new`], this never fails the build for an invalid
    /// `LIMBS`; it reports [`UintError::InvalidWidth`] instead.
    pub fn try_new() -> Result<Self, UintError> {
        check_width(LIMBS * LIMB_BITS as usize)?;

        Ok(Self([0; LIMBS]))
    }

    /// Builds a value from its limbs, least significant first.
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        let () = Self::VALID_WIDTH;

        Self(limbs)
    }

    /// Builds a value whose limb 0 is `value` and every other limb zero.
    pub const fn from_u64(value: u64) -> Self {
        let () = Self::VALID_WIDTH;

        let mut limbs = [0u64; LIMBS];
        limbs[0] = value;

        Self(limbs)
    }

    /// Number of limbs in this value.
    pub const fn limb_count(&self) -> usize {
        LIMBS
    }

    /// Returns limb `index`.
    ///
    /// # Panics
    /// If `index >= LIMBS`.
    pub fn limb(&self, index: usize) -> u64 {
        assert!(index < LIMBS, "limb index out of range");

        self.0[index]
    }

    /// Overwrites limb `index` with `value`.
    ///
    /// # Panics
    /// If `index >= LIMBS`.
    pub fn set_limb(&mut self, index: usize, value: u64) {
        assert!(index < LIMBS, "limb index out of range");

        self.0[index] = value;
    }

    /// Returns limb `index`, or an error if it is out of range.
    pub fn try_limb(&self, index: usize) -> Result<u64, UintError> {
        self.0
            .get(index)
            .copied()
            .ok_or(UintError::LimbIndexOutOfRange { index, limbs: LIMBS })
    }

    /// Overwrites limb `index`, or returns an error if it is out of range.
    pub fn try_set_limb(&mut self, index: usize, value: u64) -> Result<(), UintError> {
        let limb = self
            .0
            .get_mut(index)
            .ok_or(UintError::LimbIndexOutOfRange { index, limbs: LIMBS })?;
        *limb = value;

        Ok(())
    }

    /// Borrows the limbs, least significant first.
    pub const fn as_limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    /// Copies out the limbs, least significant first.
    pub const fn to_limbs(self) -> [u64; LIMBS] {
        self.0
    }

    /// Returns `true` if every limb is zero.
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < LIMBS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }

        true
    }

    /// Returns `true` if the least significant bit is set.
    pub const fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Returns bit `index`, or `false` past the width.
    pub fn bit(&self, index: u32) -> bool {
        if index >= Self::BITS {
            return false;
        }

        let limb = self.0[(index / LIMB_BITS) as usize];
        (limb >> (index % LIMB_BITS)) & 1 == 1
    }

    /// Counts the number of leading zero bits.
    ///
    /// Scans from the most significant limb and returns the number of zero
    /// bits before the first one bit, in the range `0..=W`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == 0 {
                count += LIMB_BITS;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Counts the number of trailing zero bits, in the range `0..=W`.
    pub fn trailing_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter() {
            if limb == 0 {
                count += LIMB_BITS;
            } else {
                count += limb.trailing_zeros();
                return count;
            }
        }

        count
    }

    /// Minimum number of bits needed to represent the value.
    pub fn bits(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

/// Provides a manual `Default` implementation for `Uint`.
///
/// `Default` is only implemented for arrays of up to 32 elements, so
/// `#[derive(Default)]` cannot be used for the wider limb arrays.
///
/// The default value is zero, consistent with `Uint::ZERO`.
impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Reads half-limb digit `index` (32 bits) from a limb slice.
#[inline]
pub(crate) fn digit(limbs: &[u64], index: usize) -> u64 {
    let limb = limbs[index / 2];

    if index % 2 == 1 {
        limb >> DIGIT_BITS
    } else {
        limb & DIGIT_MASK
    }
}

/// Writes half-limb digit `index`; only the low 32 bits of `value` are used.
#[inline]
pub(crate) fn set_digit(limbs: &mut [u64], index: usize, value: u64) {
    let limb = &mut limbs[index / 2];
    let value = value & DIGIT_MASK;

    if index % 2 == 1 {
        *limb = (*limb & DIGIT_MASK) | (value << DIGIT_BITS);
    } else {
        *limb = (*limb & !DIGIT_MASK) | value;
    }
}
