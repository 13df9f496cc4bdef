//! Division and remainder.
//!
//! Quotient and remainder always come out of one computation, so `rem`
//! agrees bit for bit with `self - div * divisor`.
//!
//! Divisors below 2^32 take a short-division fast path over 32-bit digits.
//! Larger divisors use shift-and-subtract long division, one quotient bit
//! per step from the dividend's highest set bit down.

use crate::primitives::uint::core::{DIGIT_BITS, DIGIT_MASK, LIMB_BITS, digit, set_digit};
use crate::primitives::{Uint, UintError};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Returns `(self / divisor, self % divisor)`.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn div_rem<const M: usize>(&self, divisor: &Uint<M>) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero");

        self.div_rem_nonzero(divisor)
    }

    /// Integer quotient.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn div<const M: usize>(&self, divisor: &Uint<M>) -> Self {
        self.div_rem(divisor).0
    }

    /// Remainder of the division.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn rem<const M: usize>(&self, divisor: &Uint<M>) -> Self {
        self.div_rem(divisor).1
    }

    /// Like [`Uint::div_rem`], returning [`UintError::DivisionByZero`]
    /// instead of panicking.
    pub fn checked_div_rem<const M: usize>(
        &self,
        divisor: &Uint<M>,
    ) -> Result<(Self, Self), UintError> {
        if divisor.is_zero() {
            return Err(UintError::DivisionByZero);
        }

        Ok(self.div_rem_nonzero(divisor))
    }

    pub fn checked_div<const M: usize>(&self, divisor: &Uint<M>) -> Result<Self, UintError> {
        self.checked_div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem<const M: usize>(&self, divisor: &Uint<M>) -> Result<Self, UintError> {
        self.checked_div_rem(divisor).map(|(_, remainder)| remainder)
    }

    fn div_rem_nonzero<const M: usize>(&self, divisor: &Uint<M>) -> (Self, Self) {
        if self.is_zero() {
            return (Self::ZERO, Self::ZERO);
        }
        if divisor.is_greater(self) {
            return (Self::ZERO, *self);
        }

        // divisor <= self, so nothing is lost narrowing it to our width
        let divisor: Self = divisor.resize();

        if divisor.0[1..].iter().all(|&limb| limb == 0) && divisor.0[0] <= DIGIT_MASK {
            let (quotient, remainder) = self.div_rem_digit(divisor.0[0]);
            return (quotient, Self::from_u64(remainder));
        }

        self.div_rem_long(&divisor)
    }

    /// Short division by a nonzero single digit (`divisor < 2^32`).
    pub(crate) fn div_rem_digit(&self, divisor: u64) -> (Self, u64) {
        debug_assert!(divisor != 0 && divisor <= DIGIT_MASK);

        let mut quotient = [0u64; LIMBS];
        let mut carry = 0u64;

        for i in (0..LIMBS * 2).rev() {
            // carry < divisor < 2^32, so `cur` fits and `cur / divisor` is one digit
            let cur = (carry << DIGIT_BITS) | digit(&self.0, i);
            set_digit(&mut quotient, i, cur / divisor);
            carry = cur % divisor;
        }

        (Self(quotient), carry)
    }

    fn div_rem_long(&self, divisor: &Self) -> (Self, Self) {
        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;

        for bit in (0..self.bits()).rev() {
            // The remainder register can briefly need W + 1 bits when the
            // divisor's top bit is set; the spilled bit forces a subtraction.
            let spilled = remainder.bit(Self::BITS - 1);

            remainder = remainder.shift_left(1);
            remainder.0[0] |= self.bit(bit) as u64;

            if spilled || remainder.is_greater_or_equal(divisor) {
                remainder = remainder.wrapping_sub(divisor);
                quotient.0[(bit / LIMB_BITS) as usize] |= 1 << (bit % LIMB_BITS);
            }
        }

        (quotient, remainder)
    }
}
