//! Ripple-carry addition and subtraction.
//!
//! The operand may have any width. Its limbs past the receiver's width only
//! contribute multiples of 2^W and are ignored by the wrapping forms; when
//! the receiver is wider, the operand reads as zero there and the carry or
//! borrow keeps rippling through every remaining limb of the receiver.

use crate::primitives::{Uint, UintError};

/// `a + b + carry`, returning the low word and the carry out.
#[inline]
pub(crate) const fn adc(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry as u64);

    (sum, c1 | c2)
}

/// `a - b - borrow`, returning the low word and the borrow out.
#[inline]
pub(crate) const fn sbb(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow as u64);

    (diff, b1 | b2)
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Addition modulo 2^W, also reporting whether the true sum overflowed.
    pub fn overflowing_add<const M: usize>(&self, rhs: &Uint<M>) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut carry = false;

        for (i, o) in out.iter_mut().enumerate() {
            let b = rhs.0.get(i).copied().unwrap_or(0);
            (*o, carry) = adc(self.0[i], b, carry);
        }

        let dropped = rhs.0.iter().skip(LIMBS).any(|&limb| limb != 0);

        (Self(out), carry || dropped)
    }

    /// Subtraction modulo 2^W, also reporting whether the true difference
    /// was negative.
    pub fn overflowing_sub<const M: usize>(&self, rhs: &Uint<M>) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut borrow = false;

        for (i, o) in out.iter_mut().enumerate() {
            let b = rhs.0.get(i).copied().unwrap_or(0);
            (*o, borrow) = sbb(self.0[i], b, borrow);
        }

        let dropped = rhs.0.iter().skip(LIMBS).any(|&limb| limb != 0);

        (Self(out), borrow || dropped)
    }

    /// Addition modulo 2^W.
    pub fn wrapping_add<const M: usize>(&self, rhs: &Uint<M>) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Subtraction modulo 2^W. A larger subtrahend wraps around.
    pub fn wrapping_sub<const M: usize>(&self, rhs: &Uint<M>) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Addition that fails with [`UintError::Overflow`] instead of wrapping.
    pub fn checked_add<const M: usize>(&self, rhs: &Uint<M>) -> Result<Self, UintError> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => Err(UintError::Overflow),
        }
    }

    /// Subtraction that fails with [`UintError::Overflow`] instead of wrapping.
    pub fn checked_sub<const M: usize>(&self, rhs: &Uint<M>) -> Result<Self, UintError> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Ok(diff),
            (_, true) => Err(UintError::Overflow),
        }
    }
}
