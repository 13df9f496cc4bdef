//! Schoolbook multiplication.
//!
//! The default kernel works on 32-bit half-limb digits so that every partial
//! step `a_i * b_j + acc + carry` fits in a `u64`. With the `speed` feature
//! the kernel works on whole limbs with `u128` partial products instead;
//! both produce identical results.
//!
//! Three result widths are offered:
//! - [`Uint::wrapping_mul`]: the receiver's width, high bits discarded
//! - [`Uint::widening_mul`]: twice the receiver's width, as `(lo, hi)`
//! - [`Uint::resizing_mul`]: any width chosen by the caller

#[cfg(not(feature = "speed"))]
use crate::primitives::uint::core::{DIGIT_BITS, digit, set_digit};
use crate::primitives::{Uint, UintError};

/// Multiplies two limb slices into `out`, keeping the low `out.len()` limbs.
///
/// `out` must be zeroed on entry.
#[cfg(not(feature = "speed"))]
pub(crate) fn mul_limbs(lhs: &[u64], rhs: &[u64], out: &mut [u64]) {
    let out_digits = out.len() * 2;
    let rhs_digits = rhs.len() * 2;

    for i in 0..(lhs.len() * 2).min(out_digits) {
        let a = digit(lhs, i);
        if a == 0 {
            continue;
        }

        let mut carry = 0u64;
        for j in 0..rhs_digits {
            let k = i + j;
            if k >= out_digits {
                break;
            }

            let cur = a * digit(rhs, j) + digit(out, k) + carry;
            set_digit(out, k, cur);
            carry = cur >> DIGIT_BITS;
        }

        // Row i has not reached this position yet, so it is still zero.
        let k = i + rhs_digits;
        if k < out_digits {
            set_digit(out, k, carry);
        }
    }
}

/// Multiplies two limb slices into `out`, keeping the low `out.len()` limbs.
///
/// `out` must be zeroed on entry.
#[cfg(feature = "speed")]
pub(crate) fn mul_limbs(lhs: &[u64], rhs: &[u64], out: &mut [u64]) {
    let n = out.len();

    for (i, &a) in lhs.iter().enumerate().take(n) {
        if a == 0 {
            continue;
        }

        let mut carry = 0u64;
        for (j, &b) in rhs.iter().enumerate() {
            let k = i + j;
            if k >= n {
                break;
            }

            let cur = a as u128 * b as u128 + out[k] as u128 + carry as u128;
            out[k] = cur as u64;
            carry = (cur >> 64) as u64;
        }

        let k = i + rhs.len();
        if k < n {
            out[k] = carry;
        }
    }
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Product truncated to `R` limbs.
    ///
    /// With `R >= LIMBS + M` the product is exact.
    pub fn resizing_mul<const R: usize, const M: usize>(&self, rhs: &Uint<M>) -> Uint<R> {
        let mut out = [0u64; R];

        if !self.is_zero() && !rhs.is_zero() {
            mul_limbs(&self.0, &rhs.0, &mut out);
        }

        Uint::from_limbs(out)
    }

    /// Product modulo 2^W.
    pub fn wrapping_mul<const M: usize>(&self, rhs: &Uint<M>) -> Self {
        self.resizing_mul(rhs)
    }

    /// Double-width product, returned as `(lo, hi)` halves of the receiver's
    /// width.
    ///
    /// Exact whenever `M <= LIMBS`; a wider operand is reduced modulo 2^(2W).
    pub fn widening_mul<const M: usize>(&self, rhs: &Uint<M>) -> (Self, Self) {
        let mut wide = [[0u64; LIMBS]; 2];

        if !self.is_zero() && !rhs.is_zero() {
            mul_limbs(&self.0, &rhs.0, wide.as_flattened_mut());
        }

        (Self::from_limbs(wide[0]), Self::from_limbs(wide[1]))
    }

    /// Product that fails with [`UintError::Overflow`] instead of truncating.
    pub fn checked_mul<const M: usize>(&self, rhs: &Uint<M>) -> Result<Self, UintError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }

        let rhs: Self = rhs.checked_resize().map_err(|_| UintError::Overflow)?;
        let (lo, hi) = self.widening_mul(&rhs);

        if !hi.is_zero() {
            return Err(UintError::Overflow);
        }

        Ok(lo)
    }
}
