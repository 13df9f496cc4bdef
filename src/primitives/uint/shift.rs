//! Logical shifts across limb boundaries.
//!
//! A shift by `n` splits into a whole-limb move of `n / 64` positions and a
//! bit shift of `n % 64`; every destination limb is assembled from two
//! adjacent source limbs. Vacated bits are zero. Shifts by the full width or
//! more yield zero.

use crate::primitives::Uint;
use crate::primitives::uint::core::LIMB_BITS;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Logical left shift by `n` bits.
    pub fn shift_left(&self, n: u32) -> Self {
        if n == 0 {
            return *self;
        }
        if n >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (n / LIMB_BITS) as usize;
        let bit_shift = n % LIMB_BITS;
        let mut out = [0u64; LIMBS];

        for (i, o) in out.iter_mut().enumerate().skip(limb_shift) {
            let src = i - limb_shift;

            *o = self.0[src] << bit_shift;
            if bit_shift != 0 && src > 0 {
                *o |= self.0[src - 1] >> (LIMB_BITS - bit_shift);
            }
        }

        Self(out)
    }

    /// Logical right shift by `n` bits.
    pub fn shift_right(&self, n: u32) -> Self {
        if n == 0 {
            return *self;
        }
        if n >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (n / LIMB_BITS) as usize;
        let bit_shift = n % LIMB_BITS;
        let mut out = [0u64; LIMBS];

        for (i, o) in out.iter_mut().enumerate().take(LIMBS - limb_shift) {
            let src = i + limb_shift;

            *o = self.0[src] >> bit_shift;
            if bit_shift != 0 && src + 1 < LIMBS {
                *o |= self.0[src + 1] << (LIMB_BITS - bit_shift);
            }
        }

        Self(out)
    }
}
