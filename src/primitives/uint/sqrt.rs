//! Integer square root.

use crate::primitives::Uint;
use crate::primitives::uint::core::LIMB_BITS;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Floor of the square root.
    ///
    /// Decides the root one bit at a time from the top, keeping a candidate
    /// bit only if its square still does not exceed `self`.
    pub fn isqrt(&self) -> Self {
        let mut root = Self::ZERO;

        for bit in (0..self.bits().div_ceil(2)).rev() {
            let mut candidate = root;
            candidate.0[(bit / LIMB_BITS) as usize] |= 1 << (bit % LIMB_BITS);

            let (lo, hi) = candidate.widening_mul(&candidate);
            if hi.is_zero() && lo.is_less_or_equal(self) {
                root = candidate;
            }
        }

        root
    }
}
