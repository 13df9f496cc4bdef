//! Ordering between `Uint` values of any two widths.
//!
//! `is_greater` is the single source of truth: equality, the other
//! predicates and the standard comparison traits are all derived from it.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::primitives::Uint;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Returns `true` if `self > other`.
    ///
    /// Limbs present only in the wider operand decide the result as soon as
    /// one of them is nonzero; otherwise the shared limbs are compared from
    /// the most significant down.
    pub fn is_greater<const M: usize>(&self, other: &Uint<M>) -> bool {
        if self.0.iter().skip(M).any(|&limb| limb != 0) {
            return true;
        }
        if other.0.iter().skip(LIMBS).any(|&limb| limb != 0) {
            return false;
        }

        let shared = LIMBS.min(M);
        for (&a, &b) in self.0[..shared].iter().zip(&other.0[..shared]).rev() {
            if a != b {
                return a > b;
            }
        }

        false
    }

    /// Returns `true` if neither operand is greater than the other.
    pub fn is_equal<const M: usize>(&self, other: &Uint<M>) -> bool {
        !(self.is_greater(other) || other.is_greater(self))
    }

    /// Returns `true` if `self < other`.
    pub fn is_less<const M: usize>(&self, other: &Uint<M>) -> bool {
        other.is_greater(self)
    }

    pub fn is_greater_or_equal<const M: usize>(&self, other: &Uint<M>) -> bool {
        !self.is_less(other)
    }

    pub fn is_less_or_equal<const M: usize>(&self, other: &Uint<M>) -> bool {
        !self.is_greater(other)
    }

    pub fn is_not_equal<const M: usize>(&self, other: &Uint<M>) -> bool {
        !self.is_equal(other)
    }

    /// Three-way comparison across widths.
    pub fn cmp_uint<const M: usize>(&self, other: &Uint<M>) -> Ordering {
        if self.is_greater(other) {
            Ordering::Greater
        } else if other.is_greater(self) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl<const LIMBS: usize, const M: usize> PartialEq<Uint<M>> for Uint<LIMBS> {
    fn eq(&self, other: &Uint<M>) -> bool {
        self.is_equal(other)
    }
}

impl<const LIMBS: usize> Eq for Uint<LIMBS> {}

impl<const LIMBS: usize, const M: usize> PartialOrd<Uint<M>> for Uint<LIMBS> {
    fn partial_cmp(&self, other: &Uint<M>) -> Option<Ordering> {
        Some(self.cmp_uint(other))
    }
}

impl<const LIMBS: usize> Ord for Uint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_uint(other)
    }
}

// Equal values of one width have identical limbs, so hashing the limbs
// agrees with `Eq`.
impl<const LIMBS: usize> Hash for Uint<LIMBS> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
