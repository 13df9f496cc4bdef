//! Operator traits for `Uint`
//!
//! The operators are thin wrappers around the named methods, with the same
//! semantics:
//! - `+`, `-`, `*` wrap modulo 2^W and accept a right operand of any width
//! - `/`, `%` panic on a zero divisor
//! - `<<`, `>>` take a bit count and yield zero past the width
//! - bitwise operators combine two values of the same width

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

use crate::primitives::Uint;

/// Addition modulo 2^W.
impl<const LIMBS: usize, const M: usize> Add<Uint<M>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn add(self, rhs: Uint<M>) -> Self::Output {
        self.wrapping_add(&rhs)
    }
}

/// Subtraction modulo 2^W.
impl<const LIMBS: usize, const M: usize> Sub<Uint<M>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn sub(self, rhs: Uint<M>) -> Self::Output {
        self.wrapping_sub(&rhs)
    }
}

/// Multiplication modulo 2^W.
impl<const LIMBS: usize, const M: usize> Mul<Uint<M>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn mul(self, rhs: Uint<M>) -> Self::Output {
        self.wrapping_mul(&rhs)
    }
}

impl<const LIMBS: usize, const M: usize> Div<Uint<M>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn div(self, rhs: Uint<M>) -> Self::Output {
        self.div_rem(&rhs).0
    }
}

impl<const LIMBS: usize, const M: usize> Rem<Uint<M>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn rem(self, rhs: Uint<M>) -> Self::Output {
        self.div_rem(&rhs).1
    }
}

impl<const LIMBS: usize> Shl<u32> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn shl(self, rhs: u32) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl<const LIMBS: usize> Shr<u32> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn shr(self, rhs: u32) -> Self::Output {
        self.shift_right(rhs)
    }
}

macro_rules! impl_bitwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<const LIMBS: usize> $trait for Uint<LIMBS> {
            type Output = Uint<LIMBS>;

            fn $method(self, rhs: Uint<LIMBS>) -> Self::Output {
                let mut out = [0u64; LIMBS];

                out.iter_mut()
                    .zip(self.0.iter().zip(rhs.0.iter()))
                    .for_each(|(o, (l, r))| *o = l $op r);

                Uint(out)
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, &);
impl_bitwise!(BitOr, bitor, |);
impl_bitwise!(BitXor, bitxor, ^);

impl<const LIMBS: usize> Not for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn not(self) -> Self::Output {
        Uint(self.0.map(|limb| !limb))
    }
}
