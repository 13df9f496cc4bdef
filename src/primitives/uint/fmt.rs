//! Text formatting for `Uint`.
//!
//! `Display` prints the decimal value, built from repeated short division by
//! 10^9. The radix formats print the most significant nonzero limb as is and
//! every lower limb zero-padded, and honor the `#` flag for a prefix.

use std::fmt::{self, Binary, Display, Formatter, LowerHex, UpperHex, Write};

use crate::primitives::Uint;

/// Largest power of ten below 2^32, so each step stays on the fast path.
const DECIMAL_CHUNK: u64 = 1_000_000_000;

impl<const LIMBS: usize> Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut chunks = Vec::new();
        let mut rest = *self;

        while !rest.is_zero() {
            let (quotient, chunk) = rest.div_rem_digit(DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }

        let mut out = String::with_capacity(chunks.len() * 9 + 1);
        let mut chunks = chunks.iter().rev();

        match chunks.next() {
            Some(first) => write!(out, "{first}")?,
            None => out.push('0'),
        }
        for chunk in chunks {
            write!(out, "{chunk:09}")?;
        }

        f.pad_integral(true, "", &out)
    }
}

macro_rules! impl_radix_fmt {
    ($trait:ident, $prefix:literal, $first:literal, $rest:literal) => {
        impl<const LIMBS: usize> $trait for Uint<LIMBS> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut out = String::new();
                let mut limbs = self.0.iter().rev().skip_while(|&&limb| limb == 0);

                match limbs.next() {
                    Some(first) => write!(out, $first, first)?,
                    None => out.push('0'),
                }
                for limb in limbs {
                    write!(out, $rest, limb)?;
                }

                f.pad_integral(true, $prefix, &out)
            }
        }
    };
}

impl_radix_fmt!(LowerHex, "0x", "{:x}", "{:016x}");
impl_radix_fmt!(UpperHex, "0x", "{:X}", "{:016X}");
impl_radix_fmt!(Binary, "0b", "{:b}", "{:064b}");
