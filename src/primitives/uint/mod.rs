//! Fixed-width unsigned integer primitive
//!
//! This module defines `Uint<LIMBS>`, an unsigned integer of
//! `LIMBS * 64` bits, together with its arithmetic kernel.
//!
//! `Uint` is designed as a low-level, dependency-free value type rather than
//! a full big-integer abstraction. Every binary operation accepts an operand
//! of any other width and returns a new value of the receiver's width:
//! - `core`: representation, width validation, limb access
//! - `conv`: cross-width and scalar conversions
//! - `cmp`: ordering across widths
//! - `add`: ripple-carry addition and subtraction
//! - `shift`: logical shifts
//! - `mul`: truncating, widening and resizing products
//! - `div`: quotient and remainder
//! - `sqrt`, `fmt`, `ops`: square root, text output, operator traits

mod add;
mod cmp;
mod conv;
mod core;
mod div;
mod fmt;
mod mul;
mod ops;
mod shift;
mod sqrt;

pub use self::core::{LIMB_BITS, Uint, check_width};

/// 64-bit unsigned integer (one limb).
pub type U64 = Uint<1>;
/// 128-bit unsigned integer.
pub type U128 = Uint<2>;
/// 256-bit unsigned integer.
pub type U256 = Uint<4>;
/// 512-bit unsigned integer.
pub type U512 = Uint<8>;
/// 1024-bit unsigned integer.
pub type U1024 = Uint<16>;
/// 2048-bit unsigned integer.
pub type U2048 = Uint<32>;
/// 4096-bit unsigned integer.
pub type U4096 = Uint<64>;
/// 8192-bit unsigned integer.
pub type U8192 = Uint<128>;
/// 16384-bit unsigned integer.
pub type U16384 = Uint<256>;
