//! Primitive types
//!
//! This module defines the fixed-width unsigned integer type and the error
//! reported by its checked operations.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate a full-featured
//! big-integer library.
//!
//! - `Uint<LIMBS>`: an unsigned integer of `LIMBS * 64` bits, with aliases
//!   from `U64` up to `U16384`
//! - `UintError`: precondition failures of the checked API

mod error;
mod uint;

pub use error::UintError;
pub use uint::{
    LIMB_BITS, U64, U128, U256, U512, U1024, U2048, U4096, U8192, U16384, Uint, check_width,
};
