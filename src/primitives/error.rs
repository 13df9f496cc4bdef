//! Error type for the checked `Uint` API.
//!
//! The infallible methods fail fast on precondition violations (they panic
//! or refuse to build). Every such precondition also has a checked
//! counterpart returning [`UintError`], so callers that cannot afford a
//! panic get the same validation regardless of build configuration.

/// Errors reported by the checked `Uint` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UintError {
    /// The requested width is not a power of two of at least 64 bits.
    #[error("width of {bits} bits is not a power of two of at least 64 bits")]
    InvalidWidth { bits: usize },

    /// A limb index was outside `0..limbs`.
    #[error("limb index {index} out of range for {limbs} limbs")]
    LimbIndexOutOfRange { index: usize, limbs: usize },

    /// The divisor of a division or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An arithmetic result did not fit in the receiver's width.
    #[error("arithmetic overflow")]
    Overflow,

    /// A conversion would have dropped nonzero high-order bits.
    #[error("value does not fit in the target width")]
    Truncation,
}
