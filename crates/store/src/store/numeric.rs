//! Numeric conversion with byte-order control.
//!
//! Responsibilities:
//! - Define the closed set of types usable with the typed accessors.
//! - Provide the representation-level byte swap applied by `get_le`/`get_be`.
//!
//! Does NOT handle:
//! - Textual parsing: accessors parse via `FromStr` before any swap.
//!
//! Invariants:
//! - The swap reorders the bytes of the parsed value's storage; it never
//!   reinterprets the source text as raw bytes.
//! - One-byte types swap to themselves.

use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// Arithmetic types retrievable through the typed store accessors.
///
/// Sealed: implemented for the fixed-width integers, the pointer-sized
/// integers, and the two floats.
pub trait EnvNumeric: Copy + FromStr + sealed::Sealed {
    /// Reverse the byte order of the value's in-memory representation.
    fn swap_byte_order(self) -> Self;
}

macro_rules! impl_env_numeric_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl EnvNumeric for $ty {
                fn swap_byte_order(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

macro_rules! impl_env_numeric_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl EnvNumeric for $ty {
                fn swap_byte_order(self) -> Self {
                    // Swap on the bit pattern; going through the float value
                    // itself could normalize NaNs or hit a signaling bit.
                    Self::from_bits(self.to_bits().swap_bytes())
                }
            }
        )*
    };
}

impl_env_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_env_numeric_float!(f32, f64);
