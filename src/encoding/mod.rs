//! Bit codec between payload text and zero-width marker runs.
//!
//! ```text
//! "AB" → 01000001 01000010 → ZW0 ZW1 ZW0 ZW0 ZW0 ZW0 ZW0 ZW1 ZW0 ZW1 ...
//! ```
//!
//! Each payload character is one byte, written most significant bit first.
//! Each bit becomes one of the two configured marker characters (`ZW0` is
//! U+200B and `ZW1` is U+200C by default).

mod bits;
mod zero_width;

pub use bits::{bits_to_text, text_to_bits, BitString};
pub use zero_width::{bits_to_zero_width, zero_width_to_bits};
