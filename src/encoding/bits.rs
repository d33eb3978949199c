//! Payload text to bit-string and back.

use crate::config::{RangePolicy, BYTE_WIDTH};
use crate::error::{Error, Result};
use std::fmt;

/// An ordered run of binary digits.
///
/// Only `'0'` and `'1'` ever appear inside. The length is not forced to a
/// multiple of 8 here; [`bits_to_text`] checks that when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitString {
    digits: String,
}

impl BitString {
    /// Create an empty bit-string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a string of `'0'`/`'1'` digits.
    pub fn from_digits(digits: &str) -> Result<Self> {
        if let Some((index, digit)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| *c != '0' && *c != '1')
        {
            return Err(Error::InvalidBitDigit { digit, index });
        }

        Ok(Self {
            digits: digits.to_string(),
        })
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.digits.push(if bit { '1' } else { '0' });
    }

    /// Append the 8 bits of a byte, most significant first.
    pub fn push_byte(&mut self, byte: u8) {
        for shift in (0..BYTE_WIDTH).rev() {
            self.push((byte >> shift) & 1 == 1);
        }
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.digits.chars().map(|c| c == '1')
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Encode a payload as 8 bits per character, most significant bit first.
///
/// Characters above U+00FF are rejected or truncated to their low byte
/// depending on `policy`.
///
/// # Example
///
/// ```
/// use zw_stego::config::RangePolicy;
/// use zw_stego::encoding::text_to_bits;
///
/// let bits = text_to_bits("AB", RangePolicy::Reject).unwrap();
/// assert_eq!(bits.as_str(), "0100000101000010");
/// ```
pub fn text_to_bits(payload: &str, policy: RangePolicy) -> Result<BitString> {
    let mut bits = BitString {
        digits: String::with_capacity(payload.len() * BYTE_WIDTH),
    };

    for (index, ch) in payload.chars().enumerate() {
        let byte = match u8::try_from(ch) {
            Ok(byte) => byte,
            Err(_) => match policy {
                RangePolicy::Reject => return Err(Error::EncodingRange { ch, index }),
                RangePolicy::Truncate => (u32::from(ch) & 0xFF) as u8,
            },
        };
        bits.push_byte(byte);
    }

    Ok(bits)
}

/// Decode 8-bit groups back into characters U+0000..U+00FF.
pub fn bits_to_text(bits: &BitString) -> Result<String> {
    if bits.len() % BYTE_WIDTH != 0 {
        return Err(Error::MalformedBitstring { len: bits.len() });
    }

    let text = bits
        .digits
        .as_bytes()
        .chunks(BYTE_WIDTH)
        .map(|group| {
            let byte = group
                .iter()
                .fold(0u8, |acc, &digit| (acc << 1) | (digit - b'0'));
            char::from(byte)
        })
        .collect();

    Ok(text)
}
