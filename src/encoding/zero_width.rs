//! Bit-string to zero-width marker run and back.

use crate::config::ZeroWidthAlphabet;
use crate::encoding::bits::BitString;

/// Map each bit to its marker, preserving order.
pub fn bits_to_zero_width(bits: &BitString, alphabet: &ZeroWidthAlphabet) -> String {
    bits.iter().map(|bit| alphabet.marker(bit)).collect()
}

/// Collect the bits of every marker in `text`.
///
/// Characters that are not markers are skipped, so the run may sit inside
/// arbitrary visible text.
pub fn zero_width_to_bits(text: &str, alphabet: &ZeroWidthAlphabet) -> BitString {
    let mut bits = BitString::new();
    for bit in text.chars().filter_map(|c| alphabet.bit(c)) {
        bits.push(bit);
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangePolicy;
    use crate::encoding::text_to_bits;

    const ZW0: char = '\u{200B}';
    const ZW1: char = '\u{200C}';

    #[test]
    fn test_concrete_vector() {
        let alphabet = ZeroWidthAlphabet::default();
        let bits = text_to_bits("AB", RangePolicy::Reject).unwrap();
        let zw = bits_to_zero_width(&bits, &alphabet);

        let expected: String = [
            ZW0, ZW1, ZW0, ZW0, ZW0, ZW0, ZW0, ZW1, ZW0, ZW1, ZW0, ZW0, ZW0, ZW0, ZW1, ZW0,
        ]
        .iter()
        .collect();
        assert_eq!(zw.chars().count(), 16);
        assert_eq!(zw, expected);
    }

    #[test]
    fn test_order_preserved_with_leading_zeros() {
        let alphabet = ZeroWidthAlphabet::default();
        let bits = BitString::from_digits("0000000100000000").unwrap();
        let zw = bits_to_zero_width(&bits, &alphabet);
        assert_eq!(zero_width_to_bits(&zw, &alphabet), bits);
    }

    #[test]
    fn test_non_markers_skipped() {
        let alphabet = ZeroWidthAlphabet::default();
        let text = format!("a{}b {}\n{}c", ZW1, ZW0, ZW1);
        assert_eq!(zero_width_to_bits(&text, &alphabet).as_str(), "101");
        assert!(zero_width_to_bits("plain text", &alphabet).is_empty());
    }

    #[test]
    fn test_synthetic_alphabet() {
        let alphabet = ZeroWidthAlphabet::new('.', '#');
        let bits = BitString::from_digits("0110").unwrap();
        let encoded = bits_to_zero_width(&bits, &alphabet);
        assert_eq!(encoded, ".##.");
        assert_eq!(zero_width_to_bits(&encoded, &alphabet), bits);
    }
}
