//! Payload injection.

use crate::anchor;
use crate::config::StegoConfig;
use crate::encoding::{bits_to_zero_width, text_to_bits};
use crate::error::{Error, Result};

/// Hide `payload` right after the first signal phrase in `carrier`.
///
/// Later occurrences of the phrase are left untouched. On error no text is
/// produced.
///
/// # Example
///
/// ```
/// use zw_stego::carrier::{extract_first, inject};
/// use zw_stego::StegoConfig;
///
/// let config = StegoConfig::default();
/// let hidden = inject("Hello. I am the signal. Bye.", "HI", &config).unwrap();
///
/// assert_eq!(extract_first(&hidden, &config).unwrap(), "HI");
/// ```
pub fn inject(carrier: &str, payload: &str, config: &StegoConfig) -> Result<String> {
    let splice_at = anchor::end_of(carrier, &config.signal_phrase).ok_or_else(|| {
        Error::AnchorNotFound {
            anchor: config.signal_phrase.clone(),
        }
    })?;

    if payload.is_empty() {
        return Err(Error::EmptyPayload);
    }

    let bits = text_to_bits(payload, config.range_policy)?;
    let markers = bits_to_zero_width(&bits, &config.alphabet());

    let mut output = String::with_capacity(carrier.len() + markers.len());
    output.push_str(&carrier[..splice_at]);
    output.push_str(&markers);
    output.push_str(&carrier[splice_at..]);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RangePolicy, ZW_CHAR_0, ZW_CHAR_1};

    fn is_marker(c: char) -> bool {
        c == ZW_CHAR_0 || c == ZW_CHAR_1
    }

    #[test]
    fn test_inject_after_anchor() {
        let config = StegoConfig::default();
        let result = inject("Intro. I am the signal. Outro.", "A", &config).unwrap();

        assert!(result.starts_with("Intro. I am the signal."));
        assert!(result.ends_with(" Outro."));
        let visible: String = result.chars().filter(|c| !is_marker(*c)).collect();
        assert_eq!(visible, "Intro. I am the signal. Outro.");
        assert_eq!(result.chars().filter(|c| is_marker(*c)).count(), 8);
    }

    #[test]
    fn test_only_first_occurrence_modified() {
        let config = StegoConfig::default();
        let carrier = "I am the signal. middle I am the signal. end";
        let result = inject(carrier, "HI", &config).unwrap();

        let second = carrier.rfind("I am the signal.").unwrap();
        let tail = &carrier[second..];
        assert!(result.ends_with(tail));
        assert_eq!(result.len(), carrier.len() + 16 * ZW_CHAR_0.len_utf8());
    }

    #[test]
    fn test_missing_anchor() {
        let config = StegoConfig::default();
        let result = inject("nothing to see", "x", &config);
        assert!(matches!(result, Err(Error::AnchorNotFound { .. })));
    }

    #[test]
    fn test_empty_payload() {
        let config = StegoConfig::default();
        assert!(matches!(
            inject("I am the signal.", "", &config),
            Err(Error::EmptyPayload)
        ));
    }

    #[test]
    fn test_out_of_range_payload() {
        let config = StegoConfig::default();
        assert!(matches!(
            inject("I am the signal.", "naïve ✓", &config),
            Err(Error::EncodingRange { ch: '✓', index: 6 })
        ));

        let config = config.with_range_policy(RangePolicy::Truncate);
        assert!(inject("I am the signal.", "naïve ✓", &config).is_ok());
    }

    #[test]
    fn test_custom_anchor_and_markers() {
        let config = StegoConfig::default()
            .with_signal_phrase("<<>>")
            .with_markers('0', '1');
        let result = inject("a <<>> b", "A", &config).unwrap();
        assert_eq!(result, "a <<>>01000001 b");
    }
}
