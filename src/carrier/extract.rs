//! Payload extraction.

use crate::anchor;
use crate::config::StegoConfig;
use crate::encoding::{bits_to_text, zero_width_to_bits};
use crate::error::{Error, Result};

/// Outcome of decoding one line that carries the signal phrase.
#[derive(Debug)]
pub struct ExtractedPayload {
    /// 1-based line number in the carrier.
    pub line: usize,
    /// Decoded payload, or why this line could not be decoded.
    pub outcome: Result<String>,
}

impl ExtractedPayload {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Decoded payload, if any.
    pub fn payload(&self) -> Option<&str> {
        self.outcome.as_ref().ok().map(|s| s.as_str())
    }
}

/// Decode the markers following the first signal phrase in `carrier`.
///
/// Everything from the end of the phrase to the end of the text is scanned;
/// visible characters in between are ignored.
pub fn extract_first(carrier: &str, config: &StegoConfig) -> Result<String> {
    let start = anchor::end_of(carrier, &config.signal_phrase).ok_or_else(|| {
        Error::AnchorNotFound {
            anchor: config.signal_phrase.clone(),
        }
    })?;

    let bits = zero_width_to_bits(&carrier[start..], &config.alphabet());
    if bits.is_empty() {
        return Err(Error::NoPayloadFound);
    }

    bits_to_text(&bits)
}

/// Decode every line that carries the signal phrase, in line order.
///
/// Each line is decoded on its own. A line that fails keeps its slot with
/// the error as its outcome; the remaining lines are still decoded.
pub fn extract_all(carrier: &str, config: &StegoConfig) -> Vec<ExtractedPayload> {
    anchor::split_lines(carrier)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| anchor::find(line, &config.signal_phrase).is_some())
        .map(|(index, line)| ExtractedPayload {
            line: index + 1,
            outcome: extract_first(line, config),
        })
        .collect()
}
