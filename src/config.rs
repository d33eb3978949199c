//! Configuration constants and types for zw-stego.

use crate::anchor::is_line_break;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Phrase after which payloads are injected.
pub const DEFAULT_SIGNAL_PHRASE: &str = "I am the signal.";

/// Zero Width Space, represents bit 0.
pub const ZW_CHAR_0: char = '\u{200B}';

/// Zero Width Non-Joiner, represents bit 1.
pub const ZW_CHAR_1: char = '\u{200C}';

/// Payload used when none is given.
pub const DEFAULT_PAYLOAD: &str = "SIGNAL_PAYLOAD";

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output_stego.txt";

/// Bits per payload character.
pub const BYTE_WIDTH: usize = 8;

/// How characters above U+00FF are treated when encoding a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Fail with [`Error::EncodingRange`].
    #[default]
    Reject,
    /// Keep only the low 8 bits of the code point.
    Truncate,
}

/// The two marker characters standing for bit 0 and bit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroWidthAlphabet {
    pub zero: char,
    pub one: char,
}

impl ZeroWidthAlphabet {
    pub fn new(zero: char, one: char) -> Self {
        Self { zero, one }
    }

    /// Marker for a single bit.
    pub fn marker(&self, bit: bool) -> char {
        if bit {
            self.one
        } else {
            self.zero
        }
    }

    /// Bit for a marker, `None` for any other character.
    pub fn bit(&self, c: char) -> Option<bool> {
        if c == self.zero {
            Some(false)
        } else if c == self.one {
            Some(true)
        } else {
            None
        }
    }
}

impl Default for ZeroWidthAlphabet {
    fn default() -> Self {
        Self::new(ZW_CHAR_0, ZW_CHAR_1)
    }
}

/// Everything the injector and extractor need to agree on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    /// Anchor phrase marking the injection point.
    pub signal_phrase: String,

    /// Marker for bit 0.
    pub zero_marker: char,

    /// Marker for bit 1.
    pub one_marker: char,

    /// Payload for single injection when none is given.
    pub default_payload: String,

    /// Batch for multi-payload mode when none is given.
    pub payloads: Vec<String>,

    /// Treatment of characters that do not fit in 8 bits.
    pub range_policy: RangePolicy,
}

impl Default for StegoConfig {
    fn default() -> Self {
        Self {
            signal_phrase: DEFAULT_SIGNAL_PHRASE.to_string(),
            zero_marker: ZW_CHAR_0,
            one_marker: ZW_CHAR_1,
            default_payload: DEFAULT_PAYLOAD.to_string(),
            payloads: Vec::new(),
            range_policy: RangePolicy::Reject,
        }
    }
}

impl StegoConfig {
    /// Replace the signal phrase.
    pub fn with_signal_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.signal_phrase = phrase.into();
        self
    }

    /// Replace the marker pair.
    pub fn with_markers(mut self, zero: char, one: char) -> Self {
        self.zero_marker = zero;
        self.one_marker = one;
        self
    }

    /// Replace the range policy.
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    /// Marker pair used by the bit codec.
    pub fn alphabet(&self) -> ZeroWidthAlphabet {
        ZeroWidthAlphabet::new(self.zero_marker, self.one_marker)
    }

    /// Validate the configuration.
    ///
    /// A marker inside the signal phrase would let the anchor scan match
    /// across an injected run, so that is rejected along with an empty
    /// phrase and identical markers. Per-line decoding never sees a phrase
    /// or marker that contains a line break, so those are rejected too.
    pub fn validate(&self) -> Result<()> {
        if self.signal_phrase.is_empty() {
            return Err(Error::InvalidConfig(
                "Signal phrase must not be empty".to_string(),
            ));
        }
        if self.signal_phrase.contains(is_line_break) {
            return Err(Error::InvalidConfig(
                "Signal phrase must not contain a line break".to_string(),
            ));
        }
        if self.zero_marker == self.one_marker {
            return Err(Error::InvalidConfig(format!(
                "Bit markers must differ, both are U+{:04X}",
                u32::from(self.zero_marker)
            )));
        }
        for marker in [self.zero_marker, self.one_marker] {
            if is_line_break(marker) {
                return Err(Error::InvalidConfig(format!(
                    "Bit marker U+{:04X} is a line break",
                    u32::from(marker)
                )));
            }
            if self.signal_phrase.contains(marker) {
                return Err(Error::InvalidConfig(format!(
                    "Signal phrase contains bit marker U+{:04X}",
                    u32::from(marker)
                )));
            }
        }
        Ok(())
    }

    /// Payloads for multi-payload mode.
    ///
    /// Explicit payloads win, then the configured batch, then the default
    /// payload on its own.
    pub fn batch(&self, explicit: Vec<String>) -> Vec<String> {
        if !explicit.is_empty() {
            explicit
        } else if !self.payloads.is_empty() {
            self.payloads.clone()
        } else {
            vec![self.default_payload.clone()]
        }
    }

    /// Load a configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: StegoConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
