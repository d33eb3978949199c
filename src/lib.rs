//! Zero-Width Text Steganography
//!
//! Hides text payloads inside ordinary carrier text as runs of invisible
//! zero-width Unicode characters placed right after a signal phrase, and
//! recovers them again.
//!
//! # Features
//!
//! - **Bit Codec**: 8 bits per payload character, one marker per bit
//! - **Signal Phrase Anchoring**: payloads sit after the first occurrence
//! - **Multi-Payload Documents**: one signal line per payload, decoded line by line
//! - **CLI Interface**: inject, multi and decode modes
//!
//! # Architecture
//!
//! ```text
//! Payload → Bits (8 per char) → Zero-width markers → Splice after signal phrase
//! ```
//!
//! This is concealment only. Anyone who knows the scheme can read the
//! payload, and tools that strip zero-width characters destroy it.
//!
//! # Example
//!
//! ```rust
//! use zw_stego::carrier::{extract_all, inject};
//! use zw_stego::StegoConfig;
//!
//! let config = StegoConfig::default();
//! let text = inject("Nothing to see. I am the signal.", "Hidden data", &config).unwrap();
//!
//! let found = extract_all(&text, &config);
//! assert_eq!(found[0].payload(), Some("Hidden data"));
//! ```

pub mod anchor;
pub mod carrier;
pub mod config;
pub mod document;
pub mod encoding;
pub mod error;

pub use carrier::{compose_multi, extract_all, extract_first, inject, ExtractedPayload};
pub use config::{RangePolicy, StegoConfig};
pub use error::{Error, Result};
