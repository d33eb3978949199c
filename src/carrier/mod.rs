//! Carrier text operations.
//!
//! A payload is hidden by splicing its marker run directly after the first
//! signal phrase in the carrier. Extraction reads every marker after that
//! phrase. Several payloads can live in one document, one signal phrase per
//! line, and be recovered line by line.

mod compose;
mod extract;
mod inject;

pub use compose::compose_multi;
pub use extract::{extract_all, extract_first, ExtractedPayload};
pub use inject::inject;
