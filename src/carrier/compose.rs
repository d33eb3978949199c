//! Multi-payload composition.

use crate::carrier::inject;
use crate::config::StegoConfig;
use crate::error::{Error, Result};

/// Append one signal line per payload to `base_text`.
///
/// Each section is the bare signal phrase with its own payload injected.
/// Sections are joined by newlines and separated from `base_text` by a
/// blank line, so [`extract_all`](crate::carrier::extract_all) returns the
/// payloads in the same order.
pub fn compose_multi<S: AsRef<str>>(
    base_text: &str,
    payloads: &[S],
    config: &StegoConfig,
) -> Result<String> {
    if payloads.is_empty() {
        return Err(Error::EmptyBatch);
    }

    let sections = payloads
        .iter()
        .map(|payload| inject(&config.signal_phrase, payload.as_ref(), config))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("{}\n\n{}", base_text, sections.join("\n")))
}
