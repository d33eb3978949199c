//! Carrier file I/O.
//!
//! Files are UTF-8 with an optional byte-order mark. Reading accepts either
//! form; writing always emits the mark.

use crate::error::{Error, Result};
use std::path::Path;

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Drop one leading byte-order mark, if present.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(UTF8_BOM).unwrap_or(text)
}

/// Read a carrier file.
pub fn read_carrier(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    Ok(strip_bom(&text).to_string())
}

/// Write a carrier file with a leading byte-order mark.
pub fn write_carrier(path: &Path, text: &str) -> Result<()> {
    let mut content = String::with_capacity(UTF8_BOM.len() + text.len());
    content.push_str(UTF8_BOM);
    content.push_str(text);
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{FEFF}hello"), "hello");
        assert_eq!(strip_bom("hello"), "hello");
        assert_eq!(strip_bom("\u{FEFF}\u{FEFF}x"), "\u{FEFF}x");
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("carrier.txt");

        write_carrier(&path, "I am the signal.\u{200B}").unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(read_carrier(&path).unwrap(), "I am the signal.\u{200B}");
    }

    #[test]
    fn test_read_without_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.txt");
        std::fs::write(&path, "plain text").unwrap();
        assert_eq!(read_carrier(&path).unwrap(), "plain text");
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.dat");
        std::fs::write(&path, [0xFF, 0xFE, 0x00]).unwrap();
        assert!(matches!(
            read_carrier(&path),
            Err(Error::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_carrier(&dir.path().join("missing.txt")),
            Err(Error::Io(_))
        ));
    }
}
