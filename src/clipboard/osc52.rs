//! OSC 52 clipboard backend
//!
//! Copies via a terminal escape sequence, which also works in remote
//! sessions (SSH, tmux) where no system clipboard is reachable.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text to clipboard using OSC 52: \x1b]52;c;{base64}\x07
pub fn copy(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);

    io::stdout()
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;

    io::stdout().flush().map_err(|_| ClipboardError::WriteError)
}

/// Encode text for OSC 52 (exposed for testing)
pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any text must survive the encode/decode round trip intact.
        #[test]
        fn prop_osc52_encoding_roundtrip(text in ".*") {
            let encoded = encode_osc52(&text);

            prop_assert!(encoded.starts_with("\x1b]52;c;"));
            prop_assert!(encoded.ends_with("\x07"));

            let base64_part = &encoded[7..encoded.len() - 1];
            let decoded = STANDARD.decode(base64_part).expect("valid base64");
            prop_assert_eq!(String::from_utf8(decoded).expect("valid utf8"), text);
        }
    }

    #[test]
    fn test_encode_osc52_simple() {
        // "hello" in base64 is "aGVsbG8="
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_osc52_empty() {
        assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
    }
}
