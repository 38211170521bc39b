//! Default detector: BOM sniffing, ASCII fast path, then `chardetng`

use encoding_rs::Encoding;

use super::{Detection, EncodingDetector};

/// Escape byte that introduces ISO-2022-JP shift sequences in 7-bit text
const ESC: u8 = 0x1B;

/// Encoding detector backed by `chardetng`
#[derive(Debug, Clone, Copy)]
pub struct ChardetngDetector {
    allow_utf8: bool,
}

impl ChardetngDetector {
    /// Create a detector that may report UTF-8
    #[must_use]
    pub const fn new() -> Self {
        Self { allow_utf8: true }
    }

    /// Control whether UTF-8 is an allowed guess
    ///
    /// With UTF-8 disallowed, valid UTF-8 input is reported as some legacy
    /// encoding instead.
    #[must_use]
    pub const fn with_allow_utf8(mut self, allow_utf8: bool) -> Self {
        self.allow_utf8 = allow_utf8;
        self
    }
}

impl Default for ChardetngDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodingDetector for ChardetngDetector {
    fn detect(&self, bytes: &[u8]) -> Detection {
        if bytes.is_empty() {
            return Detection::undetectable();
        }

        if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
            return Detection::from_bom(encoding, bom_len);
        }

        // NUL bytes without a UTF-16 BOM mean binary content
        if bytes.contains(&0) {
            return Detection::undetectable();
        }

        if self.allow_utf8 && bytes.is_ascii() && !bytes.contains(&ESC) {
            return Detection::ascii();
        }

        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        Detection::sniffed(detector.guess(None, self.allow_utf8))
    }
}
