//! Detection result types

use encoding_rs::{Encoding, UTF_8};

/// How a detection result was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// A byte-order mark identified the encoding
    Bom,
    /// Input is plain ASCII, which is valid UTF-8
    Ascii,
    /// Statistical sniffing over the whole buffer
    Sniffed,
    /// No encoding could be determined
    Undetectable,
}

/// Result of running an encoding detector over a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub encoding: Option<&'static Encoding>,
    /// Length of the leading byte-order mark, 0 if none
    pub bom_len: usize,
    pub source: DetectionSource,
}

impl Detection {
    /// Encoding identified by a byte-order mark of `bom_len` bytes
    #[must_use]
    pub const fn from_bom(encoding: &'static Encoding, bom_len: usize) -> Self {
        Self {
            encoding: Some(encoding),
            bom_len,
            source: DetectionSource::Bom,
        }
    }

    /// Pure ASCII input
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            encoding: Some(UTF_8),
            bom_len: 0,
            source: DetectionSource::Ascii,
        }
    }

    /// Encoding guessed by a sniffer
    #[must_use]
    pub const fn sniffed(encoding: &'static Encoding) -> Self {
        Self {
            encoding: Some(encoding),
            bom_len: 0,
            source: DetectionSource::Sniffed,
        }
    }

    #[must_use]
    pub const fn undetectable() -> Self {
        Self {
            encoding: None,
            bom_len: 0,
            source: DetectionSource::Undetectable,
        }
    }

    /// Whether the bytes are already UTF-8 without a byte-order mark
    #[must_use]
    pub fn is_target(&self) -> bool {
        self.encoding == Some(UTF_8) && self.bom_len == 0
    }

    /// Human-readable label, e.g. `UTF-8`, `UTF-8 (BOM)`, `Shift_JIS`, `unknown`
    #[must_use]
    pub fn label(&self) -> String {
        match self.encoding {
            Some(encoding) if self.bom_len > 0 => format!("{} (BOM)", encoding.name()),
            Some(encoding) => encoding.name().to_string(),
            None => "unknown".to_string(),
        }
    }
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
