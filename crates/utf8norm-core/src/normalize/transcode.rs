//! In-memory decode / line-ending / re-encode step

use encoding_rs::Encoding;

/// UTF-8 encoding of U+FEFF
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// UTF-8 bytes ready to be written back
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transcoded {
    pub bytes: Vec<u8>,
    pub bom_stripped: bool,
    pub line_endings_normalized: usize,
}

/// Decode `raw` (after a `bom_len`-byte mark) and re-encode it as UTF-8
///
/// Returns `None` if the bytes are malformed for `encoding`.
pub(crate) fn transcode(
    raw: &[u8],
    encoding: &'static Encoding,
    bom_len: usize,
    universal_endline: bool,
) -> Option<Transcoded> {
    let body = raw.get(bom_len..)?;
    let mut text = encoding
        .decode_without_bom_handling_and_without_replacement(body)?
        .into_owned();

    let mut line_endings_normalized = 0;
    if universal_endline {
        line_endings_normalized = text.matches("\r\n").count();
        if line_endings_normalized > 0 {
            text = text.replace("\r\n", "\n");
        }
    }

    // UTF-8 is the target, so encoding is just taking the bytes
    let mut bytes = text.into_bytes();
    let mut bom_stripped = bom_len > 0;
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
        bom_stripped = true;
    }

    Some(Transcoded {
        bytes,
        bom_stripped,
        line_endings_normalized,
    })
}
