//! Tests for the chardetng-backed detector

use crate::detect::{ChardetngDetector, DetectionSource, EncodingDetector};
use encoding_rs::{SHIFT_JIS, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use rstest::rstest;

#[test]
fn test_empty_input_is_undetectable() {
    let detection = ChardetngDetector::new().detect(b"");
    assert_eq!(detection.encoding, None);
    assert_eq!(detection.source, DetectionSource::Undetectable);
}

#[test]
fn test_binary_input_is_undetectable() {
    let detection = ChardetngDetector::new().detect(b"\x7FELF\x02\x01\x01\x00\x00\x00");
    assert_eq!(detection.encoding, None);
}

#[rstest]
#[case::utf8(b"\xEF\xBB\xBFint x;", UTF_8, 3)]
#[case::utf16le(b"\xFF\xFEi\x00", UTF_16LE, 2)]
#[case::utf16be(b"\xFE\xFF\x00i", UTF_16BE, 2)]
fn test_bom_is_detected(
    #[case] input: &[u8],
    #[case] expected: &'static encoding_rs::Encoding,
    #[case] bom_len: usize,
) {
    let detection = ChardetngDetector::new().detect(input);
    assert_eq!(detection.encoding, Some(expected));
    assert_eq!(detection.bom_len, bom_len);
    assert_eq!(detection.source, DetectionSource::Bom);
}

#[test]
fn test_plain_ascii_is_utf8() {
    let detection = ChardetngDetector::new().detect(b"#include <stdio.h>\r\nint main() {}\r\n");
    assert_eq!(detection.encoding, Some(UTF_8));
    assert_eq!(detection.source, DetectionSource::Ascii);
    assert!(detection.is_target());
}

#[test]
fn test_valid_utf8_is_utf8() {
    let text = "// Größe der Übertragung in Bytes\nint größe = 0;\n";
    let detection = ChardetngDetector::new().detect(text.as_bytes());
    assert_eq!(detection.encoding, Some(UTF_8));
    assert_eq!(detection.source, DetectionSource::Sniffed);
}

#[test]
fn test_latin1_text_is_windows_1252() {
    let (bytes, _, _) = WINDOWS_1252
        .encode("// Le café est très chaud, déjà préparé à côté de la fenêtre.\n");
    let detection = ChardetngDetector::new().detect(&bytes);
    assert_eq!(detection.encoding, Some(WINDOWS_1252));
}

#[test]
fn test_japanese_text_is_shift_jis() {
    let text = "// これは日本語のコメントです。ファイルの文字コードを確認してください。\n\
                // 変換後のファイルはUTF-8で保存されます。\n";
    let (bytes, _, _) = SHIFT_JIS.encode(text);
    let detection = ChardetngDetector::new().detect(&bytes);
    assert_eq!(detection.encoding, Some(SHIFT_JIS));
}

#[test]
fn test_disallowing_utf8_skips_ascii_fast_path() {
    let detection = ChardetngDetector::new()
        .with_allow_utf8(false)
        .detect(b"plain ascii");
    assert_ne!(detection.encoding, Some(UTF_8));
    assert_eq!(detection.source, DetectionSource::Sniffed);
}

#[test]
fn test_default_allows_utf8() {
    let detection = ChardetngDetector::default().detect(b"abc");
    assert!(detection.is_target());
}
