//! Byte-to-text decoding with content-based encoding detection.
//!
//! Chinese pages are routinely served as GBK/GB18030 with a missing or wrong
//! `Content-Type` charset, so the header is ignored entirely: the encoding is
//! sniffed from the bytes themselves, mirroring what `apparent_encoding`-style
//! detection does.

use chardetng::EncodingDetector;

/// Decode a raw response body to a UTF-8 `String`.
///
/// A BOM, when present, wins. Otherwise the whole body is fed to the detector
/// and the best guess is used. Malformed sequences are replaced with U+FFFD
/// rather than failing — a handful of mojibake characters never produce
/// countable two-character tokens, so lossy decoding is safe here.
pub fn decode(bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    // `decode` re-checks the BOM and switches encodings if one is present.
    let (text, actual, had_errors) = encoding.decode(bytes);
    tracing::debug!(
        encoding = actual.name(),
        lossy = had_errors,
        bytes = bytes.len(),
        "decoded response body"
    );
    text.into_owned()
}
