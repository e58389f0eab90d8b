//! Path normalization and percent-encoding.

use percent_encoding::{AsciiSet, utf8_percent_encode};

use super::STRICT;

// Path encoding keeps the unreserved set plus `/`, `:`, and `@`, so a
// multi-segment path stays multi-segment. Everything else, including
// sub-delimiters and non-ASCII UTF-8, is escaped.
const PATH_SEGMENT: &AsciiSet = &STRICT.remove(b'/').remove(b':').remove(b'@');

/// Normalizes a raw path into a canonical, percent-encoded absolute path.
///
/// Empty input normalizes to `/`. A path whose first four bytes are the
/// literal `http` is treated as a fully-qualified remote URL to be proxied:
/// the entire string is strictly encoded as one opaque segment (so `://`
/// survives only as `%3A%2F%2F`). Already-encoded input is encoded again;
/// callers pass raw paths.
pub(crate) fn encode_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let encoded = if path.as_bytes().starts_with(b"http") {
        utf8_percent_encode(path, STRICT).to_string()
    } else {
        utf8_percent_encode(path, PATH_SEGMENT).to_string()
    };

    if encoded.starts_with('/') {
        encoded
    } else {
        format!("/{}", encoded)
    }
}
