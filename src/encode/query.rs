//! Deterministic query-string encoding.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use percent_encoding::{AsciiSet, utf8_percent_encode};

use super::STRICT;
use crate::params::{ParamValue, Params};

// Values keep `!`, `*`, `'`, `(`, `)` literal. They are sub-delimiters that
// need no escaping, and some downstream consumers break when they are.
const VALUE: &AsciiSet = &STRICT
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes a parameter map into a canonical query string, without the
/// leading `?`.
///
/// Pairs are emitted in byte-wise ascending key order. Keys are strictly
/// percent-encoded (space as `%20`). A value whose key ends in the literal
/// suffix `64` is carried as URL-safe base64 with padding stripped, which
/// lets arbitrary text (overlay strings, for example) ride inside a
/// URL-safe token. All other values are percent-encoded. An empty map
/// yields an empty string.
pub(crate) fn encode_query(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| encode_pair(key, value))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_pair(key: &str, value: &ParamValue) -> String {
    let raw = value.render();
    let encoded_value = if key.ends_with("64") {
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    } else {
        utf8_percent_encode(&raw, VALUE).to_string()
    };
    format!("{}={}", utf8_percent_encode(key, STRICT), encoded_value)
}
