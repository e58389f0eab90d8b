//! Canonical URL encoding and signing.
//!
//! This module contains the bit-exact encoding rules the signature depends
//! on. Identical semantic requests must always encode to identical bytes, so
//! everything here is deterministic: keys are sorted before encoding and the
//! percent-encoding tables are fixed.
//!
//! - `path` - path normalization and percent-encoding
//! - `query` - deterministic query-string encoding (with `*64` base64 keys)
//! - `sign` - MD5 request signature, appended as the trailing `s` parameter

mod path;
mod query;
mod sign;

pub(crate) use path::encode_path;
pub(crate) use query::encode_query;
pub(crate) use sign::sign_query;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Strict encoding: every byte except unreserved (ALPHA / DIGIT / "-" / "."
// / "_" / "~") is escaped, space as %20. Equivalent to rawurlencode.
pub(crate) const STRICT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');
