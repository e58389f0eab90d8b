//! MD5 request signature.

use md5::{Digest, Md5};

/// Signs an encoded path and query, returning the query with the signature
/// appended as the final `s` parameter.
///
/// The signed payload is `key + path + ("?" + query)` with the query part
/// omitted when empty. The digest is MD5, hex-encoded. MD5 is the checksum
/// the serving side verifies; it is a fixed protocol requirement, not a
/// security boundary.
///
/// `s` itself is not part of the payload, so it must trail the
/// already-sorted pairs rather than sort in with them.
pub(crate) fn sign_query(sign_key: &str, path: &str, query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(sign_key.as_bytes());
    hasher.update(path.as_bytes());
    if !query.is_empty() {
        hasher.update(b"?");
        hasher.update(query.as_bytes());
    }
    let signature = hex::encode(hasher.finalize());

    if query.is_empty() {
        format!("s={}", signature)
    } else {
        format!("{}&s={}", query, signature)
    }
}
