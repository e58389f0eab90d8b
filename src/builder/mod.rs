//! URL assembly.
//!
//! - [`UrlBuilder`] - Holds the builder configuration and assembles
//!   signed, encoded URLs and srcsets

mod srcset;

pub use srcset::SrcSetOptions;

use crate::domain::Domain;
use crate::encode;
use crate::error::UrlError;
use crate::params::Params;

/// Reserved query key for the auto-injected library identifier.
pub const LIBRARY_PARAM_KEY: &str = "ixlib";

/// Reserved query key for the request signature, always emitted last.
pub const SIGNATURE_PARAM_KEY: &str = "s";

// Implementation identifier carried in the library parameter.
const LIBRARY_PARAM_VALUE: &str = concat!("rust-", env!("CARGO_PKG_VERSION"));

/// Builds fully-qualified, percent-encoded, optionally signed URLs for a
/// remote image-processing service.
///
/// A builder is a validated domain plus three rarely-changed settings:
/// scheme preference, signing key, and whether the library-identifying
/// query parameter is injected. Every [`create_url`](UrlBuilder::create_url)
/// and [`create_srcset`](UrlBuilder::create_srcset) call is an independent,
/// pure computation over those settings; the builder holds no other state.
///
/// # Example
///
/// ```
/// use pixurl::{Params, UrlBuilder};
///
/// let builder = UrlBuilder::new("demos.imgix.net")?
///     .with_include_library_param(false);
///
/// let params = Params::new().set("w", 100).set("h", 100);
/// let url = builder.create_url("bridge.png", &params);
/// assert_eq!(url, "https://demos.imgix.net/bridge.png?h=100&w=100");
/// # Ok::<(), pixurl::UrlError>(())
/// ```
///
/// # Signing
///
/// ```
/// use pixurl::{Params, UrlBuilder};
///
/// let builder = UrlBuilder::new("demos.imgix.net")?
///     .with_use_https(false)
///     .with_sign_key("test1234")
///     .with_include_library_param(false);
///
/// let params = Params::new().set("w", 100).set("h", 100);
/// let url = builder.create_url("bridge.png", &params);
/// assert_eq!(
///     url,
///     "http://demos.imgix.net/bridge.png?h=100&w=100&s=bb8f3a2ab832e35997456823272103a4"
/// );
/// # Ok::<(), pixurl::UrlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    domain: Domain,
    use_https: bool,
    sign_key: String,
    include_library_param: bool,
}

impl UrlBuilder {
    /// Creates a builder for the given domain.
    ///
    /// Defaults: https on, no signing key, library parameter injected.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidDomain`] when `domain` fails the
    /// fully-qualified-domain grammar.
    pub fn new(domain: &str) -> Result<Self, UrlError> {
        Ok(Self {
            domain: Domain::new(domain)?,
            use_https: true,
            sign_key: String::new(),
            include_library_param: true,
        })
    }

    /// Sets the scheme preference, returning the builder for chaining.
    pub fn with_use_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Sets the signing key, returning the builder for chaining.
    ///
    /// An empty key disables signing.
    pub fn with_sign_key(mut self, sign_key: impl Into<String>) -> Self {
        self.sign_key = sign_key.into();
        self
    }

    /// Sets library-parameter injection, returning the builder for chaining.
    pub fn with_include_library_param(mut self, include: bool) -> Self {
        self.include_library_param = include;
        self
    }

    /// Replaces the scheme preference.
    pub fn set_use_https(&mut self, use_https: bool) {
        self.use_https = use_https;
    }

    /// Replaces the signing key. An empty key disables signing.
    pub fn set_sign_key(&mut self, sign_key: impl Into<String>) {
        self.sign_key = sign_key.into();
    }

    /// Replaces the library-parameter injection flag.
    pub fn set_include_library_param(&mut self, include: bool) {
        self.include_library_param = include;
    }

    /// Returns the validated domain.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns true when URLs are built with the https scheme.
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the signing key (empty when signing is disabled).
    pub fn sign_key(&self) -> &str {
        &self.sign_key
    }

    /// Returns true when the library parameter is auto-injected.
    pub fn include_library_param(&self) -> bool {
        self.include_library_param
    }

    /// Builds a fully-qualified, encoded, optionally signed URL.
    ///
    /// The path is normalized per the path-encoding rules (an `http`-prefixed
    /// path is carried as one opaque segment), the parameters are encoded in
    /// byte-wise key order, and when a signing key is set the signature is
    /// appended as the trailing `s` parameter. The caller's map is never
    /// mutated; `ixlib` is overlaid on a copy and overwrites any caller
    /// value, since the key is reserved.
    pub fn create_url(&self, path: &str, params: &Params) -> String {
        let mut params = params.clone();
        if self.include_library_param {
            params.insert(LIBRARY_PARAM_KEY, LIBRARY_PARAM_VALUE);
        }

        let scheme = if self.use_https { "https" } else { "http" };
        let encoded_path = encode::encode_path(path);
        let mut query = encode::encode_query(&params);
        if !self.sign_key.is_empty() {
            query = encode::sign_query(&self.sign_key, &encoded_path, &query);
        }

        if query.is_empty() {
            format!("{}://{}{}", scheme, self.domain, encoded_path)
        } else {
            format!("{}://{}{}?{}", scheme, self.domain, encoded_path, query)
        }
    }
}
