//! Validated source domain.
//!
//! - [`Domain`] - A fully-qualified host name, checked once at construction

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::UrlError;

// Labels are lowercase alphanumeric plus hyphen/underscore; the label before
// the TLD must start and end alphanumeric; the TLD is plain alphanumeric.
// No scheme, no path, no trailing slash.
//
// The nested counted repetitions exceed regex's default 10 MB compiled-size
// limit, so the limit is raised; the pattern itself is unchanged.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(
        r"^(?:[a-z\d\-_]{1,62}\.){0,125}[a-z\d](?:[a-z\d-]{0,61}[a-z\d])?\.[a-z\d]{1,63}$",
    )
    .size_limit(1 << 26)
    .build()
    .expect("domain pattern is a valid regex")
});

/// A validated fully-qualified domain name.
///
/// The grammar is enforced once, at construction; a `Domain` in hand is
/// always usable as the host component of a URL. The value is immutable.
///
/// # Example
///
/// ```
/// use pixurl::Domain;
///
/// let domain = Domain::new("demos.imgix.net")?;
/// assert_eq!(domain.as_str(), "demos.imgix.net");
///
/// assert!(Domain::new("http://demos.imgix.net").is_err());
/// assert!(Domain::new("demos.imgix.net/").is_err());
/// # Ok::<(), pixurl::UrlError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Creates a validated domain from a host string.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidDomain`] when the string does not match
    /// the fully-qualified-domain grammar (scheme prefixes, path elements,
    /// trailing slashes, and trailing hyphens in the host label all fail).
    pub fn new(domain: &str) -> Result<Self, UrlError> {
        if !DOMAIN_PATTERN.is_match(domain) {
            return Err(UrlError::InvalidDomain {
                message: "domain must be passed in as a fully-qualified domain name and \
                          should not include a protocol or any path element, \
                          i.e. \"example.imgix.net\"",
            });
        }
        Ok(Self(domain.to_string()))
    }

    /// Returns the domain as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
