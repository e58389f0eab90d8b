//! Error types for pixurl.

use std::fmt;

/// Errors that can occur while building URLs or srcsets.
///
/// Every failure in this crate is a form of invalid input: a malformed
/// domain, a width range that does not order, a tolerance below the floor,
/// or a bad explicit widths list. All validation happens eagerly, before any
/// URL text is assembled, so an error always means nothing was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The domain string does not match the fully-qualified-domain grammar.
    InvalidDomain {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A width-series parameter (start, stop, or tolerance) was out of range.
    InvalidRange {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// An explicit widths list was empty or contained a negative value.
    InvalidWidths {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::InvalidDomain { message } => {
                write!(f, "invalid domain: {}", message)
            }
            UrlError::InvalidRange { message } => {
                write!(f, "invalid range: {}", message)
            }
            UrlError::InvalidWidths { message } => {
                write!(f, "invalid widths: {}", message)
            }
        }
    }
}

impl std::error::Error for UrlError {}
