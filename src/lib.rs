//! pixurl
//!
//! URL construction and signing for image-processing CDNs.
//!
//! `pixurl` turns a domain, an image path, and a set of rendering
//! parameters into a fully-qualified, percent-encoded, optionally signed
//! URL, and can expand one image into a responsive `srcset` candidate list
//! spanning a range of widths or device-pixel ratios. It is designed as a
//! small, deterministic primitive for:
//!
//! - server-side rendering of responsive images
//! - signed delivery through an image CDN
//! - static-site and template pipelines
//!
//! The crate intentionally:
//! - does NOT fetch, decode, or validate images
//! - does NOT talk to the network
//! - does NOT cache results
//! - does NOT hold state across calls
//!
//! It only does one thing: **domain + path + params in → URL text out**
//!
//! # Building a URL
//!
//! ```
//! use pixurl::{Params, UrlBuilder};
//!
//! let builder = UrlBuilder::new("demos.imgix.net")?
//!     .with_include_library_param(false);
//!
//! let params = Params::new().set("w", 100).set("h", 100);
//! let url = builder.create_url("bridge.png", &params);
//! assert_eq!(url, "https://demos.imgix.net/bridge.png?h=100&w=100");
//! # Ok::<(), pixurl::UrlError>(())
//! ```
//!
//! # Building a srcset
//!
//! ```
//! use pixurl::{Params, SrcSetOptions, UrlBuilder};
//!
//! let builder = UrlBuilder::new("demos.imgix.net")?
//!     .with_include_library_param(false);
//!
//! // A fixed width makes the srcset DPR-based: five candidates, 1x..5x.
//! let params = Params::new().set("w", 640);
//! let srcset = builder.create_srcset("image.jpg", &params, &SrcSetOptions::new())?;
//! assert_eq!(srcset.lines().count(), 5);
//! # Ok::<(), pixurl::UrlError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod domain;
mod error;
mod params;

mod encode; // internal canonical encoding + signing

pub mod validate;
pub mod widths;

//
// Public surface (intentionally tiny)
//

pub use builder::{LIBRARY_PARAM_KEY, SIGNATURE_PARAM_KEY, SrcSetOptions, UrlBuilder};
pub use domain::Domain;
pub use error::UrlError;
pub use params::{ParamValue, Params};
pub use widths::target_widths;
