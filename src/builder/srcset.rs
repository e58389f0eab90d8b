//! Responsive srcset generation.

use crate::error::UrlError;
use crate::params::Params;
use crate::validate;
use crate::widths::{self, MAX_WIDTH, MIN_WIDTH, SRCSET_WIDTH_TOLERANCE, TARGET_RATIOS};

use super::UrlBuilder;

// Candidates are joined as "<url> <descriptor>,\n" fragments.
const CANDIDATE_SEPARATOR: &str = ",\n";

/// Options controlling srcset generation.
///
/// Every field defaults independently: explicit `widths` win over
/// everything, the `start`/`stop`/`tol` range drives the generated width
/// ladder, and `disable_variable_quality` opts out of the DPR quality
/// curve.
///
/// # Example
///
/// ```
/// use pixurl::SrcSetOptions;
///
/// let options = SrcSetOptions::new().with_start(640).with_stop(720);
/// assert_eq!(options.start(), Some(640));
/// assert_eq!(options.widths(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SrcSetOptions {
    widths: Option<Vec<i32>>,
    start: Option<i32>,
    stop: Option<i32>,
    tol: Option<f64>,
    disable_variable_quality: bool,
}

impl SrcSetOptions {
    /// Creates options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit list of candidate widths, used in the given order.
    pub fn with_widths(mut self, widths: impl Into<Vec<i32>>) -> Self {
        self.widths = Some(widths.into());
        self
    }

    /// Sets the starting width for a generated series.
    pub fn with_start(mut self, start: i32) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the stopping width for a generated series.
    pub fn with_stop(mut self, stop: i32) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Sets the width tolerance for a generated series.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = Some(tol);
        self
    }

    /// Disables the per-DPR variable-quality overlay.
    pub fn with_variable_quality_disabled(mut self, disabled: bool) -> Self {
        self.disable_variable_quality = disabled;
        self
    }

    /// Returns the explicit widths, if set.
    pub fn widths(&self) -> Option<&[i32]> {
        self.widths.as_deref()
    }

    /// Returns the starting width, if set.
    pub fn start(&self) -> Option<i32> {
        self.start
    }

    /// Returns the stopping width, if set.
    pub fn stop(&self) -> Option<i32> {
        self.stop
    }

    /// Returns the width tolerance, if set.
    pub fn tol(&self) -> Option<f64> {
        self.tol
    }

    /// Returns true when the variable-quality overlay is disabled.
    pub fn disable_variable_quality(&self) -> bool {
        self.disable_variable_quality
    }
}

impl UrlBuilder {
    /// Builds a responsive-image candidate list (`srcset` value).
    ///
    /// The generation strategy is chosen in order:
    ///
    /// 1. explicit `widths` in `options` - one `<url> <w>w` candidate per
    ///    element, in input order;
    /// 2. a usable `w` or `h` in `params` - a fixed five-candidate DPR
    ///    series `1x..5x`, with the default quality curve overlaid unless
    ///    disabled or the caller supplied `q`;
    /// 3. otherwise - a generated width ladder over
    ///    `start..=stop` (defaults 100..=8192, tolerance 0.08).
    ///
    /// The base parameter map is never mutated; each candidate overlays its
    /// own copy. Candidates are joined with `,\n` in generation order.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidWidths`] for a bad explicit widths list
    /// and [`UrlError::InvalidRange`] for a bad `start`/`stop`/`tol` triple.
    ///
    /// # Example
    ///
    /// ```
    /// use pixurl::{Params, SrcSetOptions, UrlBuilder};
    ///
    /// let builder = UrlBuilder::new("demos.imgix.net")?
    ///     .with_include_library_param(false);
    ///
    /// let options = SrcSetOptions::new().with_widths(vec![100, 200]);
    /// let srcset = builder.create_srcset("image.jpg", &Params::new(), &options)?;
    /// assert_eq!(
    ///     srcset,
    ///     "https://demos.imgix.net/image.jpg?w=100 100w,\n\
    ///      https://demos.imgix.net/image.jpg?w=200 200w"
    /// );
    /// # Ok::<(), pixurl::UrlError>(())
    /// ```
    pub fn create_srcset(
        &self,
        path: &str,
        params: &Params,
        options: &SrcSetOptions,
    ) -> Result<String, UrlError> {
        if let Some(explicit) = options.widths() {
            validate::validate_widths(explicit)?;
            return Ok(self.create_srcset_pairs(path, params, explicit));
        }

        if is_dpr(params) {
            return Ok(self.create_dpr_srcset(path, params, options.disable_variable_quality()));
        }

        let start = options.start().unwrap_or(MIN_WIDTH);
        let stop = options.stop().unwrap_or(MAX_WIDTH);
        let tol = options.tol().unwrap_or(SRCSET_WIDTH_TOLERANCE);
        let targets = widths::target_widths(start, stop, tol)?;

        Ok(self.create_srcset_pairs(path, params, &targets))
    }

    fn create_dpr_srcset(&self, path: &str, params: &Params, disable_variable_quality: bool) -> String {
        let mut candidates = Vec::with_capacity(TARGET_RATIOS.len());
        for ratio in TARGET_RATIOS {
            let mut current = params.clone();
            current.insert("dpr", ratio);
            // A caller-supplied `q` always wins over the quality curve.
            if !disable_variable_quality && !params.contains("q") {
                if let Some(quality) = widths::dpr_quality(ratio) {
                    current.insert("q", quality);
                }
            }
            candidates.push(format!("{} {}x", self.create_url(path, &current), ratio));
        }
        candidates.join(CANDIDATE_SEPARATOR)
    }

    fn create_srcset_pairs(&self, path: &str, params: &Params, targets: &[i32]) -> String {
        let mut candidates = Vec::with_capacity(targets.len());
        for &width in targets {
            let current = params.clone().set("w", width);
            candidates.push(format!("{} {}w", self.create_url(path, &current), width));
        }
        candidates.join(CANDIDATE_SEPARATOR)
    }
}

// A srcset is DPR-based when the params carry a usable dimension.
fn is_dpr(params: &Params) -> bool {
    !params.is_empty() && (params.has_truthy("w") || params.has_truthy("h"))
}
