//! Responsive target-width generation.
//!
//! - [`target_widths`] - Geometric width series between two bounds
//! - Protocol constants: width bounds, DPR ratios, DPR quality curve

use crate::error::UrlError;
use crate::validate;

/// Default starting width for a generated series.
pub const MIN_WIDTH: i32 = 100;

/// Default stopping width, and the hard ceiling for any generated series.
pub const MAX_WIDTH: i32 = 8192;

/// Default width tolerance (8%).
pub const SRCSET_WIDTH_TOLERANCE: f64 = 0.08;

/// Device-pixel ratios used for DPR-based srcsets, in output order.
pub const TARGET_RATIOS: [i32; 5] = [1, 2, 3, 4, 5];

/// The default width ladder: `target_widths(100, 8192, 0.08)`.
///
/// Exposed so callers can reference the canonical series without
/// recomputing it.
pub const TARGET_WIDTHS: [i32; 31] = [
    100, 116, 135, 156, 181, 210, 244, 283, 328, 380, 441, 512, 594, 689, 799, 927, 1075, 1247,
    1446, 1678, 1946, 2257, 2619, 3038, 3524, 4087, 4741, 5500, 6380, 7401, 8192,
];

/// Returns the default quality for a device-pixel ratio, or `None` for
/// ratios outside the supported 1..=5 range.
///
/// Higher ratios tolerate heavier compression: the screen shows more pixels
/// per CSS pixel, so artifacts shrink below visibility.
pub fn dpr_quality(ratio: i32) -> Option<i32> {
    match ratio {
        1 => Some(75),
        2 => Some(50),
        3 => Some(35),
        4 => Some(23),
        5 => Some(20),
        _ => None,
    }
}

/// Generates the geometric series of target widths between `start` and
/// `stop` under the tolerance `tol`.
///
/// The series begins at `start` and each step multiplies by `1 + 2 * tol`.
/// The tolerance is doubled because perceived image size tracks the square
/// root of pixel count, so a doubled linear-width step approximates a
/// single-`tol` visual step. The series is clamped at [`MAX_WIDTH`] and
/// always ends exactly at `stop`.
///
/// A huge tolerance (>= 100%) collapses the series to `[start, stop]`;
/// `start == stop` yields `[start]` without validating anything else.
///
/// # Errors
///
/// Returns [`UrlError::InvalidRange`] when a bound is negative, when
/// `start > stop`, when `tol` is below one percent, or when `start` is
/// zero with `start != stop` (the series could never reach `stop`).
///
/// # Example
///
/// ```
/// use pixurl::target_widths;
///
/// let widths = target_widths(100, 8192, 0.08)?;
/// assert_eq!(widths.len(), 31);
/// assert_eq!(widths[0], 100);
/// assert_eq!(*widths.last().unwrap(), 8192);
/// # Ok::<(), pixurl::UrlError>(())
/// ```
pub fn target_widths(start: i32, stop: i32, tol: f64) -> Result<Vec<i32>, UrlError> {
    // Degenerate single-point series; there is no range to validate.
    if start == stop {
        return Ok(vec![start]);
    }

    validate::validate_min_max_tol(start, stop, tol)?;

    // A zero start can never advance under a multiplicative step, so the
    // generation loop would not terminate.
    if start == 0 {
        return Err(UrlError::InvalidRange {
            message: "`start` width value must be greater than zero",
        });
    }

    let stop_f = f64::from(stop);
    let ceiling = f64::from(MAX_WIDTH);
    let mut resolutions = Vec::new();
    let mut width = f64::from(start);

    while width < stop_f && width < ceiling {
        resolutions.push(width.round() as i32);
        width *= 1.0 + tol * 2.0;
    }

    // The loop may stop short of `stop`; the upper bound is inclusive.
    if resolutions.last().copied().unwrap_or(i32::MIN) < stop {
        resolutions.push(stop);
    }

    Ok(resolutions)
}
