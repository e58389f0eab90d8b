//! Pure validation predicates for width-series parameters.
//!
//! These functions check numeric ranges and explicit width lists before any
//! URL text is assembled. They are side-effect free and composable: callers
//! run them up front and propagate the first failure with `?`.

use crate::error::UrlError;

/// The tolerance floor: one percent.
///
/// A tolerance below this would degenerate the geometric width series into
/// an enormous number of steps.
pub const ONE_PERCENT: f64 = 0.01;

/// Validates the starting (minimum) width of a series.
///
/// # Errors
///
/// Returns [`UrlError::InvalidRange`] when `start` is negative.
pub fn validate_min_width(start: i32) -> Result<(), UrlError> {
    if start < 0 {
        return Err(UrlError::InvalidRange {
            message: "`start` width value must be greater than zero",
        });
    }
    Ok(())
}

/// Validates the stopping (maximum) width of a series.
///
/// # Errors
///
/// Returns [`UrlError::InvalidRange`] when `stop` is negative.
pub fn validate_max_width(stop: i32) -> Result<(), UrlError> {
    if stop < 0 {
        return Err(UrlError::InvalidRange {
            message: "`stop` width value must be greater than zero",
        });
    }
    Ok(())
}

/// Validates that `start..=stop` is a well-formed width range.
///
/// Runs both width validators, then checks ordering.
///
/// # Errors
///
/// Returns [`UrlError::InvalidRange`] when either bound is negative or when
/// `start > stop`.
///
/// # Example
///
/// ```
/// use pixurl::validate::validate_range;
///
/// assert!(validate_range(100, 8192).is_ok());
/// assert!(validate_range(8192, 100).is_err());
/// ```
pub fn validate_range(start: i32, stop: i32) -> Result<(), UrlError> {
    validate_min_width(start)?;
    validate_max_width(stop)?;

    if start > stop {
        return Err(UrlError::InvalidRange {
            message: "`start` width value must be less than `stop` width value",
        });
    }
    Ok(())
}

/// Validates a width-series tolerance.
///
/// # Errors
///
/// Returns [`UrlError::InvalidRange`] when `tol` is below [`ONE_PERCENT`].
///
/// # Example
///
/// ```
/// use pixurl::validate::validate_tolerance;
///
/// assert!(validate_tolerance(0.08).is_ok());
/// assert!(validate_tolerance(0.001).is_err());
/// ```
pub fn validate_tolerance(tol: f64) -> Result<(), UrlError> {
    if tol < ONE_PERCENT {
        return Err(UrlError::InvalidRange {
            message: "`tol`erance value must be greater than, or equal to one percent, ie. >= 0.01",
        });
    }
    Ok(())
}

/// Validates the full `(start, stop, tol)` triple for width generation.
///
/// # Errors
///
/// Propagates the first failure from [`validate_range`] or
/// [`validate_tolerance`].
pub fn validate_min_max_tol(start: i32, stop: i32, tol: f64) -> Result<(), UrlError> {
    validate_range(start, stop)?;
    validate_tolerance(tol)?;
    Ok(())
}

/// Validates an explicit list of candidate widths.
///
/// # Errors
///
/// Returns [`UrlError::InvalidWidths`] when the list is empty or contains a
/// negative value.
///
/// # Example
///
/// ```
/// use pixurl::validate::validate_widths;
///
/// assert!(validate_widths(&[100, 200, 303]).is_ok());
/// assert!(validate_widths(&[]).is_err());
/// assert!(validate_widths(&[100, -1]).is_err());
/// ```
pub fn validate_widths(widths: &[i32]) -> Result<(), UrlError> {
    if widths.is_empty() {
        return Err(UrlError::InvalidWidths {
            message: "`widths` list cannot be empty",
        });
    }

    for &w in widths {
        if w < 0 {
            return Err(UrlError::InvalidWidths {
                message: "width values in `widths` cannot be negative",
            });
        }
    }
    Ok(())
}
