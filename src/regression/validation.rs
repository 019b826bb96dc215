//! regression::validation: shared input guards for the fitting engine.
//!
//! Purpose
//! -------
//! Centralize the small checks that several stages need (finiteness of a
//! series, matching lengths, significance level in (0, 1)) so that every
//! entry point reports the same [`RegError`] variants for the same mistakes.
//!
//! Conventions
//! -----------
//! - Guards are pure and return on the first violation.
//! - `field` arguments name the caller-facing input (`"x"`, `"y_err"`, …).

use crate::regression::errors::{RegError, RegResult};
use ndarray::ArrayView1;

/// Reject any NaN or ±∞ entry in `values`.
///
/// Errors
/// ------
/// - `RegError::NonFiniteData { field, index, value }` for the first
///   offending element.
pub fn ensure_finite(field: &'static str, values: ArrayView1<f64>) -> RegResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(RegError::NonFiniteData { field, index, value });
        }
    }
    Ok(())
}

/// Require `actual == expected` for the length of `field`.
pub fn ensure_length(field: &'static str, expected: usize, actual: usize) -> RegResult<()> {
    if expected != actual {
        return Err(RegError::LengthMismatch { field, expected, actual });
    }
    Ok(())
}

/// Require a significance level strictly inside (0, 1).
///
/// NaN fails the range test and is rejected as well.
pub fn ensure_significance(p: f64) -> RegResult<()> {
    if !(p > 0.0 && p < 1.0) {
        return Err(RegError::InvalidSignificance { p });
    }
    Ok(())
}

/// Degrees of freedom `n_obs - n_params`, rejecting non-positive values.
///
/// Errors
/// ------
/// - `RegError::InsufficientDegreesOfFreedom` when `n_obs <= n_params`.
pub fn degrees_of_freedom(n_obs: usize, n_params: usize) -> RegResult<usize> {
    match n_obs.checked_sub(n_params) {
        Some(dof) if dof > 0 => Ok(dof),
        _ => Err(RegError::InsufficientDegreesOfFreedom { n_obs, n_params }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover every error branch of the guards plus a happy path.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the first non-finite entry is reported with its index.
    //
    // Given
    // -----
    // - A series with NaN at index 1 and +∞ at index 2.
    //
    // Expect
    // ------
    // - `NonFiniteData { index: 1, .. }`.
    fn ensure_finite_reports_first_offending_index() {
        // Arrange
        let data = array![0.0, f64::NAN, f64::INFINITY];

        // Act
        let result = ensure_finite("y", data.view());

        // Assert
        match result {
            Err(RegError::NonFiniteData { field, index, .. }) => {
                assert_eq!(field, "y");
                assert_eq!(index, 1);
            }
            other => panic!("expected NonFiniteData, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the significance guard rejects the closed endpoints and NaN.
    //
    // Expect
    // ------
    // - 0.0, 1.0, and NaN are rejected; 0.05 is accepted.
    fn ensure_significance_rejects_endpoints_and_nan() {
        assert!(ensure_significance(0.05).is_ok());
        assert!(matches!(ensure_significance(0.0), Err(RegError::InvalidSignificance { .. })));
        assert!(matches!(ensure_significance(1.0), Err(RegError::InvalidSignificance { .. })));
        assert!(ensure_significance(f64::NAN).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Check degrees of freedom on the boundary `n_obs == n_params`.
    //
    // Given
    // -----
    // - 2 observations for a straight line (2 parameters), then 5 for 2.
    //
    // Expect
    // ------
    // - The first fails with `InsufficientDegreesOfFreedom`; the second is 3.
    fn degrees_of_freedom_rejects_zero_and_counts_positive() {
        // Act
        let zero = degrees_of_freedom(2, 2);
        let three = degrees_of_freedom(5, 2);

        // Assert
        assert_eq!(zero, Err(RegError::InsufficientDegreesOfFreedom { n_obs: 2, n_params: 2 }));
        assert_eq!(three, Ok(3));
        assert!(degrees_of_freedom(1, 4).is_err());
    }

    #[test]
    fn ensure_length_reports_expected_and_actual() {
        assert!(ensure_length("y", 3, 3).is_ok());
        assert_eq!(
            ensure_length("y", 3, 2),
            Err(RegError::LengthMismatch { field: "y", expected: 3, actual: 2 })
        );
    }
}
