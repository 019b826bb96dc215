//! Observation containers for polynomial least-squares fits.
//!
//! Purpose
//! -------
//! Provide a small, validated container for paired abscissa/ordinate samples
//! and their optional uncertainties. This module centralizes the shape and
//! finiteness checks so downstream stages can assume consistent inputs.
//!
//! Key behaviors
//! -------------
//! - [`Observations`] enforces non-emptiness, `len(x) == len(y)`, matching
//!   lengths for any supplied uncertainty arrays, and finite values.
//! - Abscissa uncertainties must be non-negative; ordinate uncertainties are
//!   checked for strict positivity by the weight builder, which is where the
//!   inverse variance is formed.
//!
//! Invariants & assumptions
//! ------------------------
//! - Once constructed, an [`Observations`] value is never mutated by the
//!   engine.
//! - Absent uncertainties are modeled as `None`, never as sentinel arrays.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, empty input, length mismatches for
//!   every optional array, non-finite values, and negative `x_err`.
use crate::regression::{
    errors::{RegError, RegResult},
    validation::{ensure_finite, ensure_length},
};
use ndarray::Array1;

/// `Observations`: validated abscissa/ordinate samples with uncertainties.
///
/// Fields
/// ------
/// - `x`: `Array1<f64>`
///   Abscissa values, length `n > 0`, all finite.
/// - `y`: `Array1<f64>`
///   Ordinate values, length `n`, all finite.
/// - `x_err`: `Option<Array1<f64>>`
///   Optional abscissa uncertainties. Carried for reporting and plotting
///   collaborators; they do not enter the fit.
/// - `y_err`: `Option<Array1<f64>>`
///   Optional ordinate uncertainties used for inverse-variance weights.
///
/// Invariants
/// ----------
/// - `x.len() == y.len() > 0`.
/// - Every supplied uncertainty array has length `n` and finite entries.
/// - `x_err` entries are `>= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    x: Array1<f64>,
    y: Array1<f64>,
    x_err: Option<Array1<f64>>,
    y_err: Option<Array1<f64>>,
}

impl Observations {
    /// Construct validated [`Observations`].
    ///
    /// Errors
    /// ------
    /// - `RegError::EmptyObservations` when `x` is empty.
    /// - `RegError::LengthMismatch` when `y`, `x_err`, or `y_err` do not
    ///   match `x.len()`.
    /// - `RegError::NonFiniteData` for NaN/±∞ in any array.
    /// - `RegError::NonPositiveUncertainty` for a negative `x_err` entry.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_polyfit::regression::core::data::Observations;
    /// let obs = Observations::new(array![0.0, 1.0, 2.0], array![1.0, 3.0, 5.0], None, None)
    ///     .unwrap();
    /// assert_eq!(obs.len(), 3);
    /// assert!(obs.y_err().is_none());
    /// ```
    pub fn new(
        x: Array1<f64>, y: Array1<f64>, x_err: Option<Array1<f64>>, y_err: Option<Array1<f64>>,
    ) -> RegResult<Self> {
        let n = x.len();
        if n == 0 {
            return Err(RegError::EmptyObservations);
        }
        ensure_length("y", n, y.len())?;
        ensure_finite("x", x.view())?;
        ensure_finite("y", y.view())?;

        if let Some(x_err) = &x_err {
            ensure_length("x_err", n, x_err.len())?;
            ensure_finite("x_err", x_err.view())?;
            if let Some((index, &value)) = x_err.iter().enumerate().find(|(_, v)| **v < 0.0) {
                return Err(RegError::NonPositiveUncertainty { field: "x_err", index, value });
            }
        }
        if let Some(y_err) = &y_err {
            ensure_length("y_err", n, y_err.len())?;
            ensure_finite("y_err", y_err.view())?;
        }

        Ok(Observations { x, y, x_err, y_err })
    }

    /// Unweighted observations with no uncertainties.
    pub fn unweighted(x: Array1<f64>, y: Array1<f64>) -> RegResult<Self> {
        Self::new(x, y, None, None)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn x_err(&self) -> Option<&Array1<f64>> {
        self.x_err.as_ref()
    }

    pub fn y_err(&self) -> Option<&Array1<f64>> {
        self.y_err.as_ref()
    }

    /// Smallest and largest abscissa value.
    pub fn x_range(&self) -> (f64, f64) {
        self.x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful construction with and without uncertainties.
    // - Each validation branch of `Observations::new`.
    //
    // They intentionally DO NOT cover:
    // - Strict positivity of `y_err`, which the weight builder enforces.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify construction with both uncertainty arrays present.
    //
    // Expect
    // ------
    // - Accessors return the stored arrays and the abscissa range.
    fn new_with_uncertainties_preserves_inputs() {
        // Arrange
        let x = array![3.0, -1.0, 2.0];
        let y = array![1.0, 2.0, 3.0];

        // Act
        let obs = Observations::new(
            x.clone(),
            y.clone(),
            Some(array![0.1, 0.0, 0.2]),
            Some(array![0.5, 0.5, 0.5]),
        )
        .expect("valid observations");

        // Assert
        assert_eq!(obs.x(), &x);
        assert_eq!(obs.y(), &y);
        assert_eq!(obs.x_err().map(|e| e.len()), Some(3));
        assert_eq!(obs.y_err().map(|e| e.len()), Some(3));
        assert_eq!(obs.x_range(), (-1.0, 3.0));
    }

    #[test]
    fn new_rejects_empty_input() {
        let result = Observations::unweighted(Array1::zeros(0), Array1::zeros(0));
        assert_eq!(result, Err(RegError::EmptyObservations));
    }

    #[test]
    // Purpose
    // -------
    // Ensure every length mismatch is reported against the right field.
    //
    // Expect
    // ------
    // - `y`, `x_err`, and `y_err` mismatches name their own field.
    fn new_reports_length_mismatch_per_field() {
        let x = array![0.0, 1.0, 2.0];

        let y_err = Observations::unweighted(x.clone(), array![1.0, 2.0]);
        let x_err_err =
            Observations::new(x.clone(), array![1.0, 2.0, 3.0], Some(array![0.1]), None);
        let y_err_err =
            Observations::new(x, array![1.0, 2.0, 3.0], None, Some(array![0.1, 0.1]));

        assert_eq!(y_err, Err(RegError::LengthMismatch { field: "y", expected: 3, actual: 2 }));
        assert_eq!(
            x_err_err,
            Err(RegError::LengthMismatch { field: "x_err", expected: 3, actual: 1 })
        );
        assert_eq!(
            y_err_err,
            Err(RegError::LengthMismatch { field: "y_err", expected: 3, actual: 2 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that non-finite ordinates and negative abscissa uncertainties
    // are rejected as domain errors.
    fn new_rejects_non_finite_and_negative_x_err() {
        let nan_y = Observations::unweighted(array![0.0, 1.0], array![f64::NAN, 1.0]);
        let neg_x_err =
            Observations::new(array![0.0, 1.0], array![0.0, 1.0], Some(array![0.1, -0.1]), None);

        assert!(matches!(nan_y, Err(RegError::NonFiniteData { field: "y", index: 0, .. })));
        assert!(matches!(
            neg_x_err,
            Err(RegError::NonPositiveUncertainty { field: "x_err", index: 1, .. })
        ));
        assert!(nan_y.unwrap_err().is_domain());
    }
}
