//! Inverse-variance weights for the normal equations.
//!
//! Purpose
//! -------
//! Map optional per-observation ordinate uncertainties to the diagonal
//! weight matrix `W` of a weighted least-squares fit: `W_ii = 1 / σ_i²`
//! when uncertainties are supplied, the identity otherwise.
//!
//! Conventions
//! -----------
//! - Only the diagonal is stored; `W` enters the solver as a row scaling
//!   of the design matrix.
//! - Weights are relative: multiplying every `σ_i` by a common factor `c`
//!   scales `W` by `1 / c²`, which leaves the fitted coefficients unchanged.
use crate::regression::errors::{RegError, RegResult};
use ndarray::{Array1, ArrayView1};

/// Diagonal weight matrix `W`.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    diag: Array1<f64>,
    unit: bool,
}

impl Weights {
    /// Identity weights for `n` observations.
    pub fn identity(n: usize) -> Self {
        Weights { diag: Array1::ones(n), unit: true }
    }

    /// Build weights from optional ordinate uncertainties.
    ///
    /// Parameters
    /// ----------
    /// - `y_err`: `Option<ArrayView1<f64>>`
    ///   Per-observation 1σ uncertainties. `None` yields the identity.
    /// - `n`: `usize`
    ///   Number of observations.
    ///
    /// Errors
    /// ------
    /// - `RegError::LengthMismatch` if `y_err.len() != n`.
    /// - `RegError::NonFiniteData` for a NaN/±∞ uncertainty.
    /// - `RegError::NonPositiveUncertainty` for a zero or negative
    ///   uncertainty, where the inverse variance is undefined.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_polyfit::regression::core::weights::Weights;
    /// let w = Weights::from_uncertainties(Some(array![0.5, 2.0].view()), 2).unwrap();
    /// assert_eq!(w.diag(), &array![4.0, 0.25]);
    /// ```
    pub fn from_uncertainties(y_err: Option<ArrayView1<f64>>, n: usize) -> RegResult<Self> {
        let Some(y_err) = y_err else {
            return Ok(Self::identity(n));
        };
        if y_err.len() != n {
            return Err(RegError::LengthMismatch { field: "y_err", expected: n, actual: y_err.len() });
        }
        let mut diag = Array1::<f64>::zeros(n);
        for (index, (&sigma, w)) in y_err.iter().zip(diag.iter_mut()).enumerate() {
            if !sigma.is_finite() {
                return Err(RegError::NonFiniteData { field: "y_err", index, value: sigma });
            }
            if sigma <= 0.0 {
                return Err(RegError::NonPositiveUncertainty { field: "y_err", index, value: sigma });
            }
            *w = sigma.powi(-2);
        }
        Ok(Weights { diag, unit: false })
    }

    /// Diagonal entries `W_ii`.
    pub fn diag(&self) -> &Array1<f64> {
        &self.diag
    }

    /// `true` when built without uncertainties.
    pub fn is_identity(&self) -> bool {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// `trace(W) = Σ W_ii`.
    pub fn total(&self) -> f64 {
        self.diag.sum()
    }

    /// Weighted sum of squares `rᵀ W r`.
    pub fn quadratic_form(&self, r: ArrayView1<f64>) -> f64 {
        r.iter().zip(self.diag.iter()).map(|(ri, wi)| wi * ri * ri).sum()
    }
}
