//! regression::core::uncertainty: Student-t scaled coefficient uncertainties.
//!
//! Purpose
//! -------
//! Turn the inverse normal matrix and the weighted residual sum of squares
//! into 1σ coefficient uncertainties with a finite-sample Student-t
//! correction, and expose the Student-t quantile shared with the
//! confidence-band evaluator.
//!
//! Key behaviors
//! -------------
//! - [`t_critical`] evaluates the quantile function of a standard
//!   Student-t distribution with `dof` degrees of freedom.
//! - [`parameter_uncertainties`] computes
//!   `σ_i = sqrt(invcov_ii · ssr / dof) · t(0.8413, dof)`, the one-sided
//!   84.13th percentile generalizing the Gaussian 1σ bound.
//!
//! Invariants & assumptions
//! ------------------------
//! - `dof > 0`; zero degrees of freedom is a configuration error.
//! - `invcov` is square with a non-negative diagonal (an inverse or
//!   pseudo-inverse of a positive semi-definite matrix). Tiny negative
//!   round-off on the diagonal is clamped to zero before the square root.
//!
//! Testing notes
//! -------------
//! - Unit tests check the quantile against tabulated values, the
//!   large-dof Gaussian limit, and the uncertainty formula on a
//!   hand-computed example.
use crate::regression::errors::{RegError, RegResult};
use ndarray::{Array1, ArrayView2};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Cumulative probability of the one-sided 1σ point of a standard normal.
pub const ONE_SIGMA_QUANTILE: f64 = 0.8413;

/// Quantile of the standard Student-t distribution.
///
/// Parameters
/// ----------
/// - `q`: `f64`
///   Cumulative probability, strictly inside (0, 1).
/// - `dof`: `usize`
///   Degrees of freedom, `> 0`.
///
/// Errors
/// ------
/// - `RegError::ZeroDegreesOfFreedom` if `dof == 0`.
/// - `RegError::InvalidSignificance` if `q` is outside (0, 1).
/// - `RegError::Distribution` if `statrs` rejects the parameters.
///
/// Examples
/// --------
/// ```rust
/// # use rust_polyfit::regression::core::uncertainty::t_critical;
/// // Two-sided 95% critical value with 10 dof is ≈ 2.228.
/// let t = t_critical(0.975, 10).unwrap();
/// assert!((t - 2.228).abs() < 1e-3);
/// ```
pub fn t_critical(q: f64, dof: usize) -> RegResult<f64> {
    if dof == 0 {
        return Err(RegError::ZeroDegreesOfFreedom);
    }
    if !(q > 0.0 && q < 1.0) {
        return Err(RegError::InvalidSignificance { p: q });
    }
    let dist = StudentsT::new(0.0, 1.0, dof as f64)?;
    Ok(dist.inverse_cdf(q))
}

/// 1σ coefficient uncertainties with a Student-t correction.
///
/// Parameters
/// ----------
/// - `invcov`: `ArrayView2<f64>`
///   Inverse normal matrix `(Zᵀ W Z)⁻¹`, `k × k`.
/// - `ssr`: `f64`
///   Weighted residual sum of squares `rᵀ W r`.
/// - `dof`: `usize`
///   Degrees of freedom `n − k`.
///
/// Returns
/// -------
/// `RegResult<Array1<f64>>`
///   `σ_i = sqrt(invcov_ii · ssr / dof) · t(0.8413, dof)` for each
///   coefficient.
///
/// Errors
/// ------
/// - `RegError::ZeroDegreesOfFreedom` if `dof == 0`.
pub fn parameter_uncertainties(
    invcov: ArrayView2<f64>, ssr: f64, dof: usize,
) -> RegResult<Array1<f64>> {
    let t = t_critical(ONE_SIGMA_QUANTILE, dof)?;
    let variance_scale = ssr / dof as f64;
    Ok(invcov.diag().mapv(|c| (c.max(0.0) * variance_scale).sqrt() * t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Student-t quantiles against table values and the Gaussian limit.
    // - The uncertainty formula on a diagonal inverse normal matrix.
    // - The zero-dof and out-of-range probability guards.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Compare `t_critical` with standard table values.
    //
    // Expect
    // ------
    // - t(0.975, 10) ≈ 2.2281, t(0.95, 5) ≈ 2.0150, t(0.5, k) = 0.
    fn t_critical_matches_table_values() {
        assert_abs_diff_eq!(t_critical(0.975, 10).unwrap(), 2.2281, epsilon = 1e-4);
        assert_abs_diff_eq!(t_critical(0.95, 5).unwrap(), 2.0150, epsilon = 1e-4);
        assert_abs_diff_eq!(t_critical(0.5, 7).unwrap(), 0.0, epsilon = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the 1σ quantile approaches the Gaussian value (≈ 1.0) as
    // the degrees of freedom grow, and exceeds it for small samples.
    fn one_sigma_quantile_tends_to_gaussian_limit() {
        let small = t_critical(ONE_SIGMA_QUANTILE, 3).unwrap();
        let large = t_critical(ONE_SIGMA_QUANTILE, 1_000).unwrap();

        assert!(small > large);
        assert_abs_diff_eq!(large, 1.0, epsilon = 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // Check the uncertainty formula on a hand-computed case.
    //
    // Given
    // -----
    // - invcov with diagonal (0.6, 0.1), ssr = 3, dof = 3.
    //
    // Expect
    // ------
    // - σ = [sqrt(0.6), sqrt(0.1)] · t(0.8413, 3).
    fn parameter_uncertainties_scale_diagonal_by_residual_variance() {
        // Arrange
        let invcov = array![[0.6, -0.2], [-0.2, 0.1]];
        let t = t_critical(ONE_SIGMA_QUANTILE, 3).unwrap();

        // Act
        let sigma = parameter_uncertainties(invcov.view(), 3.0, 3).unwrap();

        // Assert
        assert_abs_diff_eq!(sigma[0], 0.6_f64.sqrt() * t, epsilon = 1e-12);
        assert_abs_diff_eq!(sigma[1], 0.1_f64.sqrt() * t, epsilon = 1e-12);
    }

    #[test]
    fn zero_dof_and_bad_probability_are_rejected() {
        assert!(matches!(
            parameter_uncertainties(array![[1.0]].view(), 1.0, 0),
            Err(RegError::ZeroDegreesOfFreedom)
        ));
        assert!(matches!(t_critical(1.0, 4), Err(RegError::InvalidSignificance { .. })));
        assert!(matches!(t_critical(0.0, 4), Err(RegError::InvalidSignificance { .. })));
    }
}
