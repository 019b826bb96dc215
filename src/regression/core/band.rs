//! regression::core::band: confidence-band half-widths around a fitted polynomial.
//!
//! Purpose
//! -------
//! Evaluate the half-width of the confidence band of a fitted polynomial at
//! arbitrary abscissae and significance levels. The caller forms
//! `model(x) ± half_width(x)` to get the band.
//!
//! Key behaviors
//! -------------
//! - [`BandNormalizer`] captures, once per fit, the column means `z̄` of the
//!   design matrix, the scalar dispersion
//!   `norm = Σ_{jk} [(Z − z̄)ᵀ (Z − z̄)]_{jk}`, and `trace(W)`.
//! - [`half_widths`] evaluates, for each new abscissa with design row `z`,
//!
//!   `t(1 − p, dof) · sqrt( ssr/dof · ( 1/trace(W) + Σ_j invcov_jj (z_j − z̄_j)² / norm ) )`
//!
//!   a baseline term from the average observation weight plus a leverage
//!   term growing with the distance of `z` from the mean design row.
//!
//! Invariants & assumptions
//! ------------------------
//! - `dof > 0` and `0 < p < 1`; smaller `p` yields a wider band.
//! - `norm >= 0` by construction (it is the squared norm of the row sums of
//!   the centered design). When `norm == 0` (order 0, or a single distinct
//!   abscissa) the leverage term is taken as zero.
//! - Evaluation is read-only over the fitted state and safe to call from
//!   multiple threads.
//!
//! Testing notes
//! -------------
//! - Unit tests compare a straight-line band with the hand-expanded
//!   formula, and check widening away from the data centre, widening as
//!   `p → 0`, and the order-0 degenerate normalizer.
use crate::regression::{
    core::{design::design_row, uncertainty::t_critical, weights::Weights},
    errors::RegResult,
    validation::ensure_significance,
};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Per-fit constants of the confidence-band formula.
///
/// Fields
/// ------
/// - `xbar`: column means of the fitted design matrix, length `k`.
/// - `norm`: sum of all entries of `(Z − z̄)ᵀ (Z − z̄)`.
/// - `weight_total`: `trace(W)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandNormalizer {
    xbar: Array1<f64>,
    norm: f64,
    weight_total: f64,
}

impl BandNormalizer {
    /// Derive the normalizer from the design matrix and weights of a fit.
    pub fn from_design(z: ArrayView2<f64>, weights: &Weights) -> Self {
        let xbar = z.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(z.ncols()));
        let centered = &z - &xbar;
        let norm = centered.t().dot(&centered).sum();
        BandNormalizer { xbar, norm, weight_total: weights.total() }
    }

    pub fn xbar(&self) -> &Array1<f64> {
        &self.xbar
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn weight_total(&self) -> f64 {
        self.weight_total
    }

    /// Relative variance factor `1/trace(W) + Σ_j c_jj (z_j − z̄_j)² / norm`
    /// for one design row.
    pub fn variance_factor(&self, invcov_diag: ArrayView1<f64>, z_row: ArrayView1<f64>) -> f64 {
        let leverage = if self.norm > 0.0 {
            invcov_diag
                .iter()
                .zip(z_row.iter().zip(self.xbar.iter()))
                .map(|(c, (z, m))| c * (z - m).powi(2))
                .sum::<f64>()
                / self.norm
        } else {
            0.0
        };
        1.0 / self.weight_total + leverage
    }
}

/// Confidence-band half-widths at `x_new` for significance level `p`.
///
/// Parameters
/// ----------
/// - `normalizer`: `&BandNormalizer`
///   Per-fit constants from [`BandNormalizer::from_design`].
/// - `invcov`: `ArrayView2<f64>`
///   Inverse normal matrix of the fit, `k × k`; only the diagonal is used.
/// - `ssr`: `f64`
///   Weighted residual sum of squares.
/// - `dof`: `usize`
///   Degrees of freedom of the fit.
/// - `x_new`: `ArrayView1<f64>`
///   Abscissae at which to evaluate the band.
/// - `p`: `f64`
///   Significance level in (0, 1); the quantile used is `t(1 − p, dof)`.
///
/// Returns
/// -------
/// `RegResult<Array1<f64>>`
///   One non-negative half-width per entry of `x_new`.
///
/// Errors
/// ------
/// - `RegError::InvalidSignificance` if `p` is outside (0, 1).
/// - `RegError::ZeroDegreesOfFreedom` if `dof == 0`.
pub fn half_widths(
    normalizer: &BandNormalizer, invcov: ArrayView2<f64>, ssr: f64, dof: usize,
    x_new: ArrayView1<f64>, p: f64,
) -> RegResult<Array1<f64>> {
    ensure_significance(p)?;
    let t = t_critical(1.0 - p, dof)?;
    let variance_scale = ssr / dof as f64;
    let invcov_diag = invcov.diag();
    let order = invcov.nrows().saturating_sub(1);
    Ok(x_new.mapv(|x| {
        let z_row = design_row(x, order);
        t * (variance_scale * normalizer.variance_factor(invcov_diag, z_row.view())).sqrt()
    }))
}
