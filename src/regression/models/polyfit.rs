//! regression::models::polyfit: the polynomial least-squares engine.
//!
//! Purpose
//! -------
//! Fit a polynomial of fixed order to weighted observations once, at
//! construction, and expose the fitted coefficients, their 1σ
//! uncertainties, the polynomial itself, and its confidence band as
//! read-only queries over the stored result.
//!
//! Key behaviors
//! -------------
//! - [`PolyFit::new`] runs the whole pipeline eagerly:
//!   observations → design matrix `Z` and weights `W` → normal-equations
//!   solve → residuals and `ssr = rᵀ W r` → Student-t uncertainties →
//!   band normalizer. Any failure aborts construction.
//! - [`PolyFit::model`] and [`PolyFit::confidence_interval`] are pure reads
//!   over the immutable [`FitResult`]; they never re-validate the fit.
//! - The chosen solve path and the condition estimate are logged at `debug`
//!   level; a near-singular design is logged at `warn` level and
//!   kept in [`FitResult::warnings`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `dof = n − (order + 1) > 0`, checked before any matrix is formed.
//! - Ordinate uncertainties, when present, are strictly positive; they act
//!   as relative weights, so a common rescaling leaves `params` and
//!   `uncertainties` unchanged.
//! - Abscissa uncertainties are carried for downstream consumers and do not
//!   enter the fit.
//! - A constructed [`PolyFit`] is never mutated, so shared references may
//!   be queried from several threads at once.
//!
//! Conventions
//! -----------
//! - Coefficients are ordered by ascending power.
//! - `p` arguments are significance levels: the band covers the expected
//!   ordinate with probability `1 − p`.
//!
//! Downstream usage
//! ----------------
//! - Rust callers build [`Observations`] and [`FitOptions`] and call
//!   [`PolyFit::new`], or use [`PolyFit::fit`] for unweighted data with
//!   default options.
//! - Reporting and plotting helpers in `regression::models::report` consume
//!   only the public accessors defined here.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the stored artefacts of a straight-line fit, the
//!   degrees-of-freedom guard, the default significance in
//!   `confidence_interval`, and thread-safety of the engine type.
//! - `tests/integration_polyfit_pipeline.rs` covers the statistical
//!   properties end to end.
use crate::regression::{
    core::{
        band::{BandNormalizer, half_widths},
        data::Observations,
        design::design_matrix,
        model::evaluate,
        options::FitOptions,
        solver::{FitWarning, SolvePath, solve_normal_equations},
        uncertainty::parameter_uncertainties,
        weights::Weights,
    },
    errors::RegResult,
    validation::degrees_of_freedom,
};
use log::{debug, warn};
use ndarray::{Array1, Array2, ArrayView1};

/// FitResult: immutable outcome of one polynomial least-squares fit.
///
/// Fields
/// ------
/// - `params`: `Array1<f64>`
///   Coefficients `β`, length `order + 1`, ascending powers.
/// - `invcov`: `Array2<f64>`
///   `(Zᵀ W Z)⁻¹` (or its pseudo-inverse); the coefficient covariance up to
///   the residual-variance factor `ssr / dof`.
/// - `residuals`: `Array1<f64>`
///   `y − Z β`, one per observation.
/// - `ssr`: `f64`
///   Weighted residual sum of squares `rᵀ W r`.
/// - `dof`: `usize`
///   `n − (order + 1)`, always positive.
/// - `uncertainties`: `Array1<f64>`
///   Student-t scaled 1σ uncertainties of `params`.
/// - `path`: [`SolvePath`]
///   Whether the exact inverse or the pseudo-inverse was used.
/// - `rcond`: `f64`
///   Reciprocal condition estimate of `Zᵀ W Z`.
/// - `warnings`: `Vec<FitWarning>`
///   Non-fatal numeric conditions met during the solve.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub params: Array1<f64>,
    pub invcov: Array2<f64>,
    pub residuals: Array1<f64>,
    pub ssr: f64,
    pub dof: usize,
    pub uncertainties: Array1<f64>,
    pub path: SolvePath,
    pub rcond: f64,
    pub warnings: Vec<FitWarning>,
}

/// PolyFit: weighted polynomial least-squares fit with confidence bands.
///
/// Purpose
/// -------
/// Own the observations, options, and fitted state of one polynomial
/// regression and answer model and confidence-band queries against it.
///
/// Fields
/// ------
/// - `observations`: validated input data.
/// - `options`: order, default significance, singularity policy.
/// - `design`: design matrix `Z` of the observations.
/// - `weights`: diagonal of `W`.
/// - `normalizer`: per-fit constants of the band formula.
/// - `result`: the [`FitResult`].
///
/// Invariants
/// ----------
/// - Every field is set once in [`PolyFit::new`] and never reassigned.
///
/// Notes
/// -----
/// - The type is `Send + Sync`; queries take `&self` only.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFit {
    observations: Observations,
    options: FitOptions,
    design: Array2<f64>,
    weights: Weights,
    normalizer: BandNormalizer,
    result: FitResult,
}

impl PolyFit {
    /// Fit a polynomial to `observations` with the given `options`.
    ///
    /// Parameters
    /// ----------
    /// - `observations`: [`Observations`]
    ///   Validated abscissae, ordinates, and optional uncertainties.
    /// - `options`: [`FitOptions`]
    ///   Polynomial order, default significance level, singularity policy.
    ///
    /// Returns
    /// -------
    /// `RegResult<PolyFit>`
    ///   The fitted engine.
    ///
    /// Errors
    /// ------
    /// - `RegError::InvalidSignificance` / `RegError::InvalidTolerance` if
    ///   `options` holds out-of-range values.
    /// - `RegError::InsufficientDegreesOfFreedom` if `n <= order + 1`.
    /// - `RegError::NonPositiveUncertainty` if any `y_err` entry is `<= 0`.
    /// - `RegError::SingularSystem` if the pseudo-inverse fallback fails.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_polyfit::regression::{
    /// #     core::{data::Observations, options::FitOptions},
    /// #     models::polyfit::PolyFit,
    /// # };
    /// let obs = Observations::new(
    ///     array![0.0, 1.0, 2.0, 3.0, 4.0],
    ///     array![1.0, 3.0, 5.0, 7.0, 9.0],
    ///     None,
    ///     None,
    /// )
    /// .unwrap();
    /// let fit = PolyFit::new(obs, FitOptions::with_order(1)).unwrap();
    /// assert!((fit.params()[0] - 1.0).abs() < 1e-10);
    /// assert!((fit.params()[1] - 2.0).abs() < 1e-10);
    /// assert!(fit.ssr() < 1e-16);
    /// ```
    pub fn new(observations: Observations, options: FitOptions) -> RegResult<Self> {
        let options = FitOptions::new(options.order, options.p, options.singularity)?;
        let n = observations.len();
        let dof = degrees_of_freedom(n, options.n_params())?;

        let design = design_matrix(observations.x().view(), options.order);
        let weights = Weights::from_uncertainties(observations.y_err().map(|e| e.view()), n)?;
        let solution = solve_normal_equations(
            design.view(),
            &weights,
            observations.y().view(),
            options.singularity,
        )?;

        debug!(
            "polyfit: order {} on {} observations solved via {:?} (rcond = {:e})",
            options.order, n, solution.path, solution.rcond
        );
        let warnings: Vec<FitWarning> = solution.warning.into_iter().collect();
        for w in &warnings {
            warn!("polyfit: {w}");
        }

        let residuals = observations.y() - &design.dot(&solution.params);
        let ssr = weights.quadratic_form(residuals.view());
        let uncertainties = parameter_uncertainties(solution.invcov.view(), ssr, dof)?;
        let normalizer = BandNormalizer::from_design(design.view(), &weights);

        let result = FitResult {
            params: solution.params,
            invcov: solution.invcov,
            residuals,
            ssr,
            dof,
            uncertainties,
            path: solution.path,
            rcond: solution.rcond,
            warnings,
        };
        Ok(PolyFit { observations, options, design, weights, normalizer, result })
    }

    /// Unweighted fit of `y` against `x` with default significance and
    /// singularity policy.
    ///
    /// Errors
    /// ------
    /// - Any error of [`Observations::new`] or [`PolyFit::new`].
    pub fn fit(x: Array1<f64>, y: Array1<f64>, order: usize) -> RegResult<Self> {
        let observations = Observations::unweighted(x, y)?;
        Self::new(observations, FitOptions::with_order(order))
    }

    /// Fitted polynomial evaluated at `x`.
    pub fn model(&self, x: ArrayView1<f64>) -> Array1<f64> {
        evaluate(self.result.params.view(), x)
    }

    /// Confidence-band half-widths at `x`.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `ArrayView1<f64>`
    ///   Abscissae at which to evaluate the band.
    /// - `p`: `Option<f64>`
    ///   Significance level in (0, 1); `None` uses the level the fit was
    ///   configured with.
    ///
    /// Returns
    /// -------
    /// `RegResult<Array1<f64>>`
    ///   Half-widths; the band is `model(x) ± half_width`.
    ///
    /// Errors
    /// ------
    /// - `RegError::InvalidSignificance` if `p` is outside (0, 1).
    pub fn confidence_interval(&self, x: ArrayView1<f64>, p: Option<f64>) -> RegResult<Array1<f64>> {
        half_widths(
            &self.normalizer,
            self.result.invcov.view(),
            self.result.ssr,
            self.result.dof,
            x,
            p.unwrap_or(self.options.p),
        )
    }

    pub fn params(&self) -> &Array1<f64> {
        &self.result.params
    }

    pub fn uncertainties(&self) -> &Array1<f64> {
        &self.result.uncertainties
    }

    pub fn ssr(&self) -> f64 {
        self.result.ssr
    }

    pub fn dof(&self) -> usize {
        self.result.dof
    }

    pub fn residuals(&self) -> &Array1<f64> {
        &self.result.residuals
    }

    /// Inverse normal matrix `(Zᵀ W Z)⁻¹`.
    pub fn covariance(&self) -> &Array2<f64> {
        &self.result.invcov
    }

    /// Design matrix `Z` of the fitted observations.
    pub fn design(&self) -> &Array2<f64> {
        &self.design
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn observations(&self) -> &Observations {
        &self.observations
    }

    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    pub fn order(&self) -> usize {
        self.options.order
    }

    pub fn n_obs(&self) -> usize {
        self.observations.len()
    }

    /// Default significance level used by [`PolyFit::confidence_interval`].
    pub fn significance(&self) -> f64 {
        self.options.p
    }

    pub fn solve_path(&self) -> SolvePath {
        self.result.path
    }

    pub fn warnings(&self) -> &[FitWarning] {
        &self.result.warnings
    }

    pub fn result(&self) -> &FitResult {
        &self.result
    }

    pub fn normalizer(&self) -> &BandNormalizer {
        &self.normalizer
    }
}
