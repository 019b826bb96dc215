//! Fit options: polynomial order, significance level, singularity policy.
//!
//! Purpose
//! -------
//! Collect the configuration knobs of a polynomial least-squares fit in one
//! validated value so call sites pass explicit options instead of loose
//! arguments.
//!
//! Key behaviors
//! -------------
//! - [`FitOptions`] bundles the polynomial order, the default significance
//!   level used by confidence bands, and the [`SingularityTest`] applied to
//!   the weighted design.
//! - [`SingularityTest`] selects between a tolerance-based rank test on the
//!   singular values (default) and the exact `det == 0` comparison.
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 < p < 1`.
//! - `SingularityTest::Tolerance { rtol }` has `rtol` finite and `> 0`.
//! - Degrees of freedom are checked against the data by the engine, not
//!   here, since they depend on the number of observations.
use crate::regression::{
    errors::{RegError, RegResult},
    validation::ensure_significance,
};

/// Polynomial order used when none is given.
pub const DEFAULT_ORDER: usize = 1;

/// Significance level used by confidence bands when none is given.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Relative singular-value threshold of the weighted design `W^{1/2} Z`
/// below which the fit is treated as rank deficient. Also the relative
/// truncation cutoff of the pseudo-inverse.
pub const DEFAULT_RTOL: f64 = 1e-13;

/// Ratios up to `rtol * NEAR_SINGULAR_FACTOR` are near singular: solved via
/// the pseudo-inverse and reported as a warning. With the default `rtol`
/// this is where `cond(Zᵀ W Z)` exceeds `1e18`, beyond the reach of an LU
/// inverse in double precision.
pub const NEAR_SINGULAR_FACTOR: f64 = 1e4;

/// Singularity policy for the weighted least-squares system.
///
/// - `Tolerance { rtol }`: singular when `σ_min / σ_max <= rtol` for the
///   singular values of `W^{1/2} Z` (the square roots of those of
///   `M = Zᵀ W Z`), near singular when the ratio is at most
///   `rtol * NEAR_SINGULAR_FACTOR`.
/// - `ExactDeterminant`: singular only when `det(M) == 0.0` exactly. Never
///   reports a near-singular warning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SingularityTest {
    Tolerance { rtol: f64 },
    ExactDeterminant,
}

impl SingularityTest {
    /// Tolerance-based test with a caller-chosen relative threshold.
    ///
    /// # Errors
    /// - [`RegError::InvalidTolerance`] if `rtol` is non-finite or `<= 0`.
    pub fn tolerance(rtol: f64) -> RegResult<Self> {
        if !rtol.is_finite() || rtol <= 0.0 {
            return Err(RegError::InvalidTolerance { value: rtol });
        }
        Ok(SingularityTest::Tolerance { rtol })
    }
}

impl Default for SingularityTest {
    fn default() -> Self {
        SingularityTest::Tolerance { rtol: DEFAULT_RTOL }
    }
}

/// FitOptions: configuration of a polynomial least-squares fit.
///
/// Fields
/// ------
/// - `order`: `usize`
///   Polynomial order; the fit has `order + 1` coefficients.
/// - `p`: `f64`
///   Default significance level for confidence bands, in (0, 1).
/// - `singularity`: [`SingularityTest`]
///   How the solver decides between the exact inverse and the
///   pseudo-inverse.
///
/// Default:
/// - `order = 1`, `p = 0.05`, `singularity = Tolerance { rtol: 1e-13 }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub order: usize,
    pub p: f64,
    pub singularity: SingularityTest,
}

impl FitOptions {
    /// Construct validated fit options.
    ///
    /// # Errors
    /// - [`RegError::InvalidSignificance`] if `p` is outside (0, 1).
    /// - [`RegError::InvalidTolerance`] for a tolerance test with a bad
    ///   `rtol` (values built through [`SingularityTest::tolerance`] are
    ///   already valid).
    pub fn new(order: usize, p: f64, singularity: SingularityTest) -> RegResult<Self> {
        ensure_significance(p)?;
        if let SingularityTest::Tolerance { rtol } = singularity {
            SingularityTest::tolerance(rtol)?;
        }
        Ok(FitOptions { order, p, singularity })
    }

    /// Options for a given order with the default significance and policy.
    pub fn with_order(order: usize) -> Self {
        FitOptions { order, ..FitOptions::default() }
    }

    /// Number of fitted coefficients, `order + 1`.
    pub fn n_params(&self) -> usize {
        self.order + 1
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            order: DEFAULT_ORDER,
            p: DEFAULT_SIGNIFICANCE,
            singularity: SingularityTest::default(),
        }
    }
}
