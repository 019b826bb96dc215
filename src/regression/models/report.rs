//! regression::models::report: coefficient tables and plotting data.
//!
//! Purpose
//! -------
//! Turn a fitted [`PolyFit`] into the two artefacts its consumers want: a
//! printable table of coefficients with 1σ uncertainties, and a dense grid
//! of model values with confidence-band bounds for plotting. Nothing here
//! renders graphics or does numerical work of its own; both artefacts are
//! built from the public accessors of the engine.
//!
//! Key behaviors
//! -------------
//! - [`CoefficientReport`] formats one line per coefficient as
//!   `a_i x^i  :  value +/- uncertainty` with three decimals. `PolyFit`
//!   implements `Display` through it.
//! - [`BandGrid::from_fit`] samples `points` evenly spaced abscissae over
//!   `[floor(min x), floor(max x) + 1]` and stores the model values and the
//!   lower and upper band bounds at each.
//!
//! Invariants & assumptions
//! ------------------------
//! - A grid has at least two points.
//! - `lower <= fit <= upper` elementwise, since half-widths are
//!   non-negative.
use crate::regression::{
    errors::{RegError, RegResult},
    models::polyfit::PolyFit,
};
use ndarray::Array1;
use std::fmt;

/// Number of abscissae in a plotting grid when none is given.
pub const DEFAULT_GRID_POINTS: usize = 101;

/// One row of a [`CoefficientReport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientLine {
    pub power: usize,
    pub value: f64,
    pub uncertainty: f64,
}

impl fmt::Display for CoefficientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a_{i} x^{i}  :  {value:.3} +/- {unc:.3}",
            i = self.power,
            value = self.value,
            unc = self.uncertainty
        )
    }
}

/// Coefficients of a fit with their 1σ uncertainties, ascending powers.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientReport {
    lines: Vec<CoefficientLine>,
}

impl CoefficientReport {
    pub fn from_fit(fit: &PolyFit) -> Self {
        let lines = fit
            .params()
            .iter()
            .zip(fit.uncertainties().iter())
            .enumerate()
            .map(|(power, (&value, &uncertainty))| CoefficientLine { power, value, uncertainty })
            .collect();
        CoefficientReport { lines }
    }

    pub fn lines(&self) -> &[CoefficientLine] {
        &self.lines
    }
}

impl fmt::Display for CoefficientReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PolyFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&CoefficientReport::from_fit(self), f)
    }
}

/// BandGrid: model curve and confidence band sampled on a regular grid.
///
/// Fields
/// ------
/// - `x`: grid abscissae, increasing.
/// - `fit`: model values at `x`.
/// - `lower`, `upper`: `fit ∓ half_width` at `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandGrid {
    pub x: Array1<f64>,
    pub fit: Array1<f64>,
    pub lower: Array1<f64>,
    pub upper: Array1<f64>,
}

impl BandGrid {
    /// Sample the model and band of `fit` on `points` abscissae.
    ///
    /// Parameters
    /// ----------
    /// - `fit`: `&PolyFit`
    ///   Fitted engine.
    /// - `points`: `usize`
    ///   Number of grid abscissae, at least 2.
    /// - `p`: `Option<f64>`
    ///   Significance level; `None` uses the fit's configured level.
    ///
    /// Errors
    /// ------
    /// - `RegError::InvalidGridSize` if `points < 2`.
    /// - `RegError::InvalidSignificance` if `p` is outside (0, 1).
    pub fn from_fit(fit: &PolyFit, points: usize, p: Option<f64>) -> RegResult<Self> {
        if points < 2 {
            return Err(RegError::InvalidGridSize { points });
        }
        let (lo, hi) = fit.observations().x_range();
        let x = Array1::linspace(lo.floor(), hi.floor() + 1.0, points);
        let model = fit.model(x.view());
        let half = fit.confidence_interval(x.view(), p)?;
        let lower = &model - &half;
        let upper = &model + &half;
        Ok(BandGrid { x, fit: model, lower, upper })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Vertical extent `(min lower, max upper)` of the band.
    pub fn limits(&self) -> (f64, f64) {
        let lo = self.lower.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = self.upper.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    }
}

impl PolyFit {
    /// Model and band on a regular grid spanning the observed abscissae.
    ///
    /// See [`BandGrid::from_fit`].
    pub fn band_grid(&self, points: usize, p: Option<f64>) -> RegResult<BandGrid> {
        BandGrid::from_fit(self, points, p)
    }

    /// Coefficient table of this fit.
    pub fn report(&self) -> CoefficientReport {
        CoefficientReport::from_fit(self)
    }
}
