//! rust_polyfit: weighted polynomial least squares with confidence bands.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the polynomial fitting engine to Python via the `_rust_polyfit`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing class and submodule used by the
//! `rust_polyfit` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`regression`) as the public crate
//!   surface.
//! - Define the `#[pyclass]` wrapper around [`regression::PolyFit`] and the
//!   `#[pymodule]` initializer for the `_rust_polyfit` extension.
//! - Create and register the `regression` Python submodule under
//!   `rust_polyfit` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in `regression`; this file performs
//!   only FFI glue, argument conversion, and error mapping.
//! - The Python class mirrors the construction contract of the Rust engine:
//!   a fit either succeeds completely at construction or raises.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_polyfit.<submodule>`.
//! - Errors from the engine are carried as [`regression::RegError`] and
//!   converted to `ValueError` at the PyO3 boundary.
//! - Arrays are returned to Python as lists of floats.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on `regression` directly and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rust_polyfit` and re-exports its
//!   class from the top-level `rust_polyfit` package.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in `regression` and by the
//!   integration tests under `tests/`.

pub mod regression;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    regression::{
        core::{data::Observations, options::FitOptions},
        errors::RegError,
        models::polyfit::PolyFit,
    },
    utils::{extract_array1, extract_optional_array1},
};

/// PyPolyFit: Python-facing wrapper for the polynomial fitting engine.
///
/// Purpose
/// -------
/// Fit a polynomial from Python arguments and forward every query to the
/// Rust [`PolyFit`].
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `PolyFit(x, y, n_poly=1, p=0.05, x_err=None, y_err=None)`:
/// - `x`, `y`: array-like of float64, same length.
/// - `n_poly`: `int`
///   Polynomial order, non-negative.
/// - `p`: `float`
///   Default significance level of `confidence_interval`, in (0, 1).
/// - `x_err`, `y_err`: optional array-like of float64
///   Per-point uncertainties; `y_err` sets inverse-variance weights.
///
/// Fields
/// ------
/// - `inner`: [`PolyFit`]
///   The fitted engine.
///
/// Notes
/// -----
/// - The wrapped engine is immutable, so the class is safe to share across
///   Python threads.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "PolyFit", module = "rust_polyfit.regression", frozen)]
pub struct PyPolyFit {
    inner: PolyFit,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyPolyFit {
    #[new]
    #[pyo3(
        text_signature = "(x, y, /, n_poly=1, p=0.05, x_err=None, y_err=None)",
        signature = (x, y, n_poly = 1, p = 0.05, x_err = None, y_err = None)
    )]
    pub fn new<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, n_poly: i64, p: f64,
        x_err: Option<&Bound<'py, PyAny>>, y_err: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Self> {
        let order = usize::try_from(n_poly).map_err(|_| RegError::InvalidOrder { order: n_poly })?;
        let observations = Observations::new(
            extract_array1(py, x)?,
            extract_array1(py, y)?,
            extract_optional_array1(py, x_err)?,
            extract_optional_array1(py, y_err)?,
        )?;
        let options = FitOptions::new(order, p, Default::default())?;
        let inner = PolyFit::new(observations, options)?;
        Ok(PyPolyFit { inner })
    }

    /// Fitted coefficients, ascending powers.
    #[getter]
    pub fn params(&self) -> Vec<f64> {
        self.inner.params().to_vec()
    }

    /// 1σ coefficient uncertainties.
    #[getter]
    pub fn uncertainties(&self) -> Vec<f64> {
        self.inner.uncertainties().to_vec()
    }

    /// Weighted residual sum of squares.
    #[getter]
    pub fn ssr(&self) -> f64 {
        self.inner.ssr()
    }

    #[getter]
    pub fn dof(&self) -> usize {
        self.inner.dof()
    }

    #[getter]
    pub fn residuals(&self) -> Vec<f64> {
        self.inner.residuals().to_vec()
    }

    /// Evaluate the fitted polynomial at `x`.
    #[pyo3(text_signature = "(self, x, /)")]
    pub fn model<'py>(&self, py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
        let x = extract_array1(py, x)?;
        Ok(self.inner.model(x.view()).to_vec())
    }

    /// Confidence-band half-widths at `x` for significance `p`.
    #[pyo3(text_signature = "(self, x, /, p=None)", signature = (x, p = None))]
    pub fn confidence_interval<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, p: Option<f64>,
    ) -> PyResult<Vec<f64>> {
        let x = extract_array1(py, x)?;
        Ok(self.inner.confidence_interval(x.view(), p)?.to_vec())
    }

    /// Print the coefficients with their uncertainties.
    pub fn pprint(&self) {
        println!("{}", self.inner);
    }

    pub fn __repr__(&self) -> String {
        format!("PolyFit(n_poly={}, n={}, dof={})", self.inner.order(), self.inner.n_obs(), self.inner.dof())
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// _rust_polyfit: PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `regression` submodule and attach it to `_rust_polyfit`.
/// - Register it in `sys.modules` as `rust_polyfit.regression` so dotted
///   imports work.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or updating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_polyfit<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let regression_mod = PyModule::new(_py, "regression")?;
    regression(_py, m, &regression_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_polyfit.regression", regression_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn regression<'py>(
    _py: Python, rust_polyfit: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyPolyFit>()?;
    rust_polyfit.add_submodule(m)?;
    Ok(())
}
