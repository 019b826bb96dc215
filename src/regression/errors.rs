//! regression::errors: shared error types for polynomial fitting.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by every stage of the
//! polynomial least-squares engine, together with a coarse [`ErrorKind`]
//! classification and a conversion layer to Python exceptions for the
//! PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`RegResult`] and [`RegError`] as the canonical result and
//!   error types for observation validation, option validation, the
//!   normal-equations solve, and band evaluation.
//! - Classify each variant as a configuration problem (lengths, order,
//!   degrees of freedom, significance level) or a domain problem
//!   (non-finite data, non-positive uncertainties, unusable singular
//!   systems) via [`RegError::kind`].
//! - Attach human-readable `Display` messages that embed the offending
//!   value or index.
//!
//! Invariants & assumptions
//! ------------------------
//! - All errors are raised at construction time of a fit; no partially
//!   built fit is ever returned alongside an error.
//! - Non-fatal numeric-instability conditions are *not* errors; they are
//!   reported as `FitWarning` values on the fitted engine.
//!
//! Conventions
//! -----------
//! - `field` payloads name the offending input (`"x"`, `"y"`, `"x_err"`,
//!   `"y_err"`) so messages point at the argument the caller passed.
//! - Indices are 0-based.
//!
//! Testing notes
//! -------------
//! - Unit tests verify payload embedding in `Display` messages and the
//!   kind classification of representative variants.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type RegResult<T> = Result<T, RegError>;

/// Coarse classification of [`RegError`] variants.
///
/// - `Configuration`: the request itself is malformed (array lengths, order,
///   degrees of freedom, significance level, tolerances).
/// - `Domain`: the numbers cannot be used (non-finite data, zero or negative
///   uncertainties, a singular system with no usable fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Domain,
}

/// RegError: failure conditions for polynomial least-squares fitting.
///
/// Variants
/// --------
/// - `EmptyObservations`
///   No observations were supplied.
/// - `LengthMismatch { field, expected, actual }`
///   An input array does not have the same length as `x`.
/// - `InsufficientDegreesOfFreedom { n_obs, n_params }`
///   `n_obs - n_params <= 0`, so the residual variance and the Student-t
///   quantiles are undefined.
/// - `UnderdeterminedDesign { rows, cols }`
///   The design matrix has fewer rows than columns.
/// - `InvalidOrder { order }`
///   A negative polynomial order reached the API (Python bindings only).
/// - `InvalidSignificance { p }`
///   The significance level is not inside the open interval (0, 1).
/// - `InvalidTolerance { value }`
///   A singularity tolerance is non-finite or not strictly positive.
/// - `InvalidGridSize { points }`
///   A band grid was requested with fewer than two points.
/// - `NonFiniteData { field, index, value }`
///   An observation or uncertainty is NaN or ±∞.
/// - `NonPositiveUncertainty { field, index, value }`
///   An ordinate uncertainty is zero or negative (inverse variance is
///   undefined), or an abscissa uncertainty is negative.
/// - `SingularSystem { reason }`
///   The normal matrix is singular and the pseudo-inverse fallback failed.
/// - `Distribution { reason }`
///   The Student-t distribution could not be constructed or evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum RegError {
    // ---- Configuration ----
    EmptyObservations,
    LengthMismatch { field: &'static str, expected: usize, actual: usize },
    InsufficientDegreesOfFreedom { n_obs: usize, n_params: usize },
    ZeroDegreesOfFreedom,
    UnderdeterminedDesign { rows: usize, cols: usize },
    InvalidOrder { order: i64 },
    InvalidSignificance { p: f64 },
    InvalidTolerance { value: f64 },
    InvalidGridSize { points: usize },

    // ---- Domain ----
    NonFiniteData { field: &'static str, index: usize, value: f64 },
    NonPositiveUncertainty { field: &'static str, index: usize, value: f64 },
    SingularSystem { reason: String },
    Distribution { reason: String },
}

impl RegError {
    /// Configuration vs domain classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegError::EmptyObservations
            | RegError::LengthMismatch { .. }
            | RegError::InsufficientDegreesOfFreedom { .. }
            | RegError::ZeroDegreesOfFreedom
            | RegError::UnderdeterminedDesign { .. }
            | RegError::InvalidOrder { .. }
            | RegError::InvalidSignificance { .. }
            | RegError::InvalidTolerance { .. }
            | RegError::InvalidGridSize { .. } => ErrorKind::Configuration,
            RegError::NonFiniteData { .. }
            | RegError::NonPositiveUncertainty { .. }
            | RegError::SingularSystem { .. }
            | RegError::Distribution { .. } => ErrorKind::Domain,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }
}

impl std::error::Error for RegError {}

impl std::fmt::Display for RegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Configuration ----
            RegError::EmptyObservations => write!(f, "Observation set is empty."),
            RegError::LengthMismatch { field, expected, actual } => {
                write!(f, "Length mismatch for {field}: expected {expected}, got {actual}.")
            }
            RegError::InsufficientDegreesOfFreedom { n_obs, n_params } => write!(
                f,
                "Degrees of freedom must be positive: {n_obs} observations for {n_params} parameters."
            ),
            RegError::ZeroDegreesOfFreedom => {
                write!(f, "Student-t quantile requires at least one degree of freedom.")
            }
            RegError::UnderdeterminedDesign { rows, cols } => write!(
                f,
                "Design matrix has fewer rows ({rows}) than columns ({cols}); the fit is undefined."
            ),
            RegError::InvalidOrder { order } => {
                write!(f, "Invalid polynomial order: {order}. Must be non-negative.")
            }
            RegError::InvalidSignificance { p } => {
                write!(f, "Invalid significance level: {p}. Must satisfy 0 < p < 1.")
            }
            RegError::InvalidTolerance { value } => {
                write!(f, "Invalid singularity tolerance: {value}. Must be finite and > 0.")
            }
            RegError::InvalidGridSize { points } => {
                write!(f, "Invalid grid size: {points}. Need at least 2 points.")
            }
            // ---- Domain ----
            RegError::NonFiniteData { field, index, value } => {
                write!(f, "{field} at index {index} is non-finite: {value}")
            }
            RegError::NonPositiveUncertainty { field, index, value } => {
                write!(f, "{field} at index {index} must be strictly positive; got: {value}")
            }
            RegError::SingularSystem { reason } => {
                write!(f, "Normal matrix is singular and has no usable pseudo-inverse: {reason}")
            }
            RegError::Distribution { reason } => {
                write!(f, "Student-t distribution error: {reason}")
            }
        }
    }
}

/// Convert a [`RegError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<RegError> for PyErr {
    fn from(err: RegError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<statrs::distribution::StudentsTError> for RegError {
    fn from(err: statrs::distribution::StudentsTError) -> RegError {
        RegError::Distribution { reason: err.to_string() }
    }
}
