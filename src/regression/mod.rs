//! regression: weighted polynomial least squares with confidence bands.
//!
//! Purpose
//! -------
//! Provide a complete polynomial regression layer: validated observations,
//! fit configuration, the weighted normal-equations solve with a
//! singularity-aware fallback, Student-t scaled coefficient uncertainties,
//! and prediction confidence bands. This is the main entry point of the
//! crate and the surface the Python bindings wrap.
//!
//! Key behaviors
//! -------------
//! - Collect the numerical stages in [`core`] (design matrix, weights,
//!   solver, uncertainties, band formula, polynomial evaluation).
//! - Expose the [`PolyFit`] engine and its reporting helpers in [`models`].
//! - Centralize error types in [`errors`] and shared input guards in
//!   [`validation`].
//!
//! Invariants & assumptions
//! ------------------------
//! - All validation happens when a fit is constructed; a [`PolyFit`] value
//!   is always a complete, consistent fit.
//! - Fitted state is immutable, so queries are safe from several threads.
//!
//! Conventions
//! -----------
//! - Coefficients are ordered by ascending power. Indexing is 0-based.
//! - Significance levels `p` are in (0, 1); bands cover `1 − p`.
//! - Only the engine logs (through the `log` facade); no logger is
//!   installed by the library.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule; integration tests under
//!   `tests/` run full fits through the public API.

pub mod core;
pub mod errors;
pub mod models;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{FitOptions, FitWarning, Observations, SingularityTest, SolvePath, Weights};
pub use self::errors::{ErrorKind, RegError, RegResult};
pub use self::models::{BandGrid, CoefficientReport, FitResult, PolyFit};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_polyfit::regression::prelude::*;
//
// to import the main regression surface in a single line.

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::errors::{RegError, RegResult};
    pub use super::models::prelude::*;
}
