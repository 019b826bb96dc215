//! models: the polynomial fitting engine and its consumers.
//!
//! Purpose
//! -------
//! Host the user-facing [`PolyFit`] engine, which composes the stages in
//! `regression::core` into one eager fit, together with the reporting and
//! plotting-data helpers that read its public outputs.
//!
//! Key behaviors
//! -------------
//! - [`polyfit`] defines [`PolyFit`] and its immutable [`FitResult`].
//! - [`report`] defines [`CoefficientReport`] and [`BandGrid`].
//!
//! Testing notes
//! -------------
//! - Unit tests live in each submodule; end-to-end properties are in
//!   `tests/integration_polyfit_pipeline.rs`.

pub mod polyfit;
pub mod report;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::polyfit::{FitResult, PolyFit};
pub use self::report::{BandGrid, CoefficientLine, CoefficientReport, DEFAULT_GRID_POINTS};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_polyfit::regression::models::prelude::*;
//
// to import the main model surface in a single line.

pub mod prelude {
    pub use super::polyfit::{FitResult, PolyFit};
    pub use super::report::{BandGrid, CoefficientReport};
}
