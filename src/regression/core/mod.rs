//! core: numerical stages of a weighted polynomial least-squares fit.
//!
//! Purpose
//! -------
//! Collect the building blocks of the polynomial fitting engine: the
//! observation container, fit options, the design and weight matrices, the
//! normal-equations solver, Student-t scaled uncertainties, the
//! confidence-band formula, and polynomial evaluation. The engine in
//! `regression::models` composes these stages; each stage is usable on its
//! own.
//!
//! Key behaviors
//! -------------
//! - Validate and hold observations ([`Observations`]) and configuration
//!   ([`FitOptions`], [`SingularityTest`]).
//! - Build the Vandermonde design matrix ([`design_matrix`]) and the
//!   inverse-variance weights ([`Weights`]).
//! - Solve `(Zᵀ W Z) β = Zᵀ W y` with an exact or pseudo-inverse path
//!   ([`solve_normal_equations`]).
//! - Scale the inverse normal matrix into 1σ uncertainties
//!   ([`parameter_uncertainties`]) and band half-widths ([`half_widths`]).
//! - Evaluate a polynomial from its coefficients ([`evaluate`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Coefficient vectors are ordered by ascending power: `β[j]` multiplies
//!   `x^j`.
//! - Every stage is a pure function of its inputs; nothing here holds
//!   mutable state between calls.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based. `n` is the number of observations, `k = order + 1`
//!   the number of coefficients.
//! - This module performs no I/O and no logging; the engine logs the
//!   outcome of the solve.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its formula on small
//!   hand-computed cases. End-to-end behavior is covered by the
//!   integration tests under `tests/`.

pub mod band;
pub mod data;
pub mod design;
pub mod model;
pub mod options;
pub mod solver;
pub mod uncertainty;
pub mod weights;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::band::{BandNormalizer, half_widths};
pub use self::data::Observations;
pub use self::design::{design_matrix, design_row};
pub use self::model::evaluate;
pub use self::options::{
    DEFAULT_ORDER, DEFAULT_RTOL, DEFAULT_SIGNIFICANCE, FitOptions, NEAR_SINGULAR_FACTOR,
    SingularityTest,
};
pub use self::solver::{FitWarning, NormalSolution, SolvePath, solve_normal_equations};
pub use self::uncertainty::{ONE_SIGMA_QUANTILE, parameter_uncertainties, t_critical};
pub use self::weights::Weights;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_polyfit::regression::core::prelude::*;
//
// to import the main core surface in a single line.

pub mod prelude {
    pub use super::data::Observations;
    pub use super::options::{FitOptions, SingularityTest};
    pub use super::solver::{FitWarning, SolvePath};
    pub use super::weights::Weights;
}
