//! regression::core::solver: weighted normal equations with a singular fallback.
//!
//! Purpose
//! -------
//! Solve the weighted least-squares normal equations
//! `(Zᵀ W Z) β = Zᵀ W y` for the coefficient vector `β` and return the
//! inverse normal matrix `(Zᵀ W Z)⁻¹`, which is the coefficient covariance up
//! to the residual-variance scale applied later.
//!
//! Key behaviors
//! -------------
//! - Form `M = Zᵀ W Z` and `Zᵀ W y` in `ndarray`.
//! - Measure the conditioning on the weighted design `A = W^{1/2} Z`
//!   through its SVD. The singular values of `M` are the squares of those
//!   of `A`, so testing `A` keeps the rank decision at the precision of the
//!   data instead of squaring the condition number.
//! - Classify with the configured [`SingularityTest`]:
//!   - regular → exact inverse of `M` (LU via `try_inverse`),
//!   - singular or near singular → Moore–Penrose pseudo-inverse built from
//!     the SVD of `A`, which yields the minimum-norm least-squares solution.
//! - Report which path was taken ([`SolvePath`]), the reciprocal condition
//!   estimate `σ_min / σ_max` of `A`, and a [`FitWarning`] when `A` sits
//!   close to the singularity threshold.
//!
//! Invariants & assumptions
//! ------------------------
//! - `Z` is `n × k` with `n >= k`; otherwise the fit is undefined and
//!   [`RegError::UnderdeterminedDesign`] is returned.
//! - `W` has length `n` and strictly positive entries (guaranteed by
//!   [`Weights`]).
//! - A regular matrix whose LU inverse still fails falls through to the
//!   pseudo-inverse path instead of erroring.
//!
//! Conventions
//! -----------
//! - No logging happens here; the engine logs the returned path and
//!   warning.
//! - The rank test and the pseudo-inverse truncation share one cutoff,
//!   `σ_max(A) · rtol`. On the pseudo-inverse path
//!   `(Zᵀ W Z)⁺ = V Σ⁻² Vᵀ` and `β = V Σ⁻¹ Uᵀ W^{1/2} y` over the retained
//!   singular triplets.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the exact path, a rank-deficient design (minimum-norm
//!   solution), a near-singular design (warning), an offset design that
//!   stays on the exact path, the exact-determinant policy, and the
//!   underdetermined guard.
use crate::regression::{
    core::{
        options::{DEFAULT_RTOL, NEAR_SINGULAR_FACTOR, SingularityTest},
        weights::Weights,
    },
    errors::{RegError, RegResult},
};
use nalgebra::{DMatrix, DVector, Dyn, SVD};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Iteration cap of the SVD; a design with overflowing powers never
/// converges and is reported as a singular system.
const SVD_MAX_ITERATIONS: usize = 10_000;

/// Which inversion produced the covariance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePath {
    Exact,
    PseudoInverse,
}

/// Non-fatal conditions detected while solving.
///
/// - `NumericInstability { rcond, threshold }`: the reciprocal condition
///   estimate `rcond` of the weighted design is within the near-singular band
///   `(rtol, threshold]`; the pseudo-inverse path was used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitWarning {
    NumericInstability { rcond: f64, threshold: f64 },
}

impl std::fmt::Display for FitWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitWarning::NumericInstability { rcond, threshold } => write!(
                f,
                "Weighted design is nearly singular (rcond = {rcond:e} <= {threshold:e}); \
                 solved with the pseudo-inverse."
            ),
        }
    }
}

/// Outcome of classifying the weighted design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conditioning {
    Regular,
    NearSingular,
    Singular,
}

/// NormalSolution: coefficients and inverse normal matrix.
///
/// Fields
/// ------
/// - `params`: `Array1<f64>`
///   Coefficients `β`, length `k`, ordered by ascending power.
/// - `invcov`: `Array2<f64>`
///   `(Zᵀ W Z)⁻¹` or its pseudo-inverse, `k × k`.
/// - `path`: [`SolvePath`]
///   Inversion used.
/// - `rcond`: `f64`
///   `σ_min / σ_max` of `W^{1/2} Z` (0 for the zero matrix).
/// - `warning`: `Option<FitWarning>`
///   Set when the design was near singular.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalSolution {
    pub params: Array1<f64>,
    pub invcov: Array2<f64>,
    pub path: SolvePath,
    pub rcond: f64,
    pub warning: Option<FitWarning>,
}

/// Solve the weighted normal equations for `Z`, `W`, and `y`.
///
/// Parameters
/// ----------
/// - `z`: `ArrayView2<f64>`
///   Design matrix, `n × k`.
/// - `weights`: `&Weights`
///   Diagonal weights of length `n`.
/// - `y`: `ArrayView1<f64>`
///   Ordinates, length `n`.
/// - `test`: [`SingularityTest`]
///   Policy deciding between the exact inverse and the pseudo-inverse.
///
/// Returns
/// -------
/// `RegResult<NormalSolution>`
///
/// Errors
/// ------
/// - `RegError::UnderdeterminedDesign` when `n < k`.
/// - `RegError::LengthMismatch` when `y` or `weights` do not have `n`
///   entries.
/// - `RegError::SingularSystem` when the SVD does not converge or the
///   pseudo-inverse is non-finite.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_polyfit::regression::core::{
/// #     design::design_matrix, options::SingularityTest, solver::{solve_normal_equations, SolvePath},
/// #     weights::Weights,
/// # };
/// let x = array![0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = array![1.0, 3.0, 5.0, 7.0, 9.0];
/// let z = design_matrix(x.view(), 1);
/// let sol = solve_normal_equations(z.view(), &Weights::identity(5), y.view(), SingularityTest::default())
///     .unwrap();
/// assert_eq!(sol.path, SolvePath::Exact);
/// assert!((sol.params[0] - 1.0).abs() < 1e-10);
/// assert!((sol.params[1] - 2.0).abs() < 1e-10);
/// ```
pub fn solve_normal_equations(
    z: ArrayView2<f64>, weights: &Weights, y: ArrayView1<f64>, test: SingularityTest,
) -> RegResult<NormalSolution> {
    let (rows, cols) = z.dim();
    if rows < cols {
        return Err(RegError::UnderdeterminedDesign { rows, cols });
    }
    if y.len() != rows {
        return Err(RegError::LengthMismatch { field: "y", expected: rows, actual: y.len() });
    }
    if weights.len() != rows {
        return Err(RegError::LengthMismatch {
            field: "y_err",
            expected: rows,
            actual: weights.len(),
        });
    }

    // W Z, scaling each row of Z by its weight.
    let w_col = weights.diag().view().insert_axis(Axis(1));
    let wz = &z * &w_col;
    let normal = z.t().dot(&wz);
    let rhs = wz.t().dot(&y);

    // W^{1/2} Z and W^{1/2} y.
    let sqrt_w = weights.diag().mapv(f64::sqrt);
    let scaled = &z * &sqrt_w.view().insert_axis(Axis(1));
    let scaled_y = &y * &sqrt_w;

    let svd = SVD::try_new(to_dmatrix(&scaled), true, true, f64::EPSILON, SVD_MAX_ITERATIONS)
        .ok_or_else(|| RegError::SingularSystem {
            reason: "SVD of the weighted design did not converge".to_string(),
        })?;
    let s_max = svd.singular_values.iter().cloned().fold(0.0_f64, f64::max);
    let s_min = svd.singular_values.iter().cloned().fold(f64::INFINITY, f64::min);
    let rcond = if s_max > 0.0 { s_min / s_max } else { 0.0 };

    let normal_nalg = to_dmatrix(&normal);
    let conditioning = classify(&normal_nalg, rcond, test);
    let mut warning = None;
    let inverse = match conditioning {
        Conditioning::Regular => match normal_nalg.try_inverse() {
            Some(inv) if inv.iter().all(|v| v.is_finite()) => Some(from_dmatrix(&inv)),
            _ => None,
        },
        Conditioning::NearSingular => {
            if let SingularityTest::Tolerance { rtol } = test {
                warning = Some(FitWarning::NumericInstability {
                    rcond,
                    threshold: rtol * NEAR_SINGULAR_FACTOR,
                });
            }
            None
        }
        Conditioning::Singular => None,
    };

    let (params, invcov, path) = match inverse {
        Some(invcov) => (invcov.dot(&rhs), invcov, SolvePath::Exact),
        None => {
            let rtol = match test {
                SingularityTest::Tolerance { rtol } => rtol,
                SingularityTest::ExactDeterminant => DEFAULT_RTOL,
            };
            let (params, invcov) = pseudo_solve(&svd, scaled_y.view(), s_max * rtol)?;
            (params, invcov, SolvePath::PseudoInverse)
        }
    };

    Ok(NormalSolution { params, invcov, path, rcond, warning })
}

/// Classify the design under `test`.
///
/// `rcond` is the singular-value ratio of the weighted design; `normal` is
/// only consulted by the exact-determinant policy. Non-finite `rcond`
/// (overflowing powers in the design) is treated as singular.
pub(crate) fn classify(normal: &DMatrix<f64>, rcond: f64, test: SingularityTest) -> Conditioning {
    match test {
        SingularityTest::Tolerance { rtol } => {
            if !rcond.is_finite() || rcond <= rtol {
                Conditioning::Singular
            } else if rcond <= rtol * NEAR_SINGULAR_FACTOR {
                Conditioning::NearSingular
            } else {
                Conditioning::Regular
            }
        }
        SingularityTest::ExactDeterminant => {
            if normal.determinant() == 0.0 {
                Conditioning::Singular
            } else {
                Conditioning::Regular
            }
        }
    }
}

// ---- Helper methods ----

/// Minimum-norm solution and `(Zᵀ W Z)⁺` from the SVD of `W^{1/2} Z`,
/// dropping singular values at or below `cutoff`.
fn pseudo_solve(
    svd: &SVD<f64, Dyn, Dyn>, scaled_y: ArrayView1<f64>, cutoff: f64,
) -> RegResult<(Array1<f64>, Array2<f64>)> {
    let (Some(u), Some(v_t)) = (svd.u.as_ref(), svd.v_t.as_ref()) else {
        return Err(RegError::SingularSystem {
            reason: "SVD of the weighted design has no singular vectors".to_string(),
        });
    };
    let k = v_t.ncols();
    let b = DVector::from_iterator(scaled_y.len(), scaled_y.iter().cloned());
    let ut_b = u.transpose() * b;

    let mut pinv = DMatrix::<f64>::zeros(k, k);
    let mut beta = DVector::<f64>::zeros(k);
    for (i, &sigma) in svd.singular_values.iter().enumerate() {
        if sigma <= cutoff.max(0.0) {
            continue;
        }
        let v_i = v_t.row(i).transpose();
        pinv += &v_i * v_i.transpose() / (sigma * sigma);
        beta += &v_i * (ut_b[i] / sigma);
    }

    if pinv.iter().chain(beta.iter()).any(|v| !v.is_finite()) {
        return Err(RegError::SingularSystem {
            reason: "pseudo-inverse contains non-finite entries".to_string(),
        });
    }
    let params = Array1::from_iter(beta.iter().cloned());
    Ok((params, from_dmatrix(&pinv)))
}

/// Copy an `ndarray` matrix into a `nalgebra::DMatrix`.
fn to_dmatrix(m: &Array2<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[[i, j]])
}

/// Copy a `nalgebra::DMatrix` back into an `ndarray` matrix.
fn from_dmatrix(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}
