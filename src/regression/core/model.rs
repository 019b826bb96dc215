//! Polynomial evaluation from a fitted coefficient vector.
//!
//! `ŷ = design(x_new) · β`. Inputs outside the fitted range are evaluated
//! as-is; extrapolation is not validated.
use crate::regression::core::design::design_matrix;
use ndarray::{Array1, ArrayView1};

/// Evaluate the polynomial with ascending-power coefficients `params` at
/// every entry of `x_new`.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use rust_polyfit::regression::core::model::evaluate;
/// // 1 + 2x
/// let y = evaluate(array![1.0, 2.0].view(), array![0.0, 3.0].view());
/// assert_eq!(y, array![1.0, 7.0]);
/// ```
pub fn evaluate(params: ArrayView1<f64>, x_new: ArrayView1<f64>) -> Array1<f64> {
    let order = params.len().saturating_sub(1);
    design_matrix(x_new, order).dot(&params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn horner(params: ArrayView1<f64>, x: f64) -> f64 {
        params.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    #[test]
    // Purpose
    // -------
    // Verify the design-matrix product agrees with Horner evaluation on a
    // cubic, including extrapolated points.
    fn evaluate_matches_horner() {
        // Arrange
        let params = array![0.5, -1.0, 2.0, 0.25];
        let x = array![-3.0, 0.0, 1.5, 12.0];

        // Act
        let product = evaluate(params.view(), x.view());
        let horner = x.mapv(|v| horner(params.view(), v));

        // Assert
        for (a, b) in horner.iter().zip(product.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
    }

    #[test]
    fn empty_inputs_give_empty_output() {
        let y = evaluate(array![1.0, 2.0].view(), Array1::<f64>::zeros(0).view());
        assert!(y.is_empty());
    }
}
