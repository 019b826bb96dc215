//! Vandermonde design matrices for polynomial bases.
//!
//! Row `i` of the design matrix for abscissae `x` and order `k` is
//! `[1, x_i, x_i², …, x_iᵏ]`. Powers are built by repeated multiplication
//! across each row.
use ndarray::{Array1, Array2, ArrayView1};

/// Build the `len(x) × (order + 1)` design matrix for `x`.
///
/// Column `j` holds `x^j` for `j = 0..=order`; column 0 is all ones, even
/// for `x = 0`.
///
/// # Examples
/// ```rust
/// # use ndarray::array;
/// # use rust_polyfit::regression::core::design::design_matrix;
/// let z = design_matrix(array![2.0, 3.0].view(), 2);
/// assert_eq!(z, array![[1.0, 2.0, 4.0], [1.0, 3.0, 9.0]]);
/// ```
pub fn design_matrix(x: ArrayView1<f64>, order: usize) -> Array2<f64> {
    let mut z = Array2::<f64>::zeros((x.len(), order + 1));
    for (mut row, &xi) in z.rows_mut().into_iter().zip(x.iter()) {
        let mut power = 1.0;
        for cell in row.iter_mut() {
            *cell = power;
            power *= xi;
        }
    }
    z
}

/// Design row `[1, x, x², …, x^order]` for a single abscissa value.
pub fn design_row(x: f64, order: usize) -> Array1<f64> {
    let mut power = 1.0;
    Array1::from_iter((0..=order).map(|_| {
        let value = power;
        power *= x;
        value
    }))
}
