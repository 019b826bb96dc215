//! utils: Python-to-Rust conversion helpers for the PyO3 bindings.
//!
//! Everything here is compiled only with the `python-bindings` feature and
//! is used by the `#[pyclass]` wrappers in the crate root.

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Read a 1-D float64 array from a numpy array, a pandas Series, or any
/// Python sequence of floats.
///
/// Contiguous numpy input is borrowed without copying; anything else is
/// copied once into a fresh numpy array.
///
/// # Errors
/// - `TypeError` if the object cannot be read as a sequence of floats.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy an array-like Python object into an owned [`Array1<f64>`].
#[cfg(feature = "python-bindings")]
pub fn extract_array1<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    Ok(arr.as_array().to_owned())
}

/// Like [`extract_array1`], passing `None` through as an absent array.
#[cfg(feature = "python-bindings")]
pub fn extract_optional_array1<'py>(
    py: Python<'py>, raw_data: Option<&Bound<'py, PyAny>>,
) -> PyResult<Option<Array1<f64>>> {
    match raw_data {
        Some(obj) if !obj.is_none() => extract_array1(py, obj).map(Some),
        _ => Ok(None),
    }
}
