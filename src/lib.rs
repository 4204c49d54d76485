#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod matrix;
    pub mod matrix_real;
}
pub mod trace {
    pub mod step;
}
pub mod solver {
    pub mod classify;
    pub mod inverse;
    pub mod rref;
    pub mod solve;
    pub mod solver_config;
    pub mod transpose;
}
pub mod report {
    pub mod parse;
    pub mod render;
}

pub mod error;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rref_solver(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::solve_text, m)?)?;
    m.add_function(wrap_pyfunction!(python::rref, m)?)?;
    m.add_function(wrap_pyfunction!(python::classify, m)?)?;
    m.add_function(wrap_pyfunction!(python::transpose, m)?)?;
    m.add_function(wrap_pyfunction!(python::inverse, m)?)?;
    Ok(())
}
