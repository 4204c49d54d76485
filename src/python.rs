use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;
use crate::solver::classify::SolutionReport;
use crate::solver::solver_config::SolverConfig;
use crate::trace::step::TraceLog;

fn to_matrix(lines: Vec<Vec<f64>>) -> PyResult<MatrixReal> {
    MatrixReal::from_list(lines).map_err(|error| PyValueError::new_err(error.to_string()))
}

fn descriptions(trace: &TraceLog) -> Vec<String> {
    trace.iter().map(|step| step.description.clone()).collect()
}

#[pyfunction]
pub fn solve_text(text: &str) -> PyResult<String> {
    crate::report::render::solve_text(text, &SolverConfig::default())
        .map_err(|error| PyValueError::new_err(error.to_string()))
}

#[pyfunction]
pub fn rref(lines: Vec<Vec<f64>>) -> PyResult<(Vec<Vec<f64>>, Vec<String>)> {
    let (reduced, trace) = crate::solver::rref::reduce(to_matrix(lines)?);
    Ok((reduced.to_list(), descriptions(&trace)))
}

// ("unique", values), ("infinite", None) or ("none", None)
#[pyfunction]
pub fn classify(lines: Vec<Vec<f64>>) -> PyResult<(&'static str, Option<Vec<f64>>)> {
    let (reduced, _) = crate::solver::rref::reduce(to_matrix(lines)?);
    Ok(match crate::solver::classify::classify(&reduced) {
        SolutionReport::Unique(values) => ("unique", Some(values)),
        SolutionReport::Infinite => ("infinite", None),
        SolutionReport::NoSolution => ("none", None),
    })
}

#[pyfunction]
pub fn transpose(lines: Vec<Vec<f64>>) -> PyResult<(Vec<Vec<f64>>, Vec<String>)> {
    let (result, trace) = crate::solver::transpose::transpose(&to_matrix(lines)?);
    Ok((result.to_list(), descriptions(&trace)))
}

#[pyfunction]
pub fn inverse(lines: Vec<Vec<f64>>) -> PyResult<(Vec<Vec<f64>>, Vec<String>)> {
    let matrix = to_matrix(lines)?;
    if !matrix.is_square() {
        return Err(PyValueError::new_err("Matrix is not square"));
    }
    let (result, trace) = crate::solver::inverse::invert(&matrix)
        .map_err(|error| PyValueError::new_err(error.to_string()))?;
    Ok((result.to_list(), descriptions(&trace)))
}
