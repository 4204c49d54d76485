use crate::error::SingularMatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;
use crate::solver::solver_config::EPSILON;
use crate::trace::step::{StepKind, TraceLog, TraceStyle};
use crate::utils::is_zero;

/// Gauss-Jordan inversion on `[A | I]`.
///
/// The caller must only pass square matrices. Pivots are taken from the
/// diagonal in order with no row exchange: a zero diagonal entry at step `i`
/// is reported as singular even when a permutation would expose a usable
/// pivot (`[[0, 1], [1, 0]]` fails).
pub fn invert(matrix: &MatrixReal) -> Result<(MatrixReal, TraceLog), SingularMatrixError> {
    invert_with_tolerance(matrix, EPSILON)
}

pub fn invert_with_tolerance(
    matrix: &MatrixReal,
    tolerance: f64,
) -> Result<(MatrixReal, TraceLog), SingularMatrixError> {
    debug_assert!(matrix.is_square(), "inverse of a non-square matrix");

    let n = matrix.rows();
    let mut aug = matrix.augment_identity();
    let mut trace = TraceLog::new(TraceStyle::Inversion);
    trace.record(StepKind::Augment, aug.clone());

    tracing::debug!(n, "inverting");

    for i in 0..n {
        let pivot = aug.at(i, i);
        if is_zero(pivot, tolerance) {
            tracing::warn!(step = i, pivot, "zero diagonal pivot");
            return Err(SingularMatrixError { step: i });
        }

        aug.scale_row(i, pivot);
        trace.record(
            StepKind::Scale {
                row: i,
                factor: pivot,
            },
            aug.clone(),
        );

        for r in (0..n).filter(|&r| r != i) {
            let factor = aug.at(r, i);
            aug.subtract_scaled_row(r, i, factor);
            trace.record(
                StepKind::Eliminate {
                    target: r,
                    source: i,
                    factor,
                },
                aug.clone(),
            );
        }
    }

    tracing::info!(n, steps = trace.len(), "inverse computed");
    Ok((aug.columns(n..2 * n), trace))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
