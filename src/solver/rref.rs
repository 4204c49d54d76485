use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;
use crate::solver::solver_config::EPSILON;
use crate::trace::step::{StepKind, TraceLog, TraceStyle};
use crate::utils::is_zero;

/// First usable pivot at or below row `r`, scanning columns from `lead`
/// rightwards. Returns `(pivot_row, pivot_col)`, or `None` once the column
/// cursor runs off the matrix.
pub fn find_pivot(
    matrix: &MatrixReal,
    r: usize,
    lead: usize,
    tolerance: f64,
) -> Option<(usize, usize)> {
    (lead..matrix.cols()).find_map(|col| {
        (r..matrix.rows())
            .find(|&i| !is_zero(matrix.at(i, col), tolerance))
            .map(|i| (i, col))
    })
}

/// Gauss-Jordan reduction to RREF. The matrix is consumed and mutated in
/// place; clone it first if the caller still needs it.
pub fn reduce(matrix: MatrixReal) -> (MatrixReal, TraceLog) {
    reduce_with_tolerance(matrix, EPSILON)
}

pub fn reduce_with_tolerance(mut matrix: MatrixReal, tolerance: f64) -> (MatrixReal, TraceLog) {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let mut trace = TraceLog::new(TraceStyle::Reduction);
    let mut lead = 0;

    tracing::debug!(rows, cols, "reducing augmented matrix");

    for r in 0..rows {
        if lead >= cols {
            break;
        }

        let (i, pivot_col) = match find_pivot(&matrix, r, lead, tolerance) {
            Some(pivot) => pivot,
            None => break,
        };
        lead = pivot_col;

        if i != r {
            matrix.swap_rows(r, i);
            trace.record(
                StepKind::Swap {
                    first: r,
                    second: i,
                },
                matrix.clone(),
            );
        }

        let div = matrix.at(r, lead);
        matrix.scale_row(r, div);
        trace.record(StepKind::Scale { row: r, factor: div }, matrix.clone());

        for k in (0..rows).filter(|&k| k != r) {
            let factor = matrix.at(k, lead);
            matrix.subtract_scaled_row(k, r, factor);
            trace.record(
                StepKind::Eliminate {
                    target: k,
                    source: r,
                    factor,
                },
                matrix.clone(),
            );
        }

        lead += 1;
    }

    tracing::debug!(steps = trace.len(), "reduction finished");
    (matrix, trace)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
