use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;
use crate::trace::step::{StepKind, TraceLog, TraceStyle};

/// Transpose with one `Assign` step per destination cell, in row-major order
/// of the result. The input is only read.
pub fn transpose(matrix: &MatrixReal) -> (MatrixReal, TraceLog) {
    let mut result = MatrixReal::zeros(matrix.cols(), matrix.rows());
    let mut trace = TraceLog::new(TraceStyle::Transposition);

    tracing::debug!(rows = matrix.rows(), cols = matrix.cols(), "transposing");

    for i in 0..matrix.cols() {
        for j in 0..matrix.rows() {
            let value = matrix.at(j, i);
            result.set(i, j, value);
            trace.record(
                StepKind::Assign {
                    row: i,
                    col: j,
                    value,
                },
                result.clone(),
            );
        }
    }

    (result, trace)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
