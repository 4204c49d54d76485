use crate::error::SingularMatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;
use crate::solver::classify::{classify_with_tolerance, SolutionReport};
use crate::solver::inverse::invert_with_tolerance;
use crate::solver::rref::reduce_with_tolerance;
use crate::solver::solver_config::SolverConfig;
use crate::solver::transpose::transpose;
use crate::trace::step::TraceLog;

#[derive(Debug, Clone, PartialEq)]
pub enum InverseOutcome {
    Computed {
        inverse: MatrixReal,
        trace: TraceLog,
    },
    Singular(SingularMatrixError),
    NotSquare,
}

/// Everything computed for one input matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The matrix as entered, untouched by any engine
    pub original: MatrixReal,
    pub reduced: MatrixReal,
    pub rref_trace: TraceLog,
    pub report: SolutionReport,
    pub transposed: MatrixReal,
    pub transpose_trace: TraceLog,
    pub inverse: InverseOutcome,
}

/// Run every engine on `matrix`. The RREF engine works on its own copy, the
/// transpose and inverse engines read `matrix` itself.
pub fn solve(matrix: MatrixReal, config: &SolverConfig) -> Solution {
    let (reduced, rref_trace) = reduce_with_tolerance(matrix.clone(), config.epsilon);
    let report = classify_with_tolerance(&reduced, config.epsilon);

    let (transposed, transpose_trace) = transpose(&matrix);

    let inverse = if matrix.is_square() {
        match invert_with_tolerance(&matrix, config.epsilon) {
            Ok((inverse, trace)) => InverseOutcome::Computed { inverse, trace },
            Err(error) => InverseOutcome::Singular(error),
        }
    } else {
        tracing::info!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            "not square, inverse skipped"
        );
        InverseOutcome::NotSquare
    };

    Solution {
        original: matrix,
        reduced,
        rref_trace,
        report,
        transposed,
        transpose_trace,
        inverse,
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn m(lines: Vec<Vec<f64>>) -> MatrixReal {
        MatrixReal::from_list(lines).unwrap()
    }

    #[test]
    fn test_solve_keeps_original_for_transpose() {
        let input = m(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 3.0]]);
        let solution = solve(input.clone(), &SolverConfig::default());

        assert_eq!(solution.original, input);
        assert_ne!(solution.reduced, input);
        assert_eq!(solution.transposed, input.transpose());
        assert_eq!(solution.report, SolutionReport::Unique(vec![3.0, 2.0]));
        assert_eq!(solution.inverse, InverseOutcome::NotSquare);
    }

    #[test]
    fn test_solve_square_inverse() {
        let solution = solve(m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]), &SolverConfig::default());
        match solution.inverse {
            InverseOutcome::Computed { inverse, trace } => {
                assert!(inverse.approx_eq(
                    &m(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]),
                    1e-10
                ));
                assert_eq!(trace.len(), 5);
            }
            other => panic!("expected an inverse, got {:?}", other),
        }
    }

    #[test]
    fn test_singular_inverse_does_not_hide_other_results() {
        let solution = solve(m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]), &SolverConfig::default());

        assert_eq!(
            solution.inverse,
            InverseOutcome::Singular(SingularMatrixError { step: 0 })
        );
        assert!(!solution.rref_trace.is_empty());
        assert_eq!(solution.transpose_trace.len(), 4);
        assert_eq!(solution.transposed, solution.original);
    }

    #[test]
    fn test_inconsistent_system_still_transposes() {
        let solution = solve(
            m(vec![vec![1.0, 1.0, 3.0], vec![1.0, 1.0, 5.0]]),
            &SolverConfig::default(),
        );
        assert_eq!(solution.report, SolutionReport::NoSolution);
        assert_eq!(solution.transposed.rows(), 3);
        assert_eq!(solution.inverse, InverseOutcome::NotSquare);
    }
}
