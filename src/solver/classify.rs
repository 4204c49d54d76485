use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;
use crate::solver::solver_config::EPSILON;
use crate::utils::is_zero;

#[derive(Debug, Clone, PartialEq)]
pub enum SolutionReport {
    /// `values[i]` is the value of variable `x{i+1}`
    Unique(Vec<f64>),
    Infinite,
    NoSolution,
}

/// Classify a reduced augmented matrix whose last column is the right-hand
/// side.
///
/// The rank used here counts every row holding a nonzero entry, right-hand
/// side included. That is not the true coefficient rank, so systems with
/// redundant or extra equations can be misclassified.
pub fn classify(matrix: &MatrixReal) -> SolutionReport {
    classify_with_tolerance(matrix, EPSILON)
}

pub fn classify_with_tolerance(matrix: &MatrixReal, tolerance: f64) -> SolutionReport {
    let variables = matrix.cols() - 1;

    let inconsistent = matrix.row_slices().any(|row| {
        row[..variables].iter().all(|&x| is_zero(x, tolerance))
            && !is_zero(row[variables], tolerance)
    });
    if inconsistent {
        tracing::info!(variables, "inconsistent equation, no solution");
        return SolutionReport::NoSolution;
    }

    let rank = matrix
        .row_slices()
        .filter(|row| row.iter().any(|&x| !is_zero(x, tolerance)))
        .count();
    if rank < variables {
        tracing::info!(rank, variables, "infinite solutions");
        return SolutionReport::Infinite;
    }

    let values: Vec<f64> = (0..variables).map(|i| matrix.at(i, variables)).collect();
    tracing::info!(?values, "unique solution");
    SolutionReport::Unique(values)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::rref::reduce;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reduced(lines: Vec<Vec<f64>>) -> MatrixReal {
        reduce(MatrixReal::from_list(lines).unwrap()).0
    }

    #[test]
    fn test_unique_solution() {
        match classify(&reduced(vec![vec![1.0, 1.0, 3.0], vec![2.0, -1.0, 0.0]])) {
            SolutionReport::Unique(values) => {
                assert_eq!(values.len(), 2);
                assert_abs_diff_eq!(values[0], 1.0, epsilon = EPSILON);
                assert_abs_diff_eq!(values[1], 2.0, epsilon = EPSILON);
            }
            other => panic!("expected a unique solution, got {:?}", other),
        }
    }

    #[test]
    fn test_no_solution() {
        assert_eq!(
            classify(&reduced(vec![vec![1.0, 1.0, 3.0], vec![1.0, 1.0, 5.0]])),
            SolutionReport::NoSolution
        );
    }

    #[test]
    fn test_infinite_solutions() {
        assert_eq!(
            classify(&reduced(vec![vec![1.0, 1.0, 3.0], vec![2.0, 2.0, 6.0]])),
            SolutionReport::Infinite
        );
    }

    #[test]
    fn test_rank_counts_right_hand_side() {
        // x = 1 and 0 = 0 twice: only one nonzero row, one variable
        let a = MatrixReal::from_list(vec![vec![1.0, 1.0], vec![0.0, 0.0], vec![0.0, 0.0]])
            .unwrap();
        assert_eq!(classify(&a), SolutionReport::Unique(vec![1.0]));

        // 0x + 0y = 0 and y = 2: rank 1 < 2 variables
        let b = MatrixReal::from_list(vec![vec![0.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]]).unwrap();
        assert_eq!(classify(&b), SolutionReport::Infinite);
    }

    #[test]
    fn test_only_right_hand_side_column() {
        let zero = MatrixReal::from_list(vec![vec![0.0], vec![0.0]]).unwrap();
        assert_eq!(classify(&zero), SolutionReport::Unique(vec![]));

        let nonzero = MatrixReal::from_list(vec![vec![0.0], vec![4.0]]).unwrap();
        assert_eq!(classify(&nonzero), SolutionReport::NoSolution);
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        let a = MatrixReal::from_list(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1e-10, 1e-10]])
            .unwrap();
        assert_eq!(classify(&a), SolutionReport::Infinite);
        assert_eq!(
            classify_with_tolerance(&a, 1e-12),
            SolutionReport::Unique(vec![2.0, 1e-10])
        );
    }

    #[test]
    fn test_extracted_values_satisfy_original_equations() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..=5 {
            let system = MatrixReal::random(n, n + 1, &mut rng);
            let (rref, _) = reduce(system.clone());

            let values = match classify(&rref) {
                SolutionReport::Unique(values) => values,
                other => panic!("random {}x{} system classified as {:?}", n, n + 1, other),
            };

            for row in system.row_slices() {
                let lhs: f64 = row[..n].iter().zip(values.iter()).map(|(a, x)| a * x).sum();
                assert_abs_diff_eq!(lhs, row[n], epsilon = 1e-8);
            }
        }
    }
}
