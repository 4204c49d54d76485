use std::fmt;

use crate::error::InputFormatError;
use crate::matrix::matrix_real::MatrixReal;
use crate::report::parse::parse_matrix;
use crate::solver::classify::SolutionReport;
use crate::solver::solve::{solve, InverseOutcome, Solution};
use crate::solver::solver_config::SolverConfig;
use crate::trace::step::{StepKind, TraceLog};
use crate::utils::format_row;

/// Text rendering of a `Solution`, section by section
pub struct Rendered<'a> {
    pub solution: &'a Solution,
    pub config: &'a SolverConfig,
}

fn write_matrix(f: &mut fmt::Formatter<'_>, matrix: &MatrixReal, precision: usize) -> fmt::Result {
    for row in matrix.row_slices() {
        writeln!(f, "{}", format_row(row, precision))?;
    }
    Ok(())
}

impl Rendered<'_> {
    fn write_rref(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.config.step_precision;

        writeln!(f, "=== Step-by-Step RREF Solution ===")?;
        for step in &self.solution.rref_trace {
            writeln!(f, "{}", step.description)?;
            write_matrix(f, &step.snapshot, precision)?;
            writeln!(f)?;
        }

        writeln!(f, "\n=== Final RREF Matrix ===")?;
        write_matrix(f, &self.solution.reduced, precision)?;
        writeln!(f)
    }

    fn write_report(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.solution.report {
            SolutionReport::NoSolution => {
                writeln!(f, "No solution.")?;
                writeln!(
                    f,
                    "\n(Note: The system of equations is inconsistent, but Transpose/Inverse will still be attempted below.)"
                )
            }
            SolutionReport::Infinite => writeln!(f, "Infinite solutions."),
            SolutionReport::Unique(values) => {
                writeln!(f, "Unique solution found:")?;
                for (i, value) in values.iter().enumerate() {
                    writeln!(
                        f,
                        "x{} = {:.*}",
                        i + 1,
                        self.config.value_precision,
                        value
                    )?;
                }
                writeln!(f)
            }
        }
    }

    fn write_transpose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.config.value_precision;

        writeln!(f, "\n=== TRANSPOSE (Step-by-step) ===")?;
        writeln!(f, "Original Matrix:")?;
        write_matrix(f, &self.solution.original, precision)?;
        writeln!(f)?;
        for step in &self.solution.transpose_trace {
            writeln!(f, "{}", step.description)?;
        }
        writeln!(f, "\nTranspose Result:")?;
        write_matrix(f, &self.solution.transposed, precision)?;
        writeln!(f)
    }

    fn write_inverse_trace(&self, f: &mut fmt::Formatter<'_>, trace: &TraceLog) -> fmt::Result {
        for step in trace {
            if let StepKind::Scale { .. } = step.kind {
                writeln!(f)?;
            }
            writeln!(f, "{}", step.description)?;
            write_matrix(f, &step.snapshot, self.config.value_precision)?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_inverse(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.solution.inverse {
            InverseOutcome::Computed { inverse, trace } => {
                writeln!(f, "\n=== INVERSE (Step-by-step) ===")?;
                self.write_inverse_trace(f, trace)?;
                writeln!(f, "Inverse Matrix:")?;
                write_matrix(f, inverse, self.config.value_precision)?;
                writeln!(f)
            }
            InverseOutcome::Singular(error) => {
                writeln!(f, "\n=== INVERSE (Step-by-step) ===")?;
                writeln!(f, "\nCannot compute inverse: {}", error)
            }
            InverseOutcome::NotSquare => {
                writeln!(f, "\nMatrix is not square → cannot compute inverse.")
            }
        }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rref(f)?;
        self.write_report(f)?;
        self.write_transpose(f)?;
        self.write_inverse(f)
    }
}

pub fn render(solution: &Solution, config: &SolverConfig) -> String {
    Rendered { solution, config }.to_string()
}

/// Parse, solve and render. Bad input yields no partial output.
pub fn solve_text(text: &str, config: &SolverConfig) -> Result<String, InputFormatError> {
    let matrix = parse_matrix(text)?;
    Ok(render(&solve(matrix, config), config))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
