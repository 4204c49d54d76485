use crate::error::InputFormatError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;

/// Parse one matrix row per non-blank line, numbers separated by whitespace.
pub fn parse_matrix(text: &str) -> Result<MatrixReal, InputFormatError> {
    let mut lines: Vec<Vec<f64>> = vec![];

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| InputFormatError::InvalidNumber {
                        line: index + 1,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if let Some(first) = lines.first() {
            if first.len() != row.len() {
                return Err(InputFormatError::Ragged {
                    line: index + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        lines.push(row);
    }

    MatrixReal::from_list(lines).map_err(|_| InputFormatError::Empty)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
