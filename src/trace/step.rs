use crate::matrix::matrix_real::MatrixReal;

/// One elementary operation. Row and column indices are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// Initial `[A | I]` block of an inversion
    Augment,
    Swap { first: usize, second: usize },
    /// Every entry of `row` divided by `factor`
    Scale { row: usize, factor: f64 },
    /// `row[target] -= factor * row[source]`
    Eliminate {
        target: usize,
        source: usize,
        factor: f64,
    },
    /// `result[row][col] = value`
    Assign { row: usize, col: usize, value: f64 },
}

/// Which engine produced the log, selects the wording of descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStyle {
    Reduction,
    Transposition,
    Inversion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub kind: StepKind,
    /// Full matrix state after the operation
    pub snapshot: MatrixReal,
    pub description: String,
}

impl StepKind {
    pub fn describe(&self, style: TraceStyle) -> String {
        match (self, style) {
            (StepKind::Augment, _) => "Creating augmented matrix [A | I]:".to_string(),
            (StepKind::Swap { first, second }, _) => {
                format!("Swapped Row {} with Row {}:", first + 1, second + 1)
            }
            (StepKind::Scale { row, factor }, TraceStyle::Inversion) => format!(
                "Normalize row {} by dividing with pivot {:.4}",
                row + 1,
                factor
            ),
            (StepKind::Scale { row, factor }, _) => {
                format!("Normalized Row {} (divided by {:.2}):", row + 1, factor)
            }
            (
                StepKind::Eliminate {
                    target,
                    source,
                    factor,
                },
                TraceStyle::Inversion,
            ) => format!(
                "Row {} = Row {} – {:.4} × Row {}",
                target + 1,
                target + 1,
                factor,
                source + 1
            ),
            (
                StepKind::Eliminate {
                    target,
                    source,
                    factor,
                },
                _,
            ) => format!(
                "Eliminated Row {} using Row {} (multiplied by {:.2}):",
                target + 1,
                source + 1,
                factor
            ),
            (StepKind::Assign { row, col, value }, _) => {
                format!("t[{},{}] = matrix[{},{}] → {:.4}", row, col, col, row, value)
            }
        }
    }
}

/// Append-only record of one engine run
#[derive(Debug, Clone, PartialEq)]
pub struct TraceLog {
    style: TraceStyle,
    steps: Vec<Step>,
}

impl TraceLog {
    pub fn new(style: TraceStyle) -> Self {
        TraceLog {
            style,
            steps: vec![],
        }
    }

    pub fn record(&mut self, kind: StepKind, snapshot: MatrixReal) {
        let description = kind.describe(self.style);
        tracing::trace!(style = ?self.style, kind = ?kind, "{}", description);
        self.steps.push(Step {
            kind,
            snapshot,
            description,
        });
    }

    pub fn style(&self) -> TraceStyle {
        self.style
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

impl<'a> IntoIterator for &'a TraceLog {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix::Matrix;

    #[test]
    fn test_descriptions() {
        let scale = StepKind::Scale {
            row: 0,
            factor: 2.0,
        };
        assert_eq!(
            scale.describe(TraceStyle::Reduction),
            "Normalized Row 1 (divided by 2.00):"
        );
        assert_eq!(
            scale.describe(TraceStyle::Inversion),
            "Normalize row 1 by dividing with pivot 2.0000"
        );

        let eliminate = StepKind::Eliminate {
            target: 1,
            source: 0,
            factor: 3.0,
        };
        assert_eq!(
            eliminate.describe(TraceStyle::Reduction),
            "Eliminated Row 2 using Row 1 (multiplied by 3.00):"
        );
        assert_eq!(
            eliminate.describe(TraceStyle::Inversion),
            "Row 2 = Row 2 – 3.0000 × Row 1"
        );

        assert_eq!(
            StepKind::Swap {
                first: 0,
                second: 2
            }
            .describe(TraceStyle::Reduction),
            "Swapped Row 1 with Row 3:"
        );
        assert_eq!(
            StepKind::Assign {
                row: 2,
                col: 1,
                value: -0.5
            }
            .describe(TraceStyle::Transposition),
            "t[2,1] = matrix[1,2] → -0.5000"
        );
    }

    #[test]
    fn test_record_keeps_order() {
        let mut log = TraceLog::new(TraceStyle::Reduction);
        assert!(log.is_empty());

        let snapshot = MatrixReal::identity(2);
        log.record(
            StepKind::Swap {
                first: 0,
                second: 1,
            },
            snapshot.clone(),
        );
        log.record(
            StepKind::Scale {
                row: 0,
                factor: 4.0,
            },
            snapshot.clone(),
        );

        assert_eq!(log.len(), 2);
        assert_eq!(log.style(), TraceStyle::Reduction);
        let kinds: Vec<_> = log.iter().map(|s| s.kind.clone()).collect();
        assert!(matches!(kinds[0], StepKind::Swap { .. }));
        assert!(matches!(kinds[1], StepKind::Scale { .. }));
        assert_eq!(log.last().unwrap().snapshot, snapshot);
        assert_eq!((&log).into_iter().count(), 2);
    }
}
