/// Magnitudes at or below this are treated as exactly zero
pub const EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Zero tolerance for pivots, rank counting and consistency checks
    pub epsilon: f64,
    /// Decimals for RREF step snapshots
    pub step_precision: usize,
    /// Decimals for solution values, transpose and inverse output
    pub value_precision: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            epsilon: EPSILON,
            step_precision: 2,
            value_precision: 4,
        }
    }
}

impl SolverConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_step_precision(mut self, precision: usize) -> Self {
        self.step_precision = precision;
        self
    }

    pub fn with_value_precision(mut self, precision: usize) -> Self {
        self.value_precision = precision;
        self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
