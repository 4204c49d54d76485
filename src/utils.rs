use itertools::Itertools;

// values at or below the tolerance count as exactly zero
#[inline(always)]
pub fn is_zero(value: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance
}

pub fn format_row(row: &[f64], precision: usize) -> String {
    row.iter()
        .map(|x| format!("{:.*}", precision, x))
        .join("\t")
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
