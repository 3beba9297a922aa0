//! Scalar interval matrix: every mode of a set, each measured from its own tonic.

use serde::Serialize;

use crate::error::AnalyzerError;
use crate::rotation::{check_edo, rotate_list, start_zero};

/// Owned, rectangular, row-major matrix of intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntervalMatrix {
    rows: Vec<Vec<u32>>,
}

impl IntervalMatrix {
    /// Build a matrix from rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, AnalyzerError> {
        if let Some(first) = rows.first() {
            let width = first.len();
            if let Some(bad) = rows.iter().position(|r| r.len() != width) {
                return Err(AnalyzerError::invalid(format!(
                    "row {bad} has {} columns, expected {width}",
                    rows[bad].len()
                )));
            }
        }
        Ok(IntervalMatrix { rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[u32]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn column(&self, col: usize) -> Option<Vec<u32>> {
        if col >= self.n_cols() {
            return None;
        }
        Some(self.rows.iter().map(|r| r[col]).collect())
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn transpose(&self) -> IntervalMatrix {
        let rows = (0..self.n_cols())
            .map(|c| self.rows.iter().map(|r| r[c]).collect())
            .collect();
        IntervalMatrix { rows }
    }

    /// Sum of each column, widened so large edos cannot overflow.
    pub fn column_sums(&self) -> Vec<u64> {
        (0..self.n_cols())
            .map(|c| self.rows.iter().map(|r| u64::from(r[c])).sum())
            .collect()
    }
}

/// Build the scalar interval matrix of `set`.
///
/// Row `k` of the intermediate stack is the set rotated by `k` and
/// canonicalized from its first element; the result is that stack
/// transposed, so column `i` is mode `i` (its intervals above its own
/// tonic, ascending) and row `k` is scale-degree position `k`. The input
/// order is used as given: it is neither sorted nor deduplicated.
pub fn scalar_interval_matrix(set: &[i64], edo: u32) -> Result<IntervalMatrix, AnalyzerError> {
    check_edo(edo)?;
    if set.is_empty() {
        return Err(AnalyzerError::invalid(
            "scalar interval matrix of an empty set",
        ));
    }
    let modes = (0..set.len())
        .map(|i| start_zero(&rotate_list(set, i as i64)?, edo, 0))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(IntervalMatrix::from_rows(modes)?.transpose())
}
