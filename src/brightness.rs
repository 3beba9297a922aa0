//! Brightness ordering between the modes of a set.
//!
//! One mode is brighter than another when each of its intervals above the
//! tonic is at least as large, with at least one strictly larger. Modes that
//! are larger in some places and smaller in others are incomparable.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::AnalyzerError;
use crate::matrix::scalar_interval_matrix;

/// Decimal digits kept when rounding interval differences before taking signs.
pub const DEFAULT_PRECISION: u32 = 10;

/// Largest rounding precision that still leaves `f64` room for a sign.
pub const MAX_PRECISION: u32 = 15;

/// Compare two interval patterns with [`DEFAULT_PRECISION`].
pub fn mode_compare<T: Copy + Into<f64>>(a: &[T], b: &[T]) -> Result<i8, AnalyzerError> {
    mode_compare_with_precision(a, b, DEFAULT_PRECISION)
}

/// Sum of the distinct signs of `a - b`, after rounding each difference to
/// `precision` decimal digits.
///
/// Returns `1` when `a` is brighter, `-1` when darker, and `0` when the
/// patterns are equal or incomparable (both signs present). `precision`
/// above [`MAX_PRECISION`] is rejected.
pub fn mode_compare_with_precision<T: Copy + Into<f64>>(
    a: &[T],
    b: &[T],
    precision: u32,
) -> Result<i8, AnalyzerError> {
    if a.len() != b.len() {
        return Err(AnalyzerError::invalid(format!(
            "cannot compare modes of length {} and {}",
            a.len(),
            b.len()
        )));
    }
    if precision > MAX_PRECISION {
        return Err(AnalyzerError::invalid(format!(
            "precision {precision} exceeds the maximum of {MAX_PRECISION}"
        )));
    }
    let scale = 10f64.powi(precision as i32);
    let mut signs = BTreeSet::new();
    for (index, (&x, &y)) in a.iter().zip(b).enumerate() {
        let diff = Into::<f64>::into(x) - Into::<f64>::into(y);
        let rounded = (diff * scale).round() / scale;
        if !rounded.is_finite() {
            return Err(AnalyzerError::ArithmeticAmbiguity(format!(
                "difference at position {index} is {rounded} after rounding to {precision} digits"
            )));
        }
        let sign: i8 = if rounded > 0.0 {
            1
        } else if rounded < 0.0 {
            -1
        } else {
            0
        };
        signs.insert(sign);
    }
    Ok(signs.iter().sum())
}

/// Square matrix of pairwise mode comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BrightnessMatrix {
    rows: Vec<Vec<i8>>,
}

impl BrightnessMatrix {
    /// Number of modes compared.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<i8> {
        self.rows.get(i).and_then(|r| r.get(j)).copied()
    }

    pub fn rows(&self) -> &[Vec<i8>] {
        &self.rows
    }

    /// Directed edges `(i, j)` where mode `i` is darker than mode `j`.
    ///
    /// This is the full precedence relation; reducing it to a Hasse diagram
    /// is left to the consumer's graph library.
    pub fn precedence_edges(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &cmp)| cmp < 0)
                    .map(move |(j, _)| (i, j))
            })
            .collect()
    }
}

/// Compare every mode of `set` with every other, with [`DEFAULT_PRECISION`].
pub fn brightness_comparisons(set: &[i64], edo: u32) -> Result<BrightnessMatrix, AnalyzerError> {
    brightness_comparisons_with_precision(set, edo, DEFAULT_PRECISION)
}

/// `M[i][j] = mode_compare(mode_i, mode_j)`, where mode `i` is column `i`
/// of the scalar interval matrix.
pub fn brightness_comparisons_with_precision(
    set: &[i64],
    edo: u32,
    precision: u32,
) -> Result<BrightnessMatrix, AnalyzerError> {
    let modes = scalar_interval_matrix(set, edo)?.transpose();
    let rows = modes
        .rows()
        .iter()
        .map(|a| {
            modes
                .rows()
                .iter()
                .map(|b| mode_compare_with_precision(a, b, precision))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BrightnessMatrix { rows })
}

/// Interval sum of each mode, the coarse brightness figure shown beside
/// each mode in a brightness graph.
pub fn mode_sums(set: &[i64], edo: u32) -> Result<Vec<u64>, AnalyzerError> {
    Ok(scalar_interval_matrix(set, edo)?.column_sums())
}
