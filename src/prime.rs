//! Normal order and prime form.
//!
//! `tn_prime` picks the most left-packed mode among all rotations of a set
//! (its representative under transposition). `prime_form` additionally
//! considers the inversion and keeps whichever of the two is more compact,
//! giving the representative under transposition and inversion.

use std::collections::BTreeSet;

use crate::error::AnalyzerError;
use crate::rotation::{check_edo, reduce, start_zero};

/// Most left-packed canonical rotation of `set` (its normal order, from 0).
///
/// Candidate rows are the set measured from each of its members. Duplicate
/// rows are collapsed and the rest are kept in lexicographic order. Columns
/// are then scanned from last to first, keeping only the rows that hold the
/// minimum of the surviving rows in that column, until one row is left. If
/// several rows survive every column the first of them is returned.
pub fn tn_prime(set: &[i64], edo: u32) -> Result<Vec<u32>, AnalyzerError> {
    check_edo(edo)?;
    if set.is_empty() {
        return Err(AnalyzerError::invalid("normal order of an empty set"));
    }
    let mut sorted = set.to_vec();
    sorted.sort_unstable();

    let modes: Vec<Vec<u32>> = (0..sorted.len())
        .map(|i| start_zero(&sorted, edo, i))
        .collect::<Result<BTreeSet<_>, _>>()?
        .into_iter()
        .collect();

    if let [only] = modes.as_slice() {
        return Ok(only.clone());
    }

    let width = sorted.len();
    let mut survivors: Vec<usize> = (0..modes.len()).collect();
    for column in (0..width).rev() {
        let Some(min) = survivors.iter().map(|&r| modes[r][column]).min() else {
            break;
        };
        survivors.retain(|&r| modes[r][column] == min);
        log::trace!("tn_prime column {column}: min {min}, survivors {survivors:?}");
        if survivors.len() < 2 {
            break;
        }
    }

    // Only sets with partial symmetry reach here with several survivors.
    Ok(modes[survivors[0]].clone())
}

/// Prime form of `set`: the more compact of the normal orders of the set
/// and of its inversion.
///
/// The two normal orders are compared at the last position where they
/// differ; the inversion wins only when it holds the smaller value there.
/// An empty set yields an empty prime form and any single pitch class
/// yields `[0]`.
pub fn prime_form(set: &[i64], edo: u32) -> Result<Vec<u32>, AnalyzerError> {
    check_edo(edo)?;
    match set.len() {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![0]),
        _ => {}
    }

    let original = tn_prime(set, edo)?;
    let inversion: Vec<i64> = set
        .iter()
        .map(|&p| i64::from(edo) - i64::from(reduce(p, edo)))
        .collect();
    let inverted = tn_prime(&inversion, edo)?;

    let last_difference = original
        .iter()
        .zip(&inverted)
        .rposition(|(o, i)| o != i);
    let prime = match last_difference {
        Some(k) if original[k] > inverted[k] => inverted,
        _ => original,
    };
    log::debug!("prime form of {set:?} in {edo}-edo: {prime:?}");
    Ok(prime)
}
