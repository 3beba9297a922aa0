//! Rotation and modular canonicalization — the leaves every other
//! computation in the crate builds on.

use crate::error::AnalyzerError;

/// Reject a zero modulus before any `rem_euclid` can divide by it.
pub(crate) fn check_edo(edo: u32) -> Result<(), AnalyzerError> {
    if edo == 0 {
        return Err(AnalyzerError::invalid("edo must be positive"));
    }
    Ok(())
}

/// Reduce a pitch into `[0, edo)`. `edo` must be non-zero.
pub fn reduce(pitch: i64, edo: u32) -> u32 {
    pitch.rem_euclid(i64::from(edo)) as u32
}

/// Rotate `items` left by `n` places, wrapping the leading elements to the back.
///
/// `n` may be negative or larger than the sequence; it is taken modulo the
/// length. Rotating an empty sequence is an error since the modulus is
/// undefined.
pub fn rotate_list<T: Clone>(items: &[T], n: i64) -> Result<Vec<T>, AnalyzerError> {
    if items.is_empty() {
        return Err(AnalyzerError::invalid("cannot rotate an empty sequence"));
    }
    let shift = n.rem_euclid(items.len() as i64) as usize;
    let mut rotated = Vec::with_capacity(items.len());
    rotated.extend_from_slice(&items[shift..]);
    rotated.extend_from_slice(&items[..shift]);
    Ok(rotated)
}

/// Express every pitch class as an interval above `set[zero_index]`, sorted.
///
/// Each element becomes `((p mod edo) - (anchor mod edo)) mod edo`, so the
/// result holds values in `[0, edo)` and always contains the anchor as `0`.
pub fn start_zero(set: &[i64], edo: u32, zero_index: usize) -> Result<Vec<u32>, AnalyzerError> {
    check_edo(edo)?;
    let Some(&anchor) = set.get(zero_index) else {
        return Err(AnalyzerError::invalid(format!(
            "zero index {zero_index} out of range for a set of {} pitch classes",
            set.len()
        )));
    };
    let anchor = i64::from(reduce(anchor, edo));
    let mut intervals: Vec<u32> = set
        .iter()
        .map(|&p| reduce(i64::from(reduce(p, edo)) - anchor, edo))
        .collect();
    intervals.sort_unstable();
    Ok(intervals)
}
