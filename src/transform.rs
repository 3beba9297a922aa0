//! Pitch-class operations: transposition, inversion and voice leading.
//!
//! These are what the clockface animations depict. Results keep the order of
//! the input so each output pitch class lines up with the note it came from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;
use crate::rotation::{check_edo, reduce};

/// A transposition (`Tn`) or inversion followed by transposition (`TnI`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "n", rename_all = "snake_case")]
pub enum Transform {
    Transpose(i64),
    Invert(i64),
}

impl Transform {
    pub fn apply(self, set: &[i64], edo: u32) -> Result<Vec<u32>, AnalyzerError> {
        match self {
            Transform::Transpose(n) => transpose(set, n, edo),
            Transform::Invert(index) => invert(set, index, edo),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Transpose(n) => write!(f, "T{n}"),
            Transform::Invert(n) => write!(f, "T{n}I"),
        }
    }
}

/// `Tn`: add `n` to every pitch class.
pub fn transpose(set: &[i64], n: i64, edo: u32) -> Result<Vec<u32>, AnalyzerError> {
    check_edo(edo)?;
    let n = i64::from(reduce(n, edo));
    Ok(set
        .iter()
        .map(|&p| reduce(i64::from(reduce(p, edo)) + n, edo))
        .collect())
}

/// `TnI`: reflect every pitch class `p` to `index - p`.
pub fn invert(set: &[i64], index: i64, edo: u32) -> Result<Vec<u32>, AnalyzerError> {
    check_edo(edo)?;
    let index = i64::from(reduce(index, edo));
    Ok(set
        .iter()
        .map(|&p| reduce(index - i64::from(reduce(p, edo)), edo))
        .collect())
}

/// Move each voice by its own signed distance.
pub fn voice_lead(set: &[i64], motions: &[i64], edo: u32) -> Result<Vec<u32>, AnalyzerError> {
    check_edo(edo)?;
    if set.len() != motions.len() {
        return Err(AnalyzerError::invalid(format!(
            "{} voices but {} motions",
            set.len(),
            motions.len()
        )));
    }
    Ok(set
        .iter()
        .zip(motions)
        .map(|(&p, &m)| reduce(i64::from(reduce(p, edo)) + i64::from(reduce(m, edo)), edo))
        .collect())
}

/// The two clockface positions the `TnI` axis passes through.
///
/// Positions are in pitch-class units and may fall halfway between two
/// pitch classes when `index` (or `edo`) is odd.
pub fn inversion_axis(index: i64, edo: u32) -> Result<(f64, f64), AnalyzerError> {
    check_edo(edo)?;
    let start = index as f64 / 2.0;
    Ok((start, start + f64::from(edo) / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        assert_eq!(transpose(&[0, 4, 7], 2, 12).unwrap(), vec![2, 6, 9]);
        assert_eq!(transpose(&[0, 4, 7], 7, 12).unwrap(), vec![7, 11, 2]);
        assert_eq!(transpose(&[0, 4, 7], -1, 12).unwrap(), vec![11, 3, 6]);
    }

    #[test]
    fn test_invert() {
        // T0I maps C major to F minor's pitch classes.
        assert_eq!(invert(&[0, 4, 7], 0, 12).unwrap(), vec![0, 8, 5]);
        assert_eq!(invert(&[0, 4, 7], 7, 12).unwrap(), vec![7, 3, 0]);
    }

    #[test]
    fn test_inversion_is_an_involution() {
        let set = [1, 2, 6, 9];
        let once: Vec<i64> = invert(&set, 5, 12).unwrap().into_iter().map(i64::from).collect();
        let twice = invert(&once, 5, 12).unwrap();
        assert_eq!(twice, vec![1, 2, 6, 9]);
    }

    #[test]
    fn test_transform_apply_and_display() {
        let t5 = Transform::Transpose(5);
        let t3i = Transform::Invert(3);
        assert_eq!(t5.apply(&[0, 4, 7], 12).unwrap(), vec![5, 9, 0]);
        assert_eq!(t3i.apply(&[0, 4, 7], 12).unwrap(), vec![3, 11, 8]);
        assert_eq!(t5.to_string(), "T5");
        assert_eq!(t3i.to_string(), "T3I");
    }

    #[test]
    fn test_transform_serde() {
        let json = serde_json::to_string(&Transform::Invert(4)).unwrap();
        assert_eq!(json, r#"{"kind":"invert","n":4}"#);
        let back: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Transform::Invert(4));
    }

    #[test]
    fn test_voice_lead() {
        // C major to F major: C stays, E steps up to F, G up to A.
        assert_eq!(voice_lead(&[0, 4, 7], &[0, 1, 2], 12).unwrap(), vec![0, 5, 9]);
        assert_eq!(voice_lead(&[11, 2], &[1, -2], 12).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_voice_lead_length_mismatch() {
        assert!(matches!(
            voice_lead(&[0, 4, 7], &[1, 1], 12),
            Err(AnalyzerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_inversion_axis() {
        assert_eq!(inversion_axis(0, 12).unwrap(), (0.0, 6.0));
        assert_eq!(inversion_axis(3, 12).unwrap(), (1.5, 7.5));
        assert!(inversion_axis(3, 0).is_err());
    }

    #[test]
    fn test_zero_edo_rejected() {
        assert!(transpose(&[0], 1, 0).is_err());
        assert!(invert(&[0], 1, 0).is_err());
    }
}
