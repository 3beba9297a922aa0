//! Everything the brightness-graph and clockface scenes need about one set,
//! computed in a single pass.

use serde::Serialize;

use crate::brightness::{BrightnessMatrix, brightness_comparisons_with_precision};
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::matrix::{IntervalMatrix, scalar_interval_matrix};
use crate::prime::{prime_form, tn_prime};
use crate::rotation::reduce;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetAnalysis {
    /// Input pitch classes reduced into `[0, edo)`, in input order.
    pub pitch_classes: Vec<u32>,
    pub edo: u32,
    pub normal_order: Vec<u32>,
    pub prime_form: Vec<u32>,
    /// Column `i` is mode `i`.
    pub scalar_interval_matrix: IntervalMatrix,
    pub mode_sums: Vec<u64>,
    pub brightness: BrightnessMatrix,
    /// `(darker, brighter)` mode pairs.
    pub precedence_edges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        Ok(Analyzer { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, set: &[i64]) -> Result<SetAnalysis, AnalyzerError> {
        let edo = self.config.edo;
        if set.is_empty() {
            return Err(AnalyzerError::invalid("cannot analyze an empty set"));
        }
        let sim = scalar_interval_matrix(set, edo)?;
        let brightness = brightness_comparisons_with_precision(set, edo, self.config.precision)?;
        let analysis = SetAnalysis {
            pitch_classes: set.iter().map(|&p| reduce(p, edo)).collect(),
            edo,
            normal_order: tn_prime(set, edo)?,
            prime_form: prime_form(set, edo)?,
            mode_sums: sim.column_sums(),
            scalar_interval_matrix: sim,
            precedence_edges: brightness.precedence_edges(),
            brightness,
        };
        log::debug!(
            "analyzed {:?} in {edo}-edo: prime form {:?}, {} precedence edges",
            analysis.pitch_classes,
            analysis.prime_form,
            analysis.precedence_edges.len()
        );
        Ok(analysis)
    }
}
