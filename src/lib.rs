pub mod analysis;
pub mod brightness;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod matrix;
pub mod parser;
pub mod prime;
pub mod rotation;
pub mod token;
pub mod tonnetz;
pub mod transform;

pub use crate::analysis::{Analyzer, SetAnalysis};
pub use crate::brightness::{BrightnessMatrix, brightness_comparisons, mode_compare, mode_sums};
pub use crate::config::{AnalyzerConfig, DEFAULT_EDO};
pub use crate::error::AnalyzerError;
pub use crate::matrix::{IntervalMatrix, scalar_interval_matrix};
pub use crate::prime::{prime_form, tn_prime};
pub use crate::rotation::{rotate_list, start_zero};

use crate::lexer::Lexer;
use crate::parser::Parser;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the pcset-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Parse pitch-class set notation (`[0,4,7]`, `{0 4 7}`, `047TE`) into raw
/// pitch classes. Values are not yet reduced by any edo.
pub fn parse_set(input: &str) -> Result<Vec<i64>, AnalyzerError> {
    let tokens = Lexer::new(input).tokenize()?;
    let mut parser = Parser::new(tokens);
    Ok(parser.parse_set()?)
}

/// Accept JS numbers as pitch classes only when they are whole.
pub fn pitch_classes_from_f64(values: &[f64]) -> Result<Vec<i64>, AnalyzerError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| {
            if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(AnalyzerError::invalid(format!(
                    "pitch class at position {index} is not an integer: {v}"
                )))
            }
        })
        .collect()
}

/// Format an error for JS, with an annotated excerpt when it points into `source`.
fn js_error(source: &str, err: AnalyzerError) -> JsValue {
    JsValue::from_str(&diagnostic::render_error(source, &err))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: prime form of a set written in notation.
#[wasm_bindgen]
pub fn prime_form_of(source: &str, edo: u32) -> Result<Vec<u32>, JsValue> {
    let set = parse_set(source).map_err(|e| js_error(source, e))?;
    prime::prime_form(&set, edo).map_err(|e| js_error(source, e))
}

/// WASM-exposed: full analysis of a set written in notation.
/// `config_json` may be empty to use the defaults.
#[wasm_bindgen]
pub fn analyze_set(source: &str, config_json: &str) -> Result<JsValue, JsValue> {
    let config = if config_json.trim().is_empty() {
        AnalyzerConfig::default()
    } else {
        AnalyzerConfig::from_json(config_json).map_err(|e| JsValue::from_str(&format!("{e}")))?
    };
    let set = parse_set(source).map_err(|e| js_error(source, e))?;
    let analysis = Analyzer::new(config)
        .and_then(|analyzer| analyzer.analyze(&set))
        .map_err(|e| js_error(source, e))?;
    to_js(&analysis)
}

/// WASM-exposed: full analysis of a set given as a JS number array.
#[wasm_bindgen]
pub fn analyze_pitch_classes(values: Vec<f64>, edo: u32) -> Result<JsValue, JsValue> {
    let analysis = pitch_classes_from_f64(&values)
        .and_then(|set| Analyzer::new(AnalyzerConfig::with_edo(edo))?.analyze(&set))
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    to_js(&analysis)
}

/// WASM-exposed: brightness comparison matrix of a set written in notation.
#[wasm_bindgen]
pub fn brightness_matrix_of(source: &str, edo: u32) -> Result<JsValue, JsValue> {
    let set = parse_set(source).map_err(|e| js_error(source, e))?;
    let matrix = brightness::brightness_comparisons(&set, edo).map_err(|e| js_error(source, e))?;
    to_js(&matrix)
}
