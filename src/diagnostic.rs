//! Human-readable reports for errors in pitch-class set notation.

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::error::AnalyzerError;

/// Render `err` against the notation `source` it came from.
///
/// Errors that point into the source get an annotated excerpt; the rest fall
/// back to their plain message. Output carries no terminal colors.
pub fn render_error(source: &str, err: &AnalyzerError) -> String {
    let Some(span) = err.span() else {
        return err.to_string();
    };
    let range = span.start.min(source.len())..span.end.min(source.len());

    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, range.clone())
        .with_config(Config::default().with_color(false))
        .with_message(err.to_string())
        .with_label(Label::new(range).with_message(label_for(err)))
        .finish()
        .write(Source::from(source), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => err.to_string(),
    }
}

fn label_for(err: &AnalyzerError) -> &'static str {
    match err {
        AnalyzerError::Lex(_) => "not part of pitch-class notation",
        AnalyzerError::Parse(crate::error::ParseError::InvalidPitchClass { .. }) => {
            "not a pitch class"
        }
        _ => "unexpected here",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_set;

    #[test]
    fn test_report_mentions_message_and_label() {
        let source = "[0, 4, X]";
        let err = parse_set(source).unwrap_err();
        let report = render_error(source, &err);
        assert!(report.contains("Invalid pitch class 'X'"), "{report}");
        assert!(report.contains("not a pitch class"), "{report}");
        assert!(report.contains(source), "{report}");
    }

    #[test]
    fn test_lex_error_report() {
        let source = "[4.5]";
        let err = parse_set(source).unwrap_err();
        let report = render_error(source, &err);
        assert!(report.contains("Unexpected char '.'"), "{report}");
    }

    #[test]
    fn test_spanless_errors_fall_back_to_message() {
        let source = "[0, 4";
        let err = parse_set(source).unwrap_err();
        assert_eq!(render_error(source, &err), err.to_string());
    }
}
