//! Error types and error reporting for the formalism codecs.
//!
//! Syntax errors from the text codecs are collected as [`ParseErrorInfo`]
//! values, which keep their source span so that [`ErrorReporter`] can print
//! them against the input with [ariadne](https://crates.io/crates/ariadne).
//!
//! ```rust
//! use graphedes_formalism::{FormalismError, InputFormat};
//!
//! let err = InputFormat::Eds.decode("{e2: e2:_bark_v_1<8:14>[ARG1 x4}").unwrap_err();
//! assert!(matches!(err, FormalismError::Syntax { .. }));
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::Rich;
use chumsky::span::SimpleSpan;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Errors raised while decoding a semantic representation.
#[derive(Debug, Error)]
pub enum FormalismError {
    /// The text did not match the grammar of its format.
    #[error("invalid {format} input: {}", first_message(.errors))]
    Syntax {
        format: &'static str,
        errors: Vec<ParseErrorInfo>,
    },

    /// The JSON was malformed or did not have the expected shape.
    #[error("invalid {format} input: {source}")]
    Json {
        format: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// ACE output with nothing after its first line.
    #[error("ACE output contains no MRS after the first line")]
    EmptyAceOutput,

    /// A format selector that names no supported format.
    #[error("unsupported input format '{0}' (expected one of: mrs, mrs_json, eds, eds_json, ace)")]
    UnknownFormat(String),
}

impl FormalismError {
    /// The syntax errors, if this is a [`FormalismError::Syntax`].
    pub fn syntax_errors(&self) -> &[ParseErrorInfo] {
        match self {
            FormalismError::Syntax { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn first_message(errors: &[ParseErrorInfo]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown syntax error".to_string())
}

/// Information about a syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorInfo {
    pub message: String,
    pub span: Option<Range<usize>>,
    pub expected: Vec<String>,
    pub found: Option<String>,
}

impl ParseErrorInfo {
    /// Build from a chumsky error, adding the line and column to the message.
    pub fn from_rich(source: &str, err: &Rich<'_, char, SimpleSpan<usize>>) -> Self {
        let span = err.span();
        let (line, col) = offset_to_line_col(source, span.start);
        ParseErrorInfo {
            message: format!("line {}, column {}: {}", line, col, err.reason()),
            span: Some(span.start..span.end),
            expected: err.expected().map(|exp| format!("{}", exp)).collect(),
            found: err.found().map(|c| format!("{}", c)),
        }
    }
}

/// Convert a byte offset to a 1-indexed line and column.
fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

impl fmt::Display for ParseErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref found) = self.found {
            write!(f, ", found '{}'", found)?;
        }
        Ok(())
    }
}

/// Error reporter that uses ariadne for pretty error output.
pub struct ErrorReporter<'src> {
    source_name: String,
    source: &'src str,
}

impl<'src> ErrorReporter<'src> {
    /// Create a new error reporter.
    pub fn new(source_name: impl Into<String>, source: &'src str) -> Self {
        Self {
            source_name: source_name.into(),
            source,
        }
    }

    /// Report a syntax error to stderr.
    pub fn report_parse_error(&self, error: &ParseErrorInfo) -> std::io::Result<()> {
        let span = error.span.clone().unwrap_or(0..0);

        let mut report = Report::build(ReportKind::Error, &self.source_name, span.start)
            .with_message(&error.message);

        let mut label = Label::new((&self.source_name, span)).with_color(Color::Red);
        if let Some(ref found) = error.found {
            label = label.with_message(format!("found '{}'", found));
        }
        report = report.with_label(label);

        if !error.expected.is_empty() {
            report = report.with_note(format!("expected one of: {}", error.expected.join(", ")));
        }

        report
            .finish()
            .eprint((&self.source_name, Source::from(self.source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_line_col() {
        let source = "{e2:\n x4:_dog_n_1";
        assert_eq!(offset_to_line_col(source, 0), (1, 1));
        assert_eq!(offset_to_line_col(source, 6), (2, 2));
    }

    #[test]
    fn test_syntax_error_display_uses_first_message() {
        let err = FormalismError::Syntax {
            format: "eds",
            errors: vec![ParseErrorInfo {
                message: "line 1, column 6: unexpected input".to_string(),
                span: Some(5..6),
                expected: vec!["'}'".to_string()],
                found: Some("]".to_string()),
            }],
        };
        assert_eq!(
            err.to_string(),
            "invalid eds input: line 1, column 6: unexpected input, found ']'"
        );
        assert_eq!(err.syntax_errors().len(), 1);
    }
}
