//! Conversions from foreign error types into ParensError

use super::{ErrorKind, ParensError, SourceLocation, Span};
use serde_json::error::Category;

/// serde_json reports where it stopped; keep that as the span
impl From<serde_json::Error> for ParensError {
    fn from(err: serde_json::Error) -> Self {
        let mut kind = match err.classify() {
            Category::Io => ErrorKind::IoError,
            Category::Syntax | Category::Eof => ErrorKind::JsonError,
            Category::Data => ErrorKind::InvalidAst,
        };
        let line = err.line();
        let column = err.column();

        // The Display impl of serde_json appends " at line L column C"
        let message = err.to_string();
        let mut message = match message.rfind(" at line ") {
            Some(idx) if line > 0 => message[..idx].to_string(),
            _ => message,
        };

        // Operator fields fail through their own FromStr, whose error arrives
        // here already rendered as "unknown operator: ..."
        let prefix = format!("{}: ", ErrorKind::UnknownOperator);
        if kind == ErrorKind::InvalidAst {
            if let Some(rest) = message.strip_prefix(&prefix) {
                kind = ErrorKind::UnknownOperator;
                message = rest.to_string();
            }
        }

        let error = ParensError::new(kind, message);
        if line == 0 {
            error
        } else {
            error.with_span(Span::single(SourceLocation::new(line, column)))
        }
    }
}

impl From<std::io::Error> for ParensError {
    fn from(err: std::io::Error) -> Self {
        ParensError::new(ErrorKind::IoError, err.to_string())
    }
}
