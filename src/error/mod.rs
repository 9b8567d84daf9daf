//! Error types for jsparens
//!
//! The decision engine itself never fails: operator sets are closed enums.
//! Errors come from the edges, when raw operator tokens or Babel JSON are
//! turned into typed nodes.

mod conversions;

use colored::*;
use std::fmt;

/// Source location information for error reporting (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: Option<String>,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Span {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn single(location: SourceLocation) -> Self {
        Self {
            start: location.clone(),
            end: location,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Optional location and hints attached to an error
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub span: Option<Span>,
    pub note: Option<String>,
    pub help: Option<String>,
}

/// Main error type for jsparens
#[derive(Debug, Clone)]
pub struct ParensError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl ParensError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.context.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operator token outside the closed operator sets
    UnknownOperator,
    /// Well-formed JSON that does not describe a supported AST
    InvalidAst,
    /// Malformed JSON
    JsonError,
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownOperator => "unknown operator",
            ErrorKind::InvalidAst => "invalid AST",
            ErrorKind::JsonError => "JSON error",
            ErrorKind::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.span {
            Some(span) => write!(f, "{}: {}: {}", span, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }
        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParensError {}

/// Result type for jsparens operations
pub type Result<T> = std::result::Result<T, ParensError>;

/// Renders an error together with the offending line of its source
pub struct ErrorFormatter<'a> {
    error: &'a ParensError,
    source: &'a str,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a ParensError, source: &'a str) -> Self {
        Self {
            error,
            source,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(span) = &self.error.context.span {
            let location = match self.filename {
                Some(filename) => format!("{}:{}:{}", filename, span.start.line, span.start.column),
                None => format!("{}:{}", span.start.line, span.start.column),
            };
            output.push_str(&self.paint(location, |s| s.bold()));
            output.push_str(": ");
        }

        let label = self.paint(self.error.kind.to_string(), |s| s.red().bold());
        output.push_str(&format!("{}: {}\n", label, self.error.message));

        if let Some(snippet) = self.error.context.span.as_ref().and_then(|s| self.snippet(s)) {
            output.push_str(&snippet);
        }

        if let Some(note) = &self.error.context.note {
            let label = self.paint("note".to_string(), |s| s.blue().bold());
            output.push_str(&format!("\n{}: {}", label, note));
        }
        if let Some(help) = &self.error.context.help {
            let label = self.paint("help".to_string(), |s| s.green().bold());
            output.push_str(&format!("\n{}: {}", label, help));
        }

        output
    }

    fn paint(&self, text: String, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(&text).to_string()
        } else {
            text
        }
    }

    fn snippet(&self, span: &Span) -> Option<String> {
        // Spans are 1-based; line 0 means "unknown"
        let line = self.source.lines().nth(span.start.line.checked_sub(1)?)?;

        let number = span.start.line.to_string();
        let gutter = " ".repeat(number.len());
        let bar = self.paint("|".to_string(), |s| s.blue());

        let width = if span.start.line == span.end.line {
            span.end.column.saturating_sub(span.start.column).max(1)
        } else {
            1
        };
        let caret = self.paint("^".repeat(width), |s| s.red().bold());

        Some(format!(
            "{} {} {}\n{} {} {}{}",
            self.paint(number, |s| s.blue().bold()),
            bar,
            line,
            gutter,
            bar,
            " ".repeat(span.start.column.saturating_sub(1)),
            caret
        ))
    }
}
