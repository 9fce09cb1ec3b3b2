use std::fmt;
use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use super::ErrorCode;
use crate::toolchain::scanner::TokenType;

/// What the scanner found where it expected something else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Found {
    Rune(char),
    EndOfInput,
}

impl From<Option<char>> for Found {
    fn from(c: Option<char>) -> Found {
        match c {
            Some(c) => Found::Rune(c),
            None => Found::EndOfInput,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Rune(c) => write!(f, "{:?}", c),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The underlying failure behind an [Error].
#[derive(Debug, thiserror::Error)]
pub enum Cause {
    #[error("expected {expected:?}, found {found}")]
    RuneExpected { expected: char, found: Found },

    #[error("unexpected {found}")]
    RuneNotInSet { found: Found },

    #[error("no token matches {text:?}")]
    NoMatchingLiteral { text: String },

    #[error("expected one of {}, found {found}", join(.expected))]
    TokenNotInSet { expected: Vec<TokenType>, found: TokenType },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: mmap_rs::Error,
    },
}

fn join(types: &[TokenType]) -> String {
    let names: Vec<&str> = types.iter().map(|t| t.name()).collect();
    format!("[{}]", names.join(", "))
}

/// A single failure, with the source context needed to point at it.
///
/// `start_position` and `end_position` are 1-based rune columns on `line`, and the span they
/// describe is half-open. Input acquisition errors carry no source context and use zeroes.
#[derive(Debug)]
pub struct Error {
    pub code: ErrorCode,
    pub cause: Cause,
    pub line_string: String,
    pub line: i32,
    pub start_position: i32,
    pub end_position: i32,
}

impl Error {
    pub fn new(
        code: ErrorCode,
        cause: Cause,
        line_string: impl Into<String>,
        line: i32,
        start_position: i32,
        end_position: i32,
    ) -> Error {
        Error { code, cause, line_string: line_string.into(), line, start_position, end_position }
    }

    /// An error raised before or after scanning, with no position in the input.
    pub fn input(code: ErrorCode, cause: Cause) -> Error {
        Error::new(code, cause, String::new(), 0, 0, 0)
    }

    /// Renders the three-line caret diagnostic. Same as the [fmt::Display] output.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error Line:{} {}", self.line, self.cause)?;
        writeln!(f, "{}", self.line_string)?;

        // Tabs are kept so the caret lines up in a tab-rendering terminal.
        let mut line_chars = self.line_string.chars();
        for _ in 1..self.start_position {
            match line_chars.next() {
                Some('\t') => f.write_char('\t')?,
                _ => f.write_char(' ')?,
            }
        }

        f.write_char('^')?;
        if self.end_position > self.start_position + 1 {
            for _ in 0..(self.end_position - self.start_position - 1) {
                f.write_char('-')?;
            }
            f.write_char('^')?;
        }
        f.write_char('\n')
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// An interface for an object that can receive errors from the toolchain as they are reported.
pub trait DiagnosticConsumer {
    fn handle_error(&mut self, error: &Error);
    fn flush(&mut self);
}

pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_error(&mut self, _error: &Error) {}
    fn flush(&mut self) {}
}

pub struct StreamDiagnosticConsumer<W: Write> {
    stream: std::io::BufWriter<W>,
}

impl<W: Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream) }
    }

    pub fn into_inner(self) -> Option<W> {
        self.stream.into_inner().ok()
    }
}

// A diagnostic that cannot be written has nowhere else to go, so write failures are dropped.
impl<W: Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    fn handle_error(&mut self, error: &Error) {
        let _ = self.stream.write_fmt(format_args!("{}", error));
    }
    fn flush(&mut self) {
        let _ = self.stream.flush();
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<impl Write> {
    StreamDiagnosticConsumer::new(std::io::stderr())
}
