//! A rule-driven rune scanner.
//!
//! A scanner definition is a [ScanFn] that scans one token per call. It declares its lexical
//! rules per step as [ExpectRune] tables of [Branch] and [BranchRange] values, consumes input
//! with [Scanner::expect] and [Scanner::skip_rune], binds the accumulated text to a [TokenType]
//! with [Scanner::match_token], and finishes with [Scanner::exit]. The engine owns the cursor and
//! all position tracking, so a definition never touches offsets, lines or columns.
//!
//! [tokenize()] is the minimal driver, yielding tokens until EOF or the first error.
//! [TokenizedBuffer] is the full driver with a configurable recovery policy.
//!

pub mod config;
pub mod cursor;
pub mod engine;
pub mod rules;
pub mod token;
pub mod tokenized_buffer;

pub use config::{Recovery, ScanConfig};
pub use cursor::{Cursor, Position};
pub use engine::{ScanFn, Scanner};
pub use rules::{Branch, BranchRange, ExpectRune, Handler, Match, ScanOptions};
pub use token::{Token, TokenType};
pub use tokenized_buffer::{TokenIndex, TokenizedBuffer};

use crate::toolchain::diagnostics::Error;

/// Returns an iterator running `scan` over `input`. It yields the EOF token last, and stops
/// after the first error.
pub fn tokenize(input: &str, scan: ScanFn) -> impl Iterator<Item = Result<Token, Error>> + '_ {
    let mut scanner = Scanner::new(input);
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let result = scanner.scan(scan);
        done = !matches!(&result, Ok(token) if !token.is_eof());
        Some(result)
    })
}

#[cfg(test)]
mod tokenized_buffer_unittests;
