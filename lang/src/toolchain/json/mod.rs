//! A JSON tokenizer built on the scanner engine.
//!
//! This is a scanner definition, not part of the engine: a [scan] function and the rule tables
//! it hands to the [Scanner]. Strings are emitted without their quotes and with escape sequences
//! left as written. Numbers and strings are not converted or validated beyond their shape.
//!

use crate::toolchain::diagnostics::Error;
use crate::toolchain::scanner::{
    Branch, BranchRange, ExpectRune, Match, ScanOptions, Scanner, Token, TokenType,
};

pub const STRING: TokenType = TokenType::new("STRING");
pub const NUMBER: TokenType = TokenType::new("NUMBER");
pub const TRUE: TokenType = TokenType::new("TRUE");
pub const FALSE: TokenType = TokenType::new("FALSE");
pub const NULL: TokenType = TokenType::new("NULL");
pub const LBRACE: TokenType = TokenType::new("LBRACE");
pub const RBRACE: TokenType = TokenType::new("RBRACE");
pub const LBRACKET: TokenType = TokenType::new("LBRACKET");
pub const RBRACKET: TokenType = TokenType::new("RBRACKET");
pub const COLON: TokenType = TokenType::new("COLON");
pub const COMMA: TokenType = TokenType::new("COMMA");
pub const EOF: TokenType = TokenType::EOF;

const OPTIONAL: ScanOptions = ScanOptions::new().optional();

const WHITESPACE: ExpectRune<'static> = ExpectRune::branches(&[
    Branch::with(' ', skip),
    Branch::with('\t', skip),
    Branch::with('\n', skip),
    Branch::with('\r', skip),
])
.with_options(ScanOptions::new().optional().multiple());

const TOKEN: ExpectRune<'static> = ExpectRune::branches(&[
    Branch::with('{', punctuation),
    Branch::with('}', punctuation),
    Branch::with('[', punctuation),
    Branch::with(']', punctuation),
    Branch::with(':', punctuation),
    Branch::with(',', punctuation),
    Branch::with('"', string),
    Branch::with('-', number),
])
.with_ranges(&[
    BranchRange::with('0', '9', number),
    BranchRange::with('a', 'z', word),
    BranchRange::with('A', 'Z', word),
])
.with_options(OPTIONAL);

const PUNCTUATION: [Match; 6] = [
    Match::new("{", LBRACE),
    Match::new("}", RBRACE),
    Match::new("[", LBRACKET),
    Match::new("]", RBRACKET),
    Match::new(":", COLON),
    Match::new(",", COMMA),
];

// Anything but the closing quote, a backslash, or a control character.
const STRING_BODY: ExpectRune<'static> = ExpectRune::branches(&[Branch::with('\\', escape)])
    .with_ranges(&[
        BranchRange::new(' ', '!'),
        BranchRange::new('#', '['),
        BranchRange::new(']', char::MAX),
    ])
    .with_options(ScanOptions::new().optional().multiple());

const CLOSING_QUOTE: ExpectRune<'static> = ExpectRune::branches(&[Branch::with('"', skip)]);

const BACKSLASH: ExpectRune<'static> = ExpectRune::branches(&[Branch::new('\\')]);

const ANY_RUNE: ExpectRune<'static> =
    ExpectRune::branches(&[]).with_options(ScanOptions::new().invert());

const MINUS: ExpectRune<'static> = ExpectRune::branches(&[Branch::new('-')]).with_options(OPTIONAL);

const DIGITS: ExpectRune<'static> =
    ExpectRune::ranges(&[BranchRange::new('0', '9')]).with_options(ScanOptions::new().multiple());

const FRACTION: ExpectRune<'static> =
    ExpectRune::branches(&[Branch::with('.', fraction)]).with_options(OPTIONAL);

const DOT: ExpectRune<'static> = ExpectRune::branches(&[Branch::new('.')]);

const EXPONENT: ExpectRune<'static> =
    ExpectRune::branches(&[Branch::with('e', exponent), Branch::with('E', exponent)])
        .with_options(OPTIONAL);

const EXPONENT_MARK: ExpectRune<'static> =
    ExpectRune::branches(&[Branch::new('e'), Branch::new('E')]);

const SIGN: ExpectRune<'static> =
    ExpectRune::branches(&[Branch::new('+'), Branch::new('-')]).with_options(OPTIONAL);

const LETTERS: ExpectRune<'static> =
    ExpectRune::ranges(&[BranchRange::new('a', 'z'), BranchRange::new('A', 'Z')])
        .with_options(ScanOptions::new().multiple());

const KEYWORDS: [Match; 3] =
    [Match::new("true", TRUE), Match::new("false", FALSE), Match::new("null", NULL)];

/// Scans one JSON token.
pub fn scan(s: &mut Scanner<'_>) -> Result<Token, Error> {
    s.expect(&WHITESPACE)?;
    s.expect(&TOKEN)?;
    s.exit()
}

fn skip(s: &mut Scanner<'_>) -> Result<(), Error> {
    s.skip_rune();
    Ok(())
}

fn punctuation(s: &mut Scanner<'_>) -> Result<(), Error> {
    s.match_token(&PUNCTUATION)?;
    Ok(())
}

fn string(s: &mut Scanner<'_>) -> Result<(), Error> {
    // Opening quote.
    s.skip_rune();
    s.expect(&STRING_BODY)?;
    s.match_token(&[Match::any(STRING)])?;
    s.expect(&CLOSING_QUOTE)?;
    Ok(())
}

fn escape(s: &mut Scanner<'_>) -> Result<(), Error> {
    s.expect(&BACKSLASH)?;
    s.expect(&ANY_RUNE)?;
    Ok(())
}

fn number(s: &mut Scanner<'_>) -> Result<(), Error> {
    s.expect(&MINUS)?;
    s.expect(&DIGITS)?;
    s.expect(&FRACTION)?;
    s.expect(&EXPONENT)?;
    s.match_token(&[Match::any(NUMBER)])?;
    Ok(())
}

fn fraction(s: &mut Scanner<'_>) -> Result<(), Error> {
    s.expect(&DOT)?;
    s.expect(&DIGITS)?;
    Ok(())
}

fn exponent(s: &mut Scanner<'_>) -> Result<(), Error> {
    s.expect(&EXPONENT_MARK)?;
    s.expect(&SIGN)?;
    s.expect(&DIGITS)?;
    Ok(())
}

fn word(s: &mut Scanner<'_>) -> Result<(), Error> {
    s.expect(&LETTERS)?;
    s.match_token(&KEYWORDS)?;
    Ok(())
}

#[cfg(test)]
mod json_unittests;
